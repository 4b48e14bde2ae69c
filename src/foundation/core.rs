use crate::foundation::error::{GraffitiError, GraffitiResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Straight-alpha 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color with a fractional alpha in `[0, 1]`, like CSS `rgba(r, g, b, a)`.
    pub fn rgba_f(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::rgba(r, g, b, unit_to_u8(alpha))
    }

    /// Parse `#RRGGBB`, `#RGB`, `#RRGGBBAA` (case-insensitive) or `transparent`.
    pub fn parse(s: &str) -> GraffitiResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        let hex = s.strip_prefix('#').ok_or_else(|| {
            GraffitiError::validation(format!("color \"{s}\" must start with '#'"))
        })?;

        fn hex_byte(pair: &str) -> GraffitiResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| GraffitiError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !hex.is_ascii() {
            return Err(GraffitiError::validation(format!("invalid hex color \"{s}\"")));
        }
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let nib = ch.to_digit(16).ok_or_else(|| {
                        GraffitiError::validation(format!("invalid hex digit '{ch}'"))
                    })? as u8;
                    c[i] = nib * 17;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            6 => Ok(Self::rgb(
                hex_byte(&hex[0..2])?,
                hex_byte(&hex[2..4])?,
                hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&hex[0..2])?,
                hex_byte(&hex[2..4])?,
                hex_byte(&hex[4..6])?,
                hex_byte(&hex[6..8])?,
            )),
            _ => Err(GraffitiError::validation(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Lowercase `#rrggbb`; alpha is dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Scale alpha by `factor` (clamped to `[0, 1]`).
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        Self {
            a: unit_to_u8(f64::from(self.a) / 255.0 * factor),
            ..self
        }
    }

    /// Add `amount` to each color channel (negative darkens), clamping to `[0, 255]`.
    pub fn shift(self, amount: i32) -> Self {
        let ch = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: self.a,
        }
    }

    /// Brighten by `round(2.55 * percent)` per channel.
    pub fn lighten(self, percent: f64) -> Self {
        self.shift(percent_amount(percent))
    }

    /// Darken by `round(2.55 * percent)` per channel.
    pub fn darken(self, percent: f64) -> Self {
        self.shift(-percent_amount(percent))
    }

    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }
        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    pub fn from_premultiplied(px: [u8; 4]) -> Self {
        let a = px[3];
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            v.min(255) as u8
        };
        Self::rgba(unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), a)
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgba8 {
    type Err = GraffitiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `Math.round(2.55 * percent)`: halves round towards positive infinity.
pub(crate) fn percent_amount(percent: f64) -> i32 {
    (2.55 * percent + 0.5).floor() as i32
}

fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
