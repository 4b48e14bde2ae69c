use crate::foundation::core::Rgba8;
use crate::foundation::error::GraffitiResult;

/// Lighten a hex color: adds `round(2.55 * percent)` to each channel, clamped.
///
/// Accepts anything [`Rgba8::parse`] does and always returns lowercase `#rrggbb`.
pub fn lighten(hex: &str, percent: f64) -> GraffitiResult<String> {
    Ok(Rgba8::parse(hex)?.lighten(percent).to_hex())
}

/// Darken a hex color: subtracts `round(2.55 * percent)` from each channel, clamped.
pub fn darken(hex: &str, percent: f64) -> GraffitiResult<String> {
    Ok(Rgba8::parse(hex)?.darken(percent).to_hex())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
