/// One of the bundled font files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFile {
    SansBold,
    SansCondensedBold,
    SansMonoBold,
    SerifBold,
    SerifBoldItalic,
}

impl FontFile {
    pub const ALL: [Self; 5] = [
        Self::SansBold,
        Self::SansCondensedBold,
        Self::SansMonoBold,
        Self::SerifBold,
        Self::SerifBoldItalic,
    ];

    /// Raw TrueType data.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::SansBold => include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf"),
            Self::SansCondensedBold => {
                include_bytes!("../../assets/fonts/DejaVuSansCondensed-Bold.ttf")
            }
            Self::SansMonoBold => include_bytes!("../../assets/fonts/DejaVuSansMono-Bold.ttf"),
            Self::SerifBold => include_bytes!("../../assets/fonts/DejaVuSerif-Bold.ttf"),
            Self::SerifBoldItalic => {
                include_bytes!("../../assets/fonts/DejaVuSerif-BoldItalic.ttf")
            }
        }
    }
}

/// A named typeface backed by one bundled font file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontFace {
    pub name: &'static str,
    pub file: FontFile,
}

impl FontFace {
    /// Tall, condensed poster face (Impact).
    pub const CONDENSED: Self = Self::new("condensed", FontFile::SansCondensedBold);
    /// Wide black face (Arial Black).
    pub const HEAVY: Self = Self::new("heavy", FontFile::SansBold);
    /// Plain bold sans (Arial bold).
    pub const BOLD: Self = Self::new("bold", FontFile::SansBold);
    /// Slanted brush lettering.
    pub const SCRIPT: Self = Self::new("script", FontFile::SerifBoldItalic);
    /// Blocky fixed-pitch face.
    pub const MONO: Self = Self::new("mono", FontFile::SansMonoBold);
    pub const SERIF: Self = Self::new("serif", FontFile::SerifBold);
    /// Soft face for bubble letters.
    pub const ROUNDED: Self = Self::new("rounded", FontFile::SansBold);

    pub const fn new(name: &'static str, file: FontFile) -> Self {
        Self { name, file }
    }

    /// Whether every glyph shares the same advance.
    pub fn is_monospace(&self) -> bool {
        self.file == FontFile::SansMonoBold
    }
}

/// A sized face: what canvas calls `ctx.font`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub face: FontFace,
    pub size: f64,
}

impl Font {
    pub fn new(face: FontFace, size: f64) -> Self {
        Self { face, size }
    }

    /// Same face at `factor` times the size.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            size: self.size * factor,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
