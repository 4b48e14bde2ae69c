//! Turning a painted surface into downloadable image bytes.

pub(crate) mod encode;

use std::path::PathBuf;

use anyhow::Context;
use base64::Engine;

use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::{GraffitiError, GraffitiResult};
use crate::surface::Surface;
use crate::surface::composite::over_in_place;

/// Quality used when none (or an out-of-range one) is given.
pub const DEFAULT_QUALITY: f64 = 0.9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    #[serde(rename = "jpg", alias = "jpeg")]
    Jpeg,
    #[serde(rename = "webp")]
    WebP,
    Svg,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpeg, Self::WebP, Self::Svg];

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
            Self::Svg => "image/svg+xml",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
            Self::Svg => "svg",
        }
    }

    /// Format for a file extension, case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    fn is_opaque_only(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Lossy quality in `(0, 1]` for JPEG and WebP.
    pub quality: f64,
    /// Output width; the source width when unset or zero.
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Fill behind the artwork; `transparent` means none.
    pub background_color: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: DEFAULT_QUALITY,
            width: None,
            height: None,
            background_color: None,
        }
    }
}

impl ExportOptions {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// `quality` mapped onto the 1..=100 scale of the lossy encoders; out-of-range values
    /// fall back to [`DEFAULT_QUALITY`].
    pub fn lossy_quality(&self) -> u8 {
        let q = if self.quality.is_finite() && self.quality > 0.0 && self.quality <= 1.0 {
            self.quality
        } else {
            DEFAULT_QUALITY
        };
        ((q * 100.0).round() as u8).max(1)
    }
}

/// Encoded export result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// `data:<mime>;base64,<bytes>`.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Export `source` at the requested size and format.
///
/// The artwork is drawn over the background color when one is given, or over white for
/// formats without alpha, and resampled bilinearly when the size changes.
#[tracing::instrument(level = "debug", skip(source, options), fields(format = %options.format))]
pub fn export_as(source: &Surface, options: &ExportOptions) -> GraffitiResult<ExportedImage> {
    let width = options.width.filter(|&w| w > 0).unwrap_or(source.width());
    let height = options.height.filter(|&h| h > 0).unwrap_or(source.height());

    let background = match options.background_color.as_deref() {
        Some(color) => Rgba8::parse(color)
            .map(|c| Some(c).filter(|c| !c.is_transparent()))
            .map_err(|e| GraffitiError::export(format!("export background: {e}")))?,
        None => None,
    };
    let background =
        background.or_else(|| options.format.is_opaque_only().then_some(Rgba8::WHITE));

    let mut offscreen = Surface::new(width, height)
        .map_err(|e| GraffitiError::export(format!("offscreen surface: {e}")))?;
    if let Some(color) = background {
        offscreen.fill_rect(
            Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            &color.into(),
        )?;
    }

    let scaled = resample(source, width, height)?;
    let mut premul = offscreen.pixels().to_vec();
    over_in_place(&mut premul, &scaled, 1.0)?;
    let flattened = Surface::from_premul_rgba8(width, height, premul)?;
    let rgba = flattened.to_rgba8_straight();

    let bytes = match options.format {
        ExportFormat::Png => encode::encode_png(&rgba, width, height)?,
        ExportFormat::Jpeg => encode::encode_jpeg(&rgba, width, height, options.lossy_quality())?,
        ExportFormat::WebP => encode::encode_webp(&rgba, width, height, options.lossy_quality())?,
        ExportFormat::Svg => encode::encode_svg(&rgba, width, height)?,
    };
    tracing::debug!(bytes = bytes.len(), width, height, "exported");

    Ok(ExportedImage {
        format: options.format,
        width,
        height,
        bytes,
    })
}

/// Premultiplied pixels of `source` at `width`×`height`.
fn resample(source: &Surface, width: u32, height: u32) -> GraffitiResult<Vec<u8>> {
    if (source.width(), source.height()) == (width, height) {
        return Ok(source.pixels().to_vec());
    }
    let img = image::RgbaImage::from_raw(source.width(), source.height(), source.pixels().to_vec())
        .ok_or_else(|| GraffitiError::export("source pixels do not match surface size"))?;
    let scaled =
        image::imageops::resize(&img, width, height, image::imageops::FilterType::Triangle);
    Ok(scaled.into_raw())
}

/// Destination for exported files.
pub trait FileSink {
    fn save(&mut self, filename: &str, image: &ExportedImage) -> anyhow::Result<()>;
}

/// Writes exports into a directory.
#[derive(Clone, Debug)]
pub struct FsSink {
    pub dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for FsSink {
    fn save(&mut self, filename: &str, image: &ExportedImage) -> anyhow::Result<()> {
        let path = self.dir.join(filename);
        std::fs::write(&path, &image.bytes).with_context(|| format!("write {}", path.display()))
    }
}

/// Export `source` and hand the bytes to `sink` under `filename`.
///
/// Any failure comes back as a single retryable [`GraffitiError::Export`].
pub fn download_as(
    filename: &str,
    source: &Surface,
    options: &ExportOptions,
    sink: &mut dyn FileSink,
) -> GraffitiResult<ExportedImage> {
    let result = export_as(source, options)
        .map_err(anyhow::Error::from)
        .and_then(|image| sink.save(filename, &image).map(|()| image));
    result.map_err(|e| {
        tracing::error!(error = %e, filename, "export failed");
        GraffitiError::export(format!("export failed, please retry: {e:#}"))
    })
}

/// `graffiti-<timestamp>.<ext>`.
pub fn default_filename(format: ExportFormat, timestamp_ms: u128) -> String {
    format!("graffiti-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
#[path = "../../tests/unit/export/export.rs"]
mod tests;
