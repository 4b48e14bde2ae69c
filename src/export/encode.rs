//! Byte encoders for each [`ExportFormat`](super::ExportFormat), all fed straight RGBA8.

use std::io::Write;

use base64::Engine;
use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::foundation::error::{GraffitiError, GraffitiResult};

fn check_len(rgba: &[u8], width: u32, height: u32) -> GraffitiResult<()> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(GraffitiError::export(format!(
            "expected {expected} bytes for {width}x{height} rgba8, got {}",
            rgba.len()
        )));
    }
    Ok(())
}

pub fn encode_png(rgba: &[u8], width: u32, height: u32) -> GraffitiResult<Vec<u8>> {
    check_len(rgba, width, height)?;
    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::Sub)
        .write_image(rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| GraffitiError::export(format!("png encoding failed: {e}")))?;
    Ok(out)
}

/// JPEG has no alpha channel; alpha is dropped, so callers flatten onto an opaque
/// background first.
pub fn encode_jpeg(rgba: &[u8], width: u32, height: u32, quality: u8) -> GraffitiResult<Vec<u8>> {
    check_len(rgba, width, height)?;
    let rgb: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| GraffitiError::export(format!("jpeg encoding failed: {e}")))?;
    Ok(out)
}

/// Lossy WebP with a lossless alpha plane.
pub fn encode_webp(rgba: &[u8], width: u32, height: u32, quality: u8) -> GraffitiResult<Vec<u8>> {
    check_len(rgba, width, height)?;
    let quality = f32::from(quality.clamp(1, 100));
    let encoded = webp::Encoder::from_rgba(rgba, width, height)
        .encode_simple(false, quality)
        .map_err(|e| GraffitiError::export(format!("webp encoding failed: {e:?}")))?;
    Ok(encoded.to_vec())
}

/// SVG document showing the raster as an embedded base64 PNG.
pub fn encode_svg(rgba: &[u8], width: u32, height: u32) -> GraffitiResult<Vec<u8>> {
    let png = encode_png(rgba, width, height)?;
    let data = base64::engine::general_purpose::STANDARD.encode(png);

    let mut out = Vec::new();
    write!(
        &mut out,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"
     width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <image x="0" y="0" width="{width}" height="{height}"
         xlink:href="data:image/png;base64,{data}"/>
</svg>
"#
    )
    .map_err(|e| GraffitiError::export(format!("svg write failed: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/encode.rs"]
mod tests;
