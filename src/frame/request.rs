use crate::foundation::core::Rgba8;
use crate::foundation::error::{GraffitiError, GraffitiResult};

/// Everything needed to paint one frame.
///
/// Numeric fields are trusted as given; clamping to slider ranges is the caller's job.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub text: String,
    pub style_id: String,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    /// Text size relative to the layout baseline, in percent.
    pub size_percent: f64,
    pub rotation_deg: f64,
    pub letter_spacing: f64,
    pub background_id: String,
    pub custom_background_color: String,
    /// Flat fill used when `background_id` is `none`.
    pub backdrop_color: String,
    pub effect_id: String,
    pub surface_width: u32,
    pub surface_height: u32,
    /// Small-screen layout: a smaller font baseline.
    pub compact: bool,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            text: "BRANS".to_string(),
            style_id: "wildstyle".to_string(),
            fill_color: "#FF006E".to_string(),
            stroke_color: "#000000".to_string(),
            stroke_width: 2.0,
            size_percent: 100.0,
            rotation_deg: 0.0,
            letter_spacing: 0.0,
            background_id: "none".to_string(),
            custom_background_color: "#FFFFFF".to_string(),
            backdrop_color: "transparent".to_string(),
            effect_id: "none".to_string(),
            surface_width: 800,
            surface_height: 300,
            compact: false,
        }
    }
}

/// Longest text a request keeps, in characters.
pub const MAX_TEXT_CHARS: usize = 20;

/// Lettered instead of empty text.
pub const FALLBACK_TEXT: &str = "GRAFFITI";

/// Surface size of the small-screen layout.
pub const COMPACT_SURFACE_WIDTH: u32 = 350;
pub const COMPACT_SURFACE_HEIGHT: u32 = 200;

const BASELINE_FONT_PX: f64 = 120.0;
const COMPACT_BASELINE_FONT_PX: f64 = 80.0;

impl RenderRequest {
    /// Trimmed, uppercased, at most [`MAX_TEXT_CHARS`] long; empty text becomes
    /// [`FALLBACK_TEXT`].
    pub fn normalized_text(&self) -> String {
        let text: String = self
            .text
            .trim()
            .chars()
            .flat_map(char::to_uppercase)
            .take(MAX_TEXT_CHARS)
            .collect();
        if text.is_empty() {
            FALLBACK_TEXT.to_string()
        } else {
            text
        }
    }

    /// Font size in pixels: the size slider scaled onto the layout baseline, capped so long
    /// runs still fit the surface width.
    pub fn font_size(&self) -> f64 {
        let baseline = if self.compact {
            COMPACT_BASELINE_FONT_PX
        } else {
            BASELINE_FONT_PX
        };
        let chars = self.normalized_text().chars().count().max(1) as f64;
        let by_slider = self.size_percent / 100.0 * baseline;
        let by_width = f64::from(self.surface_width) * 0.8 / chars * 1.2;
        by_slider.min(by_width)
    }

    pub(crate) fn colors(&self) -> GraffitiResult<RequestColors> {
        let parse = |field: &str, value: &str| {
            Rgba8::parse(value)
                .map_err(|e| GraffitiError::validation(format!("{field}: {e}")))
        };
        Ok(RequestColors {
            fill: parse("fillColor", &self.fill_color)?,
            stroke: parse("strokeColor", &self.stroke_color)?,
            custom_background: parse("customBackgroundColor", &self.custom_background_color)?,
            backdrop: parse("backdropColor", &self.backdrop_color)?,
        })
    }
}

/// Parsed color fields of a [`RenderRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RequestColors {
    pub fill: Rgba8,
    pub stroke: Rgba8,
    pub custom_background: Rgba8,
    pub backdrop: Rgba8,
}

#[cfg(test)]
#[path = "../../tests/unit/frame/request.rs"]
mod tests;
