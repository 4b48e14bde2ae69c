//! Ready-made looks that set text, style and colors in one go.

use crate::frame::request::RenderRequest;

/// A named combination of text, style and colors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
    pub style_id: &'static str,
    pub fill_color: &'static str,
    /// Backdrop behind the lettering when no wall background is selected.
    pub backdrop_color: &'static str,
    pub stroke_color: &'static str,
    pub stroke_width: f64,
}

pub static PRESETS: &[Preset] = &[
    Preset {
        id: "fire-style",
        display_name: "Fire",
        description: "Hot graffiti look",
        text: "FIRE",
        style_id: "fire",
        fill_color: "#FF4500",
        backdrop_color: "transparent",
        stroke_color: "#8B0000",
        stroke_width: 3.0,
    },
    Preset {
        id: "neon-glow",
        display_name: "Neon",
        description: "Glowing neon lettering",
        text: "NEON",
        style_id: "neon",
        fill_color: "#00FFFF",
        backdrop_color: "#000000",
        stroke_color: "#0080FF",
        stroke_width: 2.0,
    },
    Preset {
        id: "ice-cold",
        display_name: "Ice",
        description: "Cool ice look",
        text: "ICE",
        style_id: "ice",
        fill_color: "#87CEEB",
        backdrop_color: "transparent",
        stroke_color: "#4682B4",
        stroke_width: 4.0,
    },
    Preset {
        id: "classic-bubble",
        display_name: "Bubble",
        description: "Classic bubble letters",
        text: "BUBBLE",
        style_id: "bubble",
        fill_color: "#FF6B35",
        backdrop_color: "transparent",
        stroke_color: "#000000",
        stroke_width: 5.0,
    },
];

/// Quick-pick fill colors offered next to the color picker.
pub const PALETTE: [&str; 12] = [
    "#FF6B35", "#F7931E", "#FFD23F", "#06FFA5", "#118AB2", "#073B4C", "#FF006E", "#8338EC",
    "#3A86FF", "#06D6A0", "#FFB3C6", "#FB8500",
];

pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

impl Preset {
    /// Overwrite the preset's fields on `req`; size, rotation, background and effect stay.
    pub fn apply(&self, req: &mut RenderRequest) {
        req.text = self.text.to_string();
        req.style_id = self.style_id.to_string();
        req.fill_color = self.fill_color.to_string();
        req.backdrop_color = self.backdrop_color.to_string();
        req.stroke_color = self.stroke_color.to_string();
        req.stroke_width = self.stroke_width;
    }

    /// The preset applied to a default request.
    pub fn request(&self) -> RenderRequest {
        let mut req = RenderRequest::default();
        self.apply(&mut req);
        req
    }
}

#[cfg(test)]
#[path = "../tests/unit/presets.rs"]
mod tests;
