use super::*;
use crate::catalog;
use crate::foundation::core::Rgba8;

#[test]
fn presets_reference_real_styles_and_valid_colors() {
    assert_eq!(PRESETS.len(), 4);
    for p in PRESETS {
        assert!(catalog::style(p.style_id).is_some(), "{}", p.id);
        let colors = p.request().colors().unwrap();
        assert!(!colors.fill.is_transparent());
    }
    for hex in PALETTE {
        assert!(Rgba8::parse(hex).is_ok(), "{hex}");
    }
}

#[test]
fn neon_preset_paints_on_black() {
    let req = preset("neon-glow").unwrap().request();
    assert_eq!(req.text, "NEON");
    assert_eq!(req.style_id, "neon");
    assert_eq!(req.backdrop_color, "#000000");
    assert_eq!(req.stroke_width, 2.0);
}

#[test]
fn apply_keeps_layout_fields() {
    let mut req = RenderRequest {
        size_percent: 70.0,
        rotation_deg: 12.0,
        background_id: "brick".to_string(),
        effect_id: "glow".to_string(),
        ..RenderRequest::default()
    };
    preset("ice-cold").unwrap().apply(&mut req);
    assert_eq!(req.style_id, "ice");
    assert_eq!(req.fill_color, "#87CEEB");
    assert_eq!(req.size_percent, 70.0);
    assert_eq!(req.rotation_deg, 12.0);
    assert_eq!(req.background_id, "brick");
    assert_eq!(req.effect_id, "glow");
}

#[test]
fn unknown_preset_is_none() {
    assert!(preset("lava-lamp").is_none());
}

#[test]
fn presets_serialize_with_camel_case_fields() {
    let v = serde_json::to_value(preset("fire-style").unwrap()).unwrap();
    assert_eq!(v["id"], "fire-style");
    assert_eq!(v["styleId"], "fire");
    assert_eq!(v["fillColor"], "#FF4500");
    assert_eq!(v["strokeWidth"], 3.0);
}
