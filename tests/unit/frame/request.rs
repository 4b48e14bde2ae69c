use super::*;

#[test]
fn defaults_match_the_editor_start_state() {
    let r = RenderRequest::default();
    assert_eq!(r.text, "BRANS");
    assert_eq!(r.style_id, "wildstyle");
    assert_eq!(r.fill_color, "#FF006E");
    assert_eq!(r.stroke_width, 2.0);
    assert_eq!(r.background_id, "none");
    assert_eq!(r.effect_id, "none");
    assert_eq!((r.surface_width, r.surface_height), (800, 300));
    assert!(!r.compact);
}

#[test]
fn partial_camel_case_json_fills_in_defaults() {
    let r: RenderRequest = serde_json::from_str(
        r##"{"text":"wow","styleId":"neon","fillColor":"#00FFFF","rotationDeg":-15}"##,
    )
    .unwrap();
    assert_eq!(r.text, "wow");
    assert_eq!(r.style_id, "neon");
    assert_eq!(r.fill_color, "#00FFFF");
    assert_eq!(r.rotation_deg, -15.0);
    assert_eq!(r.stroke_color, "#000000");
    assert_eq!(r.size_percent, 100.0);
}

#[test]
fn text_is_trimmed_uppercased_and_capped() {
    let mut r = RenderRequest {
        text: "  hello world  ".to_string(),
        ..RenderRequest::default()
    };
    assert_eq!(r.normalized_text(), "HELLO WORLD");

    r.text = "abcdefghijklmnopqrstuvwxyz".to_string();
    assert_eq!(r.normalized_text(), "ABCDEFGHIJKLMNOPQRST");
    assert_eq!(r.normalized_text().chars().count(), MAX_TEXT_CHARS);

    r.text = "   ".to_string();
    assert_eq!(r.normalized_text(), FALLBACK_TEXT);
}

#[test]
fn cap_applies_after_uppercasing() {
    let r = RenderRequest {
        text: "ß".repeat(MAX_TEXT_CHARS),
        ..RenderRequest::default()
    };
    assert_eq!(r.normalized_text(), "S".repeat(MAX_TEXT_CHARS));

    let r = RenderRequest {
        text: "straße".to_string(),
        ..RenderRequest::default()
    };
    assert_eq!(r.normalized_text(), "STRASSE");
}

#[test]
fn font_size_follows_slider_until_width_caps_it() {
    let short = RenderRequest::default();
    assert_eq!(short.font_size(), 120.0);

    let half = RenderRequest {
        size_percent: 50.0,
        ..RenderRequest::default()
    };
    assert_eq!(half.font_size(), 60.0);

    let long = RenderRequest {
        text: "ABCDEFGHIJKLMNOPQRST".to_string(),
        ..RenderRequest::default()
    };
    assert!((long.font_size() - 38.4).abs() < 1e-9);
}

#[test]
fn compact_layout_uses_smaller_baseline() {
    let r = RenderRequest {
        text: "AB".to_string(),
        surface_width: 350,
        surface_height: 200,
        compact: true,
        ..RenderRequest::default()
    };
    assert_eq!(r.font_size(), 80.0);
}

#[test]
fn bad_color_names_the_field() {
    let r = RenderRequest {
        stroke_color: "#12345".to_string(),
        ..RenderRequest::default()
    };
    let err = r.colors().unwrap_err();
    assert!(matches!(err, GraffitiError::Validation(_)));
    assert!(err.to_string().contains("strokeColor"), "{err}");
}

#[test]
fn colors_parse_transparent_backdrop() {
    let c = RenderRequest::default().colors().unwrap();
    assert_eq!(c.fill, Rgba8::rgb(0xFF, 0x00, 0x6E));
    assert!(c.backdrop.is_transparent());
    assert_eq!(c.custom_background, Rgba8::WHITE);
}
