use super::*;

#[test]
fn catalogs_have_expected_sizes() {
    assert_eq!(STYLES.len(), 25);
    assert_eq!(EFFECTS.len(), 8);
    assert_eq!(BACKGROUNDS.len(), 8);
}

#[test]
fn ids_are_unique() {
    fn unique(ids: Vec<&str>) -> bool {
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len() == ids.len()
    }
    assert!(unique(STYLES.iter().map(|s| s.id).collect()));
    assert!(unique(EFFECTS.iter().map(|e| e.id).collect()));
    assert!(unique(BACKGROUNDS.iter().map(|b| b.id).collect()));
}

#[test]
fn lookups_find_known_ids_only() {
    assert_eq!(style("fire").map(|s| s.display_name), Some("Fire Style"));
    assert_eq!(effect("glow").map(|e| e.category), Some(Category::Light));
    assert_eq!(background("brick-wall").map(|b| b.preview_glyph), Some("🧱"));
    assert!(style("comic-sans").is_none());
    assert!(background("custom").is_none());
}

#[test]
fn category_filter_matches_picker_behavior() {
    assert_eq!(styles_in(None).count(), 25);
    let three_d: Vec<_> = styles_in(Some(Category::ThreeD)).map(|s| s.id).collect();
    assert_eq!(three_d, vec!["chrome", "shadow", "metal"]);
    let cats = style_categories();
    assert_eq!(cats.first(), Some(&Category::Advanced));
    assert!(cats.contains(&Category::Digital));
    assert_eq!(Category::ThreeD.to_string(), "3D");
}

#[test]
fn categories_serialize_by_label() {
    assert_eq!(serde_json::to_value(Category::ThreeD).unwrap(), "3D");
    assert_eq!(serde_json::to_value(Category::Street).unwrap(), "Street");
}
