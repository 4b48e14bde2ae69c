use super::*;
use crate::text::font::FontFace;
use kurbo::Shape;

#[test]
fn outline_is_centered_on_anchor() {
    let font = Font::new(FontFace::HEAVY, 100.0);
    let path = outline("HELLO", &font, 400.0, 150.0, 0.0).unwrap();
    let bb = path.bounding_box();
    let cx = (bb.x0 + bb.x1) / 2.0;
    let cy = (bb.y0 + bb.y1) / 2.0;
    assert!((cx - 400.0).abs() < 5.0, "cx={cx}");
    assert!((cy - 150.0).abs() < 6.0, "cy={cy}");
    // Caps are roughly 0.73 em tall.
    assert!(bb.height() > 65.0 && bb.height() < 80.0, "h={}", bb.height());
}

#[test]
fn letter_spacing_widens_the_run() {
    let font = Font::new(FontFace::BOLD, 60.0);
    let tight = measure("ABC", &font, 0.0).unwrap();
    let loose = measure("ABC", &font, 10.0).unwrap();
    let gained = loose - tight;
    assert!((19.5..=30.5).contains(&gained), "gained={gained}");
    assert_eq!(measure("", &font, 10.0).unwrap(), 0.0);
}

#[test]
fn width_grows_with_font_size() {
    let small = measure("GRAFFITI", &Font::new(FontFace::HEAVY, 40.0), 0.0).unwrap();
    let large = measure("GRAFFITI", &Font::new(FontFace::HEAVY, 80.0), 0.0).unwrap();
    assert!(small > 100.0);
    assert!((large - 2.0 * small).abs() < 0.5, "small={small} large={large}");
}

#[test]
fn monospace_advances_are_uniform() {
    let font = Font::new(FontFace::MONO, 50.0);
    let narrow = measure("III", &font, 0.0).unwrap();
    let wide = measure("WWW", &font, 0.0).unwrap();
    assert!((narrow - wide).abs() < 1e-3);
}

#[test]
fn condensed_face_is_narrower() {
    let condensed = measure("WILD", &Font::new(FontFace::CONDENSED, 80.0), 0.0).unwrap();
    let heavy = measure("WILD", &Font::new(FontFace::HEAVY, 80.0), 0.0).unwrap();
    assert!(condensed < heavy);
}

#[test]
fn spaces_take_room_but_draw_nothing() {
    let font = Font::new(FontFace::HEAVY, 50.0);
    assert!(outline("   ", &font, 0.0, 0.0, 0.0).unwrap().elements().is_empty());
    assert!(measure("   ", &font, 0.0).unwrap() > 0.0);
}

#[test]
fn umlauts_and_accents_get_their_own_glyphs() {
    let font = Font::new(FontFace::HEAVY, 80.0);
    let run = shape("ÄÖÜÉ#", &font, 0.0).unwrap();
    let ids: Vec<u32> = run.glyphs.iter().map(|g| g.id).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|&id| id != 0), "notdef in {ids:?}");
    for (i, a) in ids.iter().enumerate() {
        assert!(!ids[i + 1..].contains(a), "duplicate glyph in {ids:?}");
    }

    let umlaut = outline("Ä", &font, 0.0, 0.0, 0.0).unwrap();
    let hash = outline("#", &font, 0.0, 0.0, 0.0).unwrap();
    assert_ne!(umlaut, hash);
    // The dots sit above the plain capital.
    let plain = outline("A", &font, 0.0, 0.0, 0.0).unwrap();
    assert!(umlaut.bounding_box().y0 < plain.bounding_box().y0 - 5.0);
}

#[test]
fn glyphs_advance_left_to_right() {
    let run = shape("ABC", &Font::new(FontFace::SERIF, 40.0), 0.0).unwrap();
    assert_eq!(run.glyphs.len(), 3);
    assert!(run.glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert!(run.glyphs.iter().all(|g| g.y == 0.0));
    assert!(run.ascent > run.descent && run.descent > 0.0);
}
