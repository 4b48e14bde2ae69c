use super::*;
use crate::foundation::rng::{Rng64, SequenceRandom};
use crate::surface::DrawState;

fn args(text: &str) -> StyleArgs<'_> {
    StyleArgs {
        text,
        x: 200.0,
        y: 80.0,
        font_size: 60.0,
        fill: Rgba8::rgb(0xFF, 0x00, 0x6E),
        stroke: Rgba8::BLACK,
        stroke_width: 2.0,
    }
}

fn painted(s: &Surface) -> usize {
    s.pixels().chunks_exact(4).filter(|px| px[3] > 0).count()
}

#[test]
fn every_catalog_style_paints_and_restores_state() {
    for descriptor in catalog::STYLES {
        let mut s = Surface::new(400, 160).unwrap();
        let mut rng = Rng64::new(7);
        render_style(&mut s, descriptor.id, &args("AB"), &mut rng).unwrap();
        assert!(painted(&s) > 200, "style {} painted too little", descriptor.id);
        assert_eq!(*s.state(), DrawState::default(), "style {} leaked state", descriptor.id);
        assert_eq!(s.stack_depth(), 0);
    }
}

#[test]
fn unknown_style_falls_back_to_basic_lettering() {
    let mut fallback = Surface::new(300, 120).unwrap();
    render_style(&mut fallback, "no-such-style", &args("HI"), &mut Rng64::new(1)).unwrap();
    assert_eq!(fallback.stats().strokes, 1);
    assert_eq!(fallback.stats().fills, 1);

    let mut direct = Surface::new(300, 120).unwrap();
    let font = Font::new(catalog::FALLBACK_STYLE.face, 60.0);
    basic(&mut direct, &args("HI"), &font, &mut Rng64::new(1)).unwrap();
    assert_eq!(fallback.pixels(), direct.pixels());
}

#[test]
fn basic_skips_stroke_without_width() {
    let mut s = Surface::new(300, 120).unwrap();
    let a = StyleArgs {
        stroke_width: 0.0,
        ..args("HI")
    };
    render_style(&mut s, "unknown", &a, &mut Rng64::new(1)).unwrap();
    assert_eq!(s.stats().strokes, 0);
}

#[test]
fn outline_style_never_fills() {
    let mut s = Surface::new(300, 120).unwrap();
    render_style(&mut s, "outline", &args("O"), &mut Rng64::new(1)).unwrap();
    assert_eq!(s.stats().fills, 0);
    assert_eq!(s.stats().strokes, 2);
}

#[test]
fn procedural_styles_are_reproducible_with_a_seed() {
    for id in ["grunge", "drip", "electric", "tag"] {
        let mut a = Surface::new(300, 140).unwrap();
        let mut b = Surface::new(300, 140).unwrap();
        render_style(&mut a, id, &args("GO"), &mut Rng64::new(42)).unwrap();
        render_style(&mut b, id, &args("GO"), &mut Rng64::new(42)).unwrap();
        assert_eq!(a.pixels(), b.pixels(), "style {id}");
    }
}

#[test]
fn throw_up_fill_depends_on_the_draw() {
    let mut hollow = Surface::new(300, 120).unwrap();
    render_style(&mut hollow, "throw-up", &args("T"), &mut SequenceRandom::constant(0.2)).unwrap();
    let mut solid = Surface::new(300, 120).unwrap();
    render_style(&mut solid, "throw-up", &args("T"), &mut SequenceRandom::constant(0.9)).unwrap();
    // 30 spray dots in both; the solid one adds the text fill.
    assert_eq!(hollow.stats().fills, 30);
    assert_eq!(solid.stats().fills, 31);
}

#[test]
fn decoration_counts_scale_with_text_length() {
    let mut s = Surface::new(400, 160).unwrap();
    let mut rng = SequenceRandom::constant(0.5);
    render_style(&mut s, "drip", &args("ABC"), &mut rng).unwrap();
    // Text fill plus two drips per letter, three shapes each.
    assert_eq!(s.stats().fills, 1 + 6 * 3);
    assert_eq!(rng.draws(), 6 * 3);

    let mut s = Surface::new(400, 160).unwrap();
    render_style(&mut s, "fire", &args("ABC"), &mut SequenceRandom::constant(0.5)).unwrap();
    assert_eq!(s.stats().fills, 1 + 9);
}

#[test]
fn tag_letters_each_get_one_random_tilt() {
    let mut s = Surface::new(400, 160).unwrap();
    let mut rng = SequenceRandom::constant(0.5);
    let a = StyleArgs {
        stroke_width: 0.0,
        ..args("ABC")
    };
    render_style(&mut s, "tag", &a, &mut rng).unwrap();
    assert_eq!(rng.draws(), 3);
    assert_eq!(s.stats().fills, 3);
    assert_eq!(s.stats().strokes, 0);
}

#[test]
fn rainbow_ignores_the_fill_color() {
    let mut red = Surface::new(300, 120).unwrap();
    let mut blue = Surface::new(300, 120).unwrap();
    let a = args("RR");
    let b = StyleArgs {
        fill: Rgba8::rgb(0, 0, 255),
        ..a
    };
    render_style(&mut red, "rainbow", &a, &mut Rng64::new(1)).unwrap();
    render_style(&mut blue, "rainbow", &b, &mut Rng64::new(1)).unwrap();
    assert_eq!(red.pixels(), blue.pixels());
}
