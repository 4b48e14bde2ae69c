use super::*;
use crate::text::font::FontFace;

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);

fn opaque_count(s: &Surface) -> usize {
    s.pixels().chunks_exact(4).filter(|px| px[3] >= 128).count()
}

fn is_red(c: Option<Rgba8>) -> bool {
    c.is_some_and(|c| c.r > 245 && c.g < 10 && c.b < 10 && c.a > 245)
}

#[test]
fn rejects_unallocatable_sizes() {
    assert!(matches!(
        Surface::new(0, 10),
        Err(GraffitiError::UnsupportedEnvironment(_))
    ));
    assert!(matches!(
        Surface::new(10, 70_000),
        Err(GraffitiError::UnsupportedEnvironment(_))
    ));
    assert!(Surface::new(1, 1).is_ok());
}

#[test]
fn fill_rect_paints_exactly_the_covered_pixels() {
    let mut s = Surface::new(10, 10).unwrap();
    s.fill_rect(Rect::new(2.0, 2.0, 6.0, 5.0), &RED.into())
        .unwrap();
    assert!(is_red(s.pixel(3, 3)));
    assert_eq!(s.pixel(7, 7), Some(Rgba8::TRANSPARENT));
    assert_eq!(opaque_count(&s), 12);
    assert_eq!(s.stats().fills, 1);
}

#[test]
fn translate_moves_subsequent_fills() {
    let mut s = Surface::new(10, 10).unwrap();
    s.translate(5.0, 0.0);
    s.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), &RED.into())
        .unwrap();
    assert_eq!(s.pixel(0, 0), Some(Rgba8::TRANSPARENT));
    assert!(is_red(s.pixel(5, 0)));
}

#[test]
fn global_alpha_scales_coverage() {
    let mut s = Surface::new(4, 4).unwrap();
    s.set_global_alpha(0.5);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), &Rgba8::WHITE.into())
        .unwrap();
    let a = s.pixel(1, 1).unwrap().a;
    assert!((126..=129).contains(&a), "alpha {a}");
}

#[test]
fn scope_restores_state_on_drop_and_early_return() {
    fn failing(s: &mut Surface) -> GraffitiResult<()> {
        let mut scoped = s.scope();
        scoped.rotate(1.0);
        scoped.set_global_alpha(0.2);
        Err(GraffitiError::render("boom"))
    }

    let mut s = Surface::new(8, 8).unwrap();
    let before = *s.state();
    assert!(failing(&mut s).is_err());
    assert_eq!(*s.state(), before);
    assert_eq!(s.stack_depth(), 0);

    {
        let mut scoped = s.scope();
        scoped.save();
        scoped.translate(3.0, 3.0);
        assert_eq!(scoped.stack_depth(), 2);
    }
    assert_eq!(s.stack_depth(), 0);
    assert_eq!(s.transform(), Affine::IDENTITY);
}

#[test]
fn restore_on_empty_stack_is_noop() {
    let mut s = Surface::new(2, 2).unwrap();
    s.translate(1.0, 0.0);
    s.restore();
    assert_eq!(s.transform(), Affine::translate((1.0, 0.0)));
}

#[test]
fn shadow_paints_outside_the_shape() {
    let mut s = Surface::new(40, 40).unwrap();
    s.set_shadow(Shadow {
        color: Rgba8::BLACK,
        blur: 4.0,
        offset: Vec2::new(6.0, 6.0),
    });
    s.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), &RED.into())
        .unwrap();
    // Shape itself stays on top.
    assert!(is_red(s.pixel(15, 15)));
    // Shadow lands down-right of the shape.
    let shadow = s.pixel(24, 24).unwrap();
    assert!(shadow.a > 0);
    assert_eq!((shadow.r, shadow.g, shadow.b), (0, 0, 0));
    // Nothing up-left.
    assert_eq!(s.pixel(2, 2), Some(Rgba8::TRANSPARENT));
}

#[test]
fn multiply_blend_darkens_existing_pixels() {
    let mut s = Surface::new(4, 4).unwrap();
    let gray = Rgba8::rgb(200, 200, 200);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), &gray.into())
        .unwrap();
    s.set_blend(BlendMode::Multiply);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), &gray.into())
        .unwrap();
    let px = s.pixel(1, 1).unwrap();
    assert_eq!(px.a, 255);
    assert!(px.r < 170 && px.r > 150, "r={}", px.r);
}

#[test]
fn gradient_fill_follows_user_space() {
    let mut s = Surface::new(100, 4).unwrap();
    let paint = Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        &[(0.0, Rgba8::BLACK), (1.0, Rgba8::WHITE)],
    );
    s.fill_rect(Rect::new(0.0, 0.0, 100.0, 4.0), &paint).unwrap();
    let left = s.pixel(2, 2).unwrap();
    let right = s.pixel(97, 2).unwrap();
    assert!(left.r < 20);
    assert!(right.r > 235);
}

#[test]
fn stroke_leaves_interior_untouched() {
    let mut s = Surface::new(40, 40).unwrap();
    let square = Rect::new(5.0, 5.0, 35.0, 35.0).to_path(0.1);
    s.stroke_path(&square, &Stroke::new(2.0), &RED.into())
        .unwrap();
    assert_eq!(s.pixel(20, 20), Some(Rgba8::TRANSPARENT));
    assert_eq!(s.pixel(5, 20).map(|c| c.a > 0), Some(true));
    assert_eq!(s.stats().strokes, 1);
}

#[test]
fn text_fill_lands_around_anchor() {
    let mut s = Surface::new(200, 80).unwrap();
    let font = Font::new(FontFace::HEAVY, 40.0);
    s.fill_text("HI", &font, 100.0, 40.0, &RED.into()).unwrap();
    assert!(opaque_count(&s) > 100);
    // Far corners stay empty.
    assert_eq!(s.pixel(1, 1), Some(Rgba8::TRANSPARENT));
    assert_eq!(s.pixel(198, 78), Some(Rgba8::TRANSPARENT));
}

#[test]
fn shapes_outside_the_surface_are_skipped() {
    let mut s = Surface::new(10, 10).unwrap();
    s.fill_circle(Point::new(-100.0, -100.0), 5.0, &RED.into())
        .unwrap();
    assert_eq!(opaque_count(&s), 0);
    assert_eq!(s.stats().fills, 1);
}

#[test]
fn put_pixels_is_a_counted_blit() {
    let mut s = Surface::new(2, 1).unwrap();
    assert!(s.put_pixels(&[0u8; 4]).is_err());
    s.put_pixels(&[255, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(s.pixel(0, 0), Some(RED));
    assert_eq!(s.stats().blits, 1);
    s.clear();
    assert_eq!(s.pixel(0, 0), Some(Rgba8::TRANSPARENT));
    assert_eq!(s.stats().clears, 1);
}

#[test]
fn resize_reallocates_and_resets_state() {
    let mut s = Surface::new(2, 2).unwrap();
    s.translate(1.0, 1.0);
    s.save();
    s.resize(6, 3).unwrap();
    assert_eq!((s.width(), s.height()), (6, 3));
    assert_eq!(s.stack_depth(), 0);
    assert_eq!(s.transform(), Affine::IDENTITY);
    assert_eq!(s.pixels().len(), 6 * 3 * 4);
}
