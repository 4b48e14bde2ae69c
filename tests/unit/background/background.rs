use super::*;
use crate::foundation::rng::{Rng64, SequenceRandom};

const W: f64 = 200.0;
const H: f64 = 120.0;

fn surface() -> Surface {
    Surface::new(W as u32, H as u32).unwrap()
}

#[test]
fn none_leaves_the_surface_transparent() {
    let mut s = surface();
    paint_background(&mut s, "none", W, H, Some(Rgba8::WHITE), &mut Rng64::new(1)).unwrap();
    assert!(s.pixels().iter().all(|&b| b == 0));
    assert_eq!(s.stats().paint_calls(), 0);
}

#[test]
fn custom_fills_with_the_given_color() {
    let mut s = surface();
    let teal = Rgba8::rgb(0, 128, 128);
    paint_background(&mut s, "custom", W, H, Some(teal), &mut Rng64::new(1)).unwrap();
    assert_eq!(s.pixel(0, 0), Some(teal));
    assert_eq!(s.pixel(199, 119), Some(teal));
}

#[test]
fn custom_without_usable_color_is_a_noop() {
    for color in [None, Some(Rgba8::TRANSPARENT)] {
        let mut s = surface();
        paint_background(&mut s, "custom", W, H, color, &mut Rng64::new(1)).unwrap();
        assert_eq!(s.stats().fills, 0);
    }
}

#[test]
fn unknown_ids_behave_like_custom() {
    let mut s = surface();
    paint_background(&mut s, "marble", W, H, Some(Rgba8::BLACK), &mut Rng64::new(1)).unwrap();
    assert_eq!(s.pixel(100, 60), Some(Rgba8::BLACK));
}

#[test]
fn every_preset_covers_the_whole_area() {
    for d in catalog::BACKGROUNDS.iter().filter(|d| d.id != "none") {
        let mut s = surface();
        paint_background(&mut s, d.id, W, H, None, &mut Rng64::new(3)).unwrap();
        let opaque = s.pixels().chunks_exact(4).all(|px| px[3] == 255);
        assert!(opaque, "background {} left gaps", d.id);
        assert_eq!(s.stack_depth(), 0);
    }
}

#[test]
fn weathering_dot_count_follows_area_and_intensity() {
    let mut s = surface();
    let mut rng = SequenceRandom::constant(0.5);
    weathering(&mut s, W, H, 0.1, &mut rng).unwrap();
    // 200 * 120 * 0.1 / 1000 = 2.4, rounded up.
    assert_eq!(s.stats().fills, 3);
    assert_eq!(rng.draws(), 3 * 4);
}

#[test]
fn brick_rows_alternate_their_offset() {
    let mut s = surface();
    brick_wall(&mut s, W, H, &mut SequenceRandom::constant(0.5)).unwrap();
    // A mid-draw of 0.5 gives the unjittered brick color.
    let brick = Rgba8::rgb(139, 69, 19);
    let mortar = Rgba8::rgb(0xD3, 0xD3, 0xD3);
    // Row 0 starts at x = 0, so x = 61 is mortar; row 1 is shifted by half a brick.
    assert_eq!(s.pixel(61, 10), Some(mortar));
    assert_eq!(s.pixel(61, 37), Some(brick));
    assert_eq!(s.pixel(91, 37), Some(mortar));
}

#[test]
fn metal_is_reproducible_with_a_seed() {
    let mut a = surface();
    let mut b = surface();
    metal(&mut a, W, H, &mut Rng64::new(9)).unwrap();
    metal(&mut b, W, H, &mut Rng64::new(9)).unwrap();
    assert_eq!(a.pixels(), b.pixels());
}
