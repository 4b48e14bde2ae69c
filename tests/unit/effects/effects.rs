use super::*;
use crate::foundation::rng::{Rng64, SequenceRandom};
use crate::surface::DrawState;
use crate::text::font::FontFace;

fn args(text: &str) -> EffectArgs<'_> {
    EffectArgs {
        text,
        x: 150.0,
        y: 60.0,
        font: Font::new(FontFace::HEAVY, 50.0),
        color: Rgba8::rgb(0x00, 0xFF, 0xFF),
    }
}

#[test]
fn none_and_unknown_effects_draw_nothing() {
    for id in ["none", "sparkle"] {
        let mut s = Surface::new(300, 120).unwrap();
        apply_effect(&mut s, id, &args("OK"), &mut Rng64::new(1)).unwrap();
        assert_eq!(s.stats().paint_calls(), 0, "effect {id}");
        assert!(s.pixels().iter().all(|&b| b == 0));
    }
}

#[test]
fn every_effect_restores_state() {
    for d in catalog::EFFECTS {
        let mut s = Surface::new(300, 120).unwrap();
        apply_effect(&mut s, d.id, &args("OK"), &mut Rng64::new(5)).unwrap();
        assert_eq!(*s.state(), DrawState::default(), "effect {}", d.id);
        assert_eq!(s.stack_depth(), 0);
    }
}

#[test]
fn glow_paints_four_layers() {
    let mut s = Surface::new(300, 120).unwrap();
    apply_effect(&mut s, "glow", &args("OK"), &mut Rng64::new(1)).unwrap();
    assert_eq!(s.stats().fills, 4);
    // The halo reaches beyond the glyphs: the pixel above the run is tinted.
    let above = s.pixel(150, 30).unwrap();
    assert!(above.a > 0);
}

#[test]
fn double_shadow_and_emboss_use_three_fills() {
    for id in ["double-shadow", "emboss"] {
        let mut s = Surface::new(300, 120).unwrap();
        apply_effect(&mut s, id, &args("OK"), &mut Rng64::new(1)).unwrap();
        assert_eq!(s.stats().fills, 3, "effect {id}");
        assert_eq!(s.stats().strokes, 0);
    }
}

#[test]
fn neon_flicker_draws_one_value_for_opacity() {
    let mut s = Surface::new(300, 120).unwrap();
    let mut rng = SequenceRandom::constant(0.0);
    apply_effect(&mut s, "neon-flicker", &args("OK"), &mut rng).unwrap();
    assert_eq!(rng.draws(), 1);
    assert_eq!(s.stats().strokes, 1);
    assert_eq!(s.stats().fills, 1);
}

#[test]
fn texture_effects_scatter_their_particles() {
    let mut s = Surface::new(300, 120).unwrap();
    let mut rng = SequenceRandom::constant(0.5);
    apply_effect(&mut s, "vintage", &args("OK"), &mut rng).unwrap();
    assert_eq!(s.stats().fills, 1 + 50);
    assert_eq!(rng.draws(), 50 * 4);

    let mut s = Surface::new(300, 120).unwrap();
    let mut rng = SequenceRandom::constant(0.5);
    apply_effect(&mut s, "spray-fade", &args("OK"), &mut rng).unwrap();
    assert_eq!(s.stats().fills, 1 + 30);
    assert_eq!(rng.draws(), 30 * 3);
}
