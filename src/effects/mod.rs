//! Overlay effects drawn on top of an already-lettered run.

use crate::catalog;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::GraffitiResult;
use crate::foundation::rng::RandomSource;
use crate::surface::composite::BlendMode;
use crate::surface::paint::Paint;
use crate::surface::{Shadow, Surface};
use crate::text::font::Font;

/// Signature shared by every effect recipe.
pub type EffectRecipe =
    fn(&mut Surface, &EffectArgs<'_>, &mut dyn RandomSource) -> GraffitiResult<()>;

/// The run to decorate. `font` is the one the base style lettered with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectArgs<'a> {
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub font: Font,
    pub color: Rgba8,
}

impl EffectArgs<'_> {
    fn font_size(&self) -> f64 {
        self.font.size
    }

    fn fill(&self, s: &mut Surface, dx: f64, dy: f64, paint: &Paint) -> GraffitiResult<()> {
        s.fill_text(self.text, &self.font, self.x + dx, self.y + dy, paint)
    }

    fn stroke(&self, s: &mut Surface, width: f64, paint: &Paint) -> GraffitiResult<()> {
        s.stroke_text(self.text, &self.font, self.x, self.y, width, paint)
    }

    fn scatter(&self, rng: &mut dyn RandomSource, spread_x: f64, spread_y: f64) -> Point {
        let dx = rng.centered() * self.font_size() * spread_x;
        let dy = rng.centered() * self.font_size() * spread_y;
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Draw `effect_id` over the run. `none` and unknown ids leave the surface untouched.
#[tracing::instrument(level = "trace", skip(surface, args, rng), fields(text = args.text))]
pub fn apply_effect(
    surface: &mut Surface,
    effect_id: &str,
    args: &EffectArgs<'_>,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let Some(descriptor) = catalog::effect(effect_id) else {
        tracing::warn!(effect_id, "unknown effect, skipping");
        return Ok(());
    };
    let mut scoped = surface.scope();
    (descriptor.recipe)(&mut scoped, args, rng)
}

pub fn none(
    _s: &mut Surface,
    _a: &EffectArgs<'_>,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    Ok(())
}

const GLOW_LAYERS: [(f64, f64); 4] = [(30.0, 0.1), (20.0, 0.2), (10.0, 0.4), (5.0, 0.6)];

/// Four fills with shrinking blur and growing opacity.
pub fn glow(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let paint = Paint::from(a.color);
    for (blur, alpha) in GLOW_LAYERS {
        s.set_shadow(Shadow::glow(a.color, blur));
        s.set_global_alpha(alpha);
        a.fill(s, 0.0, 0.0, &paint)?;
    }
    Ok(())
}

pub fn double_shadow(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    a.fill(s, 8.0, 8.0, &Rgba8::rgba_f(0, 0, 0, 0.3).into())?;
    a.fill(s, 4.0, 4.0, &Rgba8::rgba_f(0, 0, 0, 0.6).into())?;
    a.fill(s, 0.0, 0.0, &a.color.into())
}

pub fn emboss(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    a.fill(s, 2.0, 2.0, &a.color.darken(40.0).into())?;
    a.fill(s, -1.0, -1.0, &a.color.lighten(40.0).into())?;
    a.fill(s, 0.0, 0.0, &a.color.into())
}

pub fn outline_glow(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    s.set_shadow(Shadow::glow(a.color, 20.0));
    a.stroke(s, 6.0, &a.color.into())?;
    s.clear_shadow();
    a.stroke(s, 2.0, &a.color.lighten(30.0).into())?;
    a.fill(s, 0.0, 0.0, &Rgba8::WHITE.into())
}

/// Darkened fill with brown speckles multiplied over it.
pub fn vintage(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    a.fill(s, 0.0, 0.0, &a.color.darken(20.0).into())?;

    s.set_blend(BlendMode::Multiply);
    let rust = Paint::from(Rgba8::rgb(0x8B, 0x45, 0x13));
    for _ in 0..50 {
        let c = a.scatter(rng, 2.0, 1.0);
        let radius = rng.next() * 3.0 + 1.0;
        s.set_global_alpha(rng.next() * 0.5 + 0.2);
        s.fill_circle(c, radius, &rust)?;
    }
    Ok(())
}

pub fn neon_flicker(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    s.set_global_alpha(0.8 + rng.next() * 0.2);
    s.set_shadow(Shadow::glow(a.color, 25.0));
    a.stroke(s, 4.0, &a.color.into())?;
    a.fill(s, 0.0, 0.0, &Rgba8::WHITE.into())
}

pub fn spray_fade(
    s: &mut Surface,
    a: &EffectArgs<'_>,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let paint = Paint::from(a.color);
    s.set_global_alpha(0.8);
    a.fill(s, 0.0, 0.0, &paint)?;

    s.set_global_alpha(0.3);
    for _ in 0..30 {
        let c = a.scatter(rng, 3.0, 1.5);
        let radius = rng.next() * 2.0 + 1.0;
        s.fill_circle(c, radius, &paint)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/effects.rs"]
mod tests;
