//! Lettering recipes: ordered paint passes that turn a text run into one graffiti style.

use crate::catalog::{self, StyleDescriptor};
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::GraffitiResult;
use crate::foundation::rng::RandomSource;
use crate::surface::Surface;
use crate::surface::paint::Paint;
use crate::text::font::Font;

pub(crate) mod layered;
pub(crate) mod multicolor;
pub(crate) mod procedural;

/// Signature shared by every style recipe.
pub type StyleRecipe =
    fn(&mut Surface, &StyleArgs<'_>, &Font, &mut dyn RandomSource) -> GraffitiResult<()>;

/// What to letter and with which colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleArgs<'a> {
    pub text: &'a str,
    /// Center of the run.
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub fill: Rgba8,
    pub stroke: Rgba8,
    pub stroke_width: f64,
}

impl StyleArgs<'_> {
    pub(crate) fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Character count, as used to spread procedural decorations.
    pub(crate) fn char_count(&self) -> f64 {
        self.text.chars().count() as f64
    }

    /// Point at `(x + dx, y + dy)`.
    pub(crate) fn at(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Resolve `style_id` and letter `args.text` with it.
///
/// Ids missing from the catalog fall back to [`basic`]. The recipe runs inside a state scope,
/// so transforms, alpha, shadow and blend settings never leak into later passes.
#[tracing::instrument(level = "trace", skip(surface, args, rng), fields(text = args.text))]
pub fn render_style(
    surface: &mut Surface,
    style_id: &str,
    args: &StyleArgs<'_>,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let descriptor = resolve(style_id);
    let font = Font::new(descriptor.face, args.font_size);
    let mut scoped = surface.scope();
    (descriptor.recipe)(&mut scoped, args, &font, rng)
}

fn resolve(style_id: &str) -> &'static StyleDescriptor {
    catalog::style(style_id).unwrap_or_else(|| {
        tracing::warn!(style_id, "unknown style, falling back to basic lettering");
        &catalog::FALLBACK_STYLE
    })
}

/// Plain lettering: outline when a stroke width is set, then the fill.
pub fn basic(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    stroke_if_set(s, a, font)?;
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())
}

pub(crate) fn fill_at(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    dx: f64,
    dy: f64,
    paint: &Paint,
) -> GraffitiResult<()> {
    s.fill_text(a.text, font, a.x + dx, a.y + dy, paint)
}

pub(crate) fn stroke_with(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    width: f64,
    paint: &Paint,
) -> GraffitiResult<()> {
    s.stroke_text(a.text, font, a.x, a.y, width, paint)
}

pub(crate) fn stroke_if_set(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
) -> GraffitiResult<()> {
    if a.stroke_width > 0.0 {
        stroke_with(s, a, font, a.stroke_width, &a.stroke.into())?;
    }
    Ok(())
}

/// Gradient running from the top to the bottom of the glyph box.
pub(crate) fn vertical_gradient(a: &StyleArgs<'_>, stops: &[(f64, Rgba8)]) -> Paint {
    let half = a.font_size / 2.0;
    Paint::linear(a.at(0.0, -half), a.at(0.0, half), stops)
}

/// Gradient running corner to corner across the glyph box.
pub(crate) fn diagonal_gradient(a: &StyleArgs<'_>, stops: &[(f64, Rgba8)]) -> Paint {
    let half = a.font_size / 2.0;
    Paint::linear(a.at(-half, -half), a.at(half, half), stops)
}

/// Paint-speckle overlay: 30 small dots around the text at `opacity`.
pub(crate) fn spray_texture(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    opacity: f64,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let mut scoped = s.scope();
    scoped.set_global_alpha(opacity);
    let paint = Paint::from(a.fill);
    for _ in 0..30 {
        let p = a.at(
            rng.centered() * a.font_size * 1.2,
            rng.centered() * a.font_size * 0.8,
        );
        let radius = rng.next() * 2.0 + 1.0;
        scoped.fill_circle(p, radius, &paint)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/style/style.rs"]
mod tests;
