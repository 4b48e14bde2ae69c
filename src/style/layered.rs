//! Styles built from stacked, offset copies of the text run.

use kurbo::{BezPath, Stroke};

use crate::foundation::core::Rgba8;
use crate::foundation::error::GraffitiResult;
use crate::foundation::rng::RandomSource;
use crate::style::{
    StyleArgs, diagonal_gradient, fill_at, stroke_if_set, stroke_with, vertical_gradient,
};
use crate::surface::paint::Paint;
use crate::surface::{Shadow, Surface};
use crate::text::font::Font;

pub fn wildstyle(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 8.0, 8.0, &Rgba8::rgba_f(0, 0, 0, 0.3).into())?;
    stroke_with(s, a, font, a.stroke_width + 6.0, &a.stroke.into())?;
    stroke_with(s, a, font, a.stroke_width + 2.0, &a.fill.into())?;

    let body = diagonal_gradient(
        a,
        &[
            (0.0, a.fill),
            (0.5, a.fill.lighten(30.0)),
            (1.0, a.fill.darken(20.0)),
        ],
    );
    fill_at(s, a, font, 0.0, 0.0, &body)?;
    arrows(s, a, rng)
}

/// Three small arrowheads scattered around the run.
fn arrows(s: &mut Surface, a: &StyleArgs<'_>, rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    let size = a.font_size * 0.2;
    let line = Stroke::new(3.0);
    let paint = Paint::from(a.fill);
    for _ in 0..3 {
        let p = a.at(
            rng.centered() * a.font_size * 1.5,
            rng.centered() * a.font_size * 0.8,
        );
        let mut path = BezPath::new();
        path.move_to((p.x - size, p.y));
        path.line_to((p.x + size, p.y));
        path.move_to((p.x + size - 5.0, p.y - 5.0));
        path.line_to((p.x + size, p.y));
        path.line_to((p.x + size - 5.0, p.y + 5.0));
        s.stroke_path(&path, &line, &paint)?;
    }
    Ok(())
}

pub fn bubble(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    s.set_shadow(Shadow::glow(a.fill, 15.0));
    stroke_with(s, a, font, a.stroke_width + 8.0, &a.stroke.into())?;
    stroke_with(s, a, font, a.stroke_width + 4.0, &a.stroke.lighten(40.0).into())?;

    let body = Paint::radial(
        a.at(-a.font_size / 4.0, -a.font_size / 4.0),
        0.0,
        a.center(),
        a.font_size / 2.0,
        &[
            (0.0, a.fill.lighten(50.0)),
            (0.7, a.fill),
            (1.0, a.fill.darken(30.0)),
        ],
    );
    fill_at(s, a, font, 0.0, 0.0, &body)?;

    let highlight = font.scaled(0.8);
    let shift = -a.font_size / 8.0;
    fill_at(s, a, &highlight, shift, shift, &Rgba8::rgba_f(255, 255, 255, 0.6).into())
}

pub fn block(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let depth = Paint::from(a.fill.darken(50.0));
    for i in 1..=5 {
        let d = f64::from(i) * 2.0;
        fill_at(s, a, font, d, d, &depth)?;
    }
    stroke_with(s, a, font, a.stroke_width + 3.0, &a.stroke.into())?;
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    fill_at(s, a, font, -2.0, -2.0, &a.fill.lighten(40.0).into())
}

pub fn piece(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    fill_at(s, a, font, 2.0, 2.0, &Rgba8::BLACK.into())
}

/// Fill with a white copy nudged up-left, reading as a cut-out edge.
pub fn stencil(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    fill_at(s, a, font, -2.0, -2.0, &Rgba8::WHITE.into())
}

pub fn chrome(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let steel = diagonal_gradient(
        a,
        &[
            (0.0, Rgba8::rgb(0xE8, 0xE8, 0xE8)),
            (0.2, Rgba8::WHITE),
            (0.4, Rgba8::rgb(0xC0, 0xC0, 0xC0)),
            (0.6, Rgba8::rgb(0xA0, 0xA0, 0xA0)),
            (0.8, Rgba8::rgb(0x80, 0x80, 0x80)),
            (1.0, Rgba8::rgb(0x60, 0x60, 0x60)),
        ],
    );
    fill_at(s, a, font, 4.0, 4.0, &Rgba8::rgba_f(0, 0, 0, 0.5).into())?;
    fill_at(s, a, font, 0.0, 0.0, &steel)?;
    let highlight = font.scaled(0.9);
    fill_at(s, a, &highlight, -2.0, -3.0, &Rgba8::rgba_f(255, 255, 255, 0.8).into())
}

pub fn neon(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    s.set_shadow(Shadow::glow(a.fill, 20.0));
    stroke_with(s, a, font, a.stroke_width + 4.0, &a.fill.into())?;
    stroke_with(s, a, font, a.stroke_width, &a.fill.lighten(50.0).into())?;
    fill_at(s, a, font, 0.0, 0.0, &Rgba8::WHITE.into())
}

pub fn shadow(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 6.0, 6.0, &Rgba8::rgba_f(0, 0, 0, 0.5).into())?;
    stroke_if_set(s, a, font)?;
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())
}

/// Two nested strokes and no fill; the glyph interiors stay see-through.
pub fn outline(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    stroke_with(s, a, font, a.stroke_width + 2.0, &a.stroke.into())?;
    stroke_with(s, a, font, a.stroke_width, &a.fill.into())
}

pub fn metal(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let plate = vertical_gradient(
        a,
        &[
            (0.0, Rgba8::rgb(0xF0, 0xF0, 0xF0)),
            (0.3, Rgba8::rgb(0xC0, 0xC0, 0xC0)),
            (0.7, Rgba8::rgb(0x80, 0x80, 0x80)),
            (1.0, Rgba8::rgb(0x40, 0x40, 0x40)),
        ],
    );
    fill_at(s, a, font, 0.0, 0.0, &plate)?;
    fill_at(s, a, font, -1.0, -2.0, &Rgba8::rgba_f(255, 255, 255, 0.8).into())
}
