//! Styles that scatter random decorations (drips, flames, crystals, speckles) around the run.
//!
//! Every random draw comes from the injected source in a fixed order, so a seeded source
//! reproduces a frame exactly.

use kurbo::{BezPath, Stroke};

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::GraffitiResult;
use crate::foundation::rng::RandomSource;
use crate::style::{
    StyleArgs, fill_at, spray_texture, stroke_if_set, stroke_with, vertical_gradient,
};
use crate::surface::composite::BlendMode;
use crate::surface::paint::Paint;
use crate::surface::{Shadow, Surface};
use crate::text::font::Font;

/// Random point around the run: `spread_x` of the run's nominal width, `spread_y` of its height.
fn scatter(
    a: &StyleArgs<'_>,
    rng: &mut dyn RandomSource,
    spread_x: f64,
    spread_y: f64,
) -> Point {
    a.at(
        rng.centered() * a.font_size * a.char_count() * spread_x,
        rng.centered() * a.font_size * spread_y,
    )
}

fn closed(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

/// Hand-style tag: each letter on its own slot, tilted by a small random angle.
pub fn tag(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let slot = a.font_size * 0.6;
    let start = a.x - a.char_count() * slot / 2.0;
    let mut buf = [0u8; 4];
    for (i, ch) in a.text.chars().enumerate() {
        let letter: &str = ch.encode_utf8(&mut buf);
        let mut scoped = s.scope();
        scoped.translate(start + i as f64 * slot, a.y);
        scoped.rotate(rng.centered() * 0.2);
        if a.stroke_width > 0.0 {
            scoped.stroke_text(letter, font, 0.0, 0.0, a.stroke_width, &a.stroke.into())?;
        }
        scoped.fill_text(letter, font, 0.0, 0.0, &a.fill.into())?;
    }
    Ok(())
}

/// Fat outline; the fill is skipped about three times in ten.
pub fn throw_up(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    stroke_with(s, a, font, a.stroke_width + 6.0, &a.stroke.into())?;
    if rng.next() > 0.3 {
        fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    }
    spray_texture(s, a, 0.3, rng)
}

/// Paint running down from the baseline, two drips per character.
pub fn drip(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    stroke_if_set(s, a, font)?;
    let paint = Paint::from(a.fill);
    fill_at(s, a, font, 0.0, 0.0, &paint)?;

    let drips = a.text.chars().count() * 2;
    for _ in 0..drips {
        let dx = a.x + rng.centered() * a.font_size * a.char_count() * 0.8;
        let dy = a.y + a.font_size / 2.0;
        let height = 20.0 + rng.next() * 40.0;
        let width = 3.0 + rng.next() * 4.0;

        s.fill_ellipse(Point::new(dx, dy), width / 2.0, 5.0, &paint)?;
        s.fill_rect(
            Rect::new(dx - width / 2.0, dy, dx + width / 2.0, dy + height),
            &paint,
        )?;
        s.fill_ellipse(Point::new(dx, dy + height), width / 2.0, width, &paint)?;
    }
    Ok(())
}

pub fn fire(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let half = a.font_size / 2.0;
    let body = Paint::linear(
        a.at(0.0, half),
        a.at(0.0, -half),
        &[
            (0.0, Rgba8::rgb(0xFF, 0x00, 0x00)),
            (0.3, Rgba8::rgb(0xFF, 0x45, 0x00)),
            (0.6, Rgba8::rgb(0xFF, 0x8C, 0x00)),
            (1.0, Rgba8::rgb(0xFF, 0xD7, 0x00)),
        ],
    );
    // The glow stays on for the flames too.
    s.set_shadow(Shadow::glow(Rgba8::rgb(0xFF, 0x45, 0x00), 20.0));
    fill_at(s, a, font, 0.0, 0.0, &body)?;

    let flames = a.text.chars().count() * 3;
    for _ in 0..flames {
        let fx = a.x + rng.centered() * a.font_size * a.char_count() * 0.6;
        let fy = a.y - half - rng.next() * 30.0;
        let height = 10.0 + rng.next() * 20.0;
        let tip = Point::new(fx, fy);
        let flame = Paint::radial_centered(
            tip,
            height,
            &[
                (0.0, Rgba8::rgb(0xFF, 0xD7, 0x00)),
                (0.5, Rgba8::rgb(0xFF, 0x45, 0x00)),
                (1.0, Rgba8::rgba(0xFF, 0x00, 0x00, 0)),
            ],
        );
        s.fill_ellipse(tip, 3.0, height, &flame)?;
    }
    Ok(())
}

pub fn ice(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let body = vertical_gradient(
        a,
        &[
            (0.0, Rgba8::rgb(0xE0, 0xF6, 0xFF)),
            (0.3, Rgba8::rgb(0x87, 0xCE, 0xEB)),
            (0.7, Rgba8::rgb(0x46, 0x82, 0xB4)),
            (1.0, Rgba8::rgb(0x19, 0x19, 0x70)),
        ],
    );
    s.set_shadow(Shadow::glow(Rgba8::rgb(0x87, 0xCE, 0xEB), 15.0));
    fill_at(s, a, font, 0.0, 0.0, &body)?;
    s.clear_shadow();

    let line = Stroke::new(1.0);
    let paint = Paint::from(Rgba8::rgba_f(255, 255, 255, 0.8));
    for _ in 0..15 {
        let c = scatter(a, rng, 0.8, 0.6);
        let size = 3.0 + rng.next() * 5.0;
        let diamond = closed(&[
            Point::new(c.x, c.y - size),
            Point::new(c.x + size, c.y),
            Point::new(c.x, c.y + size),
            Point::new(c.x - size, c.y),
        ]);
        s.stroke_path(&diamond, &line, &paint)?;
    }
    Ok(())
}

/// Fill, then darker speckles multiplied into it.
pub fn grunge(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;

    let mut scoped = s.scope();
    scoped.set_blend(BlendMode::Multiply);
    for _ in 0..100 {
        let c = scatter(a, rng, 0.9, 0.8);
        let radius = rng.next() * 4.0 + 1.0;
        let alpha = rng.next() * 0.7 + 0.3;
        let shade = a.fill.darken(rng.next() * 50.0 + 20.0);
        scoped.set_global_alpha(alpha);
        scoped.fill_circle(c, radius, &shade.into())?;
    }
    Ok(())
}

pub fn electric(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let cyan = Rgba8::rgb(0x00, 0xFF, 0xFF);
    s.set_shadow(Shadow::glow(cyan, 25.0));
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    s.clear_shadow();

    let line = Stroke::new(2.0);
    let paint = Paint::from(cyan);
    for _ in 0..8 {
        let start = scatter(a, rng, 0.8, 0.6);
        let mut bolt = BezPath::new();
        bolt.move_to(start);
        for _ in 0..3 {
            let dx = rng.centered() * 20.0;
            let dy = rng.centered() * 20.0;
            bolt.line_to((start.x + dx, start.y + dy));
        }
        s.stroke_path(&bolt, &line, &paint)?;
    }
    Ok(())
}

pub fn spray(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    spray_texture(s, a, 0.5, rng)
}

pub fn pixel(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    for _ in 0..20 {
        let c = scatter(a, rng, 0.8, 0.6);
        let size = 4.0 + rng.next() * 4.0;
        let shade = a.fill.darken(rng.next() * 30.0);
        s.fill_rect(Rect::new(c.x, c.y, c.x + size, c.y + size), &shade.into())?;
    }
    Ok(())
}

pub fn frost(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let body = vertical_gradient(
        a,
        &[
            (0.0, Rgba8::rgb(0xF0, 0xF8, 0xFF)),
            (0.5, Rgba8::rgb(0xB0, 0xE0, 0xE6)),
            (1.0, Rgba8::rgb(0x46, 0x82, 0xB4)),
        ],
    );
    fill_at(s, a, font, 0.0, 0.0, &body)?;

    let paint = Paint::from(Rgba8::rgba_f(255, 255, 255, 0.8));
    for _ in 0..10 {
        let c = scatter(a, rng, 0.6, 0.4);
        let size = 2.0 + rng.next() * 3.0;
        s.fill_rect(Rect::new(c.x, c.y, c.x + size, c.y + size), &paint)?;
    }
    Ok(())
}

pub fn lava(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let body = vertical_gradient(
        a,
        &[
            (0.0, Rgba8::rgb(0xFF, 0xD7, 0x00)),
            (0.3, Rgba8::rgb(0xFF, 0x45, 0x00)),
            (0.7, Rgba8::rgb(0xDC, 0x14, 0x3C)),
            (1.0, Rgba8::rgb(0x8B, 0x00, 0x00)),
        ],
    );
    fill_at(s, a, font, 0.0, 0.0, &body)?;

    let paint = Paint::from(Rgba8::rgb(0xFF, 0x63, 0x47));
    for _ in 0..8 {
        let c = scatter(a, rng, 0.6, 0.4);
        let radius = 3.0 + rng.next() * 5.0;
        s.fill_circle(c, radius, &paint)?;
    }
    Ok(())
}

pub fn tribal(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;

    let line = Stroke::new(2.0);
    let paint = Paint::from(a.fill.darken(40.0));
    for _ in 0..5 {
        let p = scatter(a, rng, 0.8, 0.6);
        let tri = closed(&[
            p,
            Point::new(p.x + 10.0, p.y - 5.0),
            Point::new(p.x + 5.0, p.y + 10.0),
        ]);
        s.stroke_path(&tri, &line, &paint)?;
    }
    Ok(())
}

/// Blackletter-ish lettering with small spikes above the cap line.
pub fn gothic(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 4.0, 4.0, &Rgba8::rgba_f(0, 0, 0, 0.8).into())?;
    stroke_with(s, a, font, a.stroke_width + 2.0, &a.stroke.into())?;
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;

    let line = Stroke::new(1.0);
    let paint = Paint::from(a.fill.darken(30.0));
    for _ in 0..3 {
        let px = a.x + rng.centered() * a.font_size * a.char_count() * 0.6;
        let py = a.y - a.font_size / 2.0 - rng.next() * 20.0;
        let spike = closed(&[
            Point::new(px, py),
            Point::new(px + 5.0, py - 10.0),
            Point::new(px - 5.0, py - 10.0),
        ]);
        s.stroke_path(&spike, &line, &paint)?;
    }
    Ok(())
}
