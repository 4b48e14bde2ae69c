//! Procedural wall textures painted behind the lettering.

use kurbo::{BezPath, Stroke};

use crate::catalog;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::GraffitiResult;
use crate::foundation::rng::RandomSource;
use crate::surface::Surface;
use crate::surface::paint::Paint;

/// Signature shared by every wall texture. Width and height are the area to cover, in pixels.
pub type BackgroundRecipe = fn(&mut Surface, f64, f64, &mut dyn RandomSource) -> GraffitiResult<()>;

/// Id that selects a flat fill with the caller's color.
pub const CUSTOM_BACKGROUND_ID: &str = "custom";

/// Paint `background_id` over `width` x `height`.
///
/// `custom` and ids missing from the catalog fill with `custom_color`, unless it is absent or
/// fully transparent.
#[tracing::instrument(level = "trace", skip(surface, rng))]
pub fn paint_background(
    surface: &mut Surface,
    background_id: &str,
    width: f64,
    height: f64,
    custom_color: Option<Rgba8>,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let mut scoped = surface.scope();
    if let Some(descriptor) = catalog::background(background_id) {
        return (descriptor.recipe)(&mut scoped, width, height, rng);
    }
    if background_id != CUSTOM_BACKGROUND_ID {
        tracing::warn!(background_id, "unknown background, treating it as a custom color");
    }
    match custom_color {
        Some(color) if !color.is_transparent() => {
            scoped.fill_rect(Rect::new(0.0, 0.0, width, height), &color.into())
        }
        _ => Ok(()),
    }
}

/// CSS-style `rgb()` channel: rounded and clamped.
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn rgb(r: f64, g: f64, b: f64) -> Rgba8 {
    Rgba8::rgb(channel(r), channel(g), channel(b))
}

fn base(s: &mut Surface, w: f64, h: f64, color: Rgba8) -> GraffitiResult<()> {
    s.fill_rect(Rect::new(0.0, 0.0, w, h), &color.into())
}

fn rect(s: &mut Surface, x: f64, y: f64, w: f64, h: f64, paint: &Paint) -> GraffitiResult<()> {
    s.fill_rect(Rect::new(x, y, x + w, y + h), paint)
}

fn line(
    s: &mut Surface,
    from: Point,
    to: Point,
    stroke: &Stroke,
    paint: &Paint,
) -> GraffitiResult<()> {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    s.stroke_path(&path, stroke, paint)
}

fn random_point(w: f64, h: f64, rng: &mut dyn RandomSource) -> Point {
    let x = rng.next() * w;
    let y = rng.next() * h;
    Point::new(x, y)
}

/// Grime: `w * h * intensity / 1000` faint black dots.
pub(crate) fn weathering(
    s: &mut Surface,
    w: f64,
    h: f64,
    intensity: f64,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let count = (w * h * intensity * 0.001).ceil().max(0.0) as usize;
    for _ in 0..count {
        let center = random_point(w, h, rng);
        let radius = rng.next() * 2.0 + 1.0;
        let alpha = rng.next() * 0.3;
        s.fill_circle(center, radius, &Rgba8::rgba_f(0, 0, 0, alpha).into())?;
    }
    Ok(())
}

pub fn none(_s: &mut Surface, _w: f64, _h: f64, _rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    Ok(())
}

const BRICK_W: f64 = 60.0;
const BRICK_H: f64 = 25.0;
const MORTAR: f64 = 2.0;

/// Running-bond bricks with jittered color and light mortar.
pub fn brick_wall(
    s: &mut Surface,
    w: f64,
    h: f64,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    base(s, w, h, Rgba8::rgb(0x8B, 0x45, 0x13))?;
    let mortar = Paint::from(Rgba8::rgb(0xD3, 0xD3, 0xD3));
    let row_h = BRICK_H + MORTAR;

    let mut y = 0.0;
    while y < h {
        let offset = ((y / row_h).floor() % 2.0) * (BRICK_W / 2.0);
        let mut x = 0.0;
        while x < w {
            let bx = x + offset;
            let v = rng.next() * 30.0 - 15.0;
            rect(s, bx, y, BRICK_W, BRICK_H, &rgb(139.0 + v, 69.0 + v, 19.0 + v).into())?;
            rect(s, bx + BRICK_W, y, MORTAR, row_h, &mortar)?;
            rect(s, bx, y + BRICK_H, BRICK_W, MORTAR, &mortar)?;
            x += BRICK_W + MORTAR;
        }
        y += row_h;
    }
    weathering(s, w, h, 0.1, rng)
}

pub fn concrete(s: &mut Surface, w: f64, h: f64, rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    base(s, w, h, Rgba8::rgb(0x69, 0x69, 0x69))?;
    for _ in 0..200 {
        let p = random_point(w, h, rng);
        let size = rng.next() * 3.0 + 1.0;
        let alpha = rng.next() * 0.3 + 0.1;
        let r = channel(100.0 + rng.next() * 50.0);
        let g = channel(100.0 + rng.next() * 50.0);
        let b = channel(100.0 + rng.next() * 50.0);
        rect(s, p.x, p.y, size, size, &Rgba8::rgba_f(r, g, b, alpha).into())?;
    }

    let crack = Stroke::new(1.0);
    let paint = Paint::from(Rgba8::rgba_f(0, 0, 0, 0.3));
    for _ in 0..5 {
        let from = random_point(w, h, rng);
        let to = random_point(w, h, rng);
        line(s, from, to, &crack, &paint)?;
    }
    weathering(s, w, h, 0.15, rng)
}

const TILE: f64 = 40.0;
const GROUT: f64 = 2.0;

pub fn subway(s: &mut Surface, w: f64, h: f64, rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    base(s, w, h, Rgba8::rgb(0xF5, 0xF5, 0xDC))?;
    let grout = Paint::from(Rgba8::rgb(0xC0, 0xC0, 0xC0));
    let step = TILE + GROUT;

    let mut y = 0.0;
    while y < h {
        let mut x = 0.0;
        while x < w {
            let tone = 245.0 + rng.next() * 20.0 - 10.0;
            let tile = rgb(tone, tone, (tone - 25.0).max(220.0));
            rect(s, x, y, TILE, TILE, &tile.into())?;
            rect(s, x + TILE, y, GROUT, step, &grout)?;
            rect(s, x, y + TILE, TILE, GROUT, &grout)?;
            x += step;
        }
        y += step;
    }
    weathering(s, w, h, 0.2, rng)
}

/// Brushed sheet with rust blotches and scratches; no grime pass.
pub fn metal(s: &mut Surface, w: f64, h: f64, rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    let sheet = Paint::linear(
        Point::ZERO,
        Point::new(w, h),
        &[
            (0.0, Rgba8::rgb(0xC0, 0xC0, 0xC0)),
            (0.5, Rgba8::rgb(0x80, 0x80, 0x80)),
            (1.0, Rgba8::rgb(0x69, 0x69, 0x69)),
        ],
    );
    s.fill_rect(Rect::new(0.0, 0.0, w, h), &sheet)?;

    for _ in 0..15 {
        let c = random_point(w, h, rng);
        let size = rng.next() * 20.0 + 10.0;
        let rust = Paint::radial_centered(
            c,
            size,
            &[
                (0.0, Rgba8::rgba_f(139, 69, 19, 0.8)),
                (0.5, Rgba8::rgba_f(160, 82, 45, 0.6)),
                (1.0, Rgba8::rgba(139, 69, 19, 0)),
            ],
        );
        s.fill_circle(c, size, &rust)?;
    }

    let scratch = Stroke::new(1.0);
    let paint = Paint::from(Rgba8::rgba_f(255, 255, 255, 0.3));
    for _ in 0..10 {
        let from = random_point(w, h, rng);
        let to = random_point(w, h, rng);
        line(s, from, to, &scratch, &paint)?;
    }
    Ok(())
}

const PLANK: f64 = 80.0;
const PLANK_GAP: f64 = 2.0;

/// Vertical planks, each with its own tint and five grain lines.
pub fn wood(s: &mut Surface, w: f64, h: f64, rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    base(s, w, h, Rgba8::rgb(0x8B, 0x45, 0x13))?;
    let grain = Stroke::new(1.0);

    let mut x = 0.0;
    while x < w {
        let v = rng.next() * 40.0 - 20.0;
        let (r, g, b) = (139.0 + v, 69.0 + v / 2.0, 19.0 + v / 4.0);
        rect(s, x, 0.0, PLANK, h, &rgb(r, g, b).into())?;

        let grain_paint = Paint::from(Rgba8::rgba_f(
            channel(r - 30.0),
            channel(g - 20.0),
            channel(b - 10.0),
            0.5,
        ));
        for i in 0..5 {
            let gy = h / 5.0 * f64::from(i) + rng.next() * 20.0;
            let drift = rng.next() * 10.0 - 5.0;
            line(
                s,
                Point::new(x, gy),
                Point::new(x + PLANK, gy + drift),
                &grain,
                &grain_paint,
            )?;
        }
        x += PLANK + PLANK_GAP;
    }
    weathering(s, w, h, 0.1, rng)
}

/// Steel-blue panel with seams across the middle band and a rivet grid.
pub fn train(s: &mut Surface, w: f64, h: f64, rng: &mut dyn RandomSource) -> GraffitiResult<()> {
    base(s, w, h, Rgba8::rgb(0x46, 0x82, 0xB4))?;
    let slate = Paint::from(Rgba8::rgb(0x2F, 0x4F, 0x4F));

    let seam = Stroke::new(3.0);
    let mut y = h * 0.2;
    while y < h * 0.8 {
        line(s, Point::new(0.0, y), Point::new(w, y), &seam, &slate)?;
        y += 40.0;
    }

    let mut x = 20.0;
    while x < w {
        let mut y = 30.0;
        while y < h {
            s.fill_circle(Point::new(x, y), 3.0, &slate)?;
            y += 50.0;
        }
        x += 60.0;
    }
    weathering(s, w, h, 0.25, rng)
}

pub fn underpass(
    s: &mut Surface,
    w: f64,
    h: f64,
    rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    base(s, w, h, Rgba8::rgb(0x2F, 0x2F, 0x2F))?;
    for _ in 0..20 {
        let c = random_point(w, h, rng);
        let size = rng.next() * 50.0 + 20.0;
        let stain = Paint::radial_centered(
            c,
            size,
            &[(0.0, Rgba8::rgba_f(0, 0, 0, 0.5)), (1.0, Rgba8::rgba(0, 0, 0, 0))],
        );
        s.fill_circle(c, size, &stain)?;
    }

    let streak = Paint::from(Rgba8::rgba_f(0, 0, 0, 0.3));
    for _ in 0..8 {
        let x = rng.next() * w;
        let length = rng.next() * h * 0.6 + h * 0.2;
        let width = 2.0 + rng.next() * 3.0;
        rect(s, x, 0.0, width, length, &streak)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/background/background.rs"]
mod tests;
