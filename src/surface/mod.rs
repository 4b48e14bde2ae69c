//! Premultiplied RGBA8 drawing surface with a canvas-like state model.
//!
//! Paths are rasterized to coverage with `vello_cpu`, then shaded and composited here so
//! that gradients, shadows and blend modes follow 2D-canvas semantics exactly.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod paint;

use std::ops::{Deref, DerefMut};

use kurbo::{Shape, Stroke, StrokeOpts};

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{GraffitiError, GraffitiResult};
use crate::surface::composite::{BlendMode, PremulRgba8};
use crate::surface::paint::Paint;
use crate::text::font::Font;
use crate::text::layout::{self, OUTLINE_TOLERANCE};

/// Largest supported width or height, in pixels.
pub const MAX_SURFACE_SIDE: u32 = u16::MAX as u32;

/// Blurred, offset copy of every painted shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba8,
    pub blur: f64,
    pub offset: Vec2,
}

impl Shadow {
    pub const NONE: Self = Self {
        color: Rgba8::TRANSPARENT,
        blur: 0.0,
        offset: Vec2::ZERO,
    };

    /// Unshifted halo around shapes.
    pub fn glow(color: Rgba8, blur: f64) -> Self {
        Self {
            color,
            blur,
            offset: Vec2::ZERO,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.color.a > 0 && (self.blur > 0.0 || self.offset != Vec2::ZERO)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::NONE
    }
}

/// Mutable drawing parameters saved and restored as a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub transform: Affine,
    pub global_alpha: f64,
    pub shadow: Shadow,
    pub blend: BlendMode,
    /// Extra pixels between glyphs of text runs.
    pub letter_spacing: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            global_alpha: 1.0,
            shadow: Shadow::NONE,
            blend: BlendMode::SourceOver,
            letter_spacing: 0.0,
        }
    }
}

/// Primitive call counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub fills: u64,
    pub strokes: u64,
    pub clears: u64,
    pub blits: u64,
}

impl DrawStats {
    /// Fill and stroke calls combined.
    pub fn paint_calls(&self) -> u64 {
        self.fills + self.strokes
    }
}

/// Premultiplied RGBA8 raster plus drawing state.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    state: DrawState,
    stack: Vec<DrawState>,
    stats: DrawStats,
}

impl Surface {
    /// Allocate a transparent surface; both sides must be in `1..=65535`.
    pub fn new(width: u32, height: u32) -> GraffitiResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
            state: DrawState::default(),
            stack: Vec::new(),
            stats: DrawStats::default(),
        })
    }

    /// Surface initialized from premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> GraffitiResult<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(GraffitiError::validation(
                "surface data length must be width*height*4",
            ));
        }
        Ok(Self {
            data,
            ..Self::new(width, height)?
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate at a new size; pixels are cleared and state is reset.
    pub fn resize(&mut self, width: u32, height: u32) -> GraffitiResult<()> {
        *self = Self {
            stats: self.stats,
            ..Self::new(width, height)?
        };
        Ok(())
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Replace all pixels (a blit); transform and shadow state do not apply.
    pub fn put_pixels(&mut self, premul: &[u8]) -> GraffitiResult<()> {
        if premul.len() != self.data.len() {
            return Err(GraffitiError::render(format!(
                "pixel buffer of {} bytes does not fit a {}x{} surface",
                premul.len(),
                self.width,
                self.height
            )));
        }
        self.data.copy_from_slice(premul);
        self.stats.blits += 1;
        Ok(())
    }

    /// Straight-alpha color at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = &self.data[i..i + 4];
        Some(Rgba8::from_premultiplied([px[0], px[1], px[2], px[3]]))
    }

    /// Un-premultiplied copy of the pixels, ready for encoders.
    pub fn to_rgba8_straight(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8::from_premultiplied([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.stats.clears += 1;
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = DrawStats::default();
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.state.transform = transform;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * Affine::translate((dx, dy));
    }

    /// Rotate the user space by `radians` (clockwise on screen).
    pub fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform * Affine::rotate(radians);
    }

    pub fn set_global_alpha(&mut self, alpha: f64) {
        self.state.global_alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = shadow;
    }

    pub fn clear_shadow(&mut self) {
        self.state.shadow = Shadow::NONE;
    }

    pub fn set_blend(&mut self, blend: BlendMode) {
        self.state.blend = blend;
    }

    pub fn set_letter_spacing(&mut self, px: f64) {
        self.state.letter_spacing = px;
    }

    /// Push the current state.
    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    /// Pop the last saved state; a no-op on an empty stack.
    pub fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
        }
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Save the state and hand back a guard that restores it when dropped.
    ///
    /// Restoration also happens when the holder bails out early with `?` or unwinds.
    pub fn scope(&mut self) -> SurfaceScope<'_> {
        let depth = self.stack.len();
        self.save();
        SurfaceScope {
            surface: self,
            depth,
        }
    }

    fn restore_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            self.restore();
        }
    }

    pub fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> GraffitiResult<()> {
        self.stats.fills += 1;
        let device = self.state.transform * path.clone();
        self.paint_device_path(&device, paint)
    }

    /// Stroke `path` in user space; the stroke width scales with the transform.
    pub fn stroke_path(
        &mut self,
        path: &BezPath,
        stroke: &Stroke,
        paint: &Paint,
    ) -> GraffitiResult<()> {
        self.stats.strokes += 1;
        if stroke.width <= 0.0 || !stroke.width.is_finite() {
            return Ok(());
        }
        let outline = kurbo::stroke(
            path.elements().iter().copied(),
            stroke,
            &StrokeOpts::default(),
            OUTLINE_TOLERANCE,
        );
        let device = self.state.transform * outline;
        self.paint_device_path(&device, paint)
    }

    pub fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> GraffitiResult<()> {
        self.fill_path(&rect.to_path(OUTLINE_TOLERANCE), paint)
    }

    pub fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        paint: &Paint,
    ) -> GraffitiResult<()> {
        let circle = kurbo::Circle::new(center, radius.abs());
        self.fill_path(&circle.to_path(OUTLINE_TOLERANCE), paint)
    }

    pub fn fill_ellipse(
        &mut self,
        center: Point,
        rx: f64,
        ry: f64,
        paint: &Paint,
    ) -> GraffitiResult<()> {
        let ellipse = kurbo::Ellipse::new(center, (rx.abs(), ry.abs()), 0.0);
        self.fill_path(&ellipse.to_path(OUTLINE_TOLERANCE), paint)
    }

    /// Fill `text` centered on `(x, y)`.
    pub fn fill_text(
        &mut self,
        text: &str,
        font: &Font,
        x: f64,
        y: f64,
        paint: &Paint,
    ) -> GraffitiResult<()> {
        let outline = layout::outline(text, font, x, y, self.state.letter_spacing)?;
        self.fill_path(&outline, paint)
    }

    /// Stroke the outlines of `text` with a band `width` pixels wide.
    pub fn stroke_text(
        &mut self,
        text: &str,
        font: &Font,
        x: f64,
        y: f64,
        width: f64,
        paint: &Paint,
    ) -> GraffitiResult<()> {
        let outline = layout::outline(text, font, x, y, self.state.letter_spacing)?;
        let stroke = Stroke::new(width).with_join(kurbo::Join::Round);
        self.stroke_path(&outline, &stroke, paint)
    }

    fn paint_device_path(&mut self, device: &BezPath, paint: &Paint) -> GraffitiResult<()> {
        if device.elements().is_empty() || self.state.global_alpha <= 0.0 {
            return Ok(());
        }
        let bbox = device.bounding_box();
        let finite = [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GraffitiError::render("path has non-finite coordinates"));
        }

        let shadow = self.state.shadow;
        let shadow_kernel = if shadow.is_visible() {
            Some(blur::shadow_kernel(shadow.blur))
        } else {
            None
        };
        let surface_rect = PixelRect::new(0, 0, self.width as i32, self.height as i32);

        // Source region: the shape plus whatever may cast a shadow onto the surface.
        let region = match shadow_kernel {
            Some(kernel) => {
                let pad = kernel.map(|(r, _)| r as i32).unwrap_or(0) + 1;
                let (ox, oy) = shadow_offset_px(shadow.offset);
                let reach = PixelRect::new(
                    -pad - ox.abs(),
                    -pad - oy.abs(),
                    self.width as i32 + pad + ox.abs(),
                    self.height as i32 + pad + oy.abs(),
                );
                PixelRect::covering(bbox).inflate(pad).intersect(reach)
            }
            None => PixelRect::covering(bbox).inflate(1).intersect(surface_rect),
        };
        if region.is_empty() {
            return Ok(());
        }

        let coverage = rasterize_coverage(device, region)?;
        let src = self.shade(&coverage, region, paint);

        if let Some(kernel) = shadow_kernel {
            self.composite_shadow(&src, region, shadow, kernel)?;
        }

        let blend = self.state.blend;
        let visible = region.intersect(surface_rect);
        let rw = region.width() as usize;
        for y in visible.y0..visible.y1 {
            for x in visible.x0..visible.x1 {
                let s = src[((y - region.y0) as usize) * rw + (x - region.x0) as usize];
                if s[3] == 0 {
                    continue;
                }
                let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
                let d = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
                self.data[i..i + 4].copy_from_slice(&composite::blend(blend, d, s));
            }
        }
        Ok(())
    }

    /// Premultiplied source color per region pixel: paint x coverage x global alpha.
    fn shade(&self, coverage: &[u8], region: PixelRect, paint: &Paint) -> Vec<PremulRgba8> {
        let alpha = self.state.global_alpha as f32;
        let inverse = self.state.transform.inverse();
        let solid = match paint {
            Paint::Solid(c) => Some(c.premultiplied()),
            _ => None,
        };
        let rw = region.width() as usize;

        coverage
            .iter()
            .enumerate()
            .map(|(i, &cov)| {
                if cov == 0 {
                    return [0; 4];
                }
                let base = match solid {
                    Some(px) => px_to_f32(px),
                    None => {
                        let dx = region.x0 as f64 + (i % rw) as f64 + 0.5;
                        let dy = region.y0 as f64 + (i / rw) as f64 + 0.5;
                        paint.sample(inverse * Point::new(dx, dy))
                    }
                };
                let k = alpha * f32::from(cov) / 255.0;
                base.map(|c| (c * k * 255.0).round().clamp(0.0, 255.0) as u8)
            })
            .collect()
    }

    fn composite_shadow(
        &mut self,
        src: &[PremulRgba8],
        region: PixelRect,
        shadow: Shadow,
        kernel: Option<(u32, f32)>,
    ) -> GraffitiResult<()> {
        let (rw, rh) = (region.width() as u32, region.height() as u32);
        let alpha: Vec<u8> = src.iter().map(|px| px[3]).collect();
        let mask = match kernel {
            Some((radius, sigma)) => blur::blur_alpha8(&alpha, rw, rh, radius, sigma)?,
            None => alpha,
        };

        let color = shadow.color.premultiplied();
        let blend = self.state.blend;
        let (ox, oy) = shadow_offset_px(shadow.offset);
        let target = region
            .translate(ox, oy)
            .intersect(PixelRect::new(0, 0, self.width as i32, self.height as i32));
        for y in target.y0..target.y1 {
            for x in target.x0..target.x1 {
                let sy = (y - oy - region.y0) as usize;
                let sx = (x - ox - region.x0) as usize;
                let m = mask[sy * rw as usize + sx];
                if m == 0 {
                    continue;
                }
                let s = composite::scale(color, m);
                let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
                let d = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
                self.data[i..i + 4].copy_from_slice(&composite::blend(blend, d, s));
            }
        }
        Ok(())
    }
}

/// Restores the surface state captured by [`Surface::scope`] on drop.
pub struct SurfaceScope<'a> {
    surface: &'a mut Surface,
    depth: usize,
}

impl Deref for SurfaceScope<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

impl DerefMut for SurfaceScope<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        self.surface
    }
}

impl Drop for SurfaceScope<'_> {
    fn drop(&mut self) {
        self.surface.restore_to(self.depth);
    }
}

/// Integer pixel rectangle, half-open on the max edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl PixelRect {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    fn covering(r: Rect) -> Self {
        let clamp = |v: f64| v.clamp(i32::MIN as f64 / 4.0, i32::MAX as f64 / 4.0) as i32;
        Self::new(
            clamp(r.x0.floor()),
            clamp(r.y0.floor()),
            clamp(r.x1.ceil()),
            clamp(r.y1.ceil()),
        )
    }

    fn inflate(self, d: i32) -> Self {
        Self::new(self.x0 - d, self.y0 - d, self.x1 + d, self.y1 + d)
    }

    fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    fn intersect(self, o: Self) -> Self {
        Self::new(
            self.x0.max(o.x0),
            self.y0.max(o.y0),
            self.x1.min(o.x1),
            self.y1.min(o.y1),
        )
    }

    fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    fn width(&self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    fn height(&self) -> i32 {
        (self.y1 - self.y0).max(0)
    }
}

fn checked_len(width: u32, height: u32) -> GraffitiResult<usize> {
    if width == 0 || height == 0 {
        return Err(GraffitiError::unsupported(format!(
            "cannot allocate a {width}x{height} surface"
        )));
    }
    if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
        return Err(GraffitiError::unsupported(format!(
            "surface {width}x{height} exceeds {MAX_SURFACE_SIDE} px per side"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GraffitiError::unsupported("surface size overflow"))
}

fn shadow_offset_px(offset: Vec2) -> (i32, i32) {
    let limit = f64::from(MAX_SURFACE_SIDE);
    let clamp = |v: f64| v.round().clamp(-limit, limit) as i32;
    (clamp(offset.x), clamp(offset.y))
}

fn px_to_f32(px: PremulRgba8) -> [f32; 4] {
    px.map(|c| f32::from(c) / 255.0)
}

/// Anti-aliased nonzero coverage of `device` over `region`, one byte per pixel.
fn rasterize_coverage(device: &BezPath, region: PixelRect) -> GraffitiResult<Vec<u8>> {
    let width: u16 = region
        .width()
        .try_into()
        .map_err(|_| GraffitiError::render("coverage region width exceeds u16"))?;
    let height: u16 = region
        .height()
        .try_into()
        .map_err(|_| GraffitiError::render("coverage region height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        -f64::from(region.x0),
        -f64::from(region.y0),
    )));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    ctx.fill_path(&bezpath_to_cpu(device));
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/surface.rs"]
mod tests;
