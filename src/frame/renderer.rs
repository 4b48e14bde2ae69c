use std::cell::RefCell;
use std::rc::Rc;

use crate::background::{CUSTOM_BACKGROUND_ID, paint_background};
use crate::catalog;
use crate::effects::{EffectArgs, apply_effect};
use crate::foundation::core::Rect;
use crate::foundation::error::{GraffitiError, GraffitiResult};
use crate::foundation::rng::{RandomSource, Rng64};
use crate::frame::cache::{CachedFrame, DEFAULT_CACHE_CAPACITY, RenderCache};
use crate::frame::fingerprint::fingerprint_request;
use crate::frame::request::RenderRequest;
use crate::style::{StyleArgs, render_style};
use crate::surface::Surface;
use crate::text::font::Font;

/// Environment variable overriding [`RendererConfig::cache_capacity`].
pub const CACHE_CAPACITY_ENV: &str = "GRAFFITI_RENDER_CACHE_CAPACITY";
/// Environment variable seeding the procedural passes.
pub const SEED_ENV: &str = "GRAFFITI_SEED";

const NO_EFFECT: &str = "none";
const NO_BACKGROUND: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererConfig {
    pub cache_capacity: usize,
    /// Fixed seed for reproducible frames; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            seed: None,
        }
    }
}

impl RendererConfig {
    /// Defaults overridden by `GRAFFITI_RENDER_CACHE_CAPACITY` and `GRAFFITI_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`] with a custom variable source. Values that are not positive
    /// integers are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let cache_capacity = lookup(CACHE_CAPACITY_ENV)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.cache_capacity);
        let seed = lookup(SEED_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&n| n > 0);
        Self {
            cache_capacity,
            seed,
        }
    }

    fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(Rng64::new(seed)),
            None => Box::new(Rng64::from_entropy()),
        }
    }
}

/// Where a frame render currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPhase {
    #[default]
    Idle,
    Clearing,
    BackgroundPainting,
    TransformApplied,
    TextPainting,
    EffectApplying,
    Restored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The full pipeline painted the frame.
    Rendered,
    /// A cached frame was copied onto the surface.
    CacheHit,
    /// Another render was in flight; nothing happened.
    Dropped,
}

/// Owns the visible surface and paints [`RenderRequest`]s onto it.
pub struct FrameRenderer {
    surface: Surface,
    cache: RenderCache,
    rng: Box<dyn RandomSource>,
    phase: RenderPhase,
}

impl std::fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("cache", &self.cache)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl FrameRenderer {
    pub fn new(width: u32, height: u32) -> GraffitiResult<Self> {
        Self::with_config(width, height, RendererConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: RendererConfig) -> GraffitiResult<Self> {
        let rng = config.random_source();
        Self::with_random(width, height, config, rng)
    }

    /// Renderer drawing its procedural passes from `rng`.
    pub fn with_random(
        width: u32,
        height: u32,
        config: RendererConfig,
        rng: Box<dyn RandomSource>,
    ) -> GraffitiResult<Self> {
        Ok(Self {
            surface: Surface::new(width, height)?,
            cache: RenderCache::new(config.cache_capacity),
            rng,
            phase: RenderPhase::Idle,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Paint `req`, or copy its cached frame when the same request was painted before.
    ///
    /// The surface follows the request's size. Painting failures come back as
    /// [`GraffitiError::Render`]; pixels painted before the failure stay on the surface.
    #[tracing::instrument(level = "debug", skip(self, req), fields(style = %req.style_id))]
    pub fn render(&mut self, req: &RenderRequest) -> GraffitiResult<RenderOutcome> {
        if (self.surface.width(), self.surface.height()) != (req.surface_width, req.surface_height)
        {
            self.surface.resize(req.surface_width, req.surface_height)?;
        }

        let key = fingerprint_request(req);
        if let Some(frame) = self.cache.get(key) {
            tracing::debug!(?key, "render cache hit");
            self.surface.put_pixels(&frame.pixels)?;
            return Ok(RenderOutcome::CacheHit);
        }

        let painted = self.paint(req);
        self.phase = RenderPhase::Idle;
        painted.map_err(|e| match e {
            GraffitiError::Render(_) => e,
            other => GraffitiError::render(other.to_string()),
        })?;

        let frame = CachedFrame {
            width: self.surface.width(),
            height: self.surface.height(),
            pixels: self.surface.pixels().to_vec(),
        };
        self.cache.insert(key, frame);
        Ok(RenderOutcome::Rendered)
    }

    fn paint(&mut self, req: &RenderRequest) -> GraffitiResult<()> {
        let colors = req.colors()?;
        let text = req.normalized_text();
        let w = f64::from(self.surface.width());
        let h = f64::from(self.surface.height());

        self.phase = RenderPhase::Clearing;
        self.surface.clear();

        self.phase = RenderPhase::BackgroundPainting;
        match req.background_id.as_str() {
            NO_BACKGROUND => {
                if !colors.backdrop.is_transparent() {
                    self.surface
                        .fill_rect(Rect::new(0.0, 0.0, w, h), &colors.backdrop.into())?;
                }
            }
            CUSTOM_BACKGROUND_ID => paint_background(
                &mut self.surface,
                CUSTOM_BACKGROUND_ID,
                w,
                h,
                Some(colors.custom_background),
                self.rng.as_mut(),
            )?,
            id => paint_background(&mut self.surface, id, w, h, None, self.rng.as_mut())?,
        }

        let font_size = req.font_size();
        let (cx, cy) = (w / 2.0, h / 2.0);
        {
            let mut scoped = self.surface.scope();
            scoped.translate(cx, cy);
            scoped.rotate(req.rotation_deg.to_radians());
            scoped.translate(-cx, -cy);
            if req.letter_spacing != 0.0 {
                scoped.set_letter_spacing(req.letter_spacing);
            }
            self.phase = RenderPhase::TransformApplied;

            self.phase = RenderPhase::TextPainting;
            let style = StyleArgs {
                text: &text,
                x: cx,
                y: cy,
                font_size,
                fill: colors.fill,
                stroke: colors.stroke,
                stroke_width: req.stroke_width,
            };
            render_style(&mut scoped, &req.style_id, &style, self.rng.as_mut())?;

            if req.effect_id != NO_EFFECT {
                self.phase = RenderPhase::EffectApplying;
                let face = catalog::style(&req.style_id)
                    .unwrap_or(&catalog::FALLBACK_STYLE)
                    .face;
                let effect = EffectArgs {
                    text: &text,
                    x: cx,
                    y: cy,
                    font: Font::new(face, font_size),
                    color: colors.fill,
                };
                apply_effect(&mut scoped, &req.effect_id, &effect, self.rng.as_mut())?;
            }
        }
        self.phase = RenderPhase::Restored;
        Ok(())
    }

    /// Drop every cached frame.
    pub fn dispose(&mut self) {
        self.cache.clear();
    }
}

/// Shared single-threaded handle with an in-flight guard.
///
/// A render requested while another one is still running on the same renderer is dropped,
/// not queued; callers re-trigger through their own debounce.
#[derive(Clone, Debug)]
pub struct RenderHandle {
    inner: Rc<RefCell<FrameRenderer>>,
}

impl RenderHandle {
    pub fn new(renderer: FrameRenderer) -> Self {
        Self {
            inner: Rc::new(RefCell::new(renderer)),
        }
    }

    pub fn render(&self, req: &RenderRequest) -> GraffitiResult<RenderOutcome> {
        let Ok(mut renderer) = self.inner.try_borrow_mut() else {
            tracing::warn!("render already in progress, dropping request");
            return Ok(RenderOutcome::Dropped);
        };
        renderer.render(req)
    }

    pub fn is_rendering(&self) -> bool {
        self.inner.try_borrow_mut().is_err()
    }

    /// Run `f` against the renderer, unless a render is in flight.
    pub fn with_renderer<R>(&self, f: impl FnOnce(&mut FrameRenderer) -> R) -> Option<R> {
        let mut renderer = self.inner.try_borrow_mut().ok()?;
        Some(f(&mut renderer))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/renderer.rs"]
mod tests;
