//! Graffiti is a CPU renderer for stylized graffiti lettering.
//!
//! A [`RenderRequest`] describes one frame: the text, a lettering style, colors, size,
//! rotation, a wall background and an optional overlay effect. [`FrameRenderer`] paints it
//! onto a premultiplied RGBA8 [`Surface`] and caches the result; [`export_as`] turns the
//! surface into PNG, JPEG, WebP or SVG bytes.
//!
//! # Pipeline overview
//!
//! 1. **Background**: a procedural wall texture, a custom flat color, or nothing
//!    ([`paint_background`]).
//! 2. **Lettering**: one of the [`STYLES`] recipes, drawn under the request's rotation
//!    ([`render_style`]).
//! 3. **Effect**: an optional overlay from [`EFFECTS`] ([`apply_effect`]).
//! 4. **Export**: resample, flatten and encode ([`export_as`], [`download_as`]).
//!
//! Styles, effects and backgrounds are looked up by string id in static catalogs; unknown
//! ids fall back instead of failing. Procedural passes draw from an injected
//! [`RandomSource`], so a seeded [`Rng64`] reproduces a frame exactly.
#![forbid(unsafe_code)]

mod background;
mod catalog;
mod effects;
mod export;
mod foundation;
mod frame;
mod presets;
mod style;
mod surface;
mod text;

pub use background::{BackgroundRecipe, CUSTOM_BACKGROUND_ID, paint_background};
pub use catalog::{
    BACKGROUNDS, BackgroundDescriptor, Category, EFFECTS, EffectDescriptor, FALLBACK_STYLE,
    STYLES, StyleDescriptor, background, effect, style, style_categories, styles_in,
};
pub use effects::{EffectArgs, EffectRecipe, apply_effect};
pub use export::{
    DEFAULT_QUALITY, ExportFormat, ExportOptions, ExportedImage, FileSink, FsSink,
    default_filename, download_as, export_as,
};
pub use foundation::color::{darken, lighten};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{GraffitiError, GraffitiResult};
pub use foundation::rng::{RandomSource, Rng64, SequenceRandom};
pub use frame::cache::{CachedFrame, DEFAULT_CACHE_CAPACITY, EvictionPolicy, Fifo, RenderCache};
pub use frame::debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
pub use frame::fingerprint::{RequestFingerprint, fingerprint_request};
pub use frame::renderer::{
    CACHE_CAPACITY_ENV, FrameRenderer, RenderHandle, RenderOutcome, RenderPhase, RendererConfig,
    SEED_ENV,
};
pub use frame::request::{
    COMPACT_SURFACE_HEIGHT, COMPACT_SURFACE_WIDTH, FALLBACK_TEXT, MAX_TEXT_CHARS, RenderRequest,
};
pub use presets::{PALETTE, PRESETS, Preset, preset};
pub use style::{StyleArgs, StyleRecipe, render_style};
pub use surface::composite::BlendMode;
pub use surface::paint::Paint;
pub use surface::{DrawState, DrawStats, MAX_SURFACE_SIDE, Shadow, Surface, SurfaceScope};
pub use text::font::{Font, FontFace, FontFile};
pub use text::layout::measure;
