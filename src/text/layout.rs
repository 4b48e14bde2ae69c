use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::rc::Rc;

use kurbo::{Affine, BezPath};
use parley::layout::PositionedLayoutItem;
use parley::style::{FontStack, StyleProperty};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::foundation::error::{GraffitiError, GraffitiResult};
use crate::text::font::{Font, FontFile};

/// Flattening tolerance for generated outlines, in pixels.
pub const OUTLINE_TOLERANCE: f64 = 0.1;

const RUN_CACHE_LIMIT: usize = 256;

/// A glyph placed on the run; `x` and `y` are pixels from the start of the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

/// Shaped single-line text in pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextRun {
    pub glyphs: Vec<PlacedGlyph>,
    /// Total advance, letter spacing included.
    pub advance: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// Parley context holding one bundled file, plus its outline cache in font units.
struct FaceContext {
    fonts: parley::FontContext,
    family: String,
    units_per_em: f64,
    ascent_em: f64,
    descent_em: f64,
    outlines: HashMap<u32, Rc<BezPath>>,
}

impl FaceContext {
    fn load(file: FontFile) -> GraffitiResult<Self> {
        let mut fonts = parley::FontContext::default();
        let families = fonts
            .collection
            .register_fonts(parley::fontique::Blob::from(file.bytes().to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| GraffitiError::render(format!("no font family in {file:?}")))?;
        let family = fonts
            .collection
            .family_name(family_id)
            .ok_or_else(|| GraffitiError::render(format!("unnamed font family in {file:?}")))?
            .to_string();

        let font = parse(file)?;
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        let units_per_em = f64::from(metrics.units_per_em.max(1));
        tracing::debug!(?file, %family, units_per_em, "registered font");
        Ok(Self {
            fonts,
            family,
            units_per_em,
            ascent_em: f64::from(metrics.ascent).abs() / units_per_em,
            descent_em: f64::from(metrics.descent).abs() / units_per_em,
            outlines: HashMap::new(),
        })
    }

    fn glyph_outline(&mut self, file: FontFile, id: u32) -> GraffitiResult<Rc<BezPath>> {
        if let Some(path) = self.outlines.get(&id) {
            return Ok(Rc::clone(path));
        }
        let font = parse(file)?;
        let mut pen = PathPen::default();
        if let Some(glyph) = font.outline_glyphs().get(GlyphId::new(id)) {
            let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
            glyph
                .draw(settings, &mut pen)
                .map_err(|e| GraffitiError::render(format!("glyph {id} of {file:?}: {e}")))?;
        }
        let path = Rc::new(pen.0);
        self.outlines.insert(id, Rc::clone(&path));
        Ok(path)
    }
}

fn parse(file: FontFile) -> GraffitiResult<FontRef<'static>> {
    FontRef::new(file.bytes()).map_err(|e| GraffitiError::render(format!("parse {file:?}: {e}")))
}

/// Records skrifa outline commands into a path (font units, y up).
#[derive(Default)]
struct PathPen(BezPath);

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to((f64::from(x), f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to((f64::from(x), f64::from(y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.0
            .quad_to((f64::from(cx0), f64::from(cy0)), (f64::from(x), f64::from(y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to(
            (f64::from(cx0), f64::from(cy0)),
            (f64::from(cx1), f64::from(cy1)),
            (f64::from(x), f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.0.close_path();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RunKey {
    text: String,
    file: FontFile,
    size: u64,
    spacing: u64,
}

/// Per-thread text shaping state.
struct TextEngine {
    layouts: parley::LayoutContext<()>,
    faces: HashMap<FontFile, FaceContext>,
    runs: HashMap<RunKey, Rc<TextRun>>,
}

impl TextEngine {
    fn new() -> Self {
        Self {
            layouts: parley::LayoutContext::new(),
            faces: HashMap::new(),
            runs: HashMap::new(),
        }
    }

    fn face(&mut self, file: FontFile) -> GraffitiResult<&mut FaceContext> {
        face_entry(&mut self.faces, file)
    }

    fn shape(
        &mut self,
        text: &str,
        font: &Font,
        letter_spacing: f64,
    ) -> GraffitiResult<Rc<TextRun>> {
        let file = font.face.file;
        let key = RunKey {
            text: text.to_string(),
            file,
            size: font.size.to_bits(),
            spacing: letter_spacing.to_bits(),
        };
        if let Some(run) = self.runs.get(&key) {
            return Ok(Rc::clone(run));
        }

        let face = face_entry(&mut self.faces, file)?;
        let mut run = TextRun {
            ascent: face.ascent_em * font.size,
            descent: face.descent_em * font.size,
            ..TextRun::default()
        };
        if !text.is_empty() {
            let mut builder = self
                .layouts
                .ranged_builder(&mut face.fonts, text, 1.0, false);
            builder.push_default(StyleProperty::FontStack(FontStack::Source(Cow::Owned(
                face.family.clone(),
            ))));
            builder.push_default(StyleProperty::FontSize(font.size as f32));
            if letter_spacing != 0.0 {
                builder.push_default(StyleProperty::LetterSpacing(letter_spacing as f32));
            }
            let mut layout: parley::Layout<()> = builder.build(text);
            layout.break_all_lines(None);

            let mut baseline = None;
            for line in layout.lines() {
                run.advance = run.advance.max(f64::from(line.metrics().advance));
                for item in line.items() {
                    let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                        continue;
                    };
                    for g in glyph_run.positioned_glyphs() {
                        let base = *baseline.get_or_insert(f64::from(g.y));
                        run.glyphs.push(PlacedGlyph {
                            id: g.id,
                            x: f64::from(g.x),
                            y: f64::from(g.y) - base,
                        });
                    }
                }
            }
        }

        if self.runs.len() >= RUN_CACHE_LIMIT {
            self.runs.clear();
        }
        let run = Rc::new(run);
        self.runs.insert(key, Rc::clone(&run));
        Ok(run)
    }
}

fn face_entry(
    faces: &mut HashMap<FontFile, FaceContext>,
    file: FontFile,
) -> GraffitiResult<&mut FaceContext> {
    Ok(match faces.entry(file) {
        Entry::Occupied(e) => e.into_mut(),
        Entry::Vacant(v) => v.insert(FaceContext::load(file)?),
    })
}

thread_local! {
    static ENGINE: RefCell<TextEngine> = RefCell::new(TextEngine::new());
}

fn with_engine<R>(f: impl FnOnce(&mut TextEngine) -> GraffitiResult<R>) -> GraffitiResult<R> {
    ENGINE.with(|engine| {
        let mut engine = engine
            .try_borrow_mut()
            .map_err(|_| GraffitiError::render("text engine is busy"))?;
        f(&mut engine)
    })
}

/// Shape `text` into positioned glyphs.
pub fn shape(text: &str, font: &Font, letter_spacing: f64) -> GraffitiResult<TextRun> {
    with_engine(|engine| Ok(engine.shape(text, font, letter_spacing)?.as_ref().clone()))
}

/// Width of a laid-out run; `letter_spacing` is added after every glyph.
pub fn measure(text: &str, font: &Font, letter_spacing: f64) -> GraffitiResult<f64> {
    with_engine(|engine| Ok(engine.shape(text, font, letter_spacing)?.advance))
}

/// Filled glyph outlines (nonzero winding) for `text`, centered on `(x, y)` both ways.
///
/// Vertical centering puts the middle of the em box on `y`, like canvas `textBaseline =
/// "middle"`.
pub fn outline(
    text: &str,
    font: &Font,
    x: f64,
    y: f64,
    letter_spacing: f64,
) -> GraffitiResult<BezPath> {
    with_engine(|engine| {
        let run = engine.shape(text, font, letter_spacing)?;
        let file = font.face.file;
        let face = engine.face(file)?;
        let scale = font.size / face.units_per_em;
        let left = x - run.advance / 2.0;
        let baseline = y + (run.ascent - run.descent) / 2.0;

        let mut path = BezPath::new();
        for g in &run.glyphs {
            let glyph = face.glyph_outline(file, g.id)?;
            let place = Affine::translate((left + g.x, baseline + g.y))
                * Affine::scale_non_uniform(scale, -scale);
            for el in glyph.elements() {
                path.push(place * *el);
            }
        }
        Ok(path)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
