//! Static catalogs of lettering styles, overlay effects and wall backgrounds.
//!
//! Each entry carries its own drawing recipe, so dispatch is a table lookup and adding an entry
//! never touches a central `match`.

use crate::background::{self, BackgroundRecipe};
use crate::effects::{self, EffectRecipe};
use crate::style::{self, StyleRecipe, layered, multicolor, procedural};
use crate::text::font::FontFace;

/// Grouping used by pickers to filter catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Category {
    Basic,
    Classic,
    Advanced,
    Street,
    Urban,
    Effects,
    #[serde(rename = "3D")]
    ThreeD,
    Texture,
    Digital,
    Artistic,
    Light,
    Shadow,
    Industrial,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Classic => "Classic",
            Self::Advanced => "Advanced",
            Self::Street => "Street",
            Self::Urban => "Urban",
            Self::Effects => "Effects",
            Self::ThreeD => "3D",
            Self::Texture => "Texture",
            Self::Digital => "Digital",
            Self::Artistic => "Artistic",
            Self::Light => "Light",
            Self::Shadow => "Shadow",
            Self::Industrial => "Industrial",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One lettering style.
#[derive(Clone, Copy, Debug)]
pub struct StyleDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub preview_glyphs: &'static str,
    pub category: Category,
    /// Typeface the recipe letters with.
    pub face: FontFace,
    pub recipe: StyleRecipe,
}

/// One overlay effect drawn after the base style.
#[derive(Clone, Copy, Debug)]
pub struct EffectDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub recipe: EffectRecipe,
}

/// One procedural wall texture.
#[derive(Clone, Copy, Debug)]
pub struct BackgroundDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub preview_glyph: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub recipe: BackgroundRecipe,
}

macro_rules! style {
    ($id:literal, $name:literal, $preview:literal, $cat:ident, $face:ident, $recipe:path) => {
        StyleDescriptor {
            id: $id,
            display_name: $name,
            preview_glyphs: $preview,
            category: Category::$cat,
            face: FontFace::$face,
            recipe: $recipe,
        }
    };
}

pub static STYLES: &[StyleDescriptor] = &[
    style!("wildstyle", "Wild Style", "WILD", Advanced, CONDENSED, layered::wildstyle),
    style!("bubble", "Bubble Letters", "BUBBLE", Classic, ROUNDED, layered::bubble),
    style!("block", "Block Style", "BLOCK", Classic, HEAVY, layered::block),
    style!("tag", "Tag Style", "TAG", Basic, SCRIPT, procedural::tag),
    style!("throw-up", "Throw-up", "THROW", Street, HEAVY, procedural::throw_up),
    style!("piece", "Piece Style", "PIECE", Advanced, HEAVY, layered::piece),
    style!("stencil", "Stencil", "STENCIL", Urban, HEAVY, layered::stencil),
    style!("drip", "Drip Style", "DRIP", Effects, HEAVY, procedural::drip),
    style!("chrome", "Chrome", "CHROME", ThreeD, HEAVY, layered::chrome),
    style!("fire", "Fire Style", "FIRE", Effects, HEAVY, procedural::fire),
    style!("ice", "Ice Style", "ICE", Effects, HEAVY, procedural::ice),
    style!("neon", "Neon", "NEON", Effects, BOLD, layered::neon),
    style!("shadow", "Shadow", "SHADOW", ThreeD, HEAVY, layered::shadow),
    style!("outline", "Outline", "OUTLINE", Basic, BOLD, layered::outline),
    style!("grunge", "Grunge", "GRUNGE", Texture, HEAVY, procedural::grunge),
    style!("electric", "Electric", "ELECTRIC", Effects, BOLD, procedural::electric),
    style!("metal", "Metal", "METAL", ThreeD, HEAVY, layered::metal),
    style!("spray", "Spray Paint", "SPRAY", Street, HEAVY, procedural::spray),
    style!("pixel", "Pixel Art", "PIXEL", Digital, MONO, procedural::pixel),
    style!("glitch", "Glitch", "GLITCH", Digital, BOLD, multicolor::glitch),
    style!("rainbow", "Rainbow", "RAINBOW", Effects, HEAVY, multicolor::rainbow),
    style!("frost", "Frost", "FROST", Effects, HEAVY, procedural::frost),
    style!("lava", "Lava", "LAVA", Effects, HEAVY, procedural::lava),
    style!("tribal", "Tribal", "TRIBAL", Artistic, HEAVY, procedural::tribal),
    style!("gothic", "Gothic", "GOTHIC", Artistic, SERIF, procedural::gothic),
];

/// Recipe used for ids missing from [`STYLES`].
pub static FALLBACK_STYLE: StyleDescriptor = style!(
    "basic",
    "Basic",
    "ABC",
    Basic,
    BOLD,
    style::basic
);

pub static EFFECTS: &[EffectDescriptor] = &[
    EffectDescriptor {
        id: "none",
        display_name: "None",
        description: "No additional effect",
        category: Category::Basic,
        recipe: effects::none,
    },
    EffectDescriptor {
        id: "glow",
        display_name: "Glow",
        description: "Glowing halo",
        category: Category::Light,
        recipe: effects::glow,
    },
    EffectDescriptor {
        id: "double-shadow",
        display_name: "Double Shadow",
        description: "Two stacked drop shadows",
        category: Category::Shadow,
        recipe: effects::double_shadow,
    },
    EffectDescriptor {
        id: "emboss",
        display_name: "Emboss",
        description: "Embossed 3D relief",
        category: Category::ThreeD,
        recipe: effects::emboss,
    },
    EffectDescriptor {
        id: "outline-glow",
        display_name: "Outline Glow",
        description: "Glowing outline",
        category: Category::Light,
        recipe: effects::outline_glow,
    },
    EffectDescriptor {
        id: "vintage",
        display_name: "Vintage",
        description: "Retro grunge speckles",
        category: Category::Texture,
        recipe: effects::vintage,
    },
    EffectDescriptor {
        id: "neon-flicker",
        display_name: "Neon Flicker",
        description: "Flickering neon tube",
        category: Category::Light,
        recipe: effects::neon_flicker,
    },
    EffectDescriptor {
        id: "spray-fade",
        display_name: "Spray Fade",
        description: "Fading spray paint",
        category: Category::Texture,
        recipe: effects::spray_fade,
    },
];

pub static BACKGROUNDS: &[BackgroundDescriptor] = &[
    BackgroundDescriptor {
        id: "none",
        display_name: "Transparent",
        preview_glyph: "🔳",
        category: Category::Basic,
        description: "Transparent background",
        recipe: background::none,
    },
    BackgroundDescriptor {
        id: "brick-wall",
        display_name: "Brick",
        preview_glyph: "🧱",
        category: Category::Urban,
        description: "Classic brick wall",
        recipe: background::brick_wall,
    },
    BackgroundDescriptor {
        id: "concrete",
        display_name: "Concrete",
        preview_glyph: "🏢",
        category: Category::Urban,
        description: "Rough concrete wall",
        recipe: background::concrete,
    },
    BackgroundDescriptor {
        id: "subway",
        display_name: "Subway",
        preview_glyph: "🚇",
        category: Category::Urban,
        description: "Subway tiles",
        recipe: background::subway,
    },
    BackgroundDescriptor {
        id: "metal",
        display_name: "Metal",
        preview_glyph: "⚙️",
        category: Category::Industrial,
        description: "Metal sheet with rust",
        recipe: background::metal,
    },
    BackgroundDescriptor {
        id: "wood",
        display_name: "Wood",
        preview_glyph: "🪵",
        category: Category::Street,
        description: "Old wooden fence",
        recipe: background::wood,
    },
    BackgroundDescriptor {
        id: "train",
        display_name: "Train",
        preview_glyph: "🚂",
        category: Category::Street,
        description: "Train car side panel",
        recipe: background::train,
    },
    BackgroundDescriptor {
        id: "underpass",
        display_name: "Underpass",
        preview_glyph: "🌉",
        category: Category::Urban,
        description: "Underpass wall",
        recipe: background::underpass,
    },
];

pub fn style(id: &str) -> Option<&'static StyleDescriptor> {
    STYLES.iter().find(|s| s.id == id)
}

pub fn effect(id: &str) -> Option<&'static EffectDescriptor> {
    EFFECTS.iter().find(|e| e.id == id)
}

pub fn background(id: &str) -> Option<&'static BackgroundDescriptor> {
    BACKGROUNDS.iter().find(|b| b.id == id)
}

/// Distinct style categories in catalog order.
pub fn style_categories() -> Vec<Category> {
    let mut out = Vec::new();
    for s in STYLES {
        if !out.contains(&s.category) {
            out.push(s.category);
        }
    }
    out
}

/// Styles in `category`, or every style for `None`.
pub fn styles_in(category: Option<Category>) -> impl Iterator<Item = &'static StyleDescriptor> {
    STYLES
        .iter()
        .filter(move |s| category.is_none_or(|c| s.category == c))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog.rs"]
mod tests;
