//! Styles whose color comes from fixed palettes rather than the chosen fill.

use crate::foundation::core::Rgba8;
use crate::foundation::error::GraffitiResult;
use crate::foundation::rng::RandomSource;
use crate::style::{StyleArgs, fill_at};
use crate::surface::Surface;
use crate::surface::paint::Paint;
use crate::text::font::Font;

/// RGB channel copies misregistered by a pixel or two.
pub fn glitch(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    fill_at(s, a, font, 0.0, 0.0, &a.fill.into())?;
    let channels = [
        (Rgba8::rgb(0xFF, 0x00, 0x00), 2.0, -1.0),
        (Rgba8::rgb(0x00, 0xFF, 0x00), -1.0, 1.0),
        (Rgba8::rgb(0x00, 0x00, 0xFF), 1.0, 2.0),
    ];
    for (color, dx, dy) in channels {
        fill_at(s, a, font, dx, dy, &color.into())?;
    }
    Ok(())
}

pub fn rainbow(
    s: &mut Surface,
    a: &StyleArgs<'_>,
    font: &Font,
    _rng: &mut dyn RandomSource,
) -> GraffitiResult<()> {
    let spectrum = Paint::linear(
        a.at(-a.font_size, 0.0),
        a.at(a.font_size, 0.0),
        &[
            (0.0, Rgba8::rgb(0xFF, 0x00, 0x00)),
            (0.17, Rgba8::rgb(0xFF, 0x8C, 0x00)),
            (0.33, Rgba8::rgb(0xFF, 0xD7, 0x00)),
            (0.5, Rgba8::rgb(0x00, 0xFF, 0x00)),
            (0.67, Rgba8::rgb(0x00, 0x00, 0xFF)),
            (0.83, Rgba8::rgb(0x4B, 0x00, 0x82)),
            (1.0, Rgba8::rgb(0x94, 0x00, 0xD3)),
        ],
    );
    fill_at(s, a, font, 0.0, 0.0, &spectrum)
}
