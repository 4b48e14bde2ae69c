//! Bundled lettering faces.
//!
//! Text is shaped with parley against one of the bundled DejaVu files; [`layout::outline`]
//! turns the shaped glyphs into outline paths (via skrifa) that the surface fills like any
//! other path.

pub(crate) mod font;
pub(crate) mod layout;
