//! Tools for hand-drawn 8-pixel wide bitmap fonts.
//!
//! Glyphs are drawn as text, one row per line, using `.` for a clear pixel and `@`
//! for a set pixel. [`convert`] packs such a drawing into a raw font file holding one
//! byte per row; [`font`] reads those files back.

pub mod convert;
pub mod font;
pub mod glyph;
