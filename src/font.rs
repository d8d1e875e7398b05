use std::io::{self, Write};

use thiserror::Error;

use crate::glyph::{self, GLYPH_WIDTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    #[error("glyph height must be non-zero")]
    ZeroHeight,
    #[error("font size {size} is not a multiple of the glyph height {height}")]
    TruncatedGlyph { size: usize, height: usize },
}

/// Packed font as produced by [`crate::convert`]: glyphs of `height` rows stored back
/// to back, one byte per row, so glyph `n` starts at byte `n * height`.
pub struct BitmapFont {
    height: usize,
    data: Vec<u8>,
}

impl BitmapFont {
    pub fn new(data: &[u8], height: usize) -> Result<Self, FontError> {
        if height == 0 { return Err(FontError::ZeroHeight); }
        if data.len() % height != 0 {
            return Err(FontError::TruncatedGlyph{ size: data.len(), height });
        }
        let data = data.to_vec();
        Ok(Self{ height, data })
    }

    pub fn get_width(&self) -> usize {
        GLYPH_WIDTH
    }

    pub fn get_height(&self) -> usize {
        self.height
    }

    pub fn get_number_of_glyphs(&self) -> usize {
        self.data.len() / self.height
    }

    /// Rows of glyph `index`, or `None` if the font has no such glyph.
    pub fn glyph(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.height)?;
        let end = start.checked_add(self.height)?;
        self.data.get(start..end)
    }

    /// Calls `plot` with the coordinates of every set pixel of glyph `index`.
    pub fn render(&self, index: usize, plot: &mut dyn FnMut(u16, u16)) {
        let Some(rows) = self.glyph(index) else { return; };
        for (y, &row) in rows.iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                if row << x & 0x80 != 0 {
                    plot(x as u16, y as u16);
                }
            }
        }
    }

    /// Writes the font back out as a glyph drawing, each glyph preceded by a comment
    /// line naming it and followed by a blank line.
    pub fn write_drawing<W: Write>(&self, mut out: W) -> io::Result<()> {
        for n in 0..self.get_number_of_glyphs() {
            writeln!(out, "# glyph {} (0x{:02x})", n, n)?;
            for &row in self.glyph(n).unwrap_or_default() {
                writeln!(out, "{}", glyph::render_glyph_row(row))?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(BitmapFont::new(&[0; 16], 0).err(), Some(FontError::ZeroHeight));
        assert_eq!(BitmapFont::new(&[0; 17], 16).err(),
            Some(FontError::TruncatedGlyph{ size: 17, height: 16 }));
    }

    #[test]
    fn test_glyph_lookup() {
        let data: Vec<u8> = (0..48).collect();
        let font = BitmapFont::new(&data, 16).unwrap();
        assert_eq!(font.get_number_of_glyphs(), 3);
        assert_eq!(font.get_width(), 8);
        assert_eq!(font.glyph(1), Some(&data[16..32]));
        assert_eq!(font.glyph(3), None);
        assert_eq!(font.glyph(usize::MAX), None);
    }

    #[test]
    fn test_empty_font() {
        let font = BitmapFont::new(&[], 16).unwrap();
        assert_eq!(font.get_number_of_glyphs(), 0);
        assert_eq!(font.glyph(0), None);
    }

    #[test]
    fn test_render_plots_set_pixels() {
        let font = BitmapFont::new(&[0x00, 0x00, 0x81, 0x18], 2).unwrap();
        let mut pixels = Vec::new();
        font.render(1, &mut |x, y| pixels.push((x, y)));
        assert_eq!(pixels, vec![(0, 0), (7, 0), (3, 1), (4, 1)]);

        pixels.clear();
        font.render(0, &mut |x, y| pixels.push((x, y)));
        font.render(2, &mut |x, y| pixels.push((x, y)));
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_write_drawing() {
        let font = BitmapFont::new(&[0x18, 0x24, 0xff, 0x00], 2).unwrap();
        let mut out = Vec::new();
        font.write_drawing(&mut out).unwrap();
        let expected = "# glyph 0 (0x00)\n...@@...\n..@..@..\n\n# glyph 1 (0x01)\n@@@@@@@@\n........\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
