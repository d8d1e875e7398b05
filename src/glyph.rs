/// Number of pixels in a glyph row, which is also the number of bits in a packed row.
pub const GLYPH_WIDTH: usize = 8;
/// Character used for a clear pixel.
pub const PIXEL_OFF: u8 = b'.';
/// Character used for a set pixel.
pub const PIXEL_ON: u8 = b'@';

/// Packs a drawn glyph row into a byte, leftmost pixel in the most significant bit.
///
/// Returns `None` unless `line` is exactly [`GLYPH_WIDTH`] characters, each of which
/// is [`PIXEL_OFF`] or [`PIXEL_ON`]. Any line terminator must already be removed.
pub fn parse_glyph_row(line: &[u8]) -> Option<u8> {
    if line.len() != GLYPH_WIDTH {
        return None;
    }

    let mut byte: u8 = 0;
    for &ch in line {
        byte <<= 1;
        match ch {
            PIXEL_ON => { byte |= 1; },
            PIXEL_OFF => { },
            _ => { return None; }
        }
    }
    Some(byte)
}

pub fn render_glyph_row(byte: u8) -> String {
    (0..GLYPH_WIDTH)
        .map(|n| if byte << n & 0x80 != 0 { PIXEL_ON as char } else { PIXEL_OFF as char })
        .collect()
}
