//! Conversion of a text glyph drawing into a packed font file.
//!
//! Every input line that is a glyph row (see [`glyph::parse_glyph_row`]) becomes one
//! output byte, in input order. Everything else in the drawing, such as comments,
//! blank separators or glyph labels, is skipped without complaint.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::glyph;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("unable to open input file '{}': {source}", .path.display())]
    FileOpen { path: PathBuf, source: io::Error },
    #[error("unable to create output file '{}': {source}", .path.display())]
    FileCreate { path: PathBuf, source: io::Error },
    #[error("unable to read input: {0}")]
    Read(#[source] io::Error),
    #[error("unable to write output: {0}")]
    Write(#[source] io::Error),
}

/// Line counts gathered during a conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Lines read from the input, glyph rows included.
    pub lines: usize,
    /// Glyph rows packed, which equals the number of bytes written.
    pub glyph_rows: usize,
    /// Lines that were not glyph rows.
    pub skipped: usize,
}

/// Longest line prefix kept in memory. Anything longer cannot be a glyph row, even
/// with a `\r\n` terminator.
const MAX_LINE: usize = glyph::GLYPH_WIDTH + 2;

/// Reads the next line, terminator included, into `line`. Only the first
/// [`MAX_LINE`] bytes are kept; the rest of an overlong line is consumed and dropped.
/// Returns `false` once the input is exhausted.
fn read_line<R: BufRead>(input: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    line.clear();
    let mut read_any = false;
    loop {
        let buf = match input.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() { return Ok(read_any); }
        read_any = true;

        let (used, done) = match buf.iter().position(|&ch| ch == b'\n') {
            Some(n) => (n + 1, true),
            None => (buf.len(), false),
        };
        let room = MAX_LINE.saturating_sub(line.len());
        line.extend_from_slice(&buf[..used.min(room)]);
        input.consume(used);
        if done { return Ok(true); }
    }
}

/// Removes the `\n` terminator and a `\r` preceding it, if present.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Packs every glyph row read from `input` into a byte written to `output`.
///
/// The output is flushed once the input is exhausted. On a read error the bytes for
/// the preceding rows have already been handed to `output` and are left there.
pub fn encode_glyphs<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<ConvertStats, ConvertError> {
    let mut stats = ConvertStats::default();
    let mut line: Vec<u8> = Vec::with_capacity(MAX_LINE);
    while read_line(&mut input, &mut line).map_err(ConvertError::Read)? {
        stats.lines += 1;

        match glyph::parse_glyph_row(strip_line_ending(&line)) {
            Some(byte) => {
                output.write_all(&[byte]).map_err(ConvertError::Write)?;
                stats.glyph_rows += 1;
            },
            None => {
                log::trace!("line {}: not a glyph row, skipped", stats.lines);
                stats.skipped += 1;
            }
        }
    }
    output.flush().map_err(ConvertError::Write)?;
    Ok(stats)
}

/// Converts the glyph drawing at `input_path` into a packed font at `output_path`.
///
/// The input is opened before the output is created, so a missing input leaves the
/// output path untouched. An existing output file is truncated and is not restored
/// if the conversion fails later on.
pub fn font_to_binary<P: AsRef<Path>, Q: AsRef<Path>>(output_path: P, input_path: Q) -> Result<ConvertStats, ConvertError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let input = File::open(input_path)
        .map_err(|source| ConvertError::FileOpen{ path: input_path.to_path_buf(), source })?;
    let output = File::create(output_path)
        .map_err(|source| ConvertError::FileCreate{ path: output_path.to_path_buf(), source })?;
    log::debug!("converting {} to {}", input_path.display(), output_path.display());

    let stats = encode_glyphs(BufReader::new(input), BufWriter::new(output))?;
    log::info!("{}: packed {} glyph rows, skipped {} of {} lines",
        output_path.display(), stats.glyph_rows, stats.skipped, stats.lines);
    Ok(stats)
}
