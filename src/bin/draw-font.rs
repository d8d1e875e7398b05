extern crate fontpack;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use bmp::{Image, Pixel, px};
use clap::Parser;
use fontpack::font::BitmapFont;

/// Renders a packed bitmap font as a BMP sheet or as a glyph drawing
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Glyph height in rows
    #[clap(long, default_value_t = 16)]
    height: usize,
    /// Number of glyphs per sheet row
    #[clap(long, default_value_t = 32)]
    columns: usize,
    #[clap(long, default_value_t = false)]
    /// Print the glyphs as `.`/`@` rows instead of writing a bitmap
    text: bool,
    /// Packed font file
    font_path: PathBuf,
    /// Output bitmap
    #[clap(required_unless_present = "text")]
    bmp_path: Option<PathBuf>,
}

/// Largest sheet `draw_sheet` will allocate, in pixels.
const MAX_SHEET_PIXELS: u64 = 1 << 26;

fn draw_sheet(font: &BitmapFont, columns: usize) -> Result<Image> {
    if columns == 0 { return Err(anyhow!("glyphs per row must be non-zero")); }

    let glyphs = font.get_number_of_glyphs();
    let rows = glyphs.div_ceil(columns).max(1);
    let width = columns.checked_mul(font.get_width())
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(|| anyhow!("sheet of {} glyphs per row is too wide", columns))?;
    let height = rows.checked_mul(font.get_height())
        .and_then(|h| u32::try_from(h).ok())
        .ok_or_else(|| anyhow!("sheet of {} rows of height {} is too tall", rows, font.get_height()))?;
    if u64::from(width) * u64::from(height) > MAX_SHEET_PIXELS {
        return Err(anyhow!("sheet of {}x{} pixels is too large", width, height));
    }
    log::debug!("sheet of {}x{} glyphs, {}x{} pixels", columns, rows, width, height);

    let mut img = Image::new(width, height);
    for n in 0..glyphs {
        // both fit: the sheet dimensions above were checked
        let base_x = ((n % columns) * font.get_width()) as u32;
        let base_y = ((n / columns) * font.get_height()) as u32;
        font.render(n, &mut |x, y| {
            img.set_pixel(base_x + x as u32, base_y + y as u32, px!(255, 255, 255));
        });
    }
    Ok(img)
}

fn run(args: &Cli) -> Result<()> {
    let font_data = std::fs::read(&args.font_path)
        .with_context(|| format!("unable to read {}", args.font_path.display()))?;
    let font = BitmapFont::new(&font_data, args.height)?;
    log::info!("{}: {} glyphs of {}x{}", args.font_path.display(),
        font.get_number_of_glyphs(), font.get_width(), font.get_height());

    if args.text {
        font.write_drawing(std::io::stdout().lock())?;
        return Ok(());
    }

    let bmp_path = args.bmp_path.as_ref().ok_or_else(|| anyhow!("no output bitmap given"))?;
    let img = draw_sheet(&font, args.columns)?;
    img.save(bmp_path)
        .with_context(|| format!("unable to write {}", bmp_path.display()))?;
    Ok(())
}

fn main() {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if let Err(e) = run(&args) {
        println!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_set(img: &Image, x: u32, y: u32) -> bool {
        let pixel = img.get_pixel(x, y);
        (pixel.r, pixel.g, pixel.b) == (255, 255, 255)
    }

    #[test]
    fn test_sheet_layout() {
        // glyph 0 has its top-left pixel set, glyph 1 its bottom-right one
        let font = BitmapFont::new(&[0x80, 0x00, 0x00, 0x01], 2).unwrap();
        let img = draw_sheet(&font, 1).unwrap();
        assert_eq!((img.get_width(), img.get_height()), (8, 4));
        assert!(is_set(&img, 0, 0));
        assert!(is_set(&img, 7, 3));
        assert!(!is_set(&img, 7, 1));
        assert!(!is_set(&img, 0, 2));

        let img = draw_sheet(&font, 4).unwrap();
        assert_eq!((img.get_width(), img.get_height()), (32, 2));
        assert!(is_set(&img, 0, 0));
        assert!(is_set(&img, 15, 1));
        assert!(!is_set(&img, 7, 1));
    }

    #[test]
    fn test_empty_font_gets_one_row() {
        let font = BitmapFont::new(&[], 16).unwrap();
        let img = draw_sheet(&font, 32).unwrap();
        assert_eq!((img.get_width(), img.get_height()), (256, 16));
    }

    #[test]
    fn test_rejects_bad_sheets() {
        let font = BitmapFont::new(&[0xff; 4], 2).unwrap();
        assert!(draw_sheet(&font, 0).is_err());
        assert!(draw_sheet(&font, usize::MAX).is_err());
        assert!(draw_sheet(&font, usize::MAX / 4).is_err());
        assert!(draw_sheet(&font, 1 << 25).is_err());

        let tall = BitmapFont::new(&[], usize::MAX).unwrap();
        assert!(draw_sheet(&tall, 1).is_err());
    }
}
