extern crate fontpack;

use std::path::PathBuf;

use clap::Parser;
use fontpack::convert;

/// Packs a glyph drawing made of `.` and `@` rows into a raw bitmap font
#[derive(Parser)]
#[command(args_override_self = true)]
struct Cli {
    /// Input glyph drawing
    #[clap(short = 'i')]
    input: Option<PathBuf>,
    /// Output font file
    #[clap(short = 'o')]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let message = e.to_string();
            let message = message.lines().next().unwrap_or_default();
            println!("Error: {}", message.trim_start_matches("error: "));
            std::process::exit(1);
        }
    };

    // a missing flag is an empty path, which then fails to open
    let input = args.input.unwrap_or_default();
    let output = args.output.unwrap_or_default();
    if let Err(e) = convert::font_to_binary(&output, &input) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
