//! fcpico CLI — converts a Future Composer module into PICO-8 cartridge music.
//!
//! Usage:
//!   fcpico path/to/song.fc > song.p8
//!   fcpico --start 4 --end 12 --transpose -12 path/to/song.fc > song.p8
//!
//! Warnings go to stderr; set RUST_LOG=info for a conversion summary.

use anyhow::Context;
use clap::Parser;
use fcp_cart::{Converter, SequenceWindow, TranslateOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::fs;

#[derive(Parser, Debug)]
#[command(name = "fcpico", version, about = "Convert a Future Composer module to PICO-8 sfx/music data")]
struct Cli {
    /// Future Composer module (FC14 or SMOD)
    input: PathBuf,

    /// The position in the input file to start transcribing from
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// The position in the input file to end transcribing at (-1 = last)
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    end: i64,

    /// The playback speed to assign to the PICO-8 patterns
    #[arg(long, default_value_t = 10)]
    speed: u8,

    /// The number of semitones to transpose all notes by
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    transpose: i32,
}

impl Cli {
    fn window(&self) -> SequenceWindow {
        SequenceWindow::new(self.start, usize::try_from(self.end).ok())
    }

    fn options(&self) -> TranslateOptions {
        TranslateOptions {
            speed: self.speed,
            transpose: self.transpose,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let data = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let converter = Converter::new()
        .with_window(cli.window())
        .with_options(cli.options());
    let conversion = converter
        .convert(&data)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    for diagnostic in &conversion.diagnostics {
        log::warn!("{}", diagnostic);
    }

    let mut out = io::BufWriter::new(io::stdout().lock());
    fcp_cart::write_cart(&mut out, &conversion.song).context("failed to write cartridge")?;
    out.flush().context("failed to write cartridge")?;

    Ok(())
}
