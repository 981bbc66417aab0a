//! PICO-8 cartridge text writer.

use fcp_ir::Song;
use std::io::Write;

const HEADER: &str = "pico-8 cartridge // http://www.pico-8.com";
const VERSION: &str = "version 42";

/// Blank sprite rows emitted before the music data.
const GFX_ROWS: usize = 6;
const GFX_ROW_WIDTH: usize = 128;

pub fn write_cart(w: &mut impl Write, song: &Song) -> std::io::Result<()> {
    write_header(w)?;
    write_gfx(w)?;
    write_section(w, "__sfx__", song.pattern_lines())?;
    write_section(w, "__music__", song.sequence_lines())
}

pub fn render_cart(song: &Song) -> String {
    let mut buf = Vec::new();
    write_cart(&mut buf, song).expect("Vec<u8> write cannot fail");
    String::from_utf8(buf).expect("cartridge text is ASCII")
}

fn write_header(w: &mut impl Write) -> std::io::Result<()> {
    writeln!(w, "{}", HEADER)?;
    writeln!(w, "{}", VERSION)
}

fn write_gfx(w: &mut impl Write) -> std::io::Result<()> {
    writeln!(w, "__gfx__")?;
    let blank = "0".repeat(GFX_ROW_WIDTH);
    for _ in 0..GFX_ROWS {
        writeln!(w, "{}", blank)?;
    }
    Ok(())
}

fn write_section(
    w: &mut impl Write,
    marker: &str,
    lines: impl Iterator<Item = String>,
) -> std::io::Result<()> {
    writeln!(w, "{}", marker)?;
    for line in lines {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}
