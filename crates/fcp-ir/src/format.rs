//! Fixed-width text encoding of sfx patterns and music sequences.
//!
//! Pattern line: `01`, speed as two hex digits, `0000`, then 32 five-char
//! row codes. Sequence line: `00 ` followed by one hex byte per channel.
//! Nothing here validates ranges; values are written as given.

use core::fmt;

use crate::pattern::{Pattern, Row};
use crate::sequence::{Sequence, NUM_CHANNELS};

/// Row code for a silent row.
const EMPTY_ROW: &str = "00000";

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{}{}{}",
            self.note, self.instrument, self.volume, self.effect
        )
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "01{:02x}0000", self.speed)?;
        for row in &self.rows {
            match row {
                Some(row) => write!(f, "{}", row)?,
                None => f.write_str(EMPTY_ROW)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("00 ")?;
        for ch in 0..NUM_CHANNELS {
            write!(f, "{:02x}", self.channel_code(ch))?;
        }
        Ok(())
    }
}
