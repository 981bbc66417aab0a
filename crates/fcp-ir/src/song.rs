//! Song: the converted pattern and sequence tables.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::pattern::Pattern;
use crate::sequence::Sequence;

/// Number of sfx slots a cartridge has room for.
pub const MAX_PATTERNS: usize = 64;

/// A converted song, ready to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Song {
    /// Song positions, in playback order
    pub sequences: Vec<Sequence>,
    /// Deduplicated patterns; a sequence's pattern index points in here
    pub patterns: Vec<Pattern>,
}

impl Song {
    pub fn new(sequences: Vec<Sequence>, patterns: Vec<Pattern>) -> Self {
        Self { sequences, patterns }
    }

    /// Returns true if the patterns fit in the cartridge's sfx slots.
    pub fn fits_cartridge(&self) -> bool {
        self.patterns.len() <= MAX_PATTERNS
    }

    /// One `__sfx__` line per pattern.
    pub fn pattern_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.patterns.iter().map(ToString::to_string)
    }

    /// One `__music__` line per sequence.
    pub fn sequence_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.sequences.iter().map(ToString::to_string)
    }
}
