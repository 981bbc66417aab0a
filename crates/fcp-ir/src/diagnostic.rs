//! Advisory events raised during conversion.
//!
//! None of these stop a conversion. They are collected and handed back
//! with the song so the caller can decide how to surface them.

use core::fmt;

/// Which end of the note range a note was clamped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClampBound {
    Low,
    High,
}

/// A non-fatal conversion event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// More distinct patterns are used than the cartridge has sfx slots.
    PatternLimitExceeded { used: usize, limit: usize },
    /// A note fell outside the playable range and was clamped.
    NoteClamped {
        /// Source pattern number
        pattern: u8,
        /// Row within the pattern
        row: usize,
        /// Note before clamping
        note: i32,
        /// Note after clamping
        clamped_to: u8,
        bound: ClampBound,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PatternLimitExceeded { used, limit } => write!(
                f,
                "the number of unique patterns ({}) exceeds {}",
                used, limit
            ),
            Diagnostic::NoteClamped { pattern, row, note, bound, .. } => {
                let edge = match bound {
                    ClampBound::High => "above D#5",
                    ClampBound::Low => "below C0",
                };
                write!(
                    f,
                    "found note {} in pattern {} row {} ({}); clamping",
                    edge, pattern, row, note
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_source_pattern() {
        let diag = Diagnostic::NoteClamped {
            pattern: 7,
            row: 3,
            note: 72,
            clamped_to: 63,
            bound: ClampBound::High,
        };
        assert_eq!(diag.to_string(), "found note above D#5 in pattern 7 row 3 (72); clamping");

        let diag = Diagnostic::PatternLimitExceeded { used: 65, limit: 64 };
        assert_eq!(diag.to_string(), "the number of unique patterns (65) exceeds 64");
    }
}
