//! Target-side IR for fcpico.
//!
//! Defines the PICO-8 `__sfx__` patterns and `__music__` sequences that
//! the translator produces, the advisory diagnostics collected along the
//! way, and the fixed-width text formatting of both.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod diagnostic;
mod format;
mod pattern;
mod sequence;
mod song;

pub use diagnostic::{ClampBound, Diagnostic};
pub use pattern::{
    Pattern, Row, DEFAULT_EFFECT, DEFAULT_VOLUME, MAX_INSTRUMENT, MAX_NOTE, ROWS_PER_PATTERN,
};
pub use sequence::{disabled_sentinel, ChannelSlot, Sequence, NUM_CHANNELS};
pub use song::{Song, MAX_PATTERNS};
