//! Format decoding and translation for fcpico.
//!
//! Decodes Future Composer 1.3/1.4 modules (`SMOD` / `FC14`) and
//! translates their sequences and patterns into the PICO-8 IR.

mod fc_format;
mod layout;
mod translate;

pub use fc_format::{load_fc, FcModule, FcSequence, RawModule, SampleMeta, SequenceWindow, Voice};
pub use layout::{Variant, VariantField, VariantLayout, LAYOUTS};
pub use translate::{
    collect_used_patterns, convert_pattern, convert_sequence, translate, Conversion, PatternKey,
    TranslateOptions, UsedPatterns,
};

use thiserror::Error;

/// Error type for format decoding.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Magic tag is not one of the supported variants
    #[error("unknown module format: {tag}")]
    UnknownFormat { tag: String },
    /// Unexpected end of file
    #[error("unexpected end of file")]
    UnexpectedEof,
    /// A referenced pattern lies outside the buffer
    #[error("pattern {pattern} lies outside the pattern table")]
    PatternOutOfBounds { pattern: u8 },
    /// Malformed record
    #[error("malformed module: {0}")]
    Parse(String),
}

impl From<binrw::Error> for FormatError {
    fn from(err: binrw::Error) -> Self {
        if err.is_eof() {
            FormatError::UnexpectedEof
        } else {
            FormatError::Parse(err.to_string())
        }
    }
}
