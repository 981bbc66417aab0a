//! Headless converter for fcpico.
//!
//! Provides one API for decoding a module, translating it and writing
//! the cartridge, shared by the CLI and the integration tests.

mod cart;

use thiserror::Error;

// Re-export common types so callers don't need fcp-ir/fcp-formats directly.
pub use fcp_formats::{Conversion, FormatError, SequenceWindow, TranslateOptions};
pub use fcp_ir::{Diagnostic, Song};

pub use cart::{render_cart, write_cart};

/// Error type for a full conversion run.
#[derive(Debug, Error)]
pub enum CartError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write cartridge: {0}")]
    Io(#[from] std::io::Error),
}

/// Module-to-cartridge converter. Holds the window and options for a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Converter {
    window: SequenceWindow,
    options: TranslateOptions,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: SequenceWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn window(&self) -> SequenceWindow {
        self.window
    }

    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Decode and translate a module. Nothing is written.
    pub fn convert(&self, data: &[u8]) -> Result<Conversion, FormatError> {
        let module = fcp_formats::load_fc(data, self.window)?;
        let conversion = fcp_formats::translate(&module, &self.options)?;

        log::info!(
            "{:?} module: {} of {} sequences, {} patterns used",
            module.raw.variant,
            conversion.song.sequences.len(),
            module.raw.sequence_count(),
            conversion.song.patterns.len()
        );

        Ok(conversion)
    }

    /// Convert a module and write the whole cartridge to `w`.
    ///
    /// The conversion completes before anything is written, so a decode
    /// error leaves `w` untouched. Diagnostics are returned to the caller.
    pub fn convert_to(
        &self,
        data: &[u8],
        w: &mut impl std::io::Write,
    ) -> Result<Vec<Diagnostic>, CartError> {
        let conversion = self.convert(data)?;
        write_cart(w, &conversion.song)?;
        Ok(conversion.diagnostics)
    }
}
