//! Future Composer module decoder.
//!
//! Layout (all integers big-endian):
//!
//! | offset | contents |
//! |--------|----------|
//! | 0      | magic (`FC14` or `SMOD`) |
//! | 4      | sequence table size, pattern offset, pattern size, freq-mod offset, freq-mod size, volume offset, volume size, sample data offset |
//! | 36     | wavetable offset (FC14) or sample data size (SMOD) |
//! | 40     | 10 sample records, 6 bytes each |
//! | 180/100| sequence table (FC14/SMOD), 13 bytes per sequence |

use std::io::{Cursor, Seek, SeekFrom};

use binrw::{BinRead, BinReaderExt};

use crate::layout::{Variant, VariantField, VariantLayout};
use crate::FormatError;

/// Size of one sequence record: 4 voices x 3 bytes + speed.
pub const SEQUENCE_RECORD_SIZE: usize = 13;

/// Number of sample metadata slots.
pub const NUM_SAMPLES: usize = 10;

/// Header words that follow the magic tag, then the sample table.
#[derive(BinRead, Debug)]
#[br(big)]
struct Header {
    sequence_table_size: u32,
    pattern_offset: u32,
    pattern_table_size: u32,
    freqmod_offset: u32,
    freqmod_size: u32,
    volume_offset: u32,
    volume_size: u32,
    sample_data_offset: u32,
    variant_word: u32,
    samples: [SampleMeta; NUM_SAMPLES],
}

/// Sample metadata (lengths in words).
#[derive(BinRead, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[br(big)]
pub struct SampleMeta {
    pub length: u16,
    pub loop_start: u16,
    pub loop_length: u16,
}

/// One channel's entry in a sequence.
#[derive(BinRead, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[br(big)]
pub struct Voice {
    /// Source pattern number (0 = channel off)
    pub pattern: u8,
    /// Note transpose in semitones
    pub transpose: i8,
    /// Instrument (sound) transpose
    pub sound_transpose: i8,
}

/// One song position.
#[derive(BinRead, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[br(big)]
pub struct FcSequence {
    /// Voices in channel order
    pub voices: [Voice; 4],
    pub speed: u8,
}

/// Decoded header fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawModule {
    pub variant: Variant,
    pub sequence_table_size: u32,
    pub pattern_offset: u32,
    pub pattern_table_size: u32,
    pub freqmod_offset: u32,
    pub freqmod_size: u32,
    pub volume_offset: u32,
    pub volume_size: u32,
    pub sample_data_offset: u32,
    pub variant_field: VariantField,
    /// Start of the sequence table (fixed per variant)
    pub sequence_offset: u64,
}

impl RawModule {
    /// Number of sequences in the table, ignoring any window.
    pub fn sequence_count(&self) -> usize {
        self.sequence_table_size as usize / SEQUENCE_RECORD_SIZE
    }
}

/// Inclusive range of sequence positions to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceWindow {
    pub start: usize,
    /// Last position to include; `None` runs to the end
    pub end: Option<usize>,
}

impl SequenceWindow {
    pub const fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && self.end.map_or(true, |end| position <= end)
    }
}

/// A decoded module.
#[derive(Clone, Debug)]
pub struct FcModule {
    pub raw: RawModule,
    pub samples: [SampleMeta; NUM_SAMPLES],
    /// Sequences inside the window, in table order
    pub sequences: Vec<FcSequence>,
    /// Bytes from the pattern offset to the end of the buffer
    pub pattern_data: Vec<u8>,
}

impl FcModule {
    /// Raw 64-byte block for a source pattern.
    pub fn pattern_block(&self, pattern: u8) -> Result<&[u8], FormatError> {
        let start = pattern as usize * crate::translate::PATTERN_BLOCK_SIZE;
        self.pattern_data
            .get(start..start + crate::translate::PATTERN_BLOCK_SIZE)
            .ok_or(FormatError::PatternOutOfBounds { pattern })
    }
}

/// Load a Future Composer module from bytes.
pub fn load_fc(data: &[u8], window: SequenceWindow) -> Result<FcModule, FormatError> {
    let magic = data.get(0..4).ok_or(FormatError::UnexpectedEof)?;
    let layout = VariantLayout::for_magic(magic).ok_or_else(|| FormatError::UnknownFormat {
        tag: magic.escape_ascii().to_string(),
    })?;

    let mut reader = Cursor::new(data);
    reader.seek(SeekFrom::Start(4)).map_err(binrw::Error::Io)?;
    let header: Header = reader.read_be()?;

    let raw = RawModule {
        variant: layout.variant,
        sequence_table_size: header.sequence_table_size,
        pattern_offset: header.pattern_offset,
        pattern_table_size: header.pattern_table_size,
        freqmod_offset: header.freqmod_offset,
        freqmod_size: header.freqmod_size,
        volume_offset: header.volume_offset,
        volume_size: header.volume_size,
        sample_data_offset: header.sample_data_offset,
        variant_field: (layout.variant_field)(header.variant_word),
        sequence_offset: layout.sequence_offset,
    };
    log::debug!(
        "{:?} module: {} sequences, patterns at {:#x}",
        raw.variant,
        raw.sequence_count(),
        raw.pattern_offset
    );

    let mut sequences = Vec::new();
    for position in (0..raw.sequence_count()).filter(|&i| window.contains(i)) {
        let offset = raw.sequence_offset + (position * SEQUENCE_RECORD_SIZE) as u64;
        reader.seek(SeekFrom::Start(offset)).map_err(binrw::Error::Io)?;
        sequences.push(reader.read_be::<FcSequence>()?);
    }
    log::debug!("decoded {} sequences in window {:?}", sequences.len(), window);

    let pattern_data = data
        .get(raw.pattern_offset as usize..)
        .map(<[u8]>::to_vec)
        .unwrap_or_default();

    Ok(FcModule {
        raw,
        samples: header.samples,
        sequences,
        pattern_data,
    })
}
