//! Per-variant header layouts.
//!
//! FC14 and SMOD share every header field except the word at byte 36 and
//! the fixed start of the sequence table. Those differences live here, in
//! one record per variant, and the decoder looks the record up once.

/// Supported container variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Future Composer 1.4 (`FC14`)
    Fc14,
    /// Future Composer 1.3 (`SMOD`)
    Smod,
}

/// Meaning of the header word at byte 36.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantField {
    /// FC14: offset of the wavetable data
    WavetableOffset(u32),
    /// SMOD: size of the sample data
    SampleDataSize(u32),
}

/// Fixed layout facts for one variant.
#[derive(Clone, Copy, Debug)]
pub struct VariantLayout {
    pub magic: &'static [u8; 4],
    pub variant: Variant,
    /// Byte offset where the sequence table starts
    pub sequence_offset: u64,
    /// How to interpret the header word at byte 36
    pub variant_field: fn(u32) -> VariantField,
}

/// Layout table, keyed by magic tag.
pub static LAYOUTS: [VariantLayout; 2] = [
    VariantLayout {
        magic: b"FC14",
        variant: Variant::Fc14,
        sequence_offset: 180,
        variant_field: VariantField::WavetableOffset,
    },
    VariantLayout {
        magic: b"SMOD",
        variant: Variant::Smod,
        sequence_offset: 100,
        variant_field: VariantField::SampleDataSize,
    },
];

impl VariantLayout {
    /// Find the layout for a magic tag.
    pub fn for_magic(magic: &[u8]) -> Option<&'static VariantLayout> {
        LAYOUTS.iter().find(|layout| layout.magic.as_slice() == magic)
    }
}
