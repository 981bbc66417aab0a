//! Future Composer to PICO-8 translation.
//!
//! Three passes over the decoded module:
//! 1. collect the distinct (pattern, transpose, sound transpose) triples
//!    in first-seen order;
//! 2. convert each triple into a 32-row sfx pattern;
//! 3. rewrite each sequence as channel -> sfx index.

use std::collections::HashMap;

use fcp_ir::{
    ClampBound, Diagnostic, Pattern, Row, Sequence, Song, MAX_INSTRUMENT, MAX_NOTE, MAX_PATTERNS,
    ROWS_PER_PATTERN,
};

use crate::fc_format::{FcModule, FcSequence, Voice};
use crate::FormatError;

/// Bytes per source pattern: 32 rows x (note, info).
pub const PATTERN_BLOCK_SIZE: usize = ROWS_PER_PATTERN * 2;

/// FC note 1 is C-2; PICO-8 note 0 is C-0.
const NOTE_BASE_SHIFT: i32 = 24;

/// User-facing conversion settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Playback speed written into every sfx pattern
    pub speed: u8,
    /// Semitones added to every note
    pub transpose: i32,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self { speed: 10, transpose: 0 }
    }
}

/// Identity of a converted pattern.
///
/// Two voices with the same key always share one sfx slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatternKey {
    pub pattern: u8,
    pub transpose: i8,
    pub sound_transpose: i8,
}

impl From<&Voice> for PatternKey {
    fn from(voice: &Voice) -> Self {
        Self {
            pattern: voice.pattern,
            transpose: voice.transpose,
            sound_transpose: voice.sound_transpose,
        }
    }
}

/// Insertion-ordered set of pattern keys. A key's position is its sfx index.
#[derive(Clone, Debug, Default)]
pub struct UsedPatterns {
    keys: Vec<PatternKey>,
    index: HashMap<PatternKey, usize>,
}

impl UsedPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key if unseen. Returns its index either way.
    pub fn insert(&mut self, key: PatternKey) -> usize {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.keys.len();
        self.keys.push(key);
        self.index.insert(key, idx);
        idx
    }

    pub fn index_of(&self, key: &PatternKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sfx index order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternKey> {
        self.keys.iter()
    }
}

/// A converted song plus the advisory events raised on the way.
#[derive(Clone, Debug, Default)]
pub struct Conversion {
    pub song: Song,
    pub diagnostics: Vec<Diagnostic>,
}

/// Collect every voice's key across `sequences`, sequence-major, channel-minor.
///
/// Voices with pattern 0 are included; they still get a slot.
pub fn collect_used_patterns(sequences: &[FcSequence]) -> UsedPatterns {
    let mut used = UsedPatterns::new();
    for voice in sequences.iter().flat_map(|seq| seq.voices.iter()) {
        used.insert(PatternKey::from(voice));
    }
    used
}

/// Convert one source pattern, transposed per `key` and `options`.
pub fn convert_pattern(
    module: &FcModule,
    key: &PatternKey,
    options: &TranslateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Pattern, FormatError> {
    let block = module.pattern_block(key.pattern)?;
    let mut pattern = Pattern::new(options.speed);

    for (row, cell) in block.chunks_exact(2).enumerate() {
        let (note, info) = (cell[0], cell[1]);
        if note == 0 {
            continue;
        }

        let shifted = note as i32 + NOTE_BASE_SHIFT + key.transpose as i32 + options.transpose;
        let clamped = shifted.clamp(0, MAX_NOTE as i32) as u8;
        if shifted != clamped as i32 {
            let bound = if shifted < 0 { ClampBound::Low } else { ClampBound::High };
            diagnostics.push(Diagnostic::NoteClamped {
                pattern: key.pattern,
                row,
                note: shifted,
                clamped_to: clamped,
                bound,
            });
        }

        pattern.set(row, Row::new(clamped, info & MAX_INSTRUMENT));
    }

    Ok(pattern)
}

/// Rewrite a source sequence as sfx indices.
///
/// Pattern 0 disables the channel; it never maps to sfx 0. A voice whose
/// key is not in `used` is also left disabled.
pub fn convert_sequence(sequence: &FcSequence, used: &UsedPatterns) -> Sequence {
    let mut converted = Sequence::new();
    for (channel, voice) in sequence.voices.iter().enumerate() {
        if voice.pattern == 0 {
            continue;
        }
        if let Some(idx) = used.index_of(&PatternKey::from(voice)) {
            converted.set(channel, idx);
        }
    }
    converted
}

/// Translate a decoded module into a PICO-8 song.
pub fn translate(module: &FcModule, options: &TranslateOptions) -> Result<Conversion, FormatError> {
    let mut diagnostics = Vec::new();

    let used = collect_used_patterns(&module.sequences);
    if used.len() > MAX_PATTERNS {
        diagnostics.push(Diagnostic::PatternLimitExceeded {
            used: used.len(),
            limit: MAX_PATTERNS,
        });
    }

    let patterns = used
        .iter()
        .map(|key| convert_pattern(module, key, options, &mut diagnostics))
        .collect::<Result<Vec<_>, _>>()?;

    let sequences = module
        .sequences
        .iter()
        .map(|seq| convert_sequence(seq, &used))
        .collect();

    log::debug!(
        "translated {} sequences into {} patterns ({} diagnostics)",
        module.sequences.len(),
        patterns.len(),
        diagnostics.len()
    );

    Ok(Conversion {
        song: Song::new(sequences, patterns),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fc_format::{RawModule, SampleMeta};
    use crate::layout::{Variant, VariantField};
    use fcp_ir::ChannelSlot;

    fn voice(pattern: u8, transpose: i8, sound_transpose: i8) -> Voice {
        Voice { pattern, transpose, sound_transpose }
    }

    fn sequence(voices: [Voice; 4]) -> FcSequence {
        FcSequence { voices, speed: 3 }
    }

    /// Module with the given sequences and raw pattern table.
    fn module(sequences: Vec<FcSequence>, pattern_data: Vec<u8>) -> FcModule {
        FcModule {
            raw: RawModule {
                variant: Variant::Fc14,
                sequence_table_size: (sequences.len() * 13) as u32,
                pattern_offset: 0,
                pattern_table_size: pattern_data.len() as u32,
                freqmod_offset: 0,
                freqmod_size: 0,
                volume_offset: 0,
                volume_size: 0,
                sample_data_offset: 0,
                variant_field: VariantField::WavetableOffset(0),
                sequence_offset: 180,
            },
            samples: [SampleMeta::default(); 10],
            sequences,
            pattern_data,
        }
    }

    #[test]
    fn used_patterns_keep_first_seen_order() {
        let seqs = [
            sequence([voice(2, 0, 0), voice(1, 0, 0), voice(2, 0, 0), voice(0, 0, 0)]),
            sequence([voice(1, 0, 0), voice(1, 5, 0), voice(1, 0, 1), voice(2, 0, 0)]),
        ];
        let used = collect_used_patterns(&seqs);
        let keys: Vec<(u8, i8, i8)> = used
            .iter()
            .map(|k| (k.pattern, k.transpose, k.sound_transpose))
            .collect();
        assert_eq!(keys, vec![(2, 0, 0), (1, 0, 0), (0, 0, 0), (1, 5, 0), (1, 0, 1)]);
        assert_eq!(used.index_of(&PatternKey::from(&voice(1, 5, 0))), Some(3));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut used = UsedPatterns::new();
        let key = PatternKey::from(&voice(4, -1, 0));
        assert_eq!(used.insert(key), 0);
        assert_eq!(used.insert(PatternKey::from(&voice(5, 0, 0))), 1);
        assert_eq!(used.insert(key), 0);
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn converts_notes_and_instruments() {
        let mut data = vec![0u8; PATTERN_BLOCK_SIZE * 2];
        // pattern 1, row 0: note 1, instrument bits 0b1011 -> 3
        data[64] = 1;
        data[65] = 0x0b;
        // pattern 1, row 31: note 20
        data[126] = 20;
        let module = module(Vec::new(), data);

        let mut diags = Vec::new();
        let key = PatternKey::from(&voice(1, -1, 0));
        let pattern = convert_pattern(&module, &key, &TranslateOptions::default(), &mut diags).unwrap();

        assert_eq!(pattern.speed, 10);
        assert_eq!(pattern.row(0), Some(&Row::new(24, 3)));
        assert_eq!(pattern.row(1), None);
        assert_eq!(pattern.row(31), Some(&Row::new(43, 0)));
        assert!(diags.is_empty());
    }

    #[test]
    fn clamps_high_and_low_notes() {
        let mut data = vec![0u8; PATTERN_BLOCK_SIZE];
        data[0] = 36;
        data[2] = 1;
        let module = module(Vec::new(), data);

        let mut diags = Vec::new();
        let up = TranslateOptions { speed: 10, transpose: 12 };
        let pattern = convert_pattern(&module, &PatternKey::from(&voice(0, 0, 0)), &up, &mut diags).unwrap();
        assert_eq!(pattern.row(0).map(|r| r.note), Some(63));
        assert_eq!(pattern.row(1).map(|r| r.note), Some(37));
        assert_eq!(
            diags,
            vec![Diagnostic::NoteClamped {
                pattern: 0,
                row: 0,
                note: 72,
                clamped_to: 63,
                bound: ClampBound::High,
            }]
        );

        diags.clear();
        let down = TranslateOptions { speed: 10, transpose: -30 };
        let pattern = convert_pattern(&module, &PatternKey::from(&voice(0, 0, 0)), &down, &mut diags).unwrap();
        assert_eq!(pattern.row(0).map(|r| r.note), Some(30));
        assert_eq!(pattern.row(1).map(|r| r.note), Some(0));
        assert_eq!(diags.len(), 1);
        assert!(matches!(
            diags[0],
            Diagnostic::NoteClamped { row: 1, note: -5, clamped_to: 0, bound: ClampBound::Low, .. }
        ));
    }

    #[test]
    fn pattern_zero_disables_channel() {
        let seq = sequence([voice(0, 0, 0), voice(3, 0, 0), voice(0, 0, 0), voice(3, 0, 0)]);
        let used = collect_used_patterns(std::slice::from_ref(&seq));
        // pattern 0 is still collected, and comes first
        assert_eq!(used.index_of(&PatternKey::from(&voice(0, 0, 0))), Some(0));

        let converted = convert_sequence(&seq, &used);
        assert_eq!(
            converted.channels,
            [ChannelSlot::Disabled, ChannelSlot::Pattern(1), ChannelSlot::Disabled, ChannelSlot::Pattern(1)]
        );
    }

    #[test]
    fn translate_reports_missing_pattern_block() {
        let seqs = vec![sequence([voice(9, 0, 0); 4])];
        let module = module(seqs, vec![0u8; PATTERN_BLOCK_SIZE]);
        assert!(matches!(
            translate(&module, &TranslateOptions::default()),
            Err(FormatError::PatternOutOfBounds { pattern: 9 })
        ));
    }
}
