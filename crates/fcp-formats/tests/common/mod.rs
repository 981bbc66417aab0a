//! Builds synthetic Future Composer buffers for integration tests.

#![allow(dead_code)]

/// One sequence: four (pattern, transpose, sound transpose) voices and a speed.
pub type SeqSpec = ([(u8, i8, i8); 4], u8);

pub struct ModuleBuilder {
    magic: [u8; 4],
    sequences: Vec<SeqSpec>,
    patterns: Vec<[(u8, u8); 32]>,
    samples: Vec<(u16, u16, u16)>,
    variant_word: u32,
}

impl ModuleBuilder {
    pub fn fc14() -> Self {
        Self::with_magic(*b"FC14")
    }

    pub fn smod() -> Self {
        Self::with_magic(*b"SMOD")
    }

    pub fn with_magic(magic: [u8; 4]) -> Self {
        Self {
            magic,
            sequences: Vec::new(),
            patterns: Vec::new(),
            samples: Vec::new(),
            variant_word: 0,
        }
    }

    pub fn sequence(mut self, voices: [(u8, i8, i8); 4], speed: u8) -> Self {
        self.sequences.push((voices, speed));
        self
    }

    /// Append a pattern; `rows` lists (row, note, info) for populated rows.
    pub fn pattern(mut self, rows: &[(usize, u8, u8)]) -> Self {
        let mut block = [(0u8, 0u8); 32];
        for &(row, note, info) in rows {
            block[row] = (note, info);
        }
        self.patterns.push(block);
        self
    }

    /// Append `n` silent patterns.
    pub fn empty_patterns(mut self, n: usize) -> Self {
        self.patterns.extend(std::iter::repeat([(0u8, 0u8); 32]).take(n));
        self
    }

    pub fn sample(mut self, length: u16, loop_start: u16, loop_length: u16) -> Self {
        self.samples.push((length, loop_start, loop_length));
        self
    }

    pub fn variant_word(mut self, word: u32) -> Self {
        self.variant_word = word;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let sequence_offset = if &self.magic == b"FC14" { 180 } else { 100 };
        let sequence_size = self.sequences.len() * 13;
        let pattern_offset = sequence_offset + sequence_size;
        let pattern_size = self.patterns.len() * 64;
        let end = (pattern_offset + pattern_size) as u32;

        let mut data = vec![0u8; sequence_offset];
        data[0..4].copy_from_slice(&self.magic);
        let words = [
            sequence_size as u32,
            pattern_offset as u32,
            pattern_size as u32,
            end,
            0,
            end,
            0,
            end,
            self.variant_word,
        ];
        for (i, word) in words.iter().enumerate() {
            data[4 + i * 4..8 + i * 4].copy_from_slice(&word.to_be_bytes());
        }
        for (i, &(length, loop_start, loop_length)) in self.samples.iter().enumerate() {
            let at = 40 + i * 6;
            data[at..at + 2].copy_from_slice(&length.to_be_bytes());
            data[at + 2..at + 4].copy_from_slice(&loop_start.to_be_bytes());
            data[at + 4..at + 6].copy_from_slice(&loop_length.to_be_bytes());
        }

        for (voices, speed) in &self.sequences {
            for &(pattern, transpose, sound_transpose) in voices {
                data.extend_from_slice(&[pattern, transpose as u8, sound_transpose as u8]);
            }
            data.push(*speed);
        }
        for block in &self.patterns {
            for &(note, info) in block {
                data.extend_from_slice(&[note, info]);
            }
        }
        data
    }
}

/// Same pattern in every channel.
pub fn all_channels(pattern: u8) -> [(u8, i8, i8); 4] {
    [(pattern, 0, 0); 4]
}
