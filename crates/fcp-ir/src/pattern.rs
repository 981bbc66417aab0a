//! Pattern and row types for PICO-8 sfx slots.

/// Rows in every PICO-8 sfx pattern.
pub const ROWS_PER_PATTERN: usize = 32;

/// Highest note PICO-8 can play (D#5).
pub const MAX_NOTE: u8 = 63;

/// Highest built-in instrument number.
pub const MAX_INSTRUMENT: u8 = 7;

/// Volume written to every populated row.
pub const DEFAULT_VOLUME: u8 = 4;

/// Effect written to every populated row.
pub const DEFAULT_EFFECT: u8 = 0;

/// A populated row in a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    /// Note number (0-63, where 0 = C-0)
    pub note: u8,
    /// Instrument (0-7)
    pub instrument: u8,
    /// Volume (0-7)
    pub volume: u8,
    /// Effect (0-7)
    pub effect: u8,
}

impl Row {
    /// Create a row with the default volume and effect.
    pub const fn new(note: u8, instrument: u8) -> Self {
        Self {
            note,
            instrument,
            volume: DEFAULT_VOLUME,
            effect: DEFAULT_EFFECT,
        }
    }
}

/// A 32-row sfx pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Playback speed written into the pattern header
    pub speed: u8,
    /// Row slots; `None` is a silent row
    pub rows: [Option<Row>; ROWS_PER_PATTERN],
}

impl Pattern {
    /// Create an empty pattern.
    pub const fn new(speed: u8) -> Self {
        Self {
            speed,
            rows: [None; ROWS_PER_PATTERN],
        }
    }

    /// Populate a row.
    pub fn set(&mut self, row: usize, value: Row) {
        debug_assert!(row < ROWS_PER_PATTERN);
        self.rows[row] = Some(value);
    }

    /// Get a row, or `None` if it is silent.
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row).and_then(Option::as_ref)
    }

    /// Number of populated rows.
    pub fn note_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_some()).count()
    }

    /// Returns true if no row is populated.
    pub fn is_empty(&self) -> bool {
        self.note_count() == 0
    }
}
