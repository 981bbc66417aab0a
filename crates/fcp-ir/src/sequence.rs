//! Music sequence types (one PICO-8 `__music__` entry per song position).

/// Channels per sequence.
pub const NUM_CHANNELS: usize = 4;

/// What a channel plays at one song position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelSlot {
    /// Channel is silent
    #[default]
    Disabled,
    /// Index into the song's pattern list
    Pattern(usize),
}

impl ChannelSlot {
    /// Pattern index, if the channel is enabled.
    pub const fn pattern(self) -> Option<usize> {
        match self {
            ChannelSlot::Pattern(idx) => Some(idx),
            ChannelSlot::Disabled => None,
        }
    }
}

/// Byte written for a disabled channel.
///
/// Each channel gets its own value (0x41-0x44) so the entry stays a
/// valid hex byte without pointing at pattern 0.
pub const fn disabled_sentinel(channel: usize) -> usize {
    0x40 + channel + 1
}

/// One song position: a slot per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    pub channels: [ChannelSlot; NUM_CHANNELS],
}

impl Sequence {
    /// Create a sequence with every channel disabled.
    pub const fn new() -> Self {
        Self {
            channels: [ChannelSlot::Disabled; NUM_CHANNELS],
        }
    }

    /// Point a channel at a pattern index.
    pub fn set(&mut self, channel: usize, pattern: usize) {
        debug_assert!(channel < NUM_CHANNELS);
        self.channels[channel] = ChannelSlot::Pattern(pattern);
    }

    /// The byte value written for `channel`.
    pub fn channel_code(&self, channel: usize) -> usize {
        match self.channels[channel] {
            ChannelSlot::Pattern(idx) => idx,
            ChannelSlot::Disabled => disabled_sentinel(channel),
        }
    }
}
