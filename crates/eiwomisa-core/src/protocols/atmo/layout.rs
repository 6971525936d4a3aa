pub const HEADER_LEN: usize = 4;

pub const START_OFFSET: usize = 0;
pub const CHANNEL_COUNT_OFFSET: usize = 3;

pub const START_MARKER: u8 = 0xFF;
pub const MAX_CHANNELS: u8 = 0x0F;
pub const BYTES_PER_CHANNEL: usize = 3;

// 4-byte header plus 3 bytes per channel, 15 channels max.
pub const MAX_FRAME_LEN: usize = HEADER_LEN + BYTES_PER_CHANNEL * MAX_CHANNELS as usize;

/// Frame length implied by the channel-count field.
pub const fn frame_len(channels: u8) -> usize {
    HEADER_LEN + BYTES_PER_CHANNEL * channels as usize
}
