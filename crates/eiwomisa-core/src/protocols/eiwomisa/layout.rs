pub const FRAME_LEN: usize = 6;

pub const START_OFFSET: usize = 0;
pub const VALUE_LOW_OFFSET: usize = 1;
pub const VALUE_HIGH_OFFSET: usize = 2;
pub const CHANNEL_A_OFFSET: usize = 3;
pub const CHANNEL_B_OFFSET: usize = 4;
pub const CHANNEL_C_OFFSET: usize = 5;

pub const START_MARKER: u8 = 255;

// Exclusive upper bounds fixed by the controller hardware: bytes 1..=2
// carry a 9-bit intensity value, bytes 3..=5 a channel address.
pub const VALUE_LOW_LIMIT: u8 = 255;
pub const VALUE_HIGH_LIMIT: u8 = 2;
pub const CHANNEL_A_LIMIT: u8 = 255;
pub const CHANNEL_B_LIMIT: u8 = 255;
pub const CHANNEL_C_LIMIT: u8 = 5;
