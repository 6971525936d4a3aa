use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtmoError {
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("channel count {count} exceeds maximum 15")]
    ChannelCount { count: u8 },
}
