use thiserror::Error;

#[derive(Debug, Error)]
pub enum EiwomisaError {
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid EIWOMISA frame: {violations} of 6 field checks failed")]
    FieldBounds { violations: usize },
}
