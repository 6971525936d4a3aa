use thiserror::Error;

/// Result alias used across the core crate.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors surfaced by the bridge, transport, and socket layers.
///
/// Frame validation failures are deliberately not represented here:
/// they are per-packet and absorbed inside the receive loop, never
/// propagated to the caller.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("short write: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}
