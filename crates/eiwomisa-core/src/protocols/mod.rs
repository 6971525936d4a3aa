//! Frame validation modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, bounds, and frame sizes (source of truth)
//! - `parser`: pure validation, no direct I/O
//! - `error`: explicit, actionable errors
//!
//! Validators are pure and idempotent; the bridge and transport layers
//! handle sockets and the serial device. The protocol is selected once
//! from configuration, never sniffed from packet content.

pub mod atmo;
pub mod eiwomisa;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of wire protocols the bridge can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Fixed 6-byte lighting-control frames.
    Eiwomisa,
    /// Variable-length frames with a 4-byte header and 3 bytes per channel.
    Atmo,
}

/// Validation failure for the configured protocol.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Eiwomisa(#[from] eiwomisa::error::EiwomisaError),
    #[error(transparent)]
    Atmo(#[from] atmo::error::AtmoError),
}

impl Protocol {
    /// Map the numeric protocol tag from the command line. Out-of-range
    /// values fall back to EIWOMISA, matching the historical behavior.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Protocol::Atmo,
            _ => Protocol::Eiwomisa,
        }
    }

    /// Largest frame this protocol can produce; sizes the receive buffer.
    pub fn max_frame_len(self) -> usize {
        match self {
            Protocol::Eiwomisa => eiwomisa::layout::FRAME_LEN,
            Protocol::Atmo => atmo::layout::MAX_FRAME_LEN,
        }
    }

    /// Validate one received datagram and return the number of meaningful
    /// bytes to forward to the serial device.
    pub fn validate(self, payload: &[u8]) -> Result<usize, FrameError> {
        match self {
            Protocol::Eiwomisa => Ok(eiwomisa::validate_eiwomisa(payload)?),
            Protocol::Atmo => Ok(atmo::validate_atmo(payload)?),
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Eiwomisa => write!(f, "eiwomisa"),
            Protocol::Atmo => write!(f, "atmo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Protocol;

    #[test]
    fn tag_zero_is_eiwomisa() {
        assert_eq!(Protocol::from_tag(0), Protocol::Eiwomisa);
    }

    #[test]
    fn tag_one_is_atmo() {
        assert_eq!(Protocol::from_tag(1), Protocol::Atmo);
    }

    #[test]
    fn out_of_range_tag_falls_back_to_eiwomisa() {
        assert_eq!(Protocol::from_tag(2), Protocol::Eiwomisa);
        assert_eq!(Protocol::from_tag(255), Protocol::Eiwomisa);
    }

    #[test]
    fn max_frame_lengths() {
        assert_eq!(Protocol::Eiwomisa.max_frame_len(), 6);
        assert_eq!(Protocol::Atmo.max_frame_len(), 49);
    }

    #[test]
    fn dispatch_reaches_both_validators() {
        assert_eq!(
            Protocol::Eiwomisa.validate(&[255, 0, 0, 0, 0, 0]).unwrap(),
            6
        );
        assert_eq!(Protocol::Atmo.validate(&[0xFF, 0, 0, 0]).unwrap(), 4);
        assert!(Protocol::Atmo.validate(&[0xFF, 0, 0, 16]).is_err());
    }
}
