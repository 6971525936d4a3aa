//! Resolved bridge configuration.
//!
//! The CLI layer parses arguments and maps them onto [`BridgeConfig`];
//! anything left unset falls back to the defaults below. The struct is
//! immutable once built and read-only for the rest of the process.

use serde::{Deserialize, Serialize};

use crate::protocols::Protocol;

/// UDP port the bridge listens on when none is given.
pub const DEFAULT_UDP_PORT: u16 = 1337;
/// Serial device used when none is given.
pub const DEFAULT_SERIAL_DEVICE: &str = "/dev/ttyS0";
/// Baud rate used when none is given.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Canonical POSIX baud rates. Anything else is accepted with a warning
/// at open time; the device driver gets the final say.
pub const CANONICAL_BAUD_RATES: &[u32] = &[
    50, 75, 110, 134, 150, 200, 300, 600, 1200, 1800, 2400, 4800, 9600, 19200, 38400, 57600,
    115200, 230400,
];

/// Fully resolved bridge configuration.
///
/// # Examples
/// ```
/// use eiwomisa_core::BridgeConfig;
///
/// let config = BridgeConfig::default();
/// assert_eq!(config.udp_port, 1337);
/// assert_eq!(config.serial_device, "/dev/ttyS0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// UDP port to bind on all interfaces.
    pub udp_port: u16,
    /// Path to the serial device the controller is attached to.
    pub serial_device: String,
    /// Requested serial baud rate.
    pub baud_rate: u32,
    /// Wire protocol spoken by the attached controller.
    pub protocol: Protocol,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            udp_port: DEFAULT_UDP_PORT,
            serial_device: DEFAULT_SERIAL_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            protocol: Protocol::Eiwomisa,
        }
    }
}

/// Whether `rate` is one of the canonical POSIX baud rates.
pub fn is_canonical_baud(rate: u32) -> bool {
    CANONICAL_BAUD_RATES.contains(&rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = BridgeConfig::default();
        assert_eq!(config.udp_port, 1337);
        assert_eq!(config.serial_device, "/dev/ttyS0");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.protocol, Protocol::Eiwomisa);
    }

    #[test]
    fn canonical_baud_lookup() {
        assert!(is_canonical_baud(9600));
        assert!(is_canonical_baud(115200));
        assert!(!is_canonical_baud(9601));
        assert!(!is_canonical_baud(0));
    }
}
