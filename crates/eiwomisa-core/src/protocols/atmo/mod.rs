//! ATMO frame validation.
//!
//! ATMO frames carry a 4-byte header whose fourth byte is a channel count
//! (0..=15), followed by 3 bytes per channel; the longest frame is 49
//! bytes. The receive buffer is sized to that maximum, and a count that
//! would run past the received bytes rejects the frame instead of reading
//! out of bounds.

pub mod error;
pub mod layout;
pub mod parser;

pub use parser::validate_atmo;
