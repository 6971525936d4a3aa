//! Transport layer for the serial side of the bridge.
//!
//! The bridge loop only needs to push validated frames at a device, so
//! the trait is write-only. [`SerialLink`] is the production transport;
//! [`MockTransport`] records writes for tests.

use crate::error::Result;

mod mock;
mod serial;

pub use mock::MockTransport;
pub use serial::{OPEN_RETRY_DELAY, SerialLink};

/// Write access to the device behind the bridge.
pub trait Transport: Send {
    /// Write the whole buffer. A short write is an error; the caller
    /// decides whether that is fatal (for the bridge loop it is not).
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Block until pending writes reach the device.
    fn flush(&mut self) -> Result<()>;
}
