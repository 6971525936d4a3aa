//! Serial transport implementation.

use std::thread;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use super::Transport;
use crate::config::is_canonical_baud;
use crate::error::{BridgeError, Result};

/// Delay before the single reopen attempt after an open failure.
pub const OPEN_RETRY_DELAY: Duration = Duration::from_secs(5);

/// One open, configured serial device handle.
///
/// Exactly one link exists for the process lifetime. Dropping it closes
/// the handle; there is no reopen after a write failure.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Open the serial device read-write at the requested baud rate
    /// (8N1, no flow control). A first open failure is retried exactly
    /// once after [`OPEN_RETRY_DELAY`]; the second failure is returned
    /// to the caller, which treats it as fatal.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        if !is_canonical_baud(baud_rate) {
            log::warn!("non-standard baud rate {baud_rate}, passing through to the driver");
        }

        let port = open_with_retry(
            || {
                serialport::new(path, baud_rate)
                    .data_bits(DataBits::Eight)
                    .parity(Parity::None)
                    .stop_bits(StopBits::One)
                    .flow_control(FlowControl::None)
                    .timeout(Duration::from_secs(1))
                    .open()
                    .map_err(BridgeError::from)
            },
            OPEN_RETRY_DELAY,
        )?;

        log::info!("opened serial device {path} at {baud_rate} baud");
        Ok(SerialLink { port })
    }
}

impl Transport for SerialLink {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let written = self.port.write(data)?;
        if written < data.len() {
            return Err(BridgeError::ShortWrite {
                written,
                expected: data.len(),
            });
        }
        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        self.port.flush()?;
        Ok(())
    }
}

/// Run `attempt`, and on failure sleep `delay` and run it exactly once
/// more. Factored out so tests can drive it without a real device.
pub(crate) fn open_with_retry<T>(
    mut attempt: impl FnMut() -> Result<T>,
    delay: Duration,
) -> Result<T> {
    match attempt() {
        Ok(handle) => Ok(handle),
        Err(first) => {
            log::warn!(
                "serial open failed ({first}), retrying once in {}s",
                delay.as_secs()
            );
            thread::sleep(delay);
            attempt().inspect_err(|second| {
                log::error!("serial open retry failed ({second}), giving up");
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::open_with_retry;
    use crate::error::BridgeError;

    fn io_err() -> BridgeError {
        BridgeError::Io(std::io::Error::other("no such device"))
    }

    #[test]
    fn first_attempt_success_skips_the_delay() {
        let start = Instant::now();
        let result = open_with_retry(|| Ok(7u32), Duration::from_secs(5));
        assert_eq!(result.unwrap(), 7);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn retries_once_after_the_delay() {
        let delay = Duration::from_millis(50);
        let mut attempts = 0u32;
        let start = Instant::now();
        let result = open_with_retry(
            || {
                attempts += 1;
                if attempts == 1 { Err(io_err()) } else { Ok(()) }
            },
            delay,
        );
        assert!(result.is_ok());
        assert_eq!(attempts, 2);
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn gives_up_after_exactly_two_attempts() {
        let mut attempts = 0u32;
        let result: Result<(), _> = open_with_retry(
            || {
                attempts += 1;
                Err(io_err())
            },
            Duration::from_millis(10),
        );
        assert!(result.is_err());
        assert_eq!(attempts, 2);
    }
}
