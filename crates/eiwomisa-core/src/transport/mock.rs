//! Mock transport for testing.

use std::sync::{Arc, Mutex};

use super::Transport;
use crate::error::{BridgeError, Result};

/// Test double that records every written byte and can be told to fail
/// the next write. Clones share the same buffer, so a test can keep one
/// handle while the bridge owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Default)]
struct MockTransportInner {
    written: Vec<u8>,
    fail_next_write: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bytes written so far, across all writes.
    pub fn written(&self) -> Vec<u8> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.written.clone()
    }

    /// Make the next write fail with an I/O error.
    pub fn fail_next_write(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.fail_next_write = true;
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.fail_next_write {
            inner.fail_next_write = false;
            return Err(BridgeError::Io(std::io::Error::other(
                "injected write failure",
            )));
        }
        inner.written.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MockTransport;
    use crate::transport::Transport;

    #[test]
    fn records_writes_across_clones() {
        let mock = MockTransport::new();
        let mut writer = mock.clone();
        writer.write(&[1, 2, 3]).unwrap();
        writer.write(&[4]).unwrap();
        assert_eq!(mock.written(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn injected_failure_hits_only_one_write() {
        let mock = MockTransport::new();
        let mut writer = mock.clone();
        mock.fail_next_write();
        assert!(writer.write(&[9]).is_err());
        writer.write(&[9]).unwrap();
        assert_eq!(mock.written(), vec![9]);
    }
}
