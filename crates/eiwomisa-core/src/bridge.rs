//! UDP receive loop and frame forwarding.
//!
//! The bridge owns the bound socket and a serial transport. Each pass of
//! the loop receives one datagram, validates it for the configured
//! protocol, and writes accepted frames to the transport before the next
//! receive. Shutdown is a shared flag set by the signal handler and
//! polled between packets; the socket carries a short read timeout solely
//! so the poll happens while the line is idle.

use std::io::ErrorKind;
use std::net::UdpSocket;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::Result;
use crate::protocols::Protocol;
use crate::transport::Transport;

/// How often the receive loop wakes to check the shutdown flag.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// One UDP-to-serial bridge instance.
pub struct Bridge<T: Transport> {
    socket: UdpSocket,
    link: T,
    protocol: Protocol,
    datagrams: u64,
    forwarded: u64,
    dropped: u64,
}

impl<T: Transport> Bridge<T> {
    /// Wrap an already-bound socket and an open transport. The socket is
    /// switched to a short read timeout for shutdown polling.
    pub fn new(socket: UdpSocket, link: T, protocol: Protocol) -> Result<Self> {
        socket.set_read_timeout(Some(SHUTDOWN_POLL_INTERVAL))?;
        Ok(Self {
            socket,
            link,
            protocol,
            datagrams: 0,
            forwarded: 0,
            dropped: 0,
        })
    }

    /// Bind `0.0.0.0:port` and wrap the result. Bind failure is returned
    /// to the caller and is fatal there; socket setup is never retried.
    pub fn bind(port: u16, link: T, protocol: Protocol) -> Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", port))?;
        log::info!("listening on 0.0.0.0:{port}");
        Self::new(socket, link, protocol)
    }

    /// Run until `running` is cleared or the socket fails.
    ///
    /// Timeouts and interrupts only trigger a flag check; any other
    /// receive error is unrecoverable and returned. Validation and write
    /// failures are absorbed per packet.
    pub fn run(&mut self, running: &AtomicBool) -> Result<()> {
        // Receives are capped at the protocol maximum; oversized
        // datagrams are silently truncated.
        let mut buffer = vec![0u8; self.protocol.max_frame_len()];

        while running.load(Ordering::Relaxed) {
            let (len, peer) = match self.socket.recv_from(&mut buffer) {
                Ok(received) => received,
                Err(err)
                    if matches!(
                        err.kind(),
                        ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
                    ) =>
                {
                    continue;
                }
                Err(err) => {
                    log::error!("UDP receive failed: {err}");
                    return Err(err.into());
                }
            };

            self.datagrams += 1;
            log::info!("datagram from {peer} ({len} bytes)");
            self.forward(&buffer[..len]);
        }

        log::info!(
            "shutting down: {} datagrams received, {} frames forwarded, {} dropped",
            self.datagrams,
            self.forwarded,
            self.dropped
        );
        Ok(())
    }

    fn forward(&mut self, payload: &[u8]) {
        let frame_len = match self.protocol.validate(payload) {
            Ok(frame_len) => frame_len,
            Err(err) => {
                self.dropped += 1;
                log::debug!("frame dropped: {err}");
                return;
            }
        };

        let outcome = self
            .link
            .write(&payload[..frame_len])
            .and_then(|_| self.link.flush());
        match outcome {
            Ok(()) => {
                self.forwarded += 1;
                log::debug!("{frame_len} bytes written to serial device");
            }
            Err(err) => {
                self.dropped += 1;
                log::error!("serial write failed: {err}");
            }
        }
    }

    /// Datagrams received, frames forwarded, frames dropped.
    pub fn counters(&self) -> (u64, u64, u64) {
        (self.datagrams, self.forwarded, self.dropped)
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;

    use super::Bridge;
    use crate::protocols::Protocol;
    use crate::transport::MockTransport;

    #[test]
    fn forward_writes_only_the_validated_length() {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("bind");
        let mock = MockTransport::new();
        let mut bridge =
            Bridge::new(socket, mock.clone(), Protocol::Atmo).expect("bridge");

        // 2 channels -> 10 meaningful bytes, trailing bytes ignored.
        let mut datagram = vec![0xFF, 0, 0, 0x02, 1, 2, 3, 4, 5, 6];
        datagram.extend_from_slice(&[0xAA; 5]);
        bridge.forward(&datagram);

        assert_eq!(mock.written(), vec![0xFF, 0, 0, 0x02, 1, 2, 3, 4, 5, 6]);
        assert_eq!(bridge.counters(), (0, 1, 0));
    }

    #[test]
    fn forward_drops_invalid_frames_without_writing() {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("bind");
        let mock = MockTransport::new();
        let mut bridge =
            Bridge::new(socket, mock.clone(), Protocol::Eiwomisa).expect("bridge");

        bridge.forward(&[254, 0, 0, 0, 0, 0]);

        assert!(mock.written().is_empty());
        assert_eq!(bridge.counters(), (0, 0, 1));
    }

    #[test]
    fn forward_survives_a_write_failure() {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("bind");
        let mock = MockTransport::new();
        let mut bridge =
            Bridge::new(socket, mock.clone(), Protocol::Eiwomisa).expect("bridge");

        mock.fail_next_write();
        bridge.forward(&[255, 10, 1, 20, 30, 2]);
        bridge.forward(&[255, 10, 1, 20, 30, 2]);

        assert_eq!(mock.written(), vec![255, 10, 1, 20, 30, 2]);
        assert_eq!(bridge.counters(), (0, 1, 1));
    }
}
