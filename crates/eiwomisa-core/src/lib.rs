//! Core library for the EIWOMISA UDP-to-serial bridge.
//!
//! This crate implements the datagram-to-serial pipeline used by the CLI:
//! the bridge loop receives one UDP datagram at a time, hands it to the
//! configured protocol validator, and writes accepted frames verbatim to
//! the serial transport. Validation is byte-oriented and side-effect free;
//! all I/O is isolated in `transport` and `bridge`. Protocol byte offsets
//! and bounds are captured in `layout` modules so validators stay minimal.
//!
//! Invariants:
//! - Exactly one datagram is in flight at a time; there is no buffering
//!   between the socket and the serial device.
//! - Validators never mutate their input and never perform I/O.
//! - The serial link is opened before the first receive and closed on
//!   shutdown; a write failure never tears the bridge down.
//!
//! # Examples
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//!
//! use eiwomisa_core::{Bridge, Protocol, SerialLink};
//!
//! let link = SerialLink::open("/dev/ttyS0", 9600)?;
//! let mut bridge = Bridge::bind(1337, link, Protocol::Eiwomisa)?;
//! let running = AtomicBool::new(true);
//! bridge.run(&running)?;
//! # Ok::<(), eiwomisa_core::BridgeError>(())
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod protocols;
pub mod transport;

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use protocols::{FrameError, Protocol};
pub use transport::{MockTransport, SerialLink, Transport};
