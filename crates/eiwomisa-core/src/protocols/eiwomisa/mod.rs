//! EIWOMISA frame validation.
//!
//! The protocol is a fixed 6-byte command: a start marker (255), a 9-bit
//! intensity value split across bytes 1..=2, and a channel address split
//! across bytes 3..=5. The bounds are hard constraints of the controller
//! hardware and are reproduced exactly in `layout`.
//!
//! All six field checks are evaluated without short-circuiting so every
//! violated bound is visible in the debug log.

pub mod error;
pub mod layout;
pub mod parser;

pub use parser::validate_eiwomisa;
