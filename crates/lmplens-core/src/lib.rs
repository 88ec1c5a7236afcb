//! lmplens core: H4/BCM transport framing and LMP PDU dissection.
//!
//! This crate turns one captured frame (an immutable byte buffer) into a
//! [`DissectionResult`]: an ordered list of named, byte-range-tagged fields
//! plus warnings. It carries no I/O, no capture machinery, and no rendering —
//! mapping results into a host's field-tree API is the host's glue.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The public entry points are total: every byte sequence, including empty or
//! adversarial input, produces a result — malformed input surfaces as
//! `Severity::Malformed` warnings, never as a fault crossing into host code.
//!
//! Each decode call operates only on its own input buffer and produces its
//! own independently owned result; the static opcode tables are the only
//! shared data and are read-only, so hosts may decode frames concurrently
//! from multiple threads.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bits;
pub mod cursor;
pub mod error;
pub mod lmp;
pub mod result;
pub mod transport;

pub use error::{DecodeError, Result};
pub use lmp::decoder::decode_lmp;
pub use result::{DissectionResult, Severity};
pub use transport::h4::{decode_frame, decode_frame_with_phdr};
