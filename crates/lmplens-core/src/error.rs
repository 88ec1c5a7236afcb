//! Shared error type for the dissection engine.
//!
//! Every variant here is recoverable by design: the decoders convert them
//! into warnings on the [`DissectionResult`](crate::result::DissectionResult)
//! at the decode boundary, so hosts never catch a decode-time failure — they
//! inspect `warnings` instead.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors raised by the cursor, bit extractor, and table lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read needed more bytes than remained in the buffer.
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// No field layout is bound to the observed opcode.
    #[error("no layout for opcode {opcode} (extended: {extended})")]
    UnknownOpcode { opcode: u8, extended: bool },
    /// Requested bit width outside the supported `1..=64` range.
    #[error("bit width {width} out of range 1..=64")]
    InvalidBitWidth { width: u8 },
}
