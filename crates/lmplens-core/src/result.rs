//! Dissection output model.
//!
//! A [`DissectionResult`] is the engine's only product: an ordered list of
//! decoded fields, each tagged with the byte and bit range it was extracted
//! from, plus warnings. It borrows read-only from the input buffer and is
//! owned exclusively by the caller of the decode that produced it — there is
//! no shared state and no lifecycle beyond that one call.
//!
//! Everything here derives `Serialize` so a host can hand results across a
//! JSON boundary without help from this crate.

use std::ops::Range;

use serde::Serialize;

/// Warning severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Protocol oddity (trailing bytes, unknown opcode); decoding continued.
    Info,
    /// Input ended before all expected fields could be extracted.
    Malformed,
}

/// A note attached to the result at a byte offset in the source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub offset: usize,
    pub message: String,
    pub severity: Severity,
}

/// Raw value of a decoded field, borrowed from the source buffer where the
/// field is not a fixed-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    Uint(u64),
    Bytes(&'a [u8]),
}

impl FieldValue<'_> {
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::Uint(v) => Some(*v),
            FieldValue::Bytes(_) => None,
        }
    }
}

/// One decoded field: the atomic output unit.
///
/// `byte_range` and `bit_range` are absolute positions in the buffer handed
/// to the decode call; `label` is the human-readable rendering (enum name,
/// flag list, hex dump) the host can display as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedField<'a> {
    pub name: &'static str,
    pub byte_range: Range<usize>,
    pub bit_range: Range<usize>,
    pub value: FieldValue<'a>,
    pub label: String,
}

/// Ordered fields plus warnings for one decoded frame or PDU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DissectionResult<'a> {
    pub fields: Vec<DecodedField<'a>>,
    pub warnings: Vec<Warning>,
}

impl<'a> DissectionResult<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: DecodedField<'a>) {
        self.fields.push(field);
    }

    /// Append an integer field spanning whole bytes.
    pub fn push_uint(
        &mut self,
        name: &'static str,
        byte_range: Range<usize>,
        value: u64,
        label: String,
    ) {
        let bit_range = byte_range.start * 8..byte_range.end * 8;
        self.push(DecodedField {
            name,
            byte_range,
            bit_range,
            value: FieldValue::Uint(value),
            label,
        });
    }

    /// Append a sub-byte integer field at an explicit bit range.
    pub fn push_bits(
        &mut self,
        name: &'static str,
        bit_range: Range<usize>,
        value: u64,
        label: String,
    ) {
        let byte_range = bit_range.start / 8..bit_range.end.div_ceil(8);
        self.push(DecodedField {
            name,
            byte_range,
            bit_range,
            value: FieldValue::Uint(value),
            label,
        });
    }

    /// Append a raw-bytes field rendered as hex.
    pub fn push_bytes(&mut self, name: &'static str, byte_range: Range<usize>, value: &'a [u8]) {
        let label = hex_label(value);
        let bit_range = byte_range.start * 8..byte_range.end * 8;
        self.push(DecodedField {
            name,
            byte_range,
            bit_range,
            value: FieldValue::Bytes(value),
            label,
        });
    }

    pub fn warn_info(&mut self, offset: usize, message: impl Into<String>) {
        self.warnings.push(Warning {
            offset,
            message: message.into(),
            severity: Severity::Info,
        });
    }

    pub fn warn_malformed(&mut self, offset: usize, message: impl Into<String>) {
        self.warnings.push(Warning {
            offset,
            message: message.into(),
            severity: Severity::Malformed,
        });
    }

    /// Whether any warning is `Malformed`.
    pub fn is_malformed(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == Severity::Malformed)
    }

    /// First field with the given name, in emission order.
    pub fn field(&self, name: &str) -> Option<&DecodedField<'a>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fold a nested result into this one, rebasing its ranges and offsets
    /// by `base` bytes (the nested decode ran on a payload subslice).
    pub fn merge(&mut self, child: DissectionResult<'a>, base: usize) {
        for mut f in child.fields {
            f.byte_range = f.byte_range.start + base..f.byte_range.end + base;
            f.bit_range = f.bit_range.start + base * 8..f.bit_range.end + base * 8;
            self.fields.push(f);
        }
        for mut w in child.warnings {
            w.offset += base;
            self.warnings.push(w);
        }
    }
}

/// Lowercase hex rendering used for raw fields.
pub(crate) fn hex_label(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}
