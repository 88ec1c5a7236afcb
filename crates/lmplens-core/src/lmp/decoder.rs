//! LMP PDU decoding (panic-free).
//!
//! One generic loop walks the field layout bound to the observed opcode;
//! nothing here is per-opcode. Malformed or truncated input degrades to a
//! partial result with a `Malformed` warning — short packets are data, not
//! errors.

use crate::bits::{read_bits, BitWindow};
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::lmp::table::{self, FieldDescriptor, FieldKind, FieldWidth, PduDescriptor};
use crate::result::DissectionResult;

/// Decode one LMP PDU payload (first byte = 7-bit opcode + transaction id).
pub fn decode_lmp(payload: &[u8]) -> DissectionResult<'_> {
    let mut out = DissectionResult::new();
    let Some(&first) = payload.first() else {
        out.warn_malformed(0, "empty LMP payload");
        return out;
    };

    let opcode = first >> 1;
    let tid = first & 1;
    let opcode_label = table::opcode_name(opcode)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("unknown ({opcode})"));
    out.push_bits("opcode", 0..7, u64::from(opcode), opcode_label);
    out.push_bits("tid", 7..8, u64::from(tid), tid.to_string());

    let escape = opcode == table::ESCAPE_OPCODE;
    let (layout, body_start, lookup_key) = if escape {
        let Some(&ext) = payload.get(1) else {
            out.warn_malformed(1, "escape opcode without extended opcode byte");
            return out;
        };
        let label = table::ext_opcode_name(ext)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("unknown ({ext})"));
        out.push_uint("ext_opcode", 1..2, u64::from(ext), label);
        (table::lookup_ext(ext), 2, ext)
    } else {
        (table::lookup(opcode), 1, opcode)
    };

    match layout {
        Some(pdu) => decode_fields(payload, body_start, pdu, &mut out),
        None => {
            let err = DecodeError::UnknownOpcode {
                opcode: lookup_key,
                extended: escape,
            };
            tracing::debug!(error = %err, "parameters left undissected");
            let rest = payload.get(body_start..).unwrap_or(&[]);
            if !rest.is_empty() {
                out.push_bytes("params", body_start..payload.len(), rest);
            }
            out.warn_info(body_start, err.to_string());
        }
    }
    out
}

fn decode_fields<'a>(
    payload: &'a [u8],
    start: usize,
    pdu: &'static PduDescriptor,
    out: &mut DissectionResult<'a>,
) {
    let mut window = BitWindow::new(start);
    for field in pdu.fields {
        match extract(payload, window, field, out) {
            Ok(next) => window = next,
            Err(e) => {
                tracing::trace!(pdu = pdu.name, field = field.name, error = %e, "stopping at truncated field");
                out.warn_malformed(
                    window.byte.min(payload.len()),
                    format!("truncated in field `{}` of {}", field.name, pdu.name),
                );
                return;
            }
        }
    }

    // DM1 slots pad short PDUs; note the leftover bytes without failing.
    if window.byte < payload.len() {
        let n = payload.len() - window.byte;
        out.warn_info(
            window.byte,
            format!("{n} trailing byte(s) after declared fields"),
        );
    }
}

fn extract<'a>(
    payload: &'a [u8],
    window: BitWindow,
    field: &'static FieldDescriptor,
    out: &mut DissectionResult<'a>,
) -> Result<BitWindow> {
    match field.width {
        FieldWidth::Bits(n) => {
            let (value, next) = read_bits(payload, window, n)?;
            out.push_bits(
                field.name,
                window.bit_offset()..next.bit_offset(),
                value,
                render_uint(field.kind, value),
            );
            Ok(next)
        }
        FieldWidth::Bytes(n) => extract_bytes(payload, window, field, usize::from(n), out),
        FieldWidth::LenFrom(src) => {
            // Table integrity tests guarantee `src` was decoded earlier.
            let len = out
                .field(src)
                .and_then(|f| f.value.as_uint())
                .unwrap_or(0) as usize;
            extract_bytes(payload, window, field, len, out)
        }
    }
}

fn extract_bytes<'a>(
    payload: &'a [u8],
    window: BitWindow,
    field: &'static FieldDescriptor,
    n: usize,
    out: &mut DissectionResult<'a>,
) -> Result<BitWindow> {
    // Byte-width fields start aligned (table integrity tests enforce it).
    let start = window.byte;
    let mut cur = ByteCursor::new(payload);
    cur.skip(start)?;

    match field.kind {
        FieldKind::Raw => {
            let bytes = cur.read_bytes(n)?;
            out.push_bytes(field.name, start..start + n, bytes);
        }
        FieldKind::Flags64(names) => {
            let mut word = [0u8; 8];
            word.copy_from_slice(cur.read_bytes(8)?);
            let value = u64::from_le_bytes(word);
            out.push_uint(field.name, start..start + 8, value, render_flags64(names, value));
        }
        _ => {
            let value = match n {
                2 => u64::from(cur.read_u16_le()?),
                4 => u64::from(cur.read_u32_le()?),
                _ => u64::from(cur.read_u8()?),
            };
            out.push_uint(
                field.name,
                start..start + n,
                value,
                render_uint(field.kind, value),
            );
        }
    }
    Ok(BitWindow::new(start + n))
}

fn render_uint(kind: FieldKind, value: u64) -> String {
    match kind {
        FieldKind::Enum(labels) => table::label_for(labels, value)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("unknown ({value})")),
        FieldKind::Flags(names) => render_flags8(names, value),
        _ => value.to_string(),
    }
}

fn render_flags8(names: &'static [&'static str; 8], value: u64) -> String {
    let set: Vec<&str> = (0..8usize)
        .filter(|i| value >> i & 1 == 1)
        .map(|i| names[i])
        .collect();
    if set.is_empty() {
        "0".to_owned()
    } else {
        set.join("+")
    }
}

fn render_flags64(names: &'static [[&'static str; 8]; 8], value: u64) -> String {
    let set: Vec<&str> = (0..64usize)
        .filter(|i| value >> i & 1 == 1)
        .map(|i| names[i / 8][i % 8])
        .collect();
    if set.is_empty() {
        "0".to_owned()
    } else {
        set.join("+")
    }
}
