//! H4/BCM transport frame decoding (panic-free).
//!
//! One frame per call: read the H4 packet-type byte, parse the
//! type-specific header, then either report the payload raw or — for the
//! baseband ACL path with an LMP logical link — delegate to the LMP
//! decoder and fold its result in. The BCM Diag channel is labeled but its
//! payload is never promoted to LMP, even when the bytes happen to look
//! like a PDU.

use crate::cursor::ByteCursor;
use crate::lmp::decoder::decode_lmp;
use crate::lmp::table::{label_for, Labels};
use crate::result::{DecodedField, DissectionResult, FieldValue};

pub const H4_ACK: u8 = 0;
pub const H4_COMMAND: u8 = 1;
pub const H4_ACL: u8 = 2;
pub const H4_SYNC: u8 = 3;
pub const H4_EVENT: u8 = 4;
pub const H4_RESERVE: u8 = 5;
pub const H4_DIAG: u8 = 7;
pub const H4_BT_ACL: u8 = 8;
pub const H4_ESP32_BREDR: u8 = 9;
pub const H4_VENDOR: u8 = 14;
pub const H4_LINK_CONTROL: u8 = 15;

/// Logical-link id marking an LMP payload in the baseband ACL header.
pub const LLID_LMP: u64 = 3;

pub const PACKET_TYPE_LABELS: &Labels = &[
    (0, "Acknowledgement"),
    (1, "Command"),
    (2, "ACL Data"),
    (3, "Synchronous"),
    (4, "Event"),
    (5, "Reserve"),
    (7, "Diag"),
    (8, "BT ACL"),
    (9, "ESP32 BR/EDR"),
    (14, "Vendor"),
    (15, "Link Control"),
];

/// BCM diagnostic channel message types.
pub const DIAG_TYPE_LABELS: &Labels = &[
    (0, "LM_SENT"),
    (1, "LM_RECV"),
    (2, "ACL_BR_RESP"),
    (3, "ACL_EDR_RESP"),
    (4, "LE_SENT"),
    (5, "LE_RECV"),
    (6, "LM_ENABLE"),
];

const LLID_LABELS: &Labels = &[
    (0, "undefined"),
    (1, "Continuation fragment of an L2CAP message"),
    (2, "Start of an L2CAP message or no fragmentation"),
    (3, "LMP"),
];

const BB_TYPE_LABELS: &Labels = &[
    (0x00, "NULL"),
    (0x01, "POLL"),
    (0x02, "FHS"),
    (0x03, "DM1"),
    (0x04, "DH1/2-DH1"),
    (0x08, "DV/3-DH1"),
];

const ROLE_LABELS: &Labels = &[(0, "Master"), (1, "Slave")];

/// Every field name the transport decoder can emit (the LMP decoder's names
/// come from its opcode tables). Hosts use this to pre-register columns.
pub const FIELD_NAMES: &[&str] = &[
    "type",
    "opcode",
    "len",
    "params",
    "handle",
    "pb",
    "bc",
    "payload",
    "code",
    "diag_type",
    "direction",
    "flow",
    "llid",
    "dummy",
    "clk",
    "channel",
    "is_eir",
    "rx_enc",
    "tx_enc",
    "rfu",
    "role",
    "is_edr",
    "lt_addr",
    "arqn",
    "seqn",
    "hec",
];

/// Decode one H4 frame. Total: any byte sequence yields a result.
pub fn decode_frame(frame: &[u8]) -> DissectionResult<'_> {
    let mut out = DissectionResult::new();
    let mut cur = ByteCursor::new(frame);

    let Ok(ty) = cur.read_u8() else {
        out.warn_malformed(0, "empty frame: missing H4 packet type byte");
        return out;
    };
    let label = label_for(PACKET_TYPE_LABELS, u64::from(ty))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("unknown ({ty})"));
    out.push_uint("type", 0..1, u64::from(ty), label);
    tracing::trace!(h4_type = ty, len = frame.len(), "dissecting frame");

    match ty {
        H4_COMMAND => decode_command(frame, &mut cur, &mut out),
        H4_ACL => decode_hci_acl(frame, &mut cur, &mut out),
        H4_EVENT => decode_event(frame, &mut cur, &mut out),
        H4_DIAG => decode_diag(frame, &mut cur, &mut out),
        H4_BT_ACL => decode_baseband_acl(frame, &mut cur, &mut out),
        H4_ESP32_BREDR => decode_esp32_bredr(frame, &mut cur, &mut out),
        H4_ACK | H4_SYNC | H4_RESERVE | H4_VENDOR | H4_LINK_CONTROL => {
            push_rest(frame, &mut cur, &mut out, "payload");
        }
        _ => {
            out.warn_malformed(0, format!("unrecognized H4 packet type {ty}"));
            push_rest(frame, &mut cur, &mut out, "payload");
        }
    }
    out
}

/// Decode a frame preceded by the capture pseudo-header (direction word).
pub fn decode_frame_with_phdr(frame: &[u8]) -> DissectionResult<'_> {
    let mut out = DissectionResult::new();
    let mut cur = ByteCursor::new(frame);
    let Ok(direction) = cur.read_u32_be() else {
        out.warn_malformed(0, "truncated capture pseudo-header");
        return out;
    };
    out.push_uint("direction", 0..4, u64::from(direction), direction.to_string());
    let base = cur.offset();
    out.merge(decode_frame(cur.rest()), base);
    out
}

fn decode_command<'a>(
    frame: &'a [u8],
    cur: &mut ByteCursor<'a>,
    out: &mut DissectionResult<'a>,
) {
    let start = cur.offset();
    let Ok(opcode) = cur.read_u16_le() else {
        out.warn_malformed(cur.offset(), "truncated HCI command header");
        return;
    };
    out.push_uint(
        "opcode",
        start..start + 2,
        u64::from(opcode),
        format!("0x{opcode:04x}"),
    );
    let Ok(len) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated HCI command header");
        return;
    };
    out.push_uint("len", start + 2..start + 3, u64::from(len), len.to_string());

    let base = cur.offset();
    let params = cur.rest();
    if params.len() != usize::from(len) {
        out.warn_info(
            base,
            format!(
                "parameter length {} differs from declared {len}",
                params.len()
            ),
        );
    }
    if !params.is_empty() {
        out.push_bytes("params", base..frame.len(), params);
    }
}

fn decode_hci_acl<'a>(
    frame: &'a [u8],
    cur: &mut ByteCursor<'a>,
    out: &mut DissectionResult<'a>,
) {
    let start = cur.offset();
    let Ok(hdr) = cur.read_u16_le() else {
        out.warn_malformed(cur.offset(), "truncated HCI ACL header");
        return;
    };
    let handle = u64::from(hdr & 0x0fff);
    let pb = u64::from(hdr >> 12 & 0x3);
    let bc = u64::from(hdr >> 14 & 0x3);
    // The 12/2/2 split straddles the little-endian pair, so the three
    // fields share the entity's byte and bit ranges.
    for (name, value) in [("handle", handle), ("pb", pb), ("bc", bc)] {
        out.push(DecodedField {
            name,
            byte_range: start..start + 2,
            bit_range: start * 8..(start + 2) * 8,
            value: FieldValue::Uint(value),
            label: value.to_string(),
        });
    }

    let Ok(len) = cur.read_u16_le() else {
        out.warn_malformed(cur.offset(), "truncated HCI ACL header");
        return;
    };
    out.push_uint("len", start + 2..start + 4, u64::from(len), len.to_string());

    // HCI ACL payloads are L2CAP, never LMP.
    let base = cur.offset();
    let payload = cur.rest();
    if payload.len() != usize::from(len) {
        out.warn_info(
            base,
            format!("payload length {} differs from declared {len}", payload.len()),
        );
    }
    if !payload.is_empty() {
        out.push_bytes("payload", base..frame.len(), payload);
    }
}

fn decode_event<'a>(frame: &'a [u8], cur: &mut ByteCursor<'a>, out: &mut DissectionResult<'a>) {
    let start = cur.offset();
    let Ok(code) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated HCI event header");
        return;
    };
    out.push_uint("code", start..start + 1, u64::from(code), format!("0x{code:02x}"));
    let Ok(len) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated HCI event header");
        return;
    };
    out.push_uint("len", start + 1..start + 2, u64::from(len), len.to_string());

    let base = cur.offset();
    let params = cur.rest();
    if params.len() != usize::from(len) {
        out.warn_info(
            base,
            format!(
                "parameter length {} differs from declared {len}",
                params.len()
            ),
        );
    }
    if !params.is_empty() {
        out.push_bytes("params", base..frame.len(), params);
    }
}

fn decode_diag<'a>(frame: &'a [u8], cur: &mut ByteCursor<'a>, out: &mut DissectionResult<'a>) {
    let start = cur.offset();
    let Ok(diag_type) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated diag header");
        return;
    };
    let label = label_for(DIAG_TYPE_LABELS, u64::from(diag_type))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("unknown ({diag_type})"));
    out.push_uint("diag_type", start..start + 1, u64::from(diag_type), label);
    push_rest(frame, cur, out, "payload");
}

fn decode_baseband_acl<'a>(
    frame: &'a [u8],
    cur: &mut ByteCursor<'a>,
    out: &mut DissectionResult<'a>,
) {
    let start = cur.offset();
    let Ok(hdr) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated baseband ACL header");
        return;
    };
    let len = u64::from(hdr >> 3);
    let flow = u64::from(hdr >> 2 & 1);
    let llid = u64::from(hdr & 0x3);
    out.push_bits("len", start * 8..start * 8 + 5, len, len.to_string());
    out.push_bits("flow", start * 8 + 5..start * 8 + 6, flow, flow.to_string());
    let llid_label = label_for(LLID_LABELS, llid)
        .map(str::to_owned)
        .unwrap_or_else(|| llid.to_string());
    out.push_bits("llid", start * 8 + 6..start * 8 + 8, llid, llid_label);

    let Ok(dummy) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated baseband ACL header");
        return;
    };
    out.push_uint(
        "dummy",
        start + 1..start + 2,
        u64::from(dummy),
        dummy.to_string(),
    );

    let base = cur.offset();
    let payload = cur.rest();
    if llid == LLID_LMP {
        out.merge(decode_lmp(payload), base);
    } else if !payload.is_empty() {
        out.push_bytes("payload", base..frame.len(), payload);
    }
}

fn decode_esp32_bredr<'a>(
    frame: &'a [u8],
    cur: &mut ByteCursor<'a>,
    out: &mut DissectionResult<'a>,
) {
    let start = cur.offset();
    let Ok(clk) = cur.read_u32_le() else {
        out.warn_malformed(cur.offset(), "truncated ESP32 BR/EDR header");
        return;
    };
    out.push_uint("clk", start..start + 4, u64::from(clk), clk.to_string());
    let Ok(channel) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated ESP32 BR/EDR header");
        return;
    };
    out.push_uint(
        "channel",
        start + 4..start + 5,
        u64::from(channel),
        channel.to_string(),
    );

    let Ok(flags) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated ESP32 BR/EDR header");
        return;
    };
    let fbit = (start + 5) * 8;
    out.push_bits("is_eir", fbit..fbit + 1, u64::from(flags >> 7), (flags >> 7).to_string());
    out.push_bits(
        "rx_enc",
        fbit + 1..fbit + 2,
        u64::from(flags >> 6 & 1),
        (flags >> 6 & 1).to_string(),
    );
    out.push_bits(
        "tx_enc",
        fbit + 2..fbit + 3,
        u64::from(flags >> 5 & 1),
        (flags >> 5 & 1).to_string(),
    );
    out.push_bits(
        "rfu",
        fbit + 3..fbit + 6,
        u64::from(flags >> 2 & 0x7),
        (flags >> 2 & 0x7).to_string(),
    );
    let role = u64::from(flags >> 1 & 1);
    let role_label = label_for(ROLE_LABELS, role)
        .map(str::to_owned)
        .unwrap_or_else(|| role.to_string());
    out.push_bits("role", fbit + 6..fbit + 7, role, role_label);
    out.push_bits(
        "is_edr",
        fbit + 7..fbit + 8,
        u64::from(flags & 1),
        (flags & 1).to_string(),
    );

    // Baseband packet header: flow | type | lt_addr, then arqn | seqn | hec.
    let Ok(bb0) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated baseband header");
        return;
    };
    let bbit = (start + 6) * 8;
    let flow = u64::from(bb0 >> 7);
    out.push_bits("flow", bbit..bbit + 1, flow, flow.to_string());
    let bb_type = u64::from(bb0 >> 3 & 0xf);
    let type_label = label_for(BB_TYPE_LABELS, bb_type)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("unknown ({bb_type})"));
    out.push_bits("type", bbit + 1..bbit + 5, bb_type, type_label);
    out.push_bits(
        "lt_addr",
        bbit + 5..bbit + 8,
        u64::from(bb0 & 0x7),
        (bb0 & 0x7).to_string(),
    );

    let Ok(bb1) = cur.read_u8() else {
        out.warn_malformed(cur.offset(), "truncated baseband header");
        return;
    };
    out.push_bits(
        "arqn",
        bbit + 8..bbit + 9,
        u64::from(bb1 >> 7),
        (bb1 >> 7).to_string(),
    );
    out.push_bits(
        "seqn",
        bbit + 9..bbit + 10,
        u64::from(bb1 >> 6 & 1),
        (bb1 >> 6 & 1).to_string(),
    );
    out.push_bits(
        "hec",
        bbit + 10..bbit + 16,
        u64::from(bb1 & 0x3f),
        (bb1 & 0x3f).to_string(),
    );

    // DM1/DH1/DV packets continue into the baseband ACL header.
    if matches!(bb_type, 0x03 | 0x04 | 0x08) {
        decode_baseband_acl(frame, cur, out);
    } else {
        push_rest(frame, cur, out, "payload");
    }
}

fn push_rest<'a>(
    frame: &'a [u8],
    cur: &mut ByteCursor<'a>,
    out: &mut DissectionResult<'a>,
    name: &'static str,
) {
    let base = cur.offset();
    let rest = cur.rest();
    if !rest.is_empty() {
        out.push_bytes(name, base..frame.len(), rest);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::result::Severity;

    fn uint(res: &DissectionResult<'_>, name: &str) -> u64 {
        res.field(name).unwrap().value.as_uint().unwrap()
    }

    #[test]
    fn empty_frame_is_malformed() {
        let res = decode_frame(&[]);
        assert!(res.fields.is_empty());
        assert!(res.is_malformed());
    }

    #[test]
    fn unknown_type_is_reported_with_raw_payload() {
        let res = decode_frame(&[0x06, 0xde, 0xad]);
        assert_eq!(res.field("type").unwrap().label, "unknown (6)");
        assert!(res.field("payload").is_some());
        assert!(res.is_malformed());
    }

    #[test]
    fn command_header_and_params() {
        // HCI_Cmd_Set_Event_Filter(clear).
        let res = decode_frame(&[0x01, 0x05, 0x0c, 0x01, 0x00]);
        assert_eq!(res.field("type").unwrap().label, "Command");
        assert_eq!(uint(&res, "opcode"), 0x0c05);
        assert_eq!(uint(&res, "len"), 1);
        assert_eq!(res.field("params").unwrap().byte_range, 4..5);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn command_length_mismatch_is_informational() {
        let res = decode_frame(&[0x01, 0x03, 0x0c, 0x02, 0xaa]);
        assert!(!res.is_malformed());
        assert_eq!(res.warnings.len(), 1);
        assert_eq!(res.warnings[0].severity, Severity::Info);
    }

    #[test]
    fn hci_acl_header_splits_the_le_entity() {
        // handle 0x234, pb 2, bc 1 => 0x6234 LE.
        let res = decode_frame(&[0x02, 0x34, 0x62, 0x02, 0x00, 0xaa, 0xbb]);
        assert_eq!(uint(&res, "handle"), 0x234);
        assert_eq!(uint(&res, "pb"), 2);
        assert_eq!(uint(&res, "bc"), 1);
        assert_eq!(uint(&res, "len"), 2);
        // L2CAP stays undissected and is never promoted to LMP.
        assert!(res.field("payload").is_some());
        assert!(res.field("opcode").is_none());
    }

    #[test]
    fn truncated_acl_header_stops_without_payload() {
        let res = decode_frame(&[0x02, 0x34]);
        assert!(res.is_malformed());
        assert!(res.field("handle").is_none());
    }

    #[test]
    fn event_header() {
        let res = decode_frame(&[0x04, 0x0e, 0x03, 0x01, 0x03, 0x0c]);
        assert_eq!(res.field("code").unwrap().label, "0x0e");
        assert_eq!(uint(&res, "len"), 3);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn diag_payload_is_never_promoted_to_lmp() {
        // Payload bytes spell a valid LMP_version_req, but the Diag channel
        // is classified by frame type only.
        let res = decode_frame(&[0x07, 0x00, 0x4a, 0x08, 0x0f, 0x00, 0x09, 0x61]);
        assert_eq!(res.field("diag_type").unwrap().label, "LM_SENT");
        assert!(res.field("opcode").is_none());
        assert!(res.field("version").is_none());
        assert!(res.field("payload").is_some());
    }

    #[test]
    fn baseband_acl_with_lmp_llid_delegates() {
        // llid 3 (LMP), flow 1, len 2, then LMP_name_req.
        let res = decode_frame(&[0x08, 0x17, 0x00, 0x02, 0x05]);
        assert_eq!(res.field("llid").unwrap().label, "LMP");
        let opcode = res.field("opcode").unwrap();
        assert_eq!(opcode.value.as_uint(), Some(1));
        assert_eq!(opcode.byte_range, 3..4, "nested ranges must be rebased");
        assert_eq!(opcode.bit_range, 24..31);
        assert_eq!(res.field("name_offset").unwrap().byte_range, 4..5);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn baseband_acl_with_l2cap_llid_stays_raw() {
        let res = decode_frame(&[0x08, 0x12, 0x00, 0x02, 0x05]);
        assert_eq!(
            res.field("llid").unwrap().label,
            "Start of an L2CAP message or no fragmentation"
        );
        assert!(res.field("opcode").is_none());
        assert!(res.field("payload").is_some());
    }

    #[test]
    fn baseband_acl_lmp_with_empty_payload_is_malformed() {
        let res = decode_frame(&[0x08, 0x07, 0x00]);
        assert!(res.is_malformed());
    }

    #[test]
    fn esp32_bredr_chains_down_to_lmp() {
        let res = decode_frame(&[
            0x09, // ESP32 BR/EDR
            0x10, 0x00, 0x00, 0x00, // clk
            0x26, // channel
            0x02, // role = Slave
            0x19, 0x00, // baseband: type DM1, lt_addr 1
            0x17, 0x00, // baseband ACL: llid 3
            0x02, 0x05, // LMP_name_req
        ]);
        assert_eq!(uint(&res, "clk"), 0x10);
        assert_eq!(res.field("role").unwrap().label, "Slave");
        assert_eq!(res.field("type").unwrap().label, "ESP32 BR/EDR");
        let bb_type = res.fields.iter().filter(|f| f.name == "type").nth(1).unwrap();
        assert_eq!(bb_type.label, "DM1");
        assert_eq!(res.field("opcode").unwrap().value.as_uint(), Some(1));
        assert_eq!(res.field("name_offset").unwrap().byte_range, 12..13);
    }

    #[test]
    fn esp32_poll_has_no_acl_payload() {
        let res = decode_frame(&[
            0x09, 0x10, 0x00, 0x00, 0x00, 0x26, 0x00, 0x08, 0x00,
        ]);
        let bb_type = res.fields.iter().filter(|f| f.name == "type").nth(1).unwrap();
        assert_eq!(bb_type.label, "POLL");
        assert!(res.field("llid").is_none());
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn phdr_variant_prefixes_the_direction_word() {
        let res = decode_frame_with_phdr(&[0x00, 0x00, 0x00, 0x01, 0x01, 0x05, 0x0c, 0x00]);
        assert_eq!(uint(&res, "direction"), 1);
        assert_eq!(res.field("type").unwrap().byte_range, 4..5);
        assert_eq!(uint(&res, "opcode"), 0x0c05);
    }

    #[test]
    fn emitted_names_are_in_the_catalog() {
        let frames: &[&[u8]] = &[
            &[0x01, 0x05, 0x0c, 0x00],
            &[0x02, 0x34, 0x62, 0x01, 0x00, 0xaa],
            &[0x04, 0x0e, 0x00],
            &[0x07, 0x01, 0xff],
            &[0x08, 0x12, 0x00, 0x41],
            &[0x09, 0, 0, 0, 0, 0x26, 0x02, 0x19, 0x00, 0x12, 0x00, 0x41],
            &[0x00, 0xaa],
        ];
        for frame in frames {
            for f in decode_frame(frame).fields {
                assert!(FIELD_NAMES.contains(&f.name), "{} missing from catalog", f.name);
            }
        }
    }
}
