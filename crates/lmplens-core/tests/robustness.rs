//! Adversarial-input robustness: no byte sequence may escape the documented
//! warning taxonomy, and every result must stay internally consistent.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lmplens_core::result::DissectionResult;
use lmplens_core::{decode_frame, decode_frame_with_phdr, decode_lmp};

/// Ranges of every field must stay inside the source buffer and agree with
/// each other.
fn assert_well_formed(res: &DissectionResult<'_>, len: usize) {
    for f in &res.fields {
        assert!(f.byte_range.start <= f.byte_range.end, "field {}", f.name);
        assert!(f.byte_range.end <= len, "field {} out of bounds", f.name);
        assert!(f.bit_range.start >= f.byte_range.start * 8, "field {}", f.name);
        assert!(f.bit_range.end <= f.byte_range.end * 8, "field {}", f.name);
    }
    for w in &res.warnings {
        assert!(w.offset <= len, "warning offset {} out of bounds", w.offset);
    }
}

#[test]
fn random_buffers_always_produce_a_result() {
    let mut rng = StdRng::seed_from_u64(0x1a7_1e25);
    for _ in 0..1000 {
        let len = rng.gen_range(0..=64);
        let mut buf = vec![0u8; len];
        rng.fill(&mut buf[..]);

        assert_well_formed(&decode_frame(&buf), len);
        assert_well_formed(&decode_frame_with_phdr(&buf), len);
        assert_well_formed(&decode_lmp(&buf), len);
    }
}

#[test]
fn every_truncation_of_a_valid_frame_is_flagged_malformed() {
    // Baseband ACL frame carrying a complete LMP_version_req.
    let frame: &[u8] = &[0x08, 0x17, 0x00, 0x4a, 0x08, 0x0f, 0x00, 0x09, 0x61];

    let full = decode_frame(frame);
    assert!(!full.is_malformed());
    assert_well_formed(&full, frame.len());

    for cut in 0..frame.len() {
        let res = decode_frame(&frame[..cut]);
        assert!(
            res.is_malformed(),
            "prefix of {cut} bytes must be flagged malformed"
        );
        assert_well_formed(&res, cut);
    }
}

#[test]
fn truncated_lmp_payloads_keep_the_opcode_field() {
    // Every strict prefix of a known PDU past the opcode byte still reports
    // the opcode, per the partial-result contract.
    let payload: &[u8] = &[0x4a, 0x08, 0x0f, 0x00, 0x09, 0x61];
    for cut in 1..payload.len() {
        let res = decode_lmp(&payload[..cut]);
        assert!(res.is_malformed(), "prefix of {cut} bytes");
        assert_eq!(
            res.field("opcode").and_then(|f| f.value.as_uint()),
            Some(37)
        );
    }
}
