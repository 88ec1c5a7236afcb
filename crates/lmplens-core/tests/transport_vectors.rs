//! H4/BCM transport frame vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use lmplens_core::{decode_frame, decode_frame_with_phdr};

mod vector_loader;
use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn transport_vectors() {
    let files = [
        "h4_command_reset.json",
        "h4_event_command_complete.json",
        "h4_acl_l2cap.json",
        "h4_baseband_lmp_name_req.json",
        "h4_diag_not_promoted.json",
        "h4_esp32_dm1_lmp.json",
        "h4_vendor_raw.json",
        "h4_unknown_type.json",
        "h4_truncated_acl.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.decode();
        let res = decode_frame(&raw);
        vector_loader::check(&res, &v);
    }
}

#[test]
fn phdr_vectors() {
    let v = load("h4_phdr_command.json");
    let raw = v.frame.decode();
    let res = decode_frame_with_phdr(&raw);
    vector_loader::check(&res, &v);
}
