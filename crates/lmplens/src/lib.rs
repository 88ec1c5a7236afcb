//! Top-level facade crate for lmplens.
//!
//! Re-exports the dissection engine and carries the metadata a host
//! analysis tool needs to register the plugin: name, version, and the
//! catalog of field names the engine can emit. Mapping a
//! [`DissectionResult`](core::result::DissectionResult) into a host's own
//! field-tree widgets stays on the host side.

pub mod core {
    pub use lmplens_core::*;
}

pub use lmplens_core::{decode_frame, decode_frame_with_phdr, decode_lmp, DissectionResult};

/// Plugin name reported to the host.
pub const PLUGIN_NAME: &str = "lmplens";

/// Plugin version reported to the host.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every field name the engine can emit, deduplicated in first-seen order.
/// Hosts register these once at startup for display and filtering.
pub fn field_catalog() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    let mut add = |name: &'static str| {
        if !names.contains(&name) {
            names.push(name);
        }
    };

    for &name in lmplens_core::transport::h4::FIELD_NAMES {
        add(name);
    }
    // Emitted by the LMP decoder before any layout is resolved.
    for name in ["opcode", "tid", "ext_opcode", "params"] {
        add(name);
    }
    let tables = lmplens_core::lmp::table::BASE_PDUS
        .iter()
        .chain(lmplens_core::lmp::table::EXT_PDUS);
    for (_, pdu) in tables {
        for field in pdu.fields {
            add(field.name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_deduplicated_and_covers_lmp_fields() {
        let catalog = field_catalog();
        for (i, name) in catalog.iter().enumerate() {
            assert!(!catalog[i + 1..].contains(name), "duplicate {name}");
        }
        for name in ["type", "opcode", "tid", "name_offset", "features", "p_gfsk"] {
            assert!(catalog.contains(&name), "{name} missing");
        }
    }

    #[test]
    fn decoded_fields_appear_in_the_catalog() {
        let catalog = field_catalog();
        let res = decode_frame(&[0x08, 0x17, 0x00, 0x4a, 0x08, 0x0f, 0x00, 0x09, 0x61]);
        for f in res.fields {
            assert!(catalog.contains(&f.name), "{} missing from catalog", f.name);
        }
    }
}
