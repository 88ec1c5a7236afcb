//! Static LMP opcode tables.
//!
//! LMP carries a 7-bit opcode in the first payload byte; opcode 127 escapes
//! to an extended opcode carried in the following byte. Each bound opcode
//! maps to an ordered field layout consumed by the generic decoder loop.
//! Built once into the binary, never mutated: safe for unsynchronized
//! concurrent reads.

/// Opcode value signalling that the true opcode is the next byte.
pub const ESCAPE_OPCODE: u8 = 127;

/// Value → display-name pairs for enum-typed fields.
pub type Labels = [(u64, &'static str)];

/// Field extent within the PDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// Sub-byte field, MSB-first.
    Bits(u8),
    /// Whole bytes.
    Bytes(u8),
    /// Byte count taken from an earlier unsigned field in the same PDU.
    LenFrom(&'static str),
}

/// How the raw bits are interpreted and rendered.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Unsigned integer (single byte or MSB-first bit field).
    Uint,
    /// Little-endian unsigned integer spanning 2 or 4 bytes.
    UintLe,
    /// Unsigned integer with a value → label map.
    Enum(&'static Labels),
    /// 8-bit flag set; `names[i]` labels bit `i` (LSB first).
    Flags(&'static [&'static str; 8]),
    /// 64-bit little-endian feature word; `names[octet][bit]` labels wire
    /// octet `octet`, bit `bit`.
    Flags64(&'static [[&'static str; 8]; 8]),
    /// Opaque bytes rendered as hex.
    Raw,
}

/// One field in declared order.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub width: FieldWidth,
    pub kind: FieldKind,
}

/// Field layout bound to one (possibly extended) opcode.
#[derive(Debug, Clone, Copy)]
pub struct PduDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

const fn bits(name: &'static str, width: u8) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bits(width),
        kind: FieldKind::Uint,
    }
}

const fn bits_enum(name: &'static str, width: u8, labels: &'static Labels) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bits(width),
        kind: FieldKind::Enum(labels),
    }
}

const fn byte(name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(1),
        kind: FieldKind::Uint,
    }
}

const fn byte_enum(name: &'static str, labels: &'static Labels) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(1),
        kind: FieldKind::Enum(labels),
    }
}

const fn u16le(name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(2),
        kind: FieldKind::UintLe,
    }
}

const fn u32le(name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(4),
        kind: FieldKind::UintLe,
    }
}

const fn flags8(name: &'static str, names: &'static [&'static str; 8]) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(1),
        kind: FieldKind::Flags(names),
    }
}

const fn flags64(name: &'static str, names: &'static [[&'static str; 8]; 8]) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(8),
        kind: FieldKind::Flags64(names),
    }
}

const fn raw(name: &'static str, n: u8) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::Bytes(n),
        kind: FieldKind::Raw,
    }
}

const fn raw_len_from(name: &'static str, len_field: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        width: FieldWidth::LenFrom(len_field),
        kind: FieldKind::Raw,
    }
}

/// Base opcode names (7-bit space). 124–127 are the escape values; only 127
/// carries the extended table.
pub const OPCODE_LABELS: &Labels = &[
    (0, "LMP_Broadcom_BPCS"),
    (1, "LMP_name_req"),
    (2, "LMP_name_res"),
    (3, "LMP_accepted"),
    (4, "LMP_not_accepted"),
    (5, "LMP_clkoffset_req"),
    (6, "LMP_clkoffset_res"),
    (7, "LMP_detach"),
    (8, "LMP_in_rand"),
    (9, "LMP_comb_key"),
    (10, "LMP_unit_key"),
    (11, "LMP_au_rand"),
    (12, "LMP_sres"),
    (13, "LMP_temp_rand"),
    (14, "LMP_temp_key"),
    (15, "LMP_encryption_mode_req"),
    (16, "LMP_encryption_key_size_req"),
    (17, "LMP_start_encryption_req"),
    (18, "LMP_stop_encryption_req"),
    (19, "LMP_switch_req"),
    (20, "LMP_hold"),
    (21, "LMP_hold_req"),
    (23, "LMP_sniff_req"),
    (24, "LMP_unsniff_req"),
    (25, "LMP_park_req"),
    (27, "LMP_set_broadcast_scan_window"),
    (28, "LMP_modify_beacon"),
    (29, "LMP_unpark_BD_ADDR_req"),
    (30, "LMP_unpark_PM_ADDR_req"),
    (31, "LMP_incr_power_req"),
    (32, "LMP_decr_power_req"),
    (33, "LMP_max_power"),
    (34, "LMP_min_power"),
    (35, "LMP_auto_rate"),
    (36, "LMP_preferred_rate"),
    (37, "LMP_version_req"),
    (38, "LMP_version_res"),
    (39, "LMP_features_req"),
    (40, "LMP_features_res"),
    (41, "LMP_quality_of_service"),
    (42, "LMP_quality_of_service_req"),
    (43, "LMP_SCO_link_req"),
    (44, "LMP_remove_SCO_link_req"),
    (45, "LMP_max_slot"),
    (46, "LMP_max_slot_req"),
    (47, "LMP_timing_accuracy_req"),
    (48, "LMP_timing_accuracy_res"),
    (49, "LMP_setup_complete"),
    (50, "LMP_use_semi_permanent_key"),
    (51, "LMP_host_connection_req"),
    (52, "LMP_slot_offset"),
    (53, "LMP_page_mode_req"),
    (54, "LMP_page_scan_mode_req"),
    (55, "LMP_supervision_timeout"),
    (56, "LMP_test_activate"),
    (57, "LMP_test_control"),
    (58, "LMP_encryption_key_size_mask_req"),
    (59, "LMP_encryption_key_size_mask_res"),
    (60, "LMP_set_AFH"),
    (61, "LMP_encapsulated_header"),
    (62, "LMP_encapsulated_payload"),
    (63, "LMP_Simple_Pairing_Confirm"),
    (64, "LMP_Simple_Pairing_Number"),
    (65, "LMP_DHkey_Check"),
    (124, "Escape 1"),
    (125, "Escape 2"),
    (126, "Escape 3"),
    (127, "Escape 4"),
];

/// Extended opcode names (second byte after the escape).
pub const EXT_OPCODE_LABELS: &Labels = &[
    (1, "LMP_accepted_ext"),
    (2, "LMP_not_accepted_ext"),
    (3, "LMP_features_req_ext"),
    (4, "LMP_features_res_ext"),
    (11, "LMP_packet_type_table_req"),
    (12, "LMP_eSCO_link_req"),
    (13, "LMP_remove_eSCO_link_req"),
    (16, "LMP_channel_classification_req"),
    (17, "LMP_channel_classification"),
    (21, "LMP_sniff_subrating_req"),
    (22, "LMP_sniff_subrating_res"),
    (23, "LMP_pause_encryption_req"),
    (24, "LMP_resume_encryption_req"),
    (25, "LMP_IO_Capability_req"),
    (26, "LMP_IO_Capability_res"),
    (27, "LMP_numeric_comparison_failed"),
    (28, "LMP_passkey_failed"),
    (29, "LMP_oob_failed"),
    (30, "LMP_keypress_notification"),
    (31, "LMP_power_control_req"),
    (32, "LMP_power_control_res"),
    (33, "LMP_ping_req"),
    (34, "LMP_ping_res"),
];

/// LMP error codes (detach / not-accepted reasons).
pub const ERROR_CODE_LABELS: &Labels = &[
    (0, "Success"),
    (1, "Unknown HCI Command"),
    (2, "Unknown Connection Identifier"),
    (3, "Hardware Failure"),
    (4, "Page Timeout"),
    (5, "Authentication Failure"),
    (6, "PIN or Key Missing"),
    (7, "Memory Capacity Exceeded"),
    (8, "Connection Timeout"),
    (9, "Connection Limit Exceeded"),
    (10, "Synchronous Connection Limit To A Device Exceeded"),
    (11, "ACL Connection Already Exists"),
    (12, "Command Disallowed"),
    (13, "Connection Rejected due to Limited Resources"),
    (14, "Connection Rejected Due To Security Reasons"),
    (15, "Connection Rejected due to Unacceptable BD_ADDR"),
    (16, "Connection Accept Timeout Exceeded"),
    (17, "Unsupported Feature or Parameter Value"),
    (18, "Invalid HCI Command Parameters"),
    (19, "Remote User Terminated Connection"),
    (20, "Remote Device Terminated Connection due to Low Resources"),
    (21, "Remote Device Terminated Connection due to Power Off"),
    (22, "Connection Terminated By Local Host"),
    (23, "Repeated Attempts"),
    (24, "Pairing Not Allowed"),
    (25, "Unknown LMP PDU"),
    (26, "Unsupported Remote Feature / Unsupported LMP Feature"),
    (27, "SCO Offset Rejected"),
    (28, "SCO Interval Rejected"),
    (29, "SCO Air Mode Rejected"),
    (30, "Invalid LMP Parameters"),
    (31, "Unspecified Error"),
    (32, "Unsupported LMP Parameter Value"),
    (33, "Role Change Not Allowed"),
    (34, "LMP Response Timeout"),
    (35, "LMP Error Transaction Collision"),
    (36, "LMP PDU Not Allowed"),
    (37, "Encryption Mode Not Acceptable"),
    (38, "Link Key Can Not be Changed"),
    (39, "Requested QoS Not Supported"),
    (40, "Instant Passed"),
    (41, "Pairing With Unit Key Not Supported"),
    (42, "Different Transaction Collision"),
    (43, "Reserved"),
    (44, "QoS Unacceptable Parameter"),
    (45, "QoS Rejected"),
    (46, "Channel Classification Not Supported"),
    (47, "Insufficient Security"),
    (48, "Parameter Out Of Mandatory Range"),
    (49, "Reserved"),
    (50, "Role Switch Pending"),
    (51, "Reserved"),
    (52, "Reserved Slot Violation"),
    (53, "Role Switch Failed"),
    (54, "Extended Inquiry Response Too Large"),
    (55, "Secure Simple Pairing Not Supported By Host."),
    (56, "Host Busy - Pairing"),
    (57, "Connection Rejected due to No Suitable Channel Found"),
];

/// Link-layer version numbers.
pub const VERSNR_LABELS: &Labels = &[
    (0, "1.0b"),
    (1, "1.1"),
    (2, "1.2"),
    (3, "2.0 + EDR"),
    (4, "2.1 + EDR"),
    (5, "3.0 + HS"),
    (6, "4.0"),
    (7, "4.1"),
    (8, "4.2"),
    (9, "5.0"),
    (10, "5.1"),
    (11, "5.2"),
];

/// Per-modulation power adjustment responses.
pub const POWER_ADJ_LABELS: &Labels = &[
    (0, "not supported"),
    (1, "changed one step (not min or max)"),
    (2, "max power"),
    (3, "min power"),
];

const ENCRYPTION_MODE_LABELS: &Labels = &[
    (0, "no encryption"),
    (1, "encryption"),
    (2, "previously used"),
];

const SLOT_AVAIL_LABELS: &Labels = &[
    (0, "not available"),
    (1, "1-slot packets"),
    (2, "3-slot packets"),
    (3, "5-slot packets"),
];

const RATE_TYPE_LABELS: &Labels = &[
    (0, "DM1 packets"),
    (1, "2MBs packets"),
    (2, "3MBs packets"),
    (3, "rfu"),
];

const FEC_LABELS: &Labels = &[(0, "use FEC"), (1, "do not use FEC")];

const AFH_MODE_LABELS: &Labels = &[(0, "disabled"), (1, "enabled")];

const AFH_REPORTING_LABELS: &Labels = &[
    (0, "AFH reporting disabled"),
    (1, "AFH reporting enabled"),
];

const PAGE_SCHEME_LABELS: &Labels = &[(0, "mandatory")];

const PAGE_SETTINGS_LABELS: &Labels = &[(0, "R0"), (1, "R1"), (2, "R2")];

const PKT_TYPE_TABLE_LABELS: &Labels = &[(0, "1 Mbps only"), (1, "2/3 Mbps")];

const FPAGE_LABELS: &Labels = &[
    (0, "standard features"),
    (1, "extended features 64-67"),
    (2, "extended features 128-140"),
];

const IO_CAP_LABELS: &Labels = &[
    (0, "DisplayOnly"),
    (1, "DisplayYesNo"),
    (2, "KeyboardOnly"),
    (3, "NoInputNoOutput"),
];

const OOB_LABELS: &Labels = &[
    (0, "not present"),
    (1, "P-192"),
    (2, "P-256"),
    (3, "P-192 and P-256"),
];

const AUTH_LABELS: &Labels = &[
    (0, "MITM Protection Not Required - No Bonding"),
    (1, "MITM Protection Required - No Bonding"),
    (2, "MITM Protection Not Required - Dedicated Bonding"),
    (3, "MITM Protection Required - Dedicated Bonding"),
    (4, "MITM Protection Not Required - General Bonding"),
    (5, "MITM Protection Required - General Bonding"),
];

const POWERADJ_REQ_LABELS: &Labels = &[
    (0, "decrement power one step"),
    (1, "increment power one step"),
    (2, "increase to maximum power"),
];

const SNIFF_TIMING_FLAGS: &[&str; 8] = &[
    "change", "init", "accwin", "un3", "un4", "un5", "un6", "un7",
];

/// Standard feature-word bit names, `FEATURE_BITS[octet][bit]` in wire
/// order (octet 0 first).
pub const FEATURE_BITS: &[[&str; 8]; 8] = &[
    [
        "3slot", "5slot", "enc", "slotoff", "timacc", "rolesw", "holdmo", "sniffmo",
    ],
    [
        "res0", "pwrctlreq", "cqddr", "sco", "hv2", "hv3", "mulaw", "alaw",
    ],
    [
        "cvsd", "pagneg", "pwrctl", "transsync", "flowctl1", "flowctl2", "flowctl3", "bcenc",
    ],
    [
        "res1", "acl2", "acl3", "eninq", "intinq", "intpag", "rssiinq", "ev3",
    ],
    [
        "ev4", "ev5", "res2", "afhcapsl", "afhclasl", "bredrnotsup", "lesup", "3slotenh",
    ],
    [
        "5slotenh", "sniffsubr", "pauseenc", "afhcapma", "afhclama", "esco2", "esco3",
        "3slotenhesco",
    ],
    [
        "extinqres", "simlebredr", "res3", "ssp", "enpdu", "edr", "nonflush", "res4",
    ],
    [
        "lstimche", "inqtxpwr", "enhpwr", "res5", "res6", "res7", "res8", "extfeat",
    ],
];

const VERSION_FIELDS: &[FieldDescriptor] = &[
    byte_enum("version", VERSNR_LABELS),
    u16le("company_id"),
    u16le("subversion"),
];

const FEATURES_FIELDS: &[FieldDescriptor] = &[flags64("features", FEATURE_BITS)];

const FEATURES_EXT_FIELDS: &[FieldDescriptor] = &[
    byte_enum("fpage", FPAGE_LABELS),
    byte("max_page"),
    raw("features", 8),
];

const MAX_SLOT_FIELDS: &[FieldDescriptor] = &[byte("max_slots")];

const PAGE_MODE_FIELDS: &[FieldDescriptor] = &[
    byte_enum("scheme", PAGE_SCHEME_LABELS),
    byte_enum("settings", PAGE_SETTINGS_LABELS),
];

const SNIFF_SUBRATING_FIELDS: &[FieldDescriptor] = &[
    byte("max_sniff_subrate"),
    u16le("min_sniff_timeout"),
    u16le("subrating_instant"),
];

const IO_CAPABILITY_FIELDS: &[FieldDescriptor] = &[
    byte_enum("io_cap", IO_CAP_LABELS),
    byte_enum("oob", OOB_LABELS),
    byte_enum("auth", AUTH_LABELS),
];

/// Base-table bindings: (opcode, layout). Opcodes named in
/// [`OPCODE_LABELS`] but absent here decode as raw parameter bytes.
pub static BASE_PDUS: &[(u8, PduDescriptor)] = &[
    (
        1,
        PduDescriptor {
            name: "LMP_name_req",
            fields: &[byte("name_offset")],
        },
    ),
    (
        2,
        PduDescriptor {
            name: "LMP_name_res",
            fields: &[
                byte("name_offset"),
                byte("name_len"),
                raw_len_from("name_frag", "name_len"),
            ],
        },
    ),
    (
        3,
        PduDescriptor {
            name: "LMP_accepted",
            fields: &[bits("unused", 1), bits_enum("code", 7, OPCODE_LABELS)],
        },
    ),
    (
        4,
        PduDescriptor {
            name: "LMP_not_accepted",
            fields: &[
                bits("unused", 1),
                bits_enum("code", 7, OPCODE_LABELS),
                byte_enum("error_code", ERROR_CODE_LABELS),
            ],
        },
    ),
    (
        5,
        PduDescriptor {
            name: "LMP_clkoffset_req",
            fields: &[],
        },
    ),
    (
        6,
        PduDescriptor {
            name: "LMP_clkoffset_res",
            fields: &[u16le("offset")],
        },
    ),
    (
        7,
        PduDescriptor {
            name: "LMP_detach",
            fields: &[byte_enum("error_code", ERROR_CODE_LABELS)],
        },
    ),
    (
        11,
        PduDescriptor {
            name: "LMP_au_rand",
            fields: &[raw("rand", 16)],
        },
    ),
    (
        12,
        PduDescriptor {
            name: "LMP_sres",
            fields: &[raw("authres", 4)],
        },
    ),
    (
        15,
        PduDescriptor {
            name: "LMP_encryption_mode_req",
            fields: &[byte_enum("mode", ENCRYPTION_MODE_LABELS)],
        },
    ),
    (
        16,
        PduDescriptor {
            name: "LMP_encryption_key_size_req",
            fields: &[byte("keysize")],
        },
    ),
    (
        17,
        PduDescriptor {
            name: "LMP_start_encryption_req",
            fields: &[raw("rand", 16)],
        },
    ),
    (
        18,
        PduDescriptor {
            name: "LMP_stop_encryption_req",
            fields: &[],
        },
    ),
    (
        23,
        PduDescriptor {
            name: "LMP_sniff_req",
            fields: &[
                flags8("timectr", SNIFF_TIMING_FLAGS),
                u16le("dsniff"),
                u16le("tsniff"),
                u16le("sniff_attempt"),
                u16le("sniff_timeout"),
            ],
        },
    ),
    (
        24,
        PduDescriptor {
            name: "LMP_unsniff_req",
            fields: &[],
        },
    ),
    (
        33,
        PduDescriptor {
            name: "LMP_max_power",
            fields: &[],
        },
    ),
    (
        34,
        PduDescriptor {
            name: "LMP_min_power",
            fields: &[],
        },
    ),
    (
        35,
        PduDescriptor {
            name: "LMP_auto_rate",
            fields: &[],
        },
    ),
    (
        36,
        PduDescriptor {
            name: "LMP_preferred_rate",
            fields: &[
                bits("rfu", 1),
                bits_enum("edrsize", 2, SLOT_AVAIL_LABELS),
                bits_enum("type", 2, RATE_TYPE_LABELS),
                bits_enum("size", 2, SLOT_AVAIL_LABELS),
                bits_enum("fec", 1, FEC_LABELS),
            ],
        },
    ),
    (
        37,
        PduDescriptor {
            name: "LMP_version_req",
            fields: VERSION_FIELDS,
        },
    ),
    (
        38,
        PduDescriptor {
            name: "LMP_version_res",
            fields: VERSION_FIELDS,
        },
    ),
    (
        39,
        PduDescriptor {
            name: "LMP_features_req",
            fields: FEATURES_FIELDS,
        },
    ),
    (
        40,
        PduDescriptor {
            name: "LMP_features_res",
            fields: FEATURES_FIELDS,
        },
    ),
    (
        45,
        PduDescriptor {
            name: "LMP_max_slot",
            fields: MAX_SLOT_FIELDS,
        },
    ),
    (
        46,
        PduDescriptor {
            name: "LMP_max_slot_req",
            fields: MAX_SLOT_FIELDS,
        },
    ),
    (
        47,
        PduDescriptor {
            name: "LMP_timing_accuracy_req",
            fields: &[],
        },
    ),
    (
        48,
        PduDescriptor {
            name: "LMP_timing_accuracy_res",
            fields: &[byte("drift"), byte("jitter")],
        },
    ),
    (
        49,
        PduDescriptor {
            name: "LMP_setup_complete",
            fields: &[],
        },
    ),
    (
        51,
        PduDescriptor {
            name: "LMP_host_connection_req",
            fields: &[],
        },
    ),
    (
        53,
        PduDescriptor {
            name: "LMP_page_mode_req",
            fields: PAGE_MODE_FIELDS,
        },
    ),
    (
        54,
        PduDescriptor {
            name: "LMP_page_scan_mode_req",
            fields: PAGE_MODE_FIELDS,
        },
    ),
    (
        55,
        PduDescriptor {
            name: "LMP_supervision_timeout",
            fields: &[u16le("timeout")],
        },
    ),
    (
        60,
        PduDescriptor {
            name: "LMP_set_AFH",
            fields: &[
                u32le("instant"),
                byte_enum("mode", AFH_MODE_LABELS),
                raw("chM", 10),
            ],
        },
    ),
    (
        61,
        PduDescriptor {
            name: "LMP_encapsulated_header",
            fields: &[byte("major_type"), byte("minor_type"), byte("enc_len")],
        },
    ),
    (
        62,
        PduDescriptor {
            name: "LMP_encapsulated_payload",
            fields: &[raw("data", 16)],
        },
    ),
    (
        63,
        PduDescriptor {
            name: "LMP_Simple_Pairing_Confirm",
            fields: &[raw("commit", 16)],
        },
    ),
    (
        64,
        PduDescriptor {
            name: "LMP_Simple_Pairing_Number",
            fields: &[raw("nonce", 16)],
        },
    ),
    (
        65,
        PduDescriptor {
            name: "LMP_DHkey_Check",
            fields: &[raw("confirm", 16)],
        },
    ),
];

/// Extended-table bindings, keyed by the byte following the escape opcode.
pub static EXT_PDUS: &[(u8, PduDescriptor)] = &[
    (
        1,
        PduDescriptor {
            name: "LMP_accepted_ext",
            fields: &[
                bits("unused", 1),
                bits_enum("code1", 7, OPCODE_LABELS),
                byte_enum("code2", EXT_OPCODE_LABELS),
            ],
        },
    ),
    (
        2,
        PduDescriptor {
            name: "LMP_not_accepted_ext",
            fields: &[
                bits("unused", 1),
                bits_enum("code1", 7, OPCODE_LABELS),
                byte_enum("code2", EXT_OPCODE_LABELS),
                byte_enum("error_code", ERROR_CODE_LABELS),
            ],
        },
    ),
    (
        3,
        PduDescriptor {
            name: "LMP_features_req_ext",
            fields: FEATURES_EXT_FIELDS,
        },
    ),
    (
        4,
        PduDescriptor {
            name: "LMP_features_res_ext",
            fields: FEATURES_EXT_FIELDS,
        },
    ),
    (
        11,
        PduDescriptor {
            name: "LMP_packet_type_table_req",
            fields: &[byte_enum("pkt_type_table", PKT_TYPE_TABLE_LABELS)],
        },
    ),
    (
        16,
        PduDescriptor {
            name: "LMP_channel_classification_req",
            fields: &[
                byte_enum("mode", AFH_REPORTING_LABELS),
                u16le("min_interval"),
                u16le("max_interval"),
            ],
        },
    ),
    (
        17,
        PduDescriptor {
            name: "LMP_channel_classification",
            fields: &[raw("class", 10)],
        },
    ),
    (
        21,
        PduDescriptor {
            name: "LMP_sniff_subrating_req",
            fields: SNIFF_SUBRATING_FIELDS,
        },
    ),
    (
        22,
        PduDescriptor {
            name: "LMP_sniff_subrating_res",
            fields: SNIFF_SUBRATING_FIELDS,
        },
    ),
    (
        23,
        PduDescriptor {
            name: "LMP_pause_encryption_req",
            fields: &[],
        },
    ),
    (
        24,
        PduDescriptor {
            name: "LMP_resume_encryption_req",
            fields: &[],
        },
    ),
    (
        25,
        PduDescriptor {
            name: "LMP_IO_Capability_req",
            fields: IO_CAPABILITY_FIELDS,
        },
    ),
    (
        26,
        PduDescriptor {
            name: "LMP_IO_Capability_res",
            fields: IO_CAPABILITY_FIELDS,
        },
    ),
    (
        27,
        PduDescriptor {
            name: "LMP_numeric_comparison_failed",
            fields: &[],
        },
    ),
    (
        28,
        PduDescriptor {
            name: "LMP_passkey_failed",
            fields: &[],
        },
    ),
    (
        29,
        PduDescriptor {
            name: "LMP_oob_failed",
            fields: &[],
        },
    ),
    (
        31,
        PduDescriptor {
            name: "LMP_power_control_req",
            fields: &[byte_enum("poweradj", POWERADJ_REQ_LABELS)],
        },
    ),
    (
        32,
        PduDescriptor {
            name: "LMP_power_control_res",
            fields: &[
                bits("unused", 2),
                bits_enum("p_8dpsk", 2, POWER_ADJ_LABELS),
                bits_enum("p_dqpsk", 2, POWER_ADJ_LABELS),
                bits_enum("p_gfsk", 2, POWER_ADJ_LABELS),
            ],
        },
    ),
    (
        33,
        PduDescriptor {
            name: "LMP_ping_req",
            fields: &[],
        },
    ),
    (
        34,
        PduDescriptor {
            name: "LMP_ping_res",
            fields: &[],
        },
    ),
];

/// Display name for `value` in a label table.
pub fn label_for(labels: &'static Labels, value: u64) -> Option<&'static str> {
    labels
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, name)| *name)
}

/// Base-table layout lookup.
pub fn lookup(opcode: u8) -> Option<&'static PduDescriptor> {
    BASE_PDUS
        .iter()
        .find(|(op, _)| *op == opcode)
        .map(|(_, pdu)| pdu)
}

/// Extended-table layout lookup.
pub fn lookup_ext(ext_opcode: u8) -> Option<&'static PduDescriptor> {
    EXT_PDUS
        .iter()
        .find(|(op, _)| *op == ext_opcode)
        .map(|(_, pdu)| pdu)
}

/// Display name for a base opcode.
pub fn opcode_name(opcode: u8) -> Option<&'static str> {
    label_for(OPCODE_LABELS, u64::from(opcode))
}

/// Display name for an extended opcode.
pub fn ext_opcode_name(ext_opcode: u8) -> Option<&'static str> {
    label_for(EXT_OPCODE_LABELS, u64::from(ext_opcode))
}
