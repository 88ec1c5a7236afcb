//! JSON test vector loader shared by the LMP and transport tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

use lmplens_core::result::DissectionResult;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub frame: FrameData,
    pub expect: Expect,
}

#[derive(Debug, Deserialize)]
pub struct FrameData {
    pub encoding: String,
    pub data: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct Expect {
    #[serde(default)]
    pub malformed: bool,
    #[serde(default)]
    pub warnings: Option<usize>,
    #[serde(default)]
    pub fields: Vec<ExpectField>,
    /// Field names that must NOT appear in the result.
    #[serde(default)]
    pub absent: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectField {
    pub name: String,
    #[serde(default)]
    pub value: Option<u64>,
    #[serde(default)]
    pub label: Option<String>,
    /// Expected raw bytes, hex-encoded.
    #[serde(default)]
    pub hex: Option<String>,
}

impl FrameData {
    pub fn decode(&self) -> Vec<u8> {
        match self.encoding.as_str() {
            "base64" => base64::decode(&self.data).expect("invalid base64 in test vector"),
            "hex" => hex::decode(&self.data).expect("invalid hex in test vector"),
            other => panic!("unsupported encoding: {other}"),
        }
    }
}

/// Assert that `res` matches the vector: expected fields appear in order,
/// with the requested values/labels, and the warning expectations hold.
pub fn check(res: &DissectionResult<'_>, v: &TestVector) {
    assert_eq!(
        res.is_malformed(),
        v.expect.malformed,
        "malformed mismatch, vector={}",
        v.description
    );
    if let Some(n) = v.expect.warnings {
        assert_eq!(
            res.warnings.len(),
            n,
            "warning count, vector={} warnings={:?}",
            v.description,
            res.warnings
        );
    }

    let mut pos = 0;
    for ef in &v.expect.fields {
        let idx = res.fields[pos..]
            .iter()
            .position(|f| f.name == ef.name)
            .unwrap_or_else(|| {
                panic!("field {} not found after index {pos}, vector={}", ef.name, v.description)
            });
        let f = &res.fields[pos + idx];
        if let Some(value) = ef.value {
            assert_eq!(
                f.value.as_uint(),
                Some(value),
                "value of {}, vector={}",
                ef.name,
                v.description
            );
        }
        if let Some(label) = &ef.label {
            assert_eq!(&f.label, label, "label of {}, vector={}", ef.name, v.description);
        }
        if let Some(expected_hex) = &ef.hex {
            assert_eq!(
                &f.label, expected_hex,
                "raw bytes of {}, vector={}",
                ef.name, v.description
            );
        }
        pos += idx + 1;
    }

    for name in &v.expect.absent {
        assert!(
            res.field(name).is_none(),
            "field {name} should be absent, vector={}",
            v.description
        );
    }
}
