// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[yare::parameterized(
    string = { json!("abc"), "6cc43f858fbb763301637b5af970e2a46b46f461f27e5a0f41e009c59b827b25" },
    object = { json!({"a": 1, "b": 2}), "43258cff783fe7036d8a43033f830adfc60ec037382473548ac742b888292777" },
    array  = { json!([1, 2, 3]), "a615eeaee21de5179de080de8c3052c8da901138406ba71c38c032845f7d54f4" },
)]
fn digest_matches_sha256_of_canonical_json(data: serde_json::Value, expected: &str) {
    let profile = ProfileInfo::new(data).unwrap();
    assert_eq!(profile.digest, expected);
}

#[test]
fn equal_payloads_produce_equal_digests() {
    let a = ProfileInfo::new(json!({"x": [1, 2], "y": "z"})).unwrap();
    let b = ProfileInfo::new(json!({"x": [1, 2], "y": "z"})).unwrap();
    assert_eq!(a.digest, b.digest);
    assert_eq!(a, b);
}

#[test]
fn object_key_order_does_not_affect_digest() {
    // serde_json maps are sorted, so insertion order is irrelevant.
    let a = ProfileInfo::new(json!({"alpha": 1, "beta": 2, "gamma": 3})).unwrap();
    let b = ProfileInfo::new(json!({"gamma": 3, "alpha": 1, "beta": 2})).unwrap();
    assert_eq!(a.digest, b.digest);
}

#[test]
fn array_order_is_significant() {
    let a = ProfileInfo::new(json!(["ena", "nvme"])).unwrap();
    let b = ProfileInfo::new(json!(["nvme", "ena"])).unwrap();
    assert_ne!(a.digest, b.digest);
}

#[test]
fn digest_is_lowercase_hex() {
    let profile = ProfileInfo::new(json!("payload")).unwrap();
    assert_eq!(profile.digest.len(), 64);
    assert!(profile.digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn serde_shape_is_digest_and_data() {
    let profile = ProfileInfo::new(json!(["mod_a"])).unwrap();
    let value = serde_json::to_value(&profile).unwrap();
    assert!(value.get("digest").is_some());
    assert_eq!(value["data"], json!(["mod_a"]));

    let parsed: ProfileInfo = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, profile);
}

#[test]
fn data_len_is_canonical_encoding_length() {
    let profile = ProfileInfo::new(json!([1, 2, 3])).unwrap();
    assert_eq!(profile.data_len().unwrap(), "[1,2,3]".len());
}
