// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::Path;

#[yare::parameterized(
    zero     = { 0x0000_0000, "000/000/000" },
    high     = { 0xffff_fc00, "fff/3ff/000" },
    mixed    = { 0x0010_0501, "001/001/101" },
    all_ones = { 0xffff_ffff, "fff/3ff/3ff" },
    leaf_max = { 0x0000_03ff, "000/000/3ff" },
    mid_one  = { 0x0000_0400, "000/001/000" },
    top_one  = { 0x0010_0000, "001/000/000" },
)]
fn dir_path_splits_into_ten_bit_fields(id: u32, expected: &str) {
    assert_eq!(FileId(id).dir_path(), Path::new(expected));
}

#[test]
fn artifact_path_appends_typed_file_name() {
    let id = FileId(0);
    assert_eq!(id.path(FileType::SysInfo), Path::new("000/000/000/sysinfo.json"));
    assert_eq!(id.path(FileType::RegInfo), Path::new("000/000/000/reginfo.json"));
}

#[test]
fn file_names_are_lowercase_json() {
    let id = FileId(42);
    assert_eq!(id.file_name(FileType::SysInfo), "sysinfo.json");
    assert_eq!(id.file_name(FileType::RegInfo), "reginfo.json");
}

#[test]
fn path_segments_are_three_hex_digits() {
    for id in [0u32, 1, 0x3ff, 0x400, 0xabcde, 0x3fff_ffff, u32::MAX] {
        let path = FileId(id).dir_path();
        for segment in path.iter() {
            let s = segment.to_str().unwrap();
            assert_eq!(s.len(), 3, "segment {s:?} of id {id:#x}");
            assert!(
                s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                "segment {s:?} of id {id:#x}"
            );
        }
    }
}

#[test]
fn distinct_ids_map_to_distinct_directories() {
    // Spot-check injectivity across field boundaries.
    let ids = [0u32, 1, 0x3ff, 0x400, 0x401, 0xfffff, 0x100000, 0x100401, 0x3fffffff];
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        assert!(seen.insert(FileId(id).dir_path()), "duplicate path for {id:#x}");
    }
}

#[test]
fn display_renders_decimal() {
    assert_eq!(FileId(1234).to_string(), "1234");
    assert_eq!(FileType::SysInfo.to_string(), "sysinfo");
    assert_eq!(FileType::RegInfo.to_string(), "reginfo");
}
