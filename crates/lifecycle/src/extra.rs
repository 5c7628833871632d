// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extra-data composition for registration payloads.

use serde_json::{Map, Value};

use crate::sysinfo::SysInfo;

/// Inventory keys promoted out of the system information into the
/// `system_profiles` submap, so the service can deduplicate the bulky
/// repeated blobs by their content digest.
const PROFILE_KEYS: [&str; 2] = ["pci_data", "mod_data"];

/// Build the extra-data payload sent alongside the system information.
///
/// Always carries the instance document. Profile keys are removed from
/// `sys_info` unconditionally; the collected `system_profiles` submap
/// is included unless `no_data_profiles` is set.
pub fn prepare_extra_data(
    sys_info: &mut SysInfo,
    inst_data: &str,
    no_data_profiles: bool,
) -> Map<String, Value> {
    let mut extra_data = Map::new();
    extra_data.insert("instance_data".to_string(), Value::String(inst_data.to_string()));

    let mut system_profiles = Map::new();
    for key in PROFILE_KEYS {
        if let Some(value) = sys_info.take(key) {
            system_profiles.insert(key.to_string(), value);
        }
    }

    if !no_data_profiles {
        extra_data.insert("system_profiles".to_string(), Value::Object(system_profiles));
    }

    extra_data
}

#[cfg(test)]
#[path = "extra_tests.rs"]
mod tests;
