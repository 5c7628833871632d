// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted system information.
//!
//! System information is an open-ended JSON object; the service keeps
//! adding inventory keys and the harness must round-trip all of them.
//! It is modeled as a raw map with typed accessors for the keys the
//! actions rely on.

use serde_json::{Map, Value};

use cs_core::{FileId, FileType};
use cs_store::ClientStore;

use crate::error::ActionError;

const SYS_INFO_PERM: u32 = 0o644;

/// One client's hardware/software inventory, as stored in
/// `sysinfo.json`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SysInfo(Map<String, Value>);

impl SysInfo {
    pub fn load(id: FileId, store: &ClientStore) -> Result<Self, ActionError> {
        let bytes = store
            .read(id, FileType::SysInfo)
            .map_err(|source| ActionError::SysInfoRead { id, source })?;
        let map = serde_json::from_slice(&bytes)
            .map_err(|source| ActionError::SysInfoDecode { id, source })?;
        Ok(Self(map))
    }

    pub fn save(&self, id: FileId, store: &ClientStore) -> Result<(), ActionError> {
        let bytes = serde_json::to_vec(&self.0)
            .map_err(|source| ActionError::SysInfoDecode { id, source })?;
        store
            .write(id, FileType::SysInfo, &bytes, SYS_INFO_PERM)
            .map_err(|source| ActionError::SysInfoWrite { id, source })
    }

    pub fn hostname(&self) -> Option<&str> {
        self.0.get("hostname").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove and return one key, e.g. to promote a profile blob out
    /// of the inventory payload.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// The inventory as a JSON value, for wire payloads.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for SysInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
#[path = "sysinfo_tests.rs"]
mod tests;
