// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted registration state.

use serde::{Deserialize, Serialize};

use cs_core::{FileId, FileType};
use cs_scc::SccCredentials;
use cs_store::ClientStore;

use crate::error::ActionError;

const REG_INFO_PERM: u32 = 0o644;

/// Credentials issued by the service, written after a successful
/// registration and removed on deregister or a failed keepalive.
/// Its presence is the "is this client registered" marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegInfo {
    pub scc_creds: SccCredentials,
}

impl RegInfo {
    pub fn exists(id: FileId, store: &ClientStore) -> bool {
        store.exists(id, FileType::RegInfo)
    }

    pub fn load(id: FileId, store: &ClientStore) -> Result<Self, ActionError> {
        let bytes = store
            .read(id, FileType::RegInfo)
            .map_err(|source| ActionError::RegInfoRead { id, source })?;
        serde_json::from_slice(&bytes).map_err(|source| ActionError::RegInfoDecode { id, source })
    }

    pub fn save(&self, id: FileId, store: &ClientStore) -> Result<(), ActionError> {
        let bytes = serde_json::to_vec(self)
            .map_err(|source| ActionError::RegInfoDecode { id, source })?;
        store
            .write(id, FileType::RegInfo, &bytes, REG_INFO_PERM)
            .map_err(|source| ActionError::RegInfoWrite { id, source })
    }

    pub fn delete(id: FileId, store: &ClientStore) -> Result<(), ActionError> {
        store
            .delete(id, FileType::RegInfo)
            .map_err(|source| ActionError::RegInfoDelete { id, source })
    }
}

#[cfg(test)]
#[path = "reginfo_tests.rs"]
mod tests;
