// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content-addressed profile payloads.
//!
//! A profile wraps a bulky, frequently repeated inventory blob (PCI
//! device lists, loaded kernel modules) together with a digest of its
//! content so the registration service can deduplicate identical
//! payloads across many clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to serialize profile payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A payload plus the SHA-256 digest of its canonical JSON encoding.
///
/// The digest is computed over the `data` field alone. Object keys are
/// serialized in sorted order (serde_json's default map encoding), so
/// equal payloads always produce byte-equal digests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub digest: String,
    pub data: Value,
}

impl ProfileInfo {
    pub fn new(data: impl Serialize) -> Result<Self, ProfileError> {
        let data = serde_json::to_value(data)?;
        let encoded = serde_json::to_vec(&data)?;
        let digest = hex::encode(Sha256::digest(&encoded));
        Ok(Self { digest, data })
    }

    /// Size in bytes of the canonical encoding of the payload.
    pub fn data_len(&self) -> Result<usize, ProfileError> {
        Ok(serde_json::to_vec(&self.data)?.len())
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
