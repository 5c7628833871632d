// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content-dedup savings accounting.
//!
//! The generator tracks how many bytes the repeated PCI and module
//! profiles would occupy raw versus stored once per digest, and
//! serializes the totals to `HwInfoStats.json` after a run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cs_core::ProfileInfo;

use crate::client::{Client, FixtureError};

/// Savings summary for one profile family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSavings {
    /// Profiles recorded, one per client.
    pub occurrences: u64,
    /// Distinct digests seen.
    pub unique: u64,
    /// Bytes if every occurrence were stored verbatim.
    pub raw_bytes: u64,
    /// Bytes when stored once per digest.
    pub stored_bytes: u64,
    /// `raw_bytes - stored_bytes`.
    pub saved_bytes: u64,
}

#[derive(Debug, Default)]
struct ProfileAccounting {
    occurrences: u64,
    raw_bytes: u64,
    unique: HashMap<String, u64>,
}

impl ProfileAccounting {
    fn record(&mut self, profile: &ProfileInfo) -> Result<(), FixtureError> {
        let bytes = profile.data_len()? as u64;
        self.occurrences += 1;
        self.raw_bytes += bytes;
        self.unique.entry(profile.digest.clone()).or_insert(bytes);
        Ok(())
    }

    fn summary(&self) -> ProfileSavings {
        let stored_bytes: u64 = self.unique.values().sum();
        ProfileSavings {
            occurrences: self.occurrences,
            unique: self.unique.len() as u64,
            raw_bytes: self.raw_bytes,
            stored_bytes,
            saved_bytes: self.raw_bytes - stored_bytes,
        }
    }
}

/// Aggregate statistics written to `HwInfoStats.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HwInfoStats {
    pub clients: u64,
    pub pci_data: ProfileSavings,
    pub mod_data: ProfileSavings,
}

/// Accumulates savings across one generator run.
#[derive(Debug, Default)]
pub struct SavingsTracker {
    clients: u64,
    pci_data: ProfileAccounting,
    mod_data: ProfileAccounting,
}

impl SavingsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_client(&mut self, client: &Client) -> Result<(), FixtureError> {
        self.clients += 1;
        self.pci_data.record(&client.pci_data)?;
        self.mod_data.record(&client.mod_data)?;
        Ok(())
    }

    pub fn stats(&self) -> HwInfoStats {
        HwInfoStats {
            clients: self.clients,
            pci_data: self.pci_data.summary(),
            mod_data: self.mod_data.summary(),
        }
    }
}

#[cfg(test)]
#[path = "savings_tests.rs"]
mod tests;
