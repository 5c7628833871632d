// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clientgen` - fabricate the simulated client population.

use std::path::PathBuf;

use clap::Parser;

use cs_core::{FileId, FileType};
use cs_fixture::{Client, SavingsTracker};
use cs_store::ClientStore;

use crate::ExitError;

const SYS_INFO_PERM: u32 = 0o644;

#[derive(Debug, Parser)]
#[command(name = "clientgen", version, about = "Fabricate simulated client inventories")]
pub struct Cli {
    /// Datastore to store the simulated clients in
    #[arg(long, env = "DATASTORE", default_value = "ClientDataStore")]
    pub datastore: PathBuf,

    /// Number of clients to simulate
    #[arg(long = "clients", env = "NUM_CLIENTS", default_value_t = 1000)]
    pub clients: u32,
}

pub fn run(cli: Cli) -> Result<(), ExitError> {
    let store = ClientStore::init(&cli.datastore).map_err(|err| ExitError::fatal(err.to_string()))?;

    println!("Initialising {:?} as datastore", cli.datastore);
    println!("Simulating {} clients", cli.clients);

    let mut tracker = SavingsTracker::new();
    for id in 0..cli.clients {
        let client = Client::generate(id)
            .map_err(|err| ExitError::fatal(format!("failed to create client {id}: {err}")))?;

        let sys_info = client
            .sys_info()
            .map_err(|err| ExitError::fatal(format!("failed to create client {id}: {err}")))?;
        let bytes = serde_json::to_vec(&sys_info)
            .map_err(|err| ExitError::fatal(format!("failed to encode client {id}: {err}")))?;

        store
            .write(FileId(id), FileType::SysInfo, &bytes, SYS_INFO_PERM)
            .map_err(|err| ExitError::fatal(format!("failed to write client {id}: {err}")))?;

        tracker
            .record_client(&client)
            .map_err(|err| ExitError::fatal(format!("failed to account client {id}: {err}")))?;
    }

    let stats = tracker.stats();
    let stats_bytes = serde_json::to_vec_pretty(&stats)
        .map_err(|err| ExitError::fatal(format!("failed to encode hardware stats: {err}")))?;
    let stats_path = store.root().join("HwInfoStats.json");
    std::fs::write(&stats_path, stats_bytes).map_err(|err| {
        ExitError::fatal(format!("failed to write {}: {err}", stats_path.display()))
    })?;

    println!(
        "Profile savings: pci {} of {} bytes, modules {} of {} bytes",
        stats.pci_data.saved_bytes,
        stats.pci_data.raw_bytes,
        stats.mod_data.saved_bytes,
        stats.mod_data.raw_bytes,
    );

    Ok(())
}

#[cfg(test)]
#[path = "clientgen_tests.rs"]
mod tests;
