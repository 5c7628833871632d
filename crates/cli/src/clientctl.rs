// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clientctl` - drive one lifecycle action across the client
//! population.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;

use cs_core::FileId;
use cs_lifecycle::{Action, ActionConfig};
use cs_queue::WorkQueue;
use cs_scc::HttpApi;
use cs_store::ClientStore;

use crate::{parse_boolish, report, ExitError, DEFAULT_INST_DATA};

#[derive(Debug, Parser)]
// no auto --version flag: the product version option owns that name
#[command(
    name = "clientctl",
    about = "Drive bulk register/update/deregister workflows against the subscription service"
)]
pub struct Cli {
    /// Action to perform for each client: register, update or
    /// deregister
    #[arg(long, env = "ACTION", default_value = "register")]
    pub action: Action,

    /// Number of clients in the datastore to act upon
    #[arg(long = "clients", env = "NUM_CLIENTS", default_value_t = 10)]
    pub clients: u32,

    /// Number of parallel workers
    #[arg(long = "jobs", env = "NUM_JOBS", default_value_t = 4)]
    pub jobs: u32,

    /// Datastore holding the client system information JSON blobs
    #[arg(long, env = "DATASTORE", default_value = "ClientDataStore")]
    pub datastore: PathBuf,

    /// Product identifier to register the clients with
    #[arg(long, env = "IDENTIFIER", default_value = "SLES")]
    pub product: String,

    /// Product version to register the clients with
    #[arg(long = "version", env = "VERSION", default_value = "15.7")]
    pub product_version: String,

    /// Product architecture to register the clients with
    #[arg(long, env = "ARCH", default_value = "x86_64")]
    pub arch: String,

    /// Service host to send requests to; non-empty selects proxy mode
    #[arg(long = "scc-host", env = "SCC_HOST", default_value = "")]
    pub scc_host: String,

    /// PEM certificate pinned for the configured host
    #[arg(long = "api-cert", env = "API_CERT")]
    pub api_cert: Option<PathBuf>,

    /// Preferred language for service interactions
    #[arg(long = "lang", env = "PREF_LANG", default_value = "en")]
    pub lang: String,

    /// Registration code
    #[arg(long, env = "REGCODE", default_value = "")]
    pub regcode: String,

    /// Path to an XML instance document
    #[arg(long = "instdata", env = "INST_DATA")]
    pub instdata: Option<PathBuf>,

    /// Trace credential fetches and token updates
    #[arg(
        long,
        env = "TRACE_UPDATES",
        value_parser = parse_boolish,
        num_args = 0..=1,
        default_missing_value = "true",
        default_value = "false"
    )]
    pub trace: bool,

    /// Leave profile blobs inside the system information payload
    #[arg(
        long = "no-data-profiles",
        env = "NO_DATA_PROFILES",
        value_parser = parse_boolish,
        num_args = 0..=1,
        default_missing_value = "true",
        default_value = "false"
    )]
    pub no_data_profiles: bool,
}

pub async fn run(cli: Cli) -> Result<(), ExitError> {
    if cli.action == Action::Register && cli.regcode.is_empty() {
        tracing::warn!("no REGCODE specified for register action");
    }

    let certificate = match &cli.api_cert {
        Some(path) => Some(std::fs::read(path).map_err(|err| {
            ExitError::fatal(format!("failed to load API_CERT {}: {err}", path.display()))
        })?),
        None => None,
    };

    let inst_data = match &cli.instdata {
        Some(path) => std::fs::read_to_string(path).map_err(|err| {
            ExitError::fatal(format!("failed to load INST_DATA {}: {err}", path.display()))
        })?,
        None => DEFAULT_INST_DATA.to_string(),
    };

    let store = ClientStore::init(&cli.datastore).map_err(|err| ExitError::fatal(err.to_string()))?;

    let action = cli.action;
    let config = Arc::new(ActionConfig {
        app_name: "clientctl".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        pref_lang: cli.lang.clone(),
        scc_host: cli.scc_host.clone(),
        certificate,
        regcode: cli.regcode.clone(),
        inst_data,
        product: cli.product.clone(),
        version: cli.product_version.clone(),
        arch: cli.arch.clone(),
        trace: cli.trace,
        no_data_profiles: cli.no_data_profiles,
        store: store.clone(),
    });
    let api = Arc::new(HttpApi::new());

    let mut queue = WorkQueue::new(action.to_string(), cli.jobs as usize);
    queue.start();

    for id in 0..cli.clients {
        let config = Arc::clone(&config);
        let api = Arc::clone(&api);
        let job = queue.new_job(id, move || async move {
            action
                .run(FileId(id), &config, api.as_ref())
                .await
                .map_err(|err| Box::new(err) as cs_core::BoxError)
        });
        queue
            .add(job)
            .await
            .map_err(|err| ExitError::fatal(format!("failed to submit job for client {id}: {err}")))?;
    }

    queue.wait_for_completion().await;

    if let Some(stats) = queue.stats() {
        let now = Utc::now();
        let summary = report::summary_report(&action.to_string(), now, stats);
        println!("{summary}");

        match report::write_summary_log(store.root(), &action.to_string(), cli.clients, now, &summary)
        {
            Ok(path) => tracing::info!(path = %path.display(), "summary statistics written"),
            Err(err) => tracing::warn!(error = %err, "failed to write summary statistics log"),
        }
    }

    let errors = queue.errors();
    if !errors.is_empty() {
        for error in errors {
            eprintln!("Error: {error}");
        }
        return Err(ExitError::new(
            1,
            format!("{} of {} jobs failed", errors.len(), cli.clients),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "clientctl_tests.rs"]
mod tests;
