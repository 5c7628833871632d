// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action selection and the configuration bundle actions run with.

use std::str::FromStr;

use cs_core::FileId;
use cs_scc::{ConnectionOptions, RegistrationApi, SccCredentials};
use cs_store::ClientStore;

use crate::actions::{deregister_client, register_client, update_client};
use crate::error::ActionError;

/// The lifecycle operation a run performs for every client id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Register,
    Update,
    Deregister,
}

impl Action {
    /// Dispatch one client id through the selected action.
    pub async fn run(
        self,
        id: FileId,
        config: &ActionConfig,
        api: &dyn RegistrationApi,
    ) -> Result<(), ActionError> {
        match self {
            Action::Register => register_client(id, config, api).await,
            Action::Update => update_client(id, config, api).await,
            Action::Deregister => deregister_client(id, config, api).await,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Register => "register",
            Action::Update => "update",
            Action::Deregister => "deregister",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "register" => Ok(Action::Register),
            "update" => Ok(Action::Update),
            "deregister" => Ok(Action::Deregister),
            other => Err(format!(
                "invalid action {other:?}, must be one of: register,update,deregister"
            )),
        }
    }
}

/// Everything an action needs besides the client id.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub app_name: String,
    pub app_version: String,
    pub pref_lang: String,
    /// Non-empty selects proxy mode: the URL is overridden and the
    /// subscriptions/info precheck is skipped.
    pub scc_host: String,
    /// Pinned root certificate, PEM encoded.
    pub certificate: Option<Vec<u8>>,
    pub regcode: String,
    /// Instance document sent as `instance_data`.
    pub inst_data: String,
    pub product: String,
    pub version: String,
    pub arch: String,
    pub trace: bool,
    pub no_data_profiles: bool,
    pub store: ClientStore,
}

impl ActionConfig {
    pub fn is_proxy(&self) -> bool {
        !self.scc_host.is_empty()
    }

    pub(crate) fn connection_options(&self) -> ConnectionOptions {
        let mut options =
            ConnectionOptions::default_options(&self.app_name, &self.app_version, &self.pref_lang);
        if self.is_proxy() {
            options.url = self.scc_host.clone();
        }
        options.certificate = self.certificate.clone();
        options
    }

    /// Fresh credentials for a registration attempt.
    pub(crate) fn fresh_credentials(&self) -> SccCredentials {
        SccCredentials { show_traces: self.trace, ..SccCredentials::default() }
    }

    /// Stored credentials, with tracing re-applied from the current
    /// run's flag.
    pub(crate) fn stored_credentials(&self, mut creds: SccCredentials) -> SccCredentials {
        creds.show_traces = self.trace;
        creds
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
