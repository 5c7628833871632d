// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Register / update / deregister orchestration.

use cs_core::FileId;
use cs_scc::{Connection, RegistrationApi, SystemStatus};

use crate::config::ActionConfig;
use crate::error::ActionError;
use crate::extra::prepare_extra_data;
use crate::reginfo::RegInfo;
use crate::sysinfo::SysInfo;

/// Register one client and activate the configured product.
///
/// An activation failure is compensated with a best-effort remote
/// deregister; its error is discarded so the activation error is the
/// one surfaced.
pub async fn register_client(
    id: FileId,
    config: &ActionConfig,
    api: &dyn RegistrationApi,
) -> Result<(), ActionError> {
    let mut sys_info = SysInfo::load(id, &config.store)?;
    let hostname = sys_info
        .hostname()
        .ok_or(ActionError::MissingHostname { id })?
        .to_string();

    let extra_data = prepare_extra_data(&mut sys_info, &config.inst_data, config.no_data_profiles);

    if RegInfo::exists(id, &config.store) {
        return Err(ActionError::AlreadyRegistered { hostname });
    }

    let conn = Connection::new(config.connection_options(), config.fresh_credentials())
        .map_err(|source| ActionError::Connect { hostname: hostname.clone(), source })?;

    // Proxies do not implement the subscriptions/info precheck.
    if !config.is_proxy() {
        api.subscription_info(&conn, &config.regcode)
            .await
            .map_err(|source| ActionError::Precheck { hostname: hostname.clone(), source })?;
    }

    let system_id = api
        .register(&conn, &config.regcode, &hostname, &sys_info.to_value(), &extra_data)
        .await
        .map_err(|source| ActionError::Register { hostname: hostname.clone(), source })?;
    tracing::debug!(id = %id, system_id, "client announced");

    if let Err(source) = api
        .activate(&conn, &config.product, &config.version, &config.arch, &config.regcode)
        .await
    {
        // best-effort compensation; its own error must not mask the
        // activation failure
        let _ = api.deregister(&conn).await;
        return Err(ActionError::Activate {
            hostname,
            product: config.product.clone(),
            version: config.version.clone(),
            arch: config.arch.clone(),
            source,
        });
    }

    let reg_info = RegInfo { scc_creds: conn.credentials() };
    reg_info.save(id, &config.store)?;

    tracing::info!(id = %id, hostname = %hostname, "client registered and activated");
    Ok(())
}

/// Send a keepalive heartbeat for one registered client.
///
/// A heartbeat the service rejects clears the stored registration so a
/// later register starts clean.
pub async fn update_client(
    id: FileId,
    config: &ActionConfig,
    api: &dyn RegistrationApi,
) -> Result<(), ActionError> {
    let mut sys_info = SysInfo::load(id, &config.store)?;
    let hostname = sys_info
        .hostname()
        .ok_or(ActionError::MissingHostname { id })?
        .to_string();

    if !RegInfo::exists(id, &config.store) {
        return Err(ActionError::NotRegistered { hostname });
    }
    let mut reg_info = RegInfo::load(id, &config.store)?;

    let extra_data = prepare_extra_data(&mut sys_info, &config.inst_data, config.no_data_profiles);

    let creds = config.stored_credentials(reg_info.scc_creds.clone());
    let conn = Connection::new(config.connection_options(), creds)
        .map_err(|source| ActionError::Connect { hostname: hostname.clone(), source })?;

    let status = api
        .status(&conn, &hostname, &sys_info.to_value(), &extra_data)
        .await
        .map_err(|source| ActionError::Status { hostname: hostname.clone(), source })?;

    if status != SystemStatus::Registered {
        let _ = RegInfo::delete(id, &config.store);
        return Err(ActionError::HeartbeatRejected { hostname });
    }

    // credentials may have rotated during the call
    reg_info.scc_creds = conn.credentials();
    reg_info.save(id, &config.store)?;

    tracing::info!(id = %id, hostname = %hostname, "client keepalive heartbeat updated");
    Ok(())
}

/// Deregister one client.
///
/// The stored registration is removed on every exit path once it has
/// been loaded, even when the remote call fails.
pub async fn deregister_client(
    id: FileId,
    config: &ActionConfig,
    api: &dyn RegistrationApi,
) -> Result<(), ActionError> {
    let sys_info = SysInfo::load(id, &config.store)?;
    let hostname = sys_info
        .hostname()
        .ok_or(ActionError::MissingHostname { id })?
        .to_string();

    if !RegInfo::exists(id, &config.store) {
        return Err(ActionError::NotRegistered { hostname });
    }
    let reg_info = RegInfo::load(id, &config.store)?;

    let result = deregister_remote(&hostname, reg_info, config, api).await;

    if let Err(err) = RegInfo::delete(id, &config.store) {
        tracing::warn!(id = %id, error = %err, "failed to clear registration information");
    }

    result?;
    tracing::info!(id = %id, hostname = %hostname, "client deregistered");
    Ok(())
}

async fn deregister_remote(
    hostname: &str,
    reg_info: RegInfo,
    config: &ActionConfig,
    api: &dyn RegistrationApi,
) -> Result<(), ActionError> {
    let creds = config.stored_credentials(reg_info.scc_creds);
    let conn = Connection::new(config.connection_options(), creds)
        .map_err(|source| ActionError::Connect { hostname: hostname.to_string(), source })?;

    api.deregister(&conn)
        .await
        .map_err(|source| ActionError::Deregister { hostname: hostname.to_string(), source })
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
