// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from lifecycle actions.

use thiserror::Error;

use cs_core::FileId;
use cs_scc::SccError;
use cs_store::StoreError;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("failed to read system information for client {id}: {source}")]
    SysInfoRead {
        id: FileId,
        #[source]
        source: StoreError,
    },
    #[error("invalid system information JSON for client {id}: {source}")]
    SysInfoDecode {
        id: FileId,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write system information for client {id}: {source}")]
    SysInfoWrite {
        id: FileId,
        #[source]
        source: StoreError,
    },
    #[error("system information for client {id} has no hostname")]
    MissingHostname { id: FileId },
    #[error("failed to read registration information for client {id}: {source}")]
    RegInfoRead {
        id: FileId,
        #[source]
        source: StoreError,
    },
    #[error("invalid registration information JSON for client {id}: {source}")]
    RegInfoDecode {
        id: FileId,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write registration information for client {id}: {source}")]
    RegInfoWrite {
        id: FileId,
        #[source]
        source: StoreError,
    },
    #[error("failed to delete registration information for client {id}: {source}")]
    RegInfoDelete {
        id: FileId,
        #[source]
        source: StoreError,
    },
    #[error("client already registered: {hostname}")]
    AlreadyRegistered { hostname: String },
    #[error("client not registered: {hostname}")]
    NotRegistered { hostname: String },
    #[error("failed to send keepalive heartbeat for client {hostname}")]
    HeartbeatRejected { hostname: String },
    #[error("failed to set up connection for client {hostname}: {source}")]
    Connect {
        hostname: String,
        #[source]
        source: SccError,
    },
    #[error("subscription precheck failed for client {hostname}: {source}")]
    Precheck {
        hostname: String,
        #[source]
        source: SccError,
    },
    #[error("failed to register client {hostname}: {source}")]
    Register {
        hostname: String,
        #[source]
        source: SccError,
    },
    #[error("failed to activate {product}/{version}/{arch} for client {hostname}: {source}")]
    Activate {
        hostname: String,
        product: String,
        version: String,
        arch: String,
        #[source]
        source: SccError,
    },
    #[error("failed to update system status for client {hostname}: {source}")]
    Status {
        hostname: String,
        #[source]
        source: SccError,
    },
    #[error("failed to deregister client {hostname}: {source}")]
    Deregister {
        hostname: String,
        #[source]
        source: SccError,
    },
}
