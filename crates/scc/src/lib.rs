// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cs-scc: client library for the remote subscription service
//!
//! Exposes the four lifecycle operations (register, activate, status,
//! deregister) over HTTP/JSON, plus the connection and credentials
//! model the service expects. The [`RegistrationApi`] trait is the
//! seam other crates program against; [`api::FakeApi`] (behind the
//! `test-support` feature) stands in for the real service in tests.

pub mod api;
pub mod connection;
pub mod credentials;
mod error;

#[cfg(any(test, feature = "test-support"))]
pub use api::{FakeApi, FakeCall};
pub use api::{Activation, HttpApi, RegistrationApi, SystemStatus};
pub use connection::{Connection, ConnectionOptions, DEFAULT_SCC_URL};
pub use credentials::{Credentials, SccCredentials};
pub use error::SccError;
