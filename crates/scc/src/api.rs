// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration operations against the subscription service.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::connection::Connection;
use crate::error::SccError;

const SUBSCRIPTIONS_INFO_PATH: &str = "/connect/subscriptions/info";
const ANNOUNCE_PATH: &str = "/connect/subscriptions/systems";
const PRODUCTS_PATH: &str = "/connect/systems/products";
const SYSTEMS_PATH: &str = "/connect/systems";

/// Registration state the service reports for a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Registered,
    Unknown,
}

/// A product activation issued by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Activation {
    pub id: u64,
    #[serde(default)]
    pub friendly_name: String,
}

#[derive(Debug, Deserialize)]
struct AnnouncedSystem {
    id: u64,
    login: String,
    password: String,
}

/// The remote operations the lifecycle actions drive.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Validate a registration code before announcing a system.
    /// Proxy hosts do not implement this endpoint; callers skip it.
    async fn subscription_info(&self, conn: &Connection, regcode: &str) -> Result<String, SccError>;

    /// Announce a system. The service responds with its login, which
    /// is installed into the connection's credentials.
    async fn register(
        &self,
        conn: &Connection,
        regcode: &str,
        hostname: &str,
        sys_info: &Value,
        extra_data: &Map<String, Value>,
    ) -> Result<u64, SccError>;

    /// Activate a product for a registered system.
    async fn activate(
        &self,
        conn: &Connection,
        product: &str,
        version: &str,
        arch: &str,
        regcode: &str,
    ) -> Result<Activation, SccError>;

    /// Keepalive heartbeat; reports whether the system is still
    /// registered.
    async fn status(
        &self,
        conn: &Connection,
        hostname: &str,
        sys_info: &Value,
        extra_data: &Map<String, Value>,
    ) -> Result<SystemStatus, SccError>;

    /// Remove the system's registration.
    async fn deregister(&self, conn: &Connection) -> Result<(), SccError>;
}

fn system_payload(hostname: &str, sys_info: &Value, extra_data: &Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert("hostname".to_string(), Value::String(hostname.to_string()));
    body.insert("system_information".to_string(), sys_info.clone());
    for (key, value) in extra_data {
        body.insert(key.clone(), value.clone());
    }
    Value::Object(body)
}

/// The real HTTP/JSON implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

impl HttpApi {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RegistrationApi for HttpApi {
    async fn subscription_info(&self, conn: &Connection, regcode: &str) -> Result<String, SccError> {
        let builder = conn.request(Method::GET, SUBSCRIPTIONS_INFO_PATH);
        let builder = conn.with_regcode_auth(builder, regcode);
        let response = conn.execute(SUBSCRIPTIONS_INFO_PATH, builder).await?;
        response.text().await.map_err(|source| SccError::Decode {
            path: SUBSCRIPTIONS_INFO_PATH.to_string(),
            source,
        })
    }

    async fn register(
        &self,
        conn: &Connection,
        regcode: &str,
        hostname: &str,
        sys_info: &Value,
        extra_data: &Map<String, Value>,
    ) -> Result<u64, SccError> {
        let body = system_payload(hostname, sys_info, extra_data);
        let builder = conn.request(Method::POST, ANNOUNCE_PATH).json(&body);
        let builder = conn.with_regcode_auth(builder, regcode);

        let response = conn.execute(ANNOUNCE_PATH, builder).await?;
        let system: AnnouncedSystem = response
            .json()
            .await
            .map_err(|source| SccError::Decode { path: ANNOUNCE_PATH.to_string(), source })?;

        conn.set_login(&system.login, &system.password)?;
        Ok(system.id)
    }

    async fn activate(
        &self,
        conn: &Connection,
        product: &str,
        version: &str,
        arch: &str,
        regcode: &str,
    ) -> Result<Activation, SccError> {
        let body = serde_json::json!({
            "identifier": product,
            "version": version,
            "arch": arch,
            "token": regcode,
        });
        let builder = conn.request(Method::POST, PRODUCTS_PATH).json(&body);
        let builder = conn.with_system_auth(builder)?;

        let response = conn.execute(PRODUCTS_PATH, builder).await?;
        response
            .json()
            .await
            .map_err(|source| SccError::Decode { path: PRODUCTS_PATH.to_string(), source })
    }

    async fn status(
        &self,
        conn: &Connection,
        hostname: &str,
        sys_info: &Value,
        extra_data: &Map<String, Value>,
    ) -> Result<SystemStatus, SccError> {
        let body = system_payload(hostname, sys_info, extra_data);
        let builder = conn.request(Method::PUT, SYSTEMS_PATH).json(&body);
        let builder = conn.with_system_auth(builder)?;

        match conn.execute(SYSTEMS_PATH, builder).await {
            Ok(_) => Ok(SystemStatus::Registered),
            // The service answers 404 for systems it no longer knows.
            Err(SccError::Api { status: 404, .. }) => Ok(SystemStatus::Unknown),
            Err(err) => Err(err),
        }
    }

    async fn deregister(&self, conn: &Connection) -> Result<(), SccError> {
        let builder = conn.request(Method::DELETE, SYSTEMS_PATH);
        let builder = conn.with_system_auth(builder)?;
        conn.execute(SYSTEMS_PATH, builder).await?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// One recorded operation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum FakeCall {
        SubscriptionInfo,
        Register { hostname: String },
        Activate { product: String, version: String, arch: String },
        Status { hostname: String },
        Deregister,
    }

    #[derive(Default)]
    struct FakeState {
        calls: Vec<FakeCall>,
        next_system_id: u64,
        fail_subscription_info: Option<String>,
        fail_register: Option<String>,
        fail_activate: Option<String>,
        fail_status: Option<String>,
        fail_deregister: Option<String>,
        status_result: Option<SystemStatus>,
        rotate_token: Option<String>,
    }

    /// Scriptable in-memory service for tests.
    ///
    /// Mirrors the real service's credential behavior: register
    /// installs a login derived from the hostname, and status rotates
    /// the system token when one is scripted.
    #[derive(Clone, Default)]
    pub struct FakeApi {
        inner: Arc<Mutex<FakeState>>,
    }

    impl FakeApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_subscription_info(&self, message: impl Into<String>) {
            self.inner.lock().fail_subscription_info = Some(message.into());
        }

        pub fn fail_register(&self, message: impl Into<String>) {
            self.inner.lock().fail_register = Some(message.into());
        }

        pub fn fail_activate(&self, message: impl Into<String>) {
            self.inner.lock().fail_activate = Some(message.into());
        }

        pub fn fail_status(&self, message: impl Into<String>) {
            self.inner.lock().fail_status = Some(message.into());
        }

        pub fn fail_deregister(&self, message: impl Into<String>) {
            self.inner.lock().fail_deregister = Some(message.into());
        }

        pub fn set_status(&self, status: SystemStatus) {
            self.inner.lock().status_result = Some(status);
        }

        /// Rotate the token to this value during the next status call.
        pub fn rotate_token(&self, token: impl Into<String>) {
            self.inner.lock().rotate_token = Some(token.into());
        }

        /// All recorded operations, in order.
        pub fn calls(&self) -> Vec<FakeCall> {
            self.inner.lock().calls.clone()
        }

        pub fn deregister_count(&self) -> usize {
            self.inner.lock().calls.iter().filter(|c| **c == FakeCall::Deregister).count()
        }

        fn rejection(path: &str, message: String) -> SccError {
            SccError::Api { path: path.to_string(), status: 422, body: message }
        }
    }

    #[async_trait]
    impl RegistrationApi for FakeApi {
        async fn subscription_info(
            &self,
            _conn: &Connection,
            _regcode: &str,
        ) -> Result<String, SccError> {
            let mut state = self.inner.lock();
            state.calls.push(FakeCall::SubscriptionInfo);
            if let Some(message) = state.fail_subscription_info.clone() {
                return Err(Self::rejection(SUBSCRIPTIONS_INFO_PATH, message));
            }
            Ok("{}".to_string())
        }

        async fn register(
            &self,
            conn: &Connection,
            _regcode: &str,
            hostname: &str,
            _sys_info: &Value,
            _extra_data: &Map<String, Value>,
        ) -> Result<u64, SccError> {
            let id = {
                let mut state = self.inner.lock();
                state.calls.push(FakeCall::Register { hostname: hostname.to_string() });
                if let Some(message) = state.fail_register.clone() {
                    return Err(Self::rejection(ANNOUNCE_PATH, message));
                }
                state.next_system_id += 1;
                state.next_system_id
            };
            conn.set_login(&format!("SCC_{hostname}"), "fake-password")?;
            Ok(id)
        }

        async fn activate(
            &self,
            _conn: &Connection,
            product: &str,
            version: &str,
            arch: &str,
            _regcode: &str,
        ) -> Result<Activation, SccError> {
            let mut state = self.inner.lock();
            state.calls.push(FakeCall::Activate {
                product: product.to_string(),
                version: version.to_string(),
                arch: arch.to_string(),
            });
            if let Some(message) = state.fail_activate.clone() {
                return Err(Self::rejection(PRODUCTS_PATH, message));
            }
            Ok(Activation { id: 1, friendly_name: format!("{product} {version} {arch}") })
        }

        async fn status(
            &self,
            conn: &Connection,
            hostname: &str,
            _sys_info: &Value,
            _extra_data: &Map<String, Value>,
        ) -> Result<SystemStatus, SccError> {
            let (result, rotate) = {
                let mut state = self.inner.lock();
                state.calls.push(FakeCall::Status { hostname: hostname.to_string() });
                if let Some(message) = state.fail_status.clone() {
                    return Err(Self::rejection(SYSTEMS_PATH, message));
                }
                (
                    state.status_result.unwrap_or(SystemStatus::Registered),
                    state.rotate_token.take(),
                )
            };
            if let Some(token) = rotate {
                conn.update_token(&token)?;
            }
            Ok(result)
        }

        async fn deregister(&self, _conn: &Connection) -> Result<(), SccError> {
            let mut state = self.inner.lock();
            state.calls.push(FakeCall::Deregister);
            if let Some(message) = state.fail_deregister.clone() {
                return Err(Self::rejection(SYSTEMS_PATH, message));
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeApi, FakeCall};

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
