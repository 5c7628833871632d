// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP connection to the subscription service.

use parking_lot::Mutex;
use reqwest::header::{HeaderValue, ACCEPT_LANGUAGE};
use reqwest::{Method, RequestBuilder, Response};

use crate::credentials::{Credentials, SccCredentials};
use crate::error::SccError;

/// Public production endpoint, used unless a proxy host is configured.
pub const DEFAULT_SCC_URL: &str = "https://scc.suse.com";

/// Response header carrying a rotated system token.
const SYSTEM_TOKEN_HEADER: &str = "System-Token";

#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    pub url: String,
    pub app_name: String,
    pub app_version: String,
    pub pref_lang: String,
    /// Optional pinned root certificate, PEM encoded.
    pub certificate: Option<Vec<u8>>,
}

impl ConnectionOptions {
    /// Options pointing at the public endpoint.
    pub fn default_options(
        app_name: impl Into<String>,
        app_version: impl Into<String>,
        pref_lang: impl Into<String>,
    ) -> Self {
        Self {
            url: DEFAULT_SCC_URL.to_string(),
            app_name: app_name.into(),
            app_version: app_version.into(),
            pref_lang: pref_lang.into(),
            certificate: None,
        }
    }
}

/// A live connection: pooled HTTP client plus the credentials the
/// service reads and rotates during calls.
pub struct Connection {
    http: reqwest::Client,
    options: ConnectionOptions,
    creds: Mutex<SccCredentials>,
}

impl Connection {
    pub fn new(options: ConnectionOptions, creds: SccCredentials) -> Result<Self, SccError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(lang) = HeaderValue::from_str(&options.pref_lang) {
            headers.insert(ACCEPT_LANGUAGE, lang);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(format!("{}/{}", options.app_name, options.app_version))
            .default_headers(headers);

        if let Some(pem) = &options.certificate {
            let cert = reqwest::Certificate::from_pem(pem).map_err(SccError::Certificate)?;
            builder = builder.add_root_certificate(cert);
        }

        let http = builder.build().map_err(SccError::ClientBuild)?;
        Ok(Self { http, options, creds: Mutex::new(creds) })
    }

    pub fn base_url(&self) -> &str {
        &self.options.url
    }

    /// Snapshot of the credentials for persistence.
    pub fn credentials(&self) -> SccCredentials {
        self.creds.lock().clone()
    }

    /// Install the login issued by the service after registration.
    pub fn set_login(&self, login: &str, password: &str) -> Result<(), SccError> {
        self.creds.lock().set_login(login, password)
    }

    /// Install a rotated system token.
    pub fn update_token(&self, token: &str) -> Result<(), SccError> {
        self.creds.lock().update_token(token)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.options.url, path))
    }

    /// Attach regcode authentication to a pre-registration request.
    pub(crate) fn with_regcode_auth(&self, builder: RequestBuilder, regcode: &str) -> RequestBuilder {
        builder.header(reqwest::header::AUTHORIZATION, format!("Token token={regcode}"))
    }

    /// Attach system credentials (basic auth plus current token).
    pub(crate) fn with_system_auth(&self, builder: RequestBuilder) -> Result<RequestBuilder, SccError> {
        let (login, password, token) = {
            let creds = self.creds.lock();
            let (login, password) = creds.login()?;
            (login, password, creds.token()?)
        };
        let mut builder = builder.basic_auth(login, Some(password));
        if !token.is_empty() {
            builder = builder.header(SYSTEM_TOKEN_HEADER, token);
        }
        Ok(builder)
    }

    /// Send a request, fold any rotated token back into the
    /// credentials, and map non-success statuses to [`SccError::Api`].
    pub(crate) async fn execute(&self, path: &str, builder: RequestBuilder) -> Result<Response, SccError> {
        let response = builder
            .send()
            .await
            .map_err(|source| SccError::Transport { path: path.to_string(), source })?;

        if let Some(token) = response
            .headers()
            .get(SYSTEM_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            self.creds.lock().update_token(token)?;
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SccError::Api { path: path.to_string(), status: status.as_u16(), body });
        }

        Ok(response)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").field("url", &self.options.url).finish()
    }
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
