// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credentials handed to the subscription service.
//!
//! The service installs a system login after successful registration
//! and may rotate the system token on every authenticated response;
//! both mutations land here so the caller can persist them.

use serde::{Deserialize, Serialize};

use crate::error::SccError;

/// Contract the connection layer drives credentials through.
pub trait Credentials: Send + Sync {
    fn has_authentication(&self) -> bool;
    fn token(&self) -> Result<String, SccError>;
    fn update_token(&mut self, token: &str) -> Result<(), SccError>;
    fn login(&self) -> Result<(String, String), SccError>;
    fn set_login(&mut self, login: &str, password: &str) -> Result<(), SccError>;
}

/// Subscription-service credentials as persisted in RegInfo.
///
/// The serialized token key is literally `system_loken`; writer and
/// reader agree on it, and renaming would strand every previously
/// written datastore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccCredentials {
    #[serde(default)]
    pub system_login: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "system_loken", default)]
    pub system_token: String,
    #[serde(default)]
    pub show_traces: bool,
}

impl Credentials for SccCredentials {
    fn has_authentication(&self) -> bool {
        true
    }

    fn token(&self) -> Result<String, SccError> {
        if self.show_traces {
            println!("<- fetch token {}", self.system_token);
        }
        Ok(self.system_token.clone())
    }

    fn update_token(&mut self, token: &str) -> Result<(), SccError> {
        if self.show_traces {
            println!("-> update token {token}");
        }
        self.system_token = token.to_string();
        Ok(())
    }

    fn login(&self) -> Result<(String, String), SccError> {
        if self.system_login.is_empty() || self.password.is_empty() {
            return Err(SccError::LoginUnset);
        }
        if self.show_traces {
            println!("<- fetch login {}", self.system_login);
        }
        Ok((self.system_login.clone(), self.password.clone()))
    }

    fn set_login(&mut self, login: &str, password: &str) -> Result<(), SccError> {
        if self.show_traces {
            println!("-> set login {login}");
        }
        self.system_login = login.to_string();
        self.password = password.to_string();
        Ok(())
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
