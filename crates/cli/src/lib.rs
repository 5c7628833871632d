// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cs-cli: the clientctl and clientgen binaries

pub mod clientctl;
pub mod clientgen;
pub mod report;

use std::fmt;

/// Instance document used when no `INST_DATA` file is supplied.
pub const DEFAULT_INST_DATA: &str = "<document>{}</document>";

/// Parse the loose boolean syntax accepted from flags and environment
/// variables: `1`, `yes` and `true` (any case) are true, everything
/// else is false.
pub fn parse_boolish(value: &str) -> Result<bool, std::convert::Infallible> {
    Ok(matches!(value.to_lowercase().as_str(), "1" | "yes" | "true"))
}

/// Error carrying a process exit code back to `main`.
///
/// Command code never calls `std::process::exit()` itself; it returns
/// an `ExitError` and lets `main` terminate after unwinding cleanly.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// A fatal configuration or run error (exit code 1).
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(1, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Route tracing output to stderr, honoring `RUST_LOG`; stdout stays
/// reserved for the summary report and trace lines.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
