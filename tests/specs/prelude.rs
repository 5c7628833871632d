// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use assert_cmd::Command;

#[allow(clippy::unwrap_used)]
pub fn clientgen() -> Command {
    Command::cargo_bin("clientgen").unwrap()
}

#[allow(clippy::unwrap_used)]
pub fn clientctl() -> Command {
    Command::cargo_bin("clientctl").unwrap()
}
