// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! clientctl specs: failure paths that need no live service.

use crate::prelude::*;

fn generate(datastore: &str, clients: &str) {
    let output = clientgen()
        .args(["--datastore", datastore, "--clients", clients])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn update_before_register_fails_per_client() {
    let temp = tempfile::tempdir().unwrap();
    let datastore = temp.path().join("data").display().to_string();
    generate(&datastore, "2");

    let output = clientctl()
        .args([
            "--action", "update",
            "--datastore", datastore.as_str(),
            "--clients", "2",
            "--jobs", "2",
            "--scc-host", "http://127.0.0.1:1",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("client not registered"), "stderr: {stderr}");
    assert!(stderr.contains("2 of 2 jobs failed"), "stderr: {stderr}");

    // the summary still lands on stdout and in the stats log
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Start of client update summary statistics at"), "stdout: {stdout}");
    assert!(stdout.contains("[End of summary statistics]"));

    let stats_dir = temp.path().join("data/stats");
    let logs: Vec<_> = std::fs::read_dir(&stats_dir).unwrap().collect();
    assert_eq!(logs.len(), 1);
    let name = logs[0].as_ref().unwrap().file_name().into_string().unwrap();
    assert!(name.contains("_update_2.log"), "log name: {name}");
}

#[test]
fn register_without_system_information_fails() {
    let temp = tempfile::tempdir().unwrap();
    let datastore = temp.path().join("empty").display().to_string();

    let output = clientctl()
        .args([
            "--action", "register",
            "--datastore", datastore.as_str(),
            "--clients", "1",
            "--regcode", "CODE",
            "--scc-host", "http://127.0.0.1:1",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read system information"),
        "stderr: {stderr}"
    );
}

#[test]
fn invalid_action_exits_with_usage_error() {
    let output = clientctl().args(["--action", "reboot"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("register,update,deregister"), "stderr: {stderr}");
}
