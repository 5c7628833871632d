// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! clientgen specs: datastore layout round-trips.

use crate::prelude::*;
use serde_json::Value;

#[test]
fn generator_populates_the_sharded_datastore() {
    let temp = tempfile::tempdir().unwrap();
    let data = temp.path().join("data");

    let datastore = data.display().to_string();
    let output = clientgen()
        .args(["--datastore", datastore.as_str(), "--clients", "3"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Simulating 3 clients"));

    for leaf in ["000", "001", "002"] {
        let path = data.join("000/000").join(leaf).join("sysinfo.json");
        assert!(path.is_file(), "missing {}", path.display());

        let info: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        for key in ["arch", "cpus", "hostname", "mem_total", "sockets", "uname", "uuid"] {
            assert!(info.get(key).is_some(), "missing {key} in {}", path.display());
        }
        // profile payloads are content-addressed
        assert_eq!(info["pci_data"]["digest"].as_str().unwrap().len(), 64);
        assert_eq!(info["mod_data"]["digest"].as_str().unwrap().len(), 64);
    }

    let stats: Value =
        serde_json::from_slice(&std::fs::read(data.join("HwInfoStats.json")).unwrap()).unwrap();
    assert_eq!(stats["clients"], 3);
}

#[test]
fn generator_reruns_overwrite_in_place() {
    let temp = tempfile::tempdir().unwrap();
    let data = temp.path().join("data");
    let datastore = data.display().to_string();
    let args = ["--datastore", datastore.as_str(), "--clients", "2"];

    assert!(clientgen().args(args).output().unwrap().status.success());
    let first: Value = serde_json::from_slice(
        &std::fs::read(data.join("000/000/000/sysinfo.json")).unwrap(),
    )
    .unwrap();

    assert!(clientgen().args(args).output().unwrap().status.success());
    let second: Value = serde_json::from_slice(
        &std::fs::read(data.join("000/000/000/sysinfo.json")).unwrap(),
    )
    .unwrap();

    // fresh generation, same identity scheme
    assert_eq!(first["hostname"].as_str().unwrap().split('-').next_back(), Some("0"));
    assert_eq!(second["hostname"].as_str().unwrap().split('-').next_back(), Some("0"));
    assert_ne!(first["uuid"], second["uuid"]);
}
