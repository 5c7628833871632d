// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cs_scc::{FakeApi, FakeCall};
use cs_store::ClientStore;
use serde_json::json;

struct Harness {
    _dir: tempfile::TempDir,
    config: ActionConfig,
    api: FakeApi,
}

impl Harness {
    /// Proxy-mode harness; the subscriptions/info precheck is skipped
    /// unless a test clears `scc_host`.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = ClientStore::init(dir.path().join("data")).unwrap();
        let config = ActionConfig {
            app_name: "clientctl".to_string(),
            app_version: "0.2.0".to_string(),
            pref_lang: "en".to_string(),
            scc_host: "https://rmt.example.test".to_string(),
            certificate: None,
            regcode: "INTERNAL-USE-ONLY".to_string(),
            inst_data: "<document>{}</document>".to_string(),
            product: "SLES".to_string(),
            version: "15.7".to_string(),
            arch: "x86_64".to_string(),
            trace: false,
            no_data_profiles: false,
            store,
        };
        Self { _dir: dir, config, api: FakeApi::new() }
    }

    fn write_sys_info(&self, id: FileId, hostname: &str) {
        let payload = json!({
            "arch": "x86_64",
            "cpus": 2,
            "hostname": hostname,
            "mem_total": 512,
            "sockets": 1,
            "uname": format!("Simulated tiny client {hostname}"),
            "uuid": "f5a3c839-cd28-4965-9b2b-0e90e08d71e2",
            "pci_data": {"digest": "p", "data": "00:04.0 NVMe"},
            "mod_data": {"digest": "m", "data": ["ena"]},
        });
        self.config
            .store
            .write(id, cs_core::FileType::SysInfo, &serde_json::to_vec(&payload).unwrap(), 0o644)
            .unwrap();
    }

    fn reg_info(&self, id: FileId) -> RegInfo {
        RegInfo::load(id, &self.config.store).unwrap()
    }
}

#[tokio::test]
async fn register_persists_issued_credentials() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");

    register_client(id, &h.config, &h.api).await.unwrap();

    let reg_info = h.reg_info(id);
    assert_eq!(reg_info.scc_creds.system_login, "SCC_tiny-0");
    assert!(!reg_info.scc_creds.password.is_empty());
}

#[tokio::test]
async fn register_fails_without_system_information() {
    let h = Harness::new();
    let err = register_client(FileId(0), &h.config, &h.api).await.unwrap_err();
    assert!(matches!(err, ActionError::SysInfoRead { .. }));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn register_over_existing_registration_fails_without_mutation() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    register_client(id, &h.config, &h.api).await.unwrap();
    let before = h.reg_info(id);

    let err = register_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(err.to_string().contains("client already registered"));
    assert_eq!(h.reg_info(id), before);

    // only the first attempt reached the service
    assert_eq!(
        h.api.calls().iter().filter(|c| matches!(c, FakeCall::Register { .. })).count(),
        1
    );
}

#[tokio::test]
async fn activation_failure_compensates_with_one_deregister() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    h.api.fail_activate("no subscription for product");

    let err = register_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(err.to_string().contains("no subscription for product"));
    assert!(matches!(err, ActionError::Activate { .. }));

    assert!(!RegInfo::exists(id, &h.config.store));
    assert_eq!(h.api.deregister_count(), 1);
}

#[tokio::test]
async fn proxy_mode_skips_the_subscription_precheck() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    // would fail the action if it were consulted
    h.api.fail_subscription_info("precheck must not run");

    register_client(id, &h.config, &h.api).await.unwrap();
    assert!(!h.api.calls().contains(&FakeCall::SubscriptionInfo));
}

#[tokio::test]
async fn direct_mode_runs_the_precheck_first() {
    let mut h = Harness::new();
    h.config.scc_host = String::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");

    register_client(id, &h.config, &h.api).await.unwrap();
    assert_eq!(h.api.calls().first(), Some(&FakeCall::SubscriptionInfo));
}

#[tokio::test]
async fn failed_precheck_aborts_the_registration() {
    let mut h = Harness::new();
    h.config.scc_host = String::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    h.api.fail_subscription_info("bad regcode");

    let err = register_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(matches!(err, ActionError::Precheck { .. }));
    assert!(!RegInfo::exists(id, &h.config.store));
    assert_eq!(h.api.calls(), vec![FakeCall::SubscriptionInfo]);
}

#[tokio::test]
async fn update_without_registration_fails() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");

    let err = update_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(err.to_string().contains("client not registered"));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn update_persists_rotated_credentials() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    register_client(id, &h.config, &h.api).await.unwrap();

    h.api.rotate_token("tok-rotated");
    update_client(id, &h.config, &h.api).await.unwrap();

    assert_eq!(h.reg_info(id).scc_creds.system_token, "tok-rotated");
}

#[tokio::test]
async fn rejected_heartbeat_clears_the_registration() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    register_client(id, &h.config, &h.api).await.unwrap();

    h.api.set_status(cs_scc::SystemStatus::Unknown);
    let err = update_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(matches!(err, ActionError::HeartbeatRejected { .. }));
    assert!(!RegInfo::exists(id, &h.config.store));
}

#[tokio::test]
async fn failed_status_call_keeps_the_registration() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    register_client(id, &h.config, &h.api).await.unwrap();

    h.api.fail_status("service unavailable");
    let err = update_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(matches!(err, ActionError::Status { .. }));
    assert!(RegInfo::exists(id, &h.config.store));
}

#[tokio::test]
async fn deregister_removes_the_registration() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    register_client(id, &h.config, &h.api).await.unwrap();

    deregister_client(id, &h.config, &h.api).await.unwrap();
    assert!(!RegInfo::exists(id, &h.config.store));
    assert_eq!(h.api.deregister_count(), 1);
}

#[tokio::test]
async fn deregister_clears_state_even_when_the_remote_call_fails() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");
    register_client(id, &h.config, &h.api).await.unwrap();

    h.api.fail_deregister("connection reset");
    let err = deregister_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(matches!(err, ActionError::Deregister { .. }));
    assert!(!RegInfo::exists(id, &h.config.store));
}

#[tokio::test]
async fn deregister_without_registration_fails() {
    let h = Harness::new();
    let id = FileId(0);
    h.write_sys_info(id, "tiny-0");

    let err = deregister_client(id, &h.config, &h.api).await.unwrap_err();
    assert!(err.to_string().contains("client not registered"));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn full_lifecycle_round_trip() {
    let h = Harness::new();
    let id = FileId(3);
    h.write_sys_info(id, "medium-3");

    register_client(id, &h.config, &h.api).await.unwrap();
    update_client(id, &h.config, &h.api).await.unwrap();
    deregister_client(id, &h.config, &h.api).await.unwrap();

    assert!(!RegInfo::exists(id, &h.config.store));
    let kinds: Vec<_> = h.api.calls();
    assert!(matches!(kinds[0], FakeCall::Register { .. }));
    assert!(matches!(kinds[1], FakeCall::Activate { .. }));
    assert!(matches!(kinds[2], FakeCall::Status { .. }));
    assert_eq!(kinds[3], FakeCall::Deregister);
}
