// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cs_scc::DEFAULT_SCC_URL;

fn config(scc_host: &str) -> ActionConfig {
    let dir = std::env::temp_dir();
    ActionConfig {
        app_name: "clientctl".to_string(),
        app_version: "0.2.0".to_string(),
        pref_lang: "en".to_string(),
        scc_host: scc_host.to_string(),
        certificate: None,
        regcode: String::new(),
        inst_data: String::new(),
        product: "SLES".to_string(),
        version: "15.7".to_string(),
        arch: "x86_64".to_string(),
        trace: true,
        no_data_profiles: false,
        store: ClientStore::init(dir).unwrap(),
    }
}

#[yare::parameterized(
    register   = { "register", Action::Register },
    update     = { "Update", Action::Update },
    deregister = { "DEREGISTER", Action::Deregister },
)]
fn actions_parse_case_insensitively(input: &str, expected: Action) {
    assert_eq!(input.parse::<Action>().unwrap(), expected);
}

#[test]
fn unknown_action_lists_the_valid_ones() {
    let err = "heartbeat".parse::<Action>().unwrap_err();
    assert!(err.contains("register,update,deregister"));
}

#[test]
fn display_round_trips_through_parse() {
    for action in [Action::Register, Action::Update, Action::Deregister] {
        assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
    }
}

#[test]
fn empty_scc_host_uses_the_public_endpoint() {
    let config = config("");
    assert!(!config.is_proxy());
    assert_eq!(config.connection_options().url, DEFAULT_SCC_URL);
}

#[test]
fn proxy_host_overrides_the_url() {
    let config = config("https://rmt.example.test");
    assert!(config.is_proxy());
    assert_eq!(config.connection_options().url, "https://rmt.example.test");
}

#[test]
fn credentials_inherit_the_trace_flag() {
    let config = config("");
    assert!(config.fresh_credentials().show_traces);

    let stored = SccCredentials { system_login: "SCC_x".to_string(), ..Default::default() };
    assert!(config.stored_credentials(stored).show_traces);
}
