// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn options() -> ConnectionOptions {
    ConnectionOptions::default_options("clientctl", "0.2.0", "en")
}

#[test]
fn default_options_point_at_public_endpoint() {
    let opts = options();
    assert_eq!(opts.url, DEFAULT_SCC_URL);
    assert_eq!(opts.pref_lang, "en");
    assert!(opts.certificate.is_none());
}

#[test]
fn connection_builds_without_network_access() {
    let conn = Connection::new(options(), SccCredentials::default()).unwrap();
    assert_eq!(conn.base_url(), DEFAULT_SCC_URL);
}

#[test]
fn invalid_certificate_is_rejected() {
    let mut opts = options();
    opts.certificate = Some(b"not a pem".to_vec());
    assert!(matches!(
        Connection::new(opts, SccCredentials::default()),
        Err(SccError::Certificate(_))
    ));
}

#[test]
fn credential_mutations_are_visible_in_snapshots() {
    let conn = Connection::new(options(), SccCredentials::default()).unwrap();

    conn.set_login("SCC_abc", "secret").unwrap();
    conn.update_token("tok-2").unwrap();

    let snapshot = conn.credentials();
    assert_eq!(snapshot.system_login, "SCC_abc");
    assert_eq!(snapshot.password, "secret");
    assert_eq!(snapshot.system_token, "tok-2");
}

#[test]
fn system_auth_requires_installed_login() {
    let conn = Connection::new(options(), SccCredentials::default()).unwrap();
    let builder = conn.request(Method::GET, "/connect/systems");
    assert!(matches!(conn.with_system_auth(builder), Err(SccError::LoginUnset)));
}
