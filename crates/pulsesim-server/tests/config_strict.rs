#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pulsesim_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listan: "0.0.0.0:8080" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}

#[test]
fn rejects_unsupported_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_unparseable_listen() {
    let bad = r#"
version: 1
server:
  listen: "not-an-address"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}
