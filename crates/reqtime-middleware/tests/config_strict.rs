#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqtime_middleware::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
metrics:
  host_tag: "web-1"
  campain_keyword: "utm" # typo should fail
influxdb:
  database: "metrics"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_applies_defaults() {
    let ok = r#"
version: 1
metrics:
  host_tag: "web-1"
influxdb:
  database: "metrics"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(!cfg.metrics.disabled);
    assert_eq!(cfg.metrics.campaign_keyword, "campaign");
    assert_eq!(cfg.metrics.secure_proxy_header, None);
    assert_eq!(cfg.influxdb.host, "localhost");
    assert_eq!(cfg.influxdb.port, 8086);
    assert_eq!(cfg.influxdb.timeout_ms, 1000);
    assert!(!cfg.influxdb.ssl);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn enabled_requires_host_tag_and_database() {
    let no_host = r#"
version: 1
influxdb:
  database: "metrics"
"#;
    let err = config::load_from_str(no_host).expect_err("must fail");
    assert!(err.to_string().contains("host_tag"));

    let no_db = r#"
version: 1
metrics:
  host_tag: "web-1"
"#;
    let err = config::load_from_str(no_db).expect_err("must fail");
    assert!(err.to_string().contains("database"));
}

#[test]
fn disabled_skips_backend_validation() {
    let cfg = config::load_from_str("version: 1\nmetrics:\n  disabled: true\n").expect("must parse");
    assert!(cfg.metrics.disabled);
}

#[test]
fn timeout_out_of_range() {
    let bad = r#"
version: 1
metrics: { host_tag: "web-1" }
influxdb: { database: "metrics", timeout_ms: 0 }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn measurement_name_prefix() {
    let mut cfg = config::load_from_str("version: 1\nmetrics:\n  disabled: true\n").unwrap();
    assert_eq!(cfg.metrics.measurement_name_for("request"), "request");
    cfg.metrics.measurement_prefix = "django".into();
    assert_eq!(cfg.metrics.measurement_name_for("request"), "django_request");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/nonexistent/reqtime.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}

#[test]
fn config_path_precedence() {
    assert_eq!(
        config::resolve_path(Some("cli.yaml".into()), Some("env.yaml".into())),
        "cli.yaml"
    );
    assert_eq!(config::resolve_path(None, Some("env.yaml".into())), "env.yaml");
    assert_eq!(config::resolve_path(Some(String::new()), None), "reqtime.yaml");
    assert_eq!(config::resolve_path(None, None), config::DEFAULT_CONFIG_PATH);
}

#[test]
fn file_errors_carry_path() {
    let path = std::env::temp_dir().join(format!("reqtime-bad-{}.yaml", std::process::id()));
    std::fs::write(&path, "version: 1\nmetrics:\n  bogus: true\n").unwrap();
    let path = path.to_str().unwrap().to_owned();

    let err = config::load_from_file(&path).expect_err("must fail");
    std::fs::remove_file(&path).unwrap();

    assert_eq!(err.code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains(&path), "got {err}");
}
