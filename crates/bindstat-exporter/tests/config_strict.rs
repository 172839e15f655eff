#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use bindstat_core::ErrorKind;
use bindstat_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
bind:
  stats_uri: "http://ns1:8053/"
  timeuot_ms: 5000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:9119");
    assert_eq!(cfg.exporter.metrics_path, "/metrics");
    assert_eq!(cfg.bind.stats_uri, "http://localhost:8053/");
    assert_eq!(cfg.bind.timeout(), Duration::from_secs(10));
    assert_eq!(cfg.bind.groups, vec!["mem", "server", "net", "zones"]);
    assert!(!cfg.bind.cache_version);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
exporter:
  listen: "127.0.0.1:9200"
  metrics_path: "/bind/metrics"
bind:
  stats_uri: "https://ns1.example.net:8053"
  timeout_ms: 2500
  groups: [server, tasks]
  cache_version: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.exporter.listen_addr().unwrap().port(), 9200);
    assert_eq!(cfg.bind.timeout(), Duration::from_millis(2500));
    assert_eq!(cfg.bind.groups, vec!["server", "tasks"]);
    assert!(cfg.bind.cache_version);
}

#[test]
fn rejects_invalid_values() {
    let cases = [
        "version: 2\n",
        "version: 1\nexporter:\n  listen: \"not-an-addr\"\n",
        "version: 1\nexporter:\n  metrics_path: \"metrics\"\n",
        "version: 1\nexporter:\n  metrics_path: \"/healthz\"\n",
        "version: 1\nbind:\n  stats_uri: \"ftp://ns1/\"\n",
        "version: 1\nbind:\n  stats_uri: \"http://\"\n",
        "version: 1\nbind:\n  timeout_ms: 10\n",
        "version: 1\nbind:\n  groups: []\n",
        "version: 1\nbind:\n  groups: [\"server/x\"]\n",
    ];
    for case in cases {
        let err = config::load_from_str(case).expect_err(case);
        assert_eq!(err.kind(), ErrorKind::Config, "{case}");
    }
}

#[test]
fn config_path_precedence() {
    assert_eq!(
        config::resolve_path(Some("a.yaml".into()), Some("b.yaml".into())),
        "a.yaml"
    );
    assert_eq!(config::resolve_path(None, Some("b.yaml".into())), "b.yaml");
    assert_eq!(config::resolve_path(None, None), config::DEFAULT_CONFIG_PATH);
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}
