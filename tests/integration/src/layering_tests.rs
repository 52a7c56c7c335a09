//! End-to-end tests: layered file and in-memory sources built into one
//! configuration.

use nestconf::{ConfigBuilder, FileSource, MapSource, MergeStrategy, SourceError};
use nestconf_test_utils::{ConfigDir, JsonParser, TextParser, TomlParser};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, PartialEq, Deserialize)]
struct ServerSettings {
    host: String,
    port: u16,
    #[serde(default)]
    features: Vec<String>,
}

const DEFAULTS_TOML: &str = r#"
[server]
host = "127.0.0.1"
port = 8080
features = ["metrics", "tracing"]

[database]
url = "postgres://localhost/app"
pool = 5
"#;

const OVERRIDES_JSON: &str = r#"{
  "server": {"port": 9090, "features": ["tracing", "admin"]},
  "database": {"pool": 20}
}"#;

#[test]
fn layered_files_replace_lists_by_default() {
    init_tracing();
    let dir = ConfigDir::new();
    let defaults = dir.write("config/defaults.toml", DEFAULTS_TOML);
    let overrides = dir.write("config/local.json", OVERRIDES_JSON);

    let config = ConfigBuilder::new()
        .add_source(FileSource::new(defaults, TomlParser))
        .add_source(FileSource::new(overrides, JsonParser))
        .build()
        .unwrap();

    assert_eq!(
        config.all(),
        json!({
            "server": {"host": "127.0.0.1", "port": 9090, "features": ["tracing", "admin"]},
            "database": {"url": "postgres://localhost/app", "pool": 20}
        })
    );
}

#[test]
fn layered_files_merge_lists_when_requested() {
    init_tracing();
    let dir = ConfigDir::new();
    let defaults = dir.write("defaults.toml", DEFAULTS_TOML);
    let overrides = dir.write("local.json", OVERRIDES_JSON);

    let config = ConfigBuilder::new()
        .add_source(FileSource::new(defaults, TomlParser))
        .add_source(FileSource::new(overrides, JsonParser))
        .build_with(MergeStrategy::MergeIndexed)
        .unwrap();

    let server: ServerSettings = config.get_as("server").unwrap().unwrap();
    assert_eq!(
        server,
        ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 9090,
            features: vec!["metrics".into(), "tracing".into(), "admin".into()],
        }
    );
}

#[test]
fn plugin_files_mount_under_their_section() {
    init_tracing();
    let dir = ConfigDir::new();
    let defaults = dir.write("defaults.toml", DEFAULTS_TOML);
    let audit = dir.write("plugins/audit.json", r#"{"enabled": true, "sink": "syslog"}"#);
    let motd = dir.write("motd.txt", "Welcome");

    let config = ConfigBuilder::new()
        .add_source(FileSource::new(defaults, TomlParser))
        .add_source_at(FileSource::new(audit, JsonParser), "plugins.audit")
        .add_source_at(FileSource::new(motd, TextParser), "server.banner")
        .build()
        .unwrap();

    assert_eq!(config.get("plugins.audit.sink"), Some(&json!("syslog")));
    assert_eq!(config.get("server.banner.content"), Some(&json!("Welcome")));
    assert_eq!(config.get("server.port"), Some(&json!(8080)));
}

#[test]
fn runtime_overrides_win_over_files() {
    init_tracing();
    let dir = ConfigDir::new();
    let defaults = dir.write("defaults.toml", DEFAULTS_TOML);
    let runtime = MapSource::try_from(json!({"server": {"host": "0.0.0.0"}})).unwrap();

    let mut config = ConfigBuilder::new()
        .add_source(FileSource::new(defaults, TomlParser))
        .add_source(runtime)
        .build()
        .unwrap();

    assert_eq!(config.get("server.host"), Some(&json!("0.0.0.0")));

    config.remove("database.pool");
    config.set("database.replica.url", "postgres://replica/app");
    assert_eq!(
        config.get("database"),
        Some(&json!({
            "url": "postgres://localhost/app",
            "replica": {"url": "postgres://replica/app"}
        }))
    );
}

#[test]
fn missing_file_fails_the_whole_build() {
    init_tracing();
    let dir = ConfigDir::new();
    let defaults = dir.write("defaults.toml", DEFAULTS_TOML);
    let missing = dir.missing("local.json");

    let err = ConfigBuilder::new()
        .add_source(FileSource::new(defaults, TomlParser))
        .add_source(FileSource::new(&missing, JsonParser))
        .build()
        .unwrap_err();

    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains(&missing.display().to_string()));
}

#[test]
fn malformed_file_fails_with_format_error() {
    init_tracing();
    let dir = ConfigDir::new();
    let broken = dir.write("broken.toml", "[server\nport = ");

    let err = ConfigBuilder::new()
        .add_source(FileSource::new(broken, TomlParser))
        .build()
        .unwrap_err();

    assert!(matches!(err, SourceError::Format { ref format, .. } if format == "TOML"));
}
