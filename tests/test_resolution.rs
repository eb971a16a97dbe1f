//! End-to-end resolution through the public API: settings file on disk →
//! snapshot → resolved server path.

use std::path::PathBuf;

use move_analyzer_config::config::{
    Configuration, HostEnv, SettingsSnapshot, DEFAULT_SERVER_PATH, NAMESPACE, SERVER_PATH_KEY,
};

struct PinnedHost;

impl HostEnv for PinnedHost {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/home/alice"))
    }

    fn current_dir(&self) -> PathBuf {
        PathBuf::from("/proj")
    }
}

fn write_settings(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn configured_relative_path_from_file() {
    let f = write_settings(r#"{ "move-analyzer.server.path": "./ma" }"#);
    let snapshot = SettingsSnapshot::from_document_file(f.path(), NAMESPACE).unwrap();
    let cfg = Configuration::new(snapshot, PinnedHost);
    assert_eq!(cfg.server_path(), PathBuf::from("/proj/ma"));
}

#[test]
fn unrelated_namespaces_fall_back_to_default() {
    let f = write_settings(
        r#"{
            "editor.fontSize": 12,
            "rust-analyzer.server.path": "/somewhere/else"
        }"#,
    );
    let snapshot = SettingsSnapshot::from_document_file(f.path(), NAMESPACE).unwrap();
    assert!(snapshot.is_empty());
    let cfg = Configuration::new(snapshot, PinnedHost);
    assert_eq!(
        cfg.server_path(),
        PathBuf::from("/home/alice/.cargo/bin/move-analyzer")
    );
}

#[test]
fn snapshot_diagnostic_round_trips_through_json() {
    let f = write_settings(r#"{ "move-analyzer.server.path": "~/bin/ma" }"#);
    let snapshot = SettingsSnapshot::from_document_file(f.path(), NAMESPACE).unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&snapshot.to_string()).unwrap();
    assert_eq!(rendered[SERVER_PATH_KEY], "~/bin/ma");
}

#[test]
fn default_literal_is_tilde_prefixed() {
    // The declared default must route through the home-expansion branch.
    assert!(DEFAULT_SERVER_PATH.starts_with("~/"));
    let cfg = Configuration::new(SettingsSnapshot::empty(), PinnedHost);
    assert_eq!(
        cfg.server_path(),
        PathBuf::from("/home/alice").join(&DEFAULT_SERVER_PATH[2..])
    );
}
