//! Integration tests for ConfigStore and the dlc section rewrite
//!
//! These tests verify:
//! - Loading and appid lookup against real files
//! - Full replacement of the dlc section (no stale keys survive)
//! - Preservation of unrelated sections and keys
//! - Idempotent rewrites (same records -> identical file content)

use camino::Utf8PathBuf;
use creamapi_dlc_updater::models::DlcRecord;
use creamapi_dlc_updater::ConfigStore;
use std::fs;
use tempfile::TempDir;

fn create_test_config(contents: &str) -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().join("cream_api.ini")).unwrap();
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn sample_records() -> Vec<DlcRecord> {
    vec![
        DlcRecord {
            id: 9980,
            name: "Lost Coast".to_string(),
        },
        DlcRecord {
            id: 323140,
            name: "Half-Life 2: Update".to_string(),
        },
    ]
}

#[test]
fn test_load_and_read_appid() {
    let (_temp_dir, path) = create_test_config("[steam]\nappid = 220\nforceoffline = false\n");
    let store = ConfigStore::load(&path).unwrap();

    assert_eq!(store.appid().unwrap(), "220");
    assert_eq!(store.path(), &path);
}

#[test]
fn test_rewrite_replaces_stale_dlc_entries() {
    // dlc section left over from a different appid
    let (_temp_dir, path) = create_test_config(
        "[steam]\nappid = 220\n\n[dlc]\n570 = Dota 2\n730 = Counter-Strike 2\n",
    );

    let mut store = ConfigStore::load(&path).unwrap();
    store.replace_dlc_section(&sample_records());
    store.save().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(
        reloaded.dlc_entries(),
        vec![
            ("9980".to_string(), "Lost Coast".to_string()),
            ("323140".to_string(), "Half-Life 2: Update".to_string()),
        ]
    );

    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("Dota 2"));
    assert!(!raw.contains("730"));
}

#[test]
fn test_rewrite_preserves_unrelated_sections() {
    let (_temp_dir, path) = create_test_config(
        "[steam]\nappid = 220\nlanguage = english\n\n[steam_misc]\ndisableuserinterface = false\n",
    );

    let mut store = ConfigStore::load(&path).unwrap();
    store.replace_dlc_section(&sample_records());
    store.save().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(reloaded.appid().unwrap(), "220");

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("language"));
    assert!(raw.contains("steam_misc"));
    assert!(raw.contains("disableuserinterface"));
}

#[test]
fn test_rewrite_is_idempotent() {
    let (_temp_dir, path) = create_test_config("[steam]\nappid = 220\n");

    let records = sample_records();

    let mut store = ConfigStore::load(&path).unwrap();
    store.replace_dlc_section(&records);
    store.save().unwrap();
    let first_pass = fs::read_to_string(&path).unwrap();

    // Second run over the already-updated file with unchanged remote state
    let mut store = ConfigStore::load(&path).unwrap();
    store.replace_dlc_section(&records);
    store.save().unwrap();
    let second_pass = fs::read_to_string(&path).unwrap();

    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_failed_load_leaves_no_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().join("missing.ini")).unwrap();

    assert!(ConfigStore::load(&path).is_err());
    assert!(!path.as_std_path().exists());
}
