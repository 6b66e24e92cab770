use super::*;
use crate::style::config::{GradientPalette, StyleExtensions};

#[test]
fn new_store_holds_all_presets() {
    let store = StyleStore::new();
    assert_eq!(
        store.names(),
        ["business", "dark", "gradient", "minimalist", "premium", "professional"]
    );
    assert_eq!(store.get("Premium"), Some(&StylePreset::Premium.config()));
    assert!(store.get("neon").is_none());
}

#[test]
fn save_then_load_restores_custom_styles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styles.json");

    let mut store = StyleStore::new();
    let custom = StyleConfig {
        title: "TEAM TREASURY".to_owned(),
        logo_path: Some("logo.svg".into()),
        extensions: StyleExtensions::gradient(Some(GradientPalette::Royal)),
        ..StyleConfig::default()
    };
    store.add("Treasury", custom.clone());
    store.save_styles(&path).unwrap();

    let mut loaded = StyleStore {
        styles: BTreeMap::new(),
    };
    let n = loaded.load_styles(&path).unwrap();
    assert_eq!(n, 7);
    assert_eq!(loaded, store);
    assert_eq!(loaded.get("treasury"), Some(&custom));
}

#[test]
fn load_rejects_non_object_entries_without_partial_merge() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styles.json");
    std::fs::write(
        &path,
        r#"{"aaa": {"title": "ok"}, "zzz": 3}"#,
    )
    .unwrap();

    let mut store = StyleStore::new();
    let err = store.load_styles(&path).unwrap_err();
    assert!(matches!(err, WalletQrError::InvalidConfig(_)));
    assert!(store.get("aaa").is_none());
}

#[test]
fn load_reports_missing_file() {
    let mut store = StyleStore::new();
    let err = store
        .load_styles(Path::new("definitely/not/here.json"))
        .unwrap_err();
    assert!(err.to_string().contains("open styles file"));
}
