//! 設定ファイルテスト

use brand_match::config::Config;
use tempfile::tempdir;

#[test]
fn test_missing_config_is_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.threshold, 75);
    assert_eq!(config.top_n, 5);
}

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        threshold: 85,
        top_n: 3,
        brand_column: Some("Manufacturer".into()),
        ..Default::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid }").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_out_of_range_config_rejected_before_matching() {
    let config = Config { threshold: 120, ..Default::default() };
    assert!(config.match_settings(None, None).is_err());
    // CLI引数で正しい値を指定すれば上書きされる
    assert!(config.match_settings(Some(70), None).is_ok());
}
