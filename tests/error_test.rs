//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use brand_match::error::BrandMatchError;
use brand_match::input;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = input::read_table(Path::new("/nonexistent/path/12345.xlsx"), None);
    assert!(matches!(result, Err(BrandMatchError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_read_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("brands.txt");
    std::fs::write(&path, "brand\nAcme\n").unwrap();

    let result = input::read_table(&path, None);
    assert!(matches!(result, Err(BrandMatchError::UnsupportedFormat(_))));
}

/// 空のCSV（ヘッダーなし）
#[test]
fn test_read_empty_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let result = input::read_table(&path, None);
    assert!(matches!(result, Err(BrandMatchError::EmptyTable(_))));
}

/// 壊れたExcelファイル
#[test]
fn test_read_corrupt_xlsx() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"not a zip file").unwrap();

    let result = input::read_table(&path, None);
    assert!(matches!(result, Err(BrandMatchError::Spreadsheet(_))));
}

/// BrandMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BrandMatchError::Config("テスト設定エラー".to_string()),
        BrandMatchError::FileNotFound("brands.xlsx".to_string()),
        BrandMatchError::UnsupportedFormat("brands.txt".to_string()),
        BrandMatchError::Spreadsheet("壊れたファイル".to_string()),
        BrandMatchError::ColumnNotFound { column: "brand".into(), available: "a, b".into() },
        BrandMatchError::EmptyTable("empty.csv".to_string()),
        BrandMatchError::ExcelGeneration("Excel生成エラー".to_string()),
        BrandMatchError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BrandMatchError = io_err.into();

    assert!(matches!(err, BrandMatchError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = brand_match_common::MatchSettings::new(200, 5).unwrap_err();
    let err: BrandMatchError = common_err.into();

    assert!(matches!(err, BrandMatchError::Common(_)));
    assert!(format!("{}", err).contains("200"));
}
