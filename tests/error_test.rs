//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use divi_catalog::error::CatalogError;
use divi_catalog::input;
use divi_catalog_common::{Vocabulary, VocabularyFile};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないスクレイプCSV
#[test]
fn test_missing_scrape_file() {
    let result = input::read_scrape(Path::new("/nonexistent/path/scrape.csv"));
    assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
}

/// 存在しない旧一覧表（Excel）
#[test]
fn test_missing_legacy_workbook() {
    let result = input::read_legacy(Path::new("/nonexistent/path/overzicht.xlsx"));
    assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_unsupported_legacy_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("overzicht.txt");
    std::fs::write(&path, "Divi,Type\n").unwrap();

    let result = input::read_legacy(&path);
    assert!(matches!(result, Err(CatalogError::UnsupportedInput(_))));
}

/// 壊れたExcelファイル
#[test]
fn test_corrupt_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("overzicht.xlsx");
    std::fs::write(&path, "geen excel").unwrap();

    let result = input::read_legacy(&path);
    assert!(matches!(result, Err(CatalogError::WorkbookRead(_))));
}

/// 空のスクレイプCSVはエラーではない
#[test]
fn test_empty_scrape_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scrape.csv");
    std::fs::write(&path, "").unwrap();

    let text = input::read_scrape(&path).unwrap();
    assert!(text.is_empty());
}

/// 語彙の連鎖シノニムは共通ライブラリのエラーとして伝播する
#[test]
fn test_common_error_conversion() {
    let file = VocabularyFile::from_json(r#"{"synonyms": {"A": "B", "B": "Cardiologie"}}"#).unwrap();
    let err: CatalogError = Vocabulary::with_overrides(&file).unwrap_err().into();

    assert!(matches!(err, CatalogError::Common(_)));
    assert!(!err.to_string().is_empty());
}

/// CatalogErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CatalogError::Config("テスト設定エラー".to_string()),
        CatalogError::FileNotFound("scrape.csv".to_string()),
        CatalogError::UnsupportedInput("overzicht.txt".to_string()),
        CatalogError::WorkbookRead("壊れたファイル".to_string()),
        CatalogError::ExcelGeneration("Excel生成エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}
