//! 入力ファイルの読み込み
//!
//! - スクレイプCSV: 全体を文字列として読み込む（BOM除去）
//! - 旧一覧表: CSV または Excel（先頭シート）を行データとして読み込む

mod workbook;

use crate::error::{CatalogError, Result};
use divi_catalog_common::LegacyOverview;
use std::path::Path;

const BOM: char = '\u{feff}';

/// 旧一覧表として受け付ける拡張子
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    ensure_exists(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(match content.strip_prefix(BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// スクレイプCSVを読み込む
pub fn read_scrape(path: &Path) -> Result<String> {
    read_text(path)
}

/// CSV文字列を行データに変換（列数は行ごとに可変）
pub fn parse_csv_rows(content: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| w.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// 旧一覧表を読み込む
pub fn read_legacy(path: &Path) -> Result<LegacyOverview> {
    let rows = if is_workbook(path) {
        ensure_exists(path)?;
        workbook::read_first_sheet(path)?
    } else if is_csv(path) {
        parse_csv_rows(&read_text(path)?)?
    } else {
        return Err(CatalogError::UnsupportedInput(path.display().to_string()));
    };

    let overview = LegacyOverview::from_rows(rows);
    tracing::debug!(
        entries = overview.len(),
        skipped = overview.skipped_rows(),
        "legacy overview parsed"
    );
    Ok(overview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_rows_flexible() {
        let rows = parse_csv_rows("Divi,Type,Type\nA,\"Mond-, kaak- en aangezichtschirurgie\"\nB\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][1], "Mond-, kaak- en aangezichtschirurgie");
        assert_eq!(rows[2], vec!["B"]);
    }

    #[test]
    fn test_is_workbook() {
        assert!(is_workbook(Path::new("overzicht.xlsx")));
        assert!(is_workbook(Path::new("OVERZICHT.XLSX")));
        assert!(!is_workbook(Path::new("overzicht.csv")));
        assert!(!is_workbook(Path::new("overzicht")));
    }

    #[test]
    fn test_read_scrape_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrape.csv");
        std::fs::write(&path, "\u{feff}\"1765314254-1\",\"x\"").unwrap();

        let text = read_scrape(&path).unwrap();
        assert!(text.starts_with("\"1765314254-1\""));
    }

    #[test]
    fn test_read_scrape_not_found() {
        let result = read_scrape(Path::new("/nonexistent/scrape.csv"));
        assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
    }

    #[test]
    fn test_read_legacy_unsupported_extension() {
        let result = read_legacy(Path::new("overzicht.txt"));
        assert!(matches!(result, Err(CatalogError::UnsupportedInput(_))));
    }
}
