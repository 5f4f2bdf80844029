//! 完成版一覧表
//!
//! 旧一覧表と同じ構造（Divi名 + Type列）で全Diviを出力する。
//!
//! カテゴリがない行の値は次の優先順位で決まる:
//! カテゴリあり > PDF+Partner > Partnerのみ > PDFのみ > なし

use super::Table;
use crate::catalog::Catalog;
use crate::legacy::{PARTNER_MARKER, PDF_MARKER, PDF_PARTNER_MARKER};
use crate::types::Item;

/// カテゴリ・フラグがないことを示す値
pub const NONE_SENTINEL: &str = "-";

/// 最低列数（Divi, Type, Type）
const MIN_COLUMNS: usize = 3;

/// 一覧表の形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewVariant {
    /// 旧一覧表と同じ列構成
    Plain,
    /// 末尾にURL列を追加
    WithUrl,
}

/// Divi名の後ろに続くセル
pub fn status_cells(item: &Item) -> Vec<String> {
    let mut cells: Vec<String> = Vec::new();

    if item.has_categories() {
        cells.extend(item.categories.iter().map(str::to_string));
        if item.partner {
            cells.push(PARTNER_MARKER.into());
        }
    } else if item.pdf && item.partner {
        cells.push(String::new());
        cells.push(PDF_PARTNER_MARKER.into());
    } else if item.partner {
        cells.push(NONE_SENTINEL.into());
        cells.push(PARTNER_MARKER.into());
    } else if item.pdf {
        cells.push(String::new());
        cells.push(PDF_MARKER.into());
    } else {
        cells.push(NONE_SENTINEL.into());
    }

    cells
}

/// 一覧表を生成
pub fn overview_table(catalog: &Catalog, variant: OverviewVariant) -> Table {
    let mut rows: Vec<Vec<String>> = catalog
        .items()
        .map(|item| {
            let mut row = vec![item.name.clone()];
            row.extend(status_cells(item));
            row
        })
        .collect();

    let width = rows
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMNS);

    for (row, item) in rows.iter_mut().zip(catalog.items()) {
        row.resize(width, String::new());
        if variant == OverviewVariant::WithUrl {
            row.push(item.url.clone().unwrap_or_default());
        }
    }

    let mut header = vec!["Divi".to_string()];
    header.extend(std::iter::repeat("Type".to_string()).take(width - 1));
    if variant == OverviewVariant::WithUrl {
        header.push("URL".into());
    }

    Table { header, rows }
}
