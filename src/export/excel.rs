//! Excel生成（一覧表）

use crate::error::{CatalogError, Result};
use divi_catalog_common::Table;
use rust_xlsxwriter::{Format, Workbook};

const SHEET_NAME: &str = "Worksheet";
const NAME_COL_WIDTH: f64 = 45.0;
const TYPE_COL_WIDTH: f64 = 30.0;

fn excel_err(context: &str, e: impl std::fmt::Display) -> CatalogError {
    CatalogError::ExcelGeneration(format!("{}: {}", context, e))
}

/// 一覧表をExcelのバイト列に変換
///
/// 見出し行は太字で固定し、オートフィルタを設定する。
pub fn table_to_xlsx(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| excel_err("シート名設定エラー", e))?;

    for (col, title) in table.header.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, title, &header_format)
            .map_err(|e| excel_err("見出し書き込みエラー", e))?;
        let width = if col == 0 { NAME_COL_WIDTH } else { TYPE_COL_WIDTH };
        worksheet
            .set_column_width(col, width)
            .map_err(|e| excel_err("列幅設定エラー", e))?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(row_num, col as u16, value)
                .map_err(|e| excel_err("値書き込みエラー", e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| excel_err("ウィンドウ枠固定エラー", e))?;
    if table.width() > 0 {
        worksheet
            .autofilter(0, 0, table.rows.len() as u32, (table.width() - 1) as u16)
            .map_err(|e| excel_err("オートフィルタ設定エラー", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| excel_err("Excel保存エラー", e))
}
