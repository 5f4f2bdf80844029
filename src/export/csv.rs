//! CSV出力
//!
//! 旧一覧表と同じく UTF-8 BOM 付き、必要な場合のみ引用符、CRLF改行。

use crate::error::{CatalogError, Result};
use divi_catalog_common::Table;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 表をCSVのバイト列に変換
pub fn table_to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());

    for record in table.records() {
        writer.write_record(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| CatalogError::Io(e.into_error()))
}
