//! 出力生成（純粋関数）
//!
//! カタログから表形式データ・HTMLを生成する。ファイル書き込みはCLI側で行う。

pub mod overview;
pub mod summary;
pub mod detail;
pub mod html;

use serde::Serialize;

/// 表形式の出力（ヘッダー + 行）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// ヘッダーを含む全レコード
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(|r| r.as_slice()))
    }

    /// 列数（ヘッダー基準）
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

pub use detail::detail_table;
pub use html::{render_html, HtmlOptions};
pub use overview::{overview_table, OverviewVariant};
pub use summary::{category_index, summary_table};
