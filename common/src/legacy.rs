//! 旧一覧表（手作業で管理されたDivi一覧）の解析
//!
//! 1列目がDivi名、2列目以降がカテゴリまたはフラグ。
//! Partner/PDF フラグの取得と、スクレイプにカテゴリがない場合の補完に使う。

use std::collections::BTreeMap;

pub const PARTNER_MARKER: &str = "Partner Divi";
pub const PDF_MARKER: &str = "PDF";
pub const PDF_PARTNER_MARKER: &str = "PDF, Partner Divi";

/// ヘッダー行の1列目
const HEADER_NAME: &str = "Divi";
/// 空セルを表す記号
const EMPTY_CELL: &str = "-";

/// 旧一覧表の1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyEntry {
    pub name: String,
    /// フラグ以外のセル
    pub categories: Vec<String>,
    pub partner: bool,
    pub pdf: bool,
}

impl LegacyEntry {
    fn from_cells(name: &str, cells: &[String]) -> Self {
        let mut entry = Self {
            name: name.to_string(),
            ..Default::default()
        };

        for cell in cells {
            let cell = cell.trim();
            if cell.is_empty() || cell == EMPTY_CELL {
                continue;
            }

            if cell.contains(PARTNER_MARKER) {
                entry.partner = true;
            }
            if cell.contains(PDF_MARKER) && !cell.contains("Partner") {
                entry.pdf = true;
            } else if cell.contains(PDF_PARTNER_MARKER) {
                entry.pdf = true;
                entry.partner = true;
            }

            if ![PARTNER_MARKER, PDF_MARKER, PDF_PARTNER_MARKER].contains(&cell) {
                entry.categories.push(cell.to_string());
            }
        }

        entry
    }
}

/// 旧一覧表全体
#[derive(Debug, Clone, Default)]
pub struct LegacyOverview {
    entries: BTreeMap<String, LegacyEntry>,
    /// スキップした行数（空行・ヘッダー）
    skipped_rows: usize,
}

impl LegacyOverview {
    /// 行データから構築
    ///
    /// 同名の行が複数ある場合、カテゴリは後の行で置き換え、フラグは累積する。
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: AsRef<[String]>,
    {
        let mut overview = Self::default();

        for row in rows {
            let row = row.as_ref();
            let name = row.first().map(|c| c.trim()).unwrap_or_default();
            if name.is_empty() || name == HEADER_NAME {
                overview.skipped_rows += 1;
                continue;
            }

            let parsed = LegacyEntry::from_cells(name, &row[1..]);
            match overview.entries.get_mut(name) {
                Some(existing) => {
                    existing.partner |= parsed.partner;
                    existing.pdf |= parsed.pdf;
                    existing.categories = parsed.categories;
                }
                None => {
                    overview.entries.insert(name.to_string(), parsed);
                }
            }
        }

        overview
    }

    pub fn get(&self, name: &str) -> Option<&LegacyEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LegacyEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn partner_count(&self) -> usize {
        self.entries.values().filter(|e| e.partner).count()
    }

    pub fn pdf_count(&self) -> usize {
        self.entries.values().filter(|e| e.pdf).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_skip_header_and_empty_rows() {
        let overview = LegacyOverview::from_rows(vec![
            row(&["Divi", "Type", "Type"]),
            row(&[]),
            row(&["", "Cardiologie"]),
            row(&["Hartfalen", "Cardiologie"]),
        ]);

        assert_eq!(overview.len(), 1);
        assert_eq!(overview.skipped_rows(), 3);
        assert_eq!(overview.get("Hartfalen").unwrap().categories, vec!["Cardiologie"]);
    }

    #[test]
    fn test_flags() {
        let overview = LegacyOverview::from_rows(vec![
            row(&["Partner A", "Partner Divi", "-"]),
            row(&["Folder B", "", "PDF"]),
            row(&["Beide C", "", "PDF, Partner Divi"]),
            row(&["Gewoon D", "KNO", "-"]),
        ]);

        let a = overview.get("Partner A").unwrap();
        assert!(a.partner && !a.pdf);
        assert!(a.categories.is_empty());

        let b = overview.get("Folder B").unwrap();
        assert!(b.pdf && !b.partner);

        let c = overview.get("Beide C").unwrap();
        assert!(c.pdf && c.partner);
        assert!(c.categories.is_empty());

        let d = overview.get("Gewoon D").unwrap();
        assert!(!d.pdf && !d.partner);
        assert_eq!(d.categories, vec!["KNO"]);

        assert_eq!(overview.partner_count(), 2);
        assert_eq!(overview.pdf_count(), 2);
    }

    #[test]
    fn test_marker_inside_category_cell_sets_flag_and_keeps_category() {
        let overview = LegacyOverview::from_rows(vec![row(&["X", "Partner Divi (extern)"])]);
        let x = overview.get("X").unwrap();

        assert!(x.partner);
        assert_eq!(x.categories, vec!["Partner Divi (extern)"]);
    }

    #[test]
    fn test_duplicate_rows_replace_categories_and_accumulate_flags() {
        let overview = LegacyOverview::from_rows(vec![
            row(&["A", "KNO", "PDF"]),
            row(&["A", "Urologie", "Partner Divi"]),
        ]);

        assert_eq!(overview.len(), 1);
        let a = overview.get("A").unwrap();
        assert_eq!(a.categories, vec!["Urologie"]);
        assert!(a.partner);
        assert!(a.pdf);
    }

    #[test]
    fn test_trims_names_and_cells() {
        let overview = LegacyOverview::from_rows(vec![row(&["  Griep  ", "  Huisarts "])]);
        assert_eq!(overview.get("Griep").unwrap().categories, vec!["Huisarts"]);
    }
}
