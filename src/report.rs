//! 抽出結果のレポート
//!
//! カテゴリ別件数、サンプル、疑わしいカテゴリの警告を表示する。

use divi_catalog_common::{Catalog, ScrapeOutcome};

/// これより長いカテゴリは疑わしいとみなす（文字数）
const SUSPICIOUS_LENGTH: usize = 40;

/// 疑わしいカテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousCategory {
    pub item: String,
    pub category: String,
}

/// 長すぎる、またはDivi名と同じカテゴリを列挙
pub fn find_suspicious(catalog: &Catalog) -> Vec<SuspiciousCategory> {
    catalog
        .items()
        .flat_map(|item| {
            item.categories
                .iter()
                .filter(move |cat| cat.chars().count() > SUSPICIOUS_LENGTH || *cat == item.name)
                .map(move |cat| SuspiciousCategory {
                    item: item.name.clone(),
                    category: cat.to_string(),
                })
        })
        .collect()
}

/// レポート本文を組み立てる
pub fn build_report(outcome: &ScrapeOutcome, catalog: &Catalog, samples: usize) -> String {
    let mut out = String::new();
    let stats = &outcome.stats;

    out.push_str(&format!("Divi数: {}\n", catalog.len()));
    out.push_str(&format!("URL数: {}\n", outcome.url_count()));
    out.push_str(&format!(
        "レコード: {} (解析不能 {}, カテゴリなし {})\n",
        stats.records, stats.unparseable, stats.without_category_field
    ));

    let counts = catalog.count_by_category();
    out.push_str(&format!("\nカテゴリ数: {}\n", counts.len()));
    for (category, count) in &counts {
        out.push_str(&format!("  - {} ({} divis)\n", category, count));
    }

    if !stats.lenient_categories.is_empty() {
        out.push_str("\n語彙にないカテゴリ（寛容モードで採用）:\n");
        for category in &stats.lenient_categories {
            out.push_str(&format!("  - {}\n", category));
        }
    }
    if stats.rejected_tokens > 0 {
        out.push_str(&format!("\n不採用トークン: {}\n", stats.rejected_tokens));
    }

    if samples > 0 {
        out.push_str(&format!("\nサンプル（先頭{}件）:\n", samples));
        for item in catalog.items().take(samples) {
            out.push_str(&format!("  {}: {}\n", item.name, item.categories.join(", ")));
        }
    }

    let suspicious = find_suspicious(catalog);
    if !suspicious.is_empty() {
        out.push_str("\n疑わしいカテゴリ:\n");
        for s in &suspicious {
            out.push_str(&format!("  警告: {} のカテゴリ: {}\n", s.item, s.category));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use divi_catalog_common::Item;

    #[test]
    fn test_find_suspicious() {
        let mut a = Item::new("Knieprothese");
        a.categories.extend(["Orthopedie", "Knieprothese"]);
        let mut b = Item::new("Lang");
        b.categories.insert("Een hele lange omschrijving die geen categorie is");

        let catalog = Catalog::from_items(vec![a, b]);
        let suspicious = find_suspicious(&catalog);

        assert_eq!(suspicious.len(), 2);
        assert_eq!(suspicious[0].item, "Knieprothese");
        assert_eq!(suspicious[0].category, "Knieprothese");
        assert_eq!(suspicious[1].item, "Lang");
    }

    #[test]
    fn test_build_report_sections() {
        let mut a = Item::new("Hartfalen");
        a.categories.insert("Cardiologie");
        let catalog = Catalog::from_items(vec![a]);
        let outcome = ScrapeOutcome::default();

        let report = build_report(&outcome, &catalog, 5);
        assert!(report.contains("Divi数: 1"));
        assert!(report.contains("  - Cardiologie (1 divis)"));
        assert!(report.contains("  Hartfalen: Cardiologie"));
        assert!(!report.contains("疑わしいカテゴリ"));
    }
}
