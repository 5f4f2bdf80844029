//! スクレイプ抽出パイプライン
//!
//! レコード分割 → フィールド抽出 → カテゴリ正規化 をまとめて実行する。

use crate::category::CategoryNormalizer;
use crate::extractor::{extract_record, ExtractionRules};
use crate::splitter::split_records;
use crate::types::{CategorySource, Item};
use std::collections::BTreeMap;

/// 抽出の統計情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    /// 分割したレコード数
    pub records: usize,
    /// 名前とURLを取得できたレコード数
    pub parsed: usize,
    /// 解析不能でスキップしたレコード数
    pub unparseable: usize,
    /// カテゴリ文字列が見つからなかったレコード数
    pub without_category_field: usize,
    /// 寛容モードで採用した未登録カテゴリ（重複なし、ソート済み）
    pub lenient_categories: Vec<String>,
    /// 不採用トークン数
    pub rejected_tokens: usize,
}

/// 抽出結果
#[derive(Debug, Clone, Default)]
pub struct ScrapeOutcome {
    /// 名前 → Divi
    pub items: BTreeMap<String, Item>,
    pub stats: ScrapeStats,
}

impl ScrapeOutcome {
    /// URLが判明しているDivi数
    pub fn url_count(&self) -> usize {
        self.items.values().filter(|item| item.url.is_some()).count()
    }
}

/// スクレイプCSV全体からDiviを抽出
///
/// 同名のレコードはカテゴリを統合し、URLは後のレコードで上書きする。
pub fn extract_scrape(
    text: &str,
    rules: &ExtractionRules,
    normalizer: &CategoryNormalizer<'_>,
) -> ScrapeOutcome {
    let mut outcome = ScrapeOutcome::default();
    let mut lenient = std::collections::BTreeSet::new();

    for record in split_records(text) {
        outcome.stats.records += 1;

        let Some(extracted) = extract_record(record.body, rules) else {
            tracing::debug!(id = record.id, "unparseable record skipped");
            outcome.stats.unparseable += 1;
            continue;
        };
        outcome.stats.parsed += 1;

        let item = outcome
            .items
            .entry(extracted.name.clone())
            .or_insert_with(|| Item::new(extracted.name.clone()));
        item.scraped = true;
        item.url = Some(extracted.url);

        let Some(raw) = extracted.raw_categories else {
            tracing::debug!(id = record.id, name = %extracted.name, "no category field");
            outcome.stats.without_category_field += 1;
            continue;
        };

        let normalized = normalizer.normalize(&raw, &extracted.name);
        for label in &normalized.rejected {
            tracing::debug!(name = %extracted.name, token = %label, "category token rejected");
        }
        outcome.stats.rejected_tokens += normalized.rejected.len();
        lenient.extend(normalized.lenient);

        item.categories.extend(normalized.categories.iter());
        if item.has_categories() {
            item.category_source = CategorySource::Scrape;
        }
    }

    outcome.stats.lenient_categories = lenient.into_iter().collect();
    outcome
}
