//! スクレイプと旧一覧表の統合
//!
//! - Divi一覧はスクレイプと旧一覧表の和集合（名前順）
//! - フラグは旧一覧表から取得
//! - スクレイプでカテゴリが得られなかった場合のみ旧一覧表のカテゴリで補完

use crate::legacy::LegacyOverview;
use crate::types::{CategorySource, Item};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 統合済みカタログ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: BTreeMap<String, Item>,
}

impl Catalog {
    /// スクレイプ結果と旧一覧表を統合
    pub fn reconcile(scraped: BTreeMap<String, Item>, legacy: &LegacyOverview) -> Self {
        let mut items = scraped;

        for entry in legacy.entries() {
            let item = items
                .entry(entry.name.clone())
                .or_insert_with(|| Item::new(entry.name.clone()));

            item.partner |= entry.partner;
            item.pdf |= entry.pdf;

            if !item.has_categories() && !entry.categories.is_empty() {
                item.categories.extend(entry.categories.iter().map(String::as_str));
                item.category_source = CategorySource::Legacy;
            }
        }

        Self { items }
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|i| (i.name.clone(), i)).collect(),
        }
    }

    /// 名前順に列挙
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn partner_count(&self) -> usize {
        self.items.values().filter(|i| i.partner).count()
    }

    /// カテゴリ別の件数
    pub fn count_by_category(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for label in self.items.values().flat_map(|i| i.categories.iter()) {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }
}
