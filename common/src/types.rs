//! カタログの型定義
//!
//! - CategorySet: 大文字小文字を無視して重複を拒否するカテゴリ集合
//! - Item: 1件のDivi（名前が主キー）

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// カテゴリ集合
///
/// ソート済みで保持し、大文字小文字だけが異なるラベルの追加は拒否する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet(BTreeSet<String>);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// ラベルを追加（追加された場合 true）
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if label.is_empty() || self.contains_ignore_case(&label) {
            return false;
        }
        self.0.insert(label)
    }

    pub fn contains_ignore_case(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        self.0.iter().any(|existing| existing.to_lowercase() == needle)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 区切り文字で連結（ソート順）
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

impl<S: Into<String>> Extend<S> for CategorySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for label in iter {
            self.insert(label);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for CategorySet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.0.into_iter().collect()
    }
}

/// カテゴリの出所
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySource {
    /// カテゴリなし
    #[default]
    None,
    /// スクレイプから抽出
    Scrape,
    /// 旧一覧表からのフォールバック
    Legacy,
}

/// Divi 1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,

    #[serde(default)]
    pub categories: CategorySet,

    /// 詳細ページURL（スクレイプ由来）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Partner Divi
    #[serde(default)]
    pub partner: bool,

    /// PDF
    #[serde(default)]
    pub pdf: bool,

    #[serde(default)]
    pub category_source: CategorySource,

    /// スクレイプに存在したか
    #[serde(default)]
    pub scraped: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_set_rejects_case_duplicates() {
        let mut set = CategorySet::new();
        assert!(set.insert("Interne Geneeskunde"));
        assert!(!set.insert("interne geneeskunde"));
        assert!(!set.insert("INTERNE GENEESKUNDE"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("Interne Geneeskunde"));
    }

    #[test]
    fn test_category_set_rejects_empty() {
        let mut set = CategorySet::new();
        assert!(!set.insert(""));
        assert!(set.is_empty());
    }

    #[test]
    fn test_category_set_sorted_join() {
        let set: CategorySet = vec!["Urologie", "Cardiologie", "KNO"].into_iter().collect();
        assert_eq!(set.join(", "), "Cardiologie, KNO, Urologie");
    }

    #[test]
    fn test_category_set_deserialize_dedupes() {
        let set: CategorySet = serde_json::from_str(r#"["Oncologie", "oncologie"]"#).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_item_json_roundtrip_fields() {
        let mut item = Item::new("Hartkatheterisatie");
        item.categories.insert("Cardiologie");
        item.partner = true;
        item.category_source = CategorySource::Scrape;

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"categorySource\":\"scrape\""));
        assert!(!json.contains("\"url\""));
    }
}
