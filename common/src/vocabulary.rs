//! カテゴリ語彙モジュール
//!
//! 正規カテゴリ一覧と表記ゆれ（同義語）テーブルを管理する。
//! 組み込み語彙にユーザー定義のJSONをマージできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 組み込みの正規カテゴリ
const BUILTIN_CATEGORIES: &[&str] = &[
    "Algemeen",
    "Anesthesiologie en pijnbestrijding",
    "Borstkanker",
    "Cardiologie",
    "Chirurgie",
    "Dermatologie",
    "Fysiotherapie",
    "Geriatrie",
    "Gynaecologie en Verloskunde",
    "Huisarts",
    "Infectieziektebestrijding",
    "Intensive Care",
    "Interne Geneeskunde",
    "KNO",
    "Kindergeneeskunde",
    "Longziekten",
    "Maag-darm-leverziekten",
    "Mond-, kaak- en aangezichtschirurgie",
    "Neonatologie",
    "Neurologie",
    "Nucleaire geneeskunde",
    "Oncologie",
    "Oogheelkunde",
    "Orthopedie",
    "Plastische Chirurgie",
    "Psychiatrie",
    "Radiologie",
    "Reumatologie",
    "Revalidatie",
    "Spoedeisende Hulp en Gipskamer",
    "Urologie",
    "Wetenschappelijk onderzoek",
];

/// 組み込みの同義語（表記ゆれ → 正規表記）
const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("Anesthesie en pijnbestrijding", "Anesthesiologie en pijnbestrijding"),
    ("Gynaecologie en verloskunde", "Gynaecologie en Verloskunde"),
    ("Interne geneeskunde", "Interne Geneeskunde"),
    ("Longgeneeskunde", "Longziekten"),
    ("Radiologie en beeldvormende technieken", "Radiologie"),
    ("Psychologie & Psychiatrie", "Psychiatrie"),
];

/// ユーザー定義の語彙ファイル
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyFile {
    /// 追加の正規カテゴリ
    #[serde(default)]
    pub categories: Vec<String>,
    /// 追加の同義語
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,
}

impl VocabularyFile {
    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(json)?;
        Ok(file)
    }
}

/// カテゴリ語彙（実行中は不変）
#[derive(Debug, Clone)]
pub struct Vocabulary {
    canonical: BTreeSet<String>,
    synonyms: BTreeMap<String, String>,
    /// 小文字 → 正規表記
    lookup: BTreeMap<String, String>,
    /// カンマを含むカテゴリ（長い順）
    protected: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    /// 組み込み語彙
    pub fn builtin() -> Self {
        Self::build(
            BUILTIN_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            BUILTIN_SYNONYMS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }

    /// 組み込み語彙にユーザー定義をマージ（後から追加した定義が優先）
    ///
    /// 同義語の変換先が別の同義語のキーになっている場合はエラー（解決は一段のみ）。
    pub fn with_overrides(file: &VocabularyFile) -> Result<Self> {
        let mut canonical: BTreeSet<String> =
            BUILTIN_CATEGORIES.iter().map(|s| s.to_string()).collect();
        let mut synonyms: BTreeMap<String, String> = BUILTIN_SYNONYMS
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();

        canonical.extend(file.categories.iter().map(|c| c.trim().to_string()));
        for (from, to) in &file.synonyms {
            synonyms.insert(from.trim().to_string(), to.trim().to_string());
        }

        for (from, to) in &synonyms {
            if synonyms.contains_key(to) {
                return Err(Error::Vocabulary(format!(
                    "synoniem '{}' verwijst naar '{}', dat zelf een synoniem is",
                    from, to
                )));
            }
        }

        Ok(Self::build(canonical, synonyms))
    }

    fn build(mut canonical: BTreeSet<String>, synonyms: BTreeMap<String, String>) -> Self {
        // 同義語の変換先も正規カテゴリとして扱う
        canonical.extend(synonyms.values().cloned());
        canonical.remove("");

        let lookup = canonical
            .iter()
            .map(|c| (c.to_lowercase(), c.clone()))
            .collect();

        let mut protected: Vec<String> = canonical
            .iter()
            .filter(|c| c.contains(','))
            .cloned()
            .collect();
        protected.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            canonical,
            synonyms,
            lookup,
            protected,
        }
    }

    /// 同義語を解決（完全一致のみ）
    pub fn resolve_synonym<'a>(&'a self, token: &'a str) -> &'a str {
        self.synonyms.get(token).map(|s| s.as_str()).unwrap_or(token)
    }

    /// 正規カテゴリを大文字小文字を無視して検索
    pub fn canonical_form(&self, token: &str) -> Option<&str> {
        self.lookup.get(&token.to_lowercase()).map(|s| s.as_str())
    }

    /// カンマで分割してはいけないカテゴリ（最長一致用に長い順）
    pub fn protected_lexemes(&self) -> &[String] {
        &self.protected
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(|s| s.as_str())
    }

    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_synonym() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.resolve_synonym("Longgeneeskunde"), "Longziekten");
        assert_eq!(vocab.resolve_synonym("Cardiologie"), "Cardiologie");
    }

    #[test]
    fn test_synonym_resolution_idempotent() {
        let vocab = Vocabulary::builtin();
        for (variant, _) in vocab.synonyms() {
            let once = vocab.resolve_synonym(variant);
            let twice = vocab.resolve_synonym(once);
            assert_eq!(once, twice, "{} は二度目の変換で変化した", variant);
        }
    }

    #[test]
    fn test_canonical_form_case_insensitive() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_form("kno"), Some("KNO"));
        assert_eq!(vocab.canonical_form("plastische chirurgie"), Some("Plastische Chirurgie"));
        assert_eq!(vocab.canonical_form("Tandheelkunde"), None);
    }

    #[test]
    fn test_protected_lexemes() {
        let vocab = Vocabulary::builtin();
        assert_eq!(
            vocab.protected_lexemes(),
            &["Mond-, kaak- en aangezichtschirurgie".to_string()]
        );
    }

    #[test]
    fn test_overrides_merge() {
        let file = VocabularyFile::from_json(
            r#"{"categories": ["Tandheelkunde"], "synonyms": {"Tandarts": "Tandheelkunde"}}"#,
        )
        .unwrap();
        let vocab = Vocabulary::with_overrides(&file).unwrap();
        assert_eq!(vocab.canonical_form("tandheelkunde"), Some("Tandheelkunde"));
        assert_eq!(vocab.canonical_form("Cardiologie"), Some("Cardiologie"));
        assert!(vocab.categories().any(|c| c == "Tandheelkunde"));
        assert_eq!(vocab.resolve_synonym("Tandarts"), "Tandheelkunde");
    }

    #[test]
    fn test_overrides_reject_chained_synonyms() {
        let file = VocabularyFile::from_json(
            r#"{"synonyms": {"Longen": "Longgeneeskunde"}}"#,
        )
        .unwrap();
        let err = Vocabulary::with_overrides(&file).unwrap_err();
        assert!(matches!(err, Error::Vocabulary(_)));
    }
}
