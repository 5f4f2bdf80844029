//! フィールド抽出
//!
//! レコード本文から Divi 名・詳細URL・カテゴリ文字列を取り出す。
//!
//! ## カテゴリ文字列の特定
//! 引用符で囲まれた値を末尾から順に調べ、[`CANDIDATE_RULES`] の
//! 優先順位で除外判定を行う。最初に除外されなかった値を採用する。

use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    /// themas URL → 名前 → divis URL の並び
    static ref SCAFFOLD_RE: Regex = Regex::new(
        r#"https://indiveo\.nl/themas/[^"]+","([^"]+)","(https://indiveo\.nl/divis/[^"]+)""#
    ).unwrap();
    static ref QUOTED_RE: Regex = Regex::new(r#""([^"]*)""#).unwrap();
}

/// 抽出ルール（実行中は不変）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// 説明文とみなす接頭辞
    pub description_prefixes: Vec<String>,
    /// これより長い値は説明文とみなす（文字数）
    pub prose_threshold: usize,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            description_prefixes: vec![
                "Deze Divi".into(),
                "Animatie".into(),
                "B1 ".into(),
                "Begrijpelijke".into(),
            ],
            prose_threshold: 150,
        }
    }
}

/// 除外理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Description,
    Url,
    Prose,
    ItemName,
}

/// 候補値の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

/// 判定対象
pub struct Candidate<'a> {
    pub value: &'a str,
    pub item_name: &'a str,
    pub rules: &'a ExtractionRules,
}

type Rule = fn(&Candidate<'_>) -> bool;

fn is_empty(c: &Candidate<'_>) -> bool {
    c.value.is_empty()
}

fn is_description(c: &Candidate<'_>) -> bool {
    c.rules
        .description_prefixes
        .iter()
        .any(|prefix| c.value.starts_with(prefix.as_str()))
}

fn is_url(c: &Candidate<'_>) -> bool {
    c.value.starts_with("http")
}

fn is_prose(c: &Candidate<'_>) -> bool {
    c.value.chars().count() > c.rules.prose_threshold
}

fn is_item_name(c: &Candidate<'_>) -> bool {
    c.value == c.item_name
}

/// 除外ルール（上から順に評価）
const CANDIDATE_RULES: &[(Rejection, Rule)] = &[
    (Rejection::Empty, is_empty),
    (Rejection::Description, is_description),
    (Rejection::Url, is_url),
    (Rejection::Prose, is_prose),
    (Rejection::ItemName, is_item_name),
];

/// 候補値を判定
pub fn classify(candidate: &Candidate<'_>) -> Verdict {
    CANDIDATE_RULES
        .iter()
        .find(|(_, rule)| rule(candidate))
        .map(|(rejection, _)| Verdict::Reject(*rejection))
        .unwrap_or(Verdict::Accept)
}

/// 1レコードの抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub name: String,
    pub url: String,
    /// カテゴリ文字列（見つからなければ None）
    pub raw_categories: Option<String>,
}

/// レコード本文からフィールドを抽出
///
/// 名前とURLの並びが見つからなければ None（解析不能レコード）。
pub fn extract_record(body: &str, rules: &ExtractionRules) -> Option<ExtractedRecord> {
    let caps = SCAFFOLD_RE.captures(body)?;
    let name = caps.get(1)?.as_str().trim();
    let url = caps.get(2)?.as_str().trim();

    if name.is_empty() {
        return None;
    }

    let quoted: Vec<&str> = QUOTED_RE
        .captures_iter(body)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    let raw_categories = quoted
        .into_iter()
        .rev()
        .find(|value| {
            let candidate = Candidate {
                value: *value,
                item_name: name,
                rules,
            };
            classify(&candidate) == Verdict::Accept
        })
        .map(str::to_string);

    Some(ExtractedRecord {
        name: name.to_string(),
        url: url.to_string(),
        raw_categories,
    })
}
