//! カテゴリ正規化
//!
//! カテゴリ文字列をトークンに分割し、同義語変換と語彙照合を行う。
//!
//! ## 処理フロー
//! 1. 保護語（カンマを含むカテゴリ）を最長一致で1トークンとして扱い、カンマで分割
//! 2. 前後の空白除去 → 同義語変換
//! 3. 語彙と照合（大文字小文字無視）。未登録は寛容モードなら条件付きで採用

use crate::types::CategorySet;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// 未登録カテゴリを採用する最大長（この文字数未満）
pub const LENIENT_MAX_CHARS: usize = 50;

/// 未登録カテゴリの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptMode {
    /// 短い未登録カテゴリも採用（誤検出を許容）
    #[default]
    Lenient,
    /// 語彙にあるものだけ採用
    Strict,
}

/// カテゴリ文字列をトークンに分割する
///
/// `protected` に含まれる語は内部のカンマで分割しない（長い順に渡すこと）。
pub fn split_categories<'a>(raw: &'a str, protected: &[String]) -> Vec<&'a str> {
    let bytes = raw.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < raw.len() {
        if let Some(lexeme) = protected.iter().find(|p| raw[i..].starts_with(p.as_str())) {
            i += lexeme.len();
            continue;
        }
        if bytes[i] == b',' {
            tokens.push(&raw[start..i]);
            start = i + 1;
            i += 1;
            continue;
        }
        // 次の文字境界へ
        i += raw[i..].chars().next().map(char::len_utf8).unwrap_or(1);
    }
    tokens.push(&raw[start..]);

    tokens
}

/// トークン1件の判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    /// 語彙に一致（正規表記）
    Canonical(String),
    /// 未登録だが採用
    Lenient(String),
    /// 不採用
    Rejected(String),
}

/// 1件分の正規化結果
#[derive(Debug, Clone, Default)]
pub struct NormalizedCategories {
    pub categories: CategorySet,
    /// 寛容モードで採用した未登録カテゴリ
    pub lenient: Vec<String>,
    /// 不採用のトークン
    pub rejected: Vec<String>,
}

/// カテゴリ正規化器
#[derive(Debug, Clone, Copy)]
pub struct CategoryNormalizer<'v> {
    vocabulary: &'v Vocabulary,
    mode: AcceptMode,
}

impl<'v> CategoryNormalizer<'v> {
    pub fn new(vocabulary: &'v Vocabulary, mode: AcceptMode) -> Self {
        Self { vocabulary, mode }
    }

    /// トークン1件を判定（空なら None）
    pub fn normalize_token(&self, token: &str, item_name: &str) -> Option<TokenOutcome> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let resolved = self.vocabulary.resolve_synonym(token);

        if let Some(canonical) = self.vocabulary.canonical_form(resolved) {
            return Some(TokenOutcome::Canonical(canonical.to_string()));
        }

        let plausible = resolved.chars().count() < LENIENT_MAX_CHARS && resolved != item_name;
        match self.mode {
            AcceptMode::Lenient if plausible => Some(TokenOutcome::Lenient(resolved.to_string())),
            _ => Some(TokenOutcome::Rejected(resolved.to_string())),
        }
    }

    /// カテゴリ文字列全体を正規化
    pub fn normalize(&self, raw: &str, item_name: &str) -> NormalizedCategories {
        let mut result = NormalizedCategories::default();

        for token in split_categories(raw, self.vocabulary.protected_lexemes()) {
            match self.normalize_token(token, item_name) {
                Some(TokenOutcome::Canonical(label)) => {
                    result.categories.insert(label);
                }
                Some(TokenOutcome::Lenient(label)) => {
                    if result.categories.insert(label.clone()) {
                        result.lenient.push(label);
                    }
                }
                Some(TokenOutcome::Rejected(label)) => result.rejected.push(label),
                None => {}
            }
        }

        result
    }
}
