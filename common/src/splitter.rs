//! レコード分割
//!
//! スクレイプCSV全体を `"1765314254-1"` 形式の識別子で区切り、
//! レコード本文の列に分割する。

use regex::Regex;

lazy_static::lazy_static! {
    /// 10桁の数字 + ハイフン + 連番（引用符付き）
    static ref RECORD_ID_RE: Regex = Regex::new(r#""\d{10}-\d+""#).unwrap();
}

/// 分割されたレコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// レコード識別子（引用符なし）
    pub id: &'a str,
    /// 識別子の後ろから次の識別子までの本文（前後の空白除去済み）
    pub body: &'a str,
}

/// テキストをレコードに分割する
///
/// 最初の識別子より前（ヘッダー）と、本文が空のレコードは読み飛ばす。
pub fn split_records(text: &str) -> impl Iterator<Item = RawRecord<'_>> + '_ {
    let mut markers = RECORD_ID_RE.find_iter(text).peekable();

    std::iter::from_fn(move || loop {
        let marker = markers.next()?;
        let body_end = markers.peek().map(|next| next.start()).unwrap_or(text.len());
        let body = text[marker.end()..body_end].trim();
        let id = marker.as_str().trim_matches('"');

        if body.is_empty() {
            tracing::trace!(id, "empty record dropped");
            continue;
        }

        return Some(RawRecord { id, body });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_header() {
        let text = "\"id\",\"naam\"\n\"1765314254-1\",\"a\",\"b\"\n\"1765314254-2\",\"c\"\n";
        let records: Vec<_> = split_records(text).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1765314254-1");
        assert_eq!(records[0].body, ",\"a\",\"b\"");
        assert_eq!(records[1].id, "1765314254-2");
        assert_eq!(records[1].body, ",\"c\"");
    }

    #[test]
    fn test_split_drops_empty_records() {
        let text = "\"1765314254-1\"\n\"1765314254-2\",\"x\"";
        let records: Vec<_> = split_records(text).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1765314254-2");
    }

    #[test]
    fn test_split_ignores_short_ids() {
        // 9桁の識別子は区切りとして扱わない
        let text = "\"1765314254-1\",\"x\",\"123456789-1\",\"y\"";
        let records: Vec<_> = split_records(text).collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].body.contains("123456789-1"));
    }

    #[test]
    fn test_split_no_markers() {
        assert_eq!(split_records("geen records hier").count(), 0);
    }
}
