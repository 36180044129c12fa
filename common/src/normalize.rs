//! テキスト正規化
//!
//! ブランド名と商品説明文を同じ正規形に揃える。
//! 小文字化 → 括弧書き除去 → アポストロフィ除去 → 法人格除去 →
//! 記号を空白化 → 空白の圧縮 の順に適用する。

use regex::Regex;

/// 文字列を正規化する（失敗しない）
///
/// ```
/// use brand_match_common::normalize;
/// assert_eq!(normalize("Acme, Inc. (USA)"), "acme");
/// ```
pub fn normalize(text: &str) -> String {
    lazy_static::lazy_static! {
        // 括弧書き（入れ子は考慮しない）
        static ref PAREN_RE: Regex = Regex::new(r"\([^)]*\)").unwrap();
        static ref APOSTROPHE_RE: Regex = Regex::new(r"[’'‘`]").unwrap();
        static ref LEGAL_RE: Regex =
            Regex::new(r"\b(inc|incorporated|ltd|llc|corp|co|company)\b").unwrap();
        static ref PUNCT_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
        static ref SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let text = text.to_lowercase();
    let text = PAREN_RE.replace_all(&text, "");
    let text = APOSTROPHE_RE.replace_all(&text, "");
    let text = LEGAL_RE.replace_all(&text, "");
    let text = PUNCT_RE.replace_all(&text, " ");
    let text = SPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
