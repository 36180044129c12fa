//! 照合結果の精査
//!
//! ファジー照合は語の重なりだけで候補を出すため誤検出が多い。
//! ここでは説明文に複数語のブランド名がそのまま含まれるかで確定し、
//! 1語のブランドは曖昧として扱う。スコアは参照しない。

use crate::normalize::normalize;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 該当なしの表示
pub const NO_BRAND_FOUND: &str = "no brand found";
/// 1語ブランドのみの表示
pub const SINGLE_WORD_BRAND: &str = "this is a single word brand";

/// 精査結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "brands")]
pub enum Classification {
    /// 説明文に含まれることを確認できたブランド（候補順）
    ConfidentMatches(Vec<String>),
    /// 1語ブランドの候補しかない
    AmbiguousSingleWord,
    NoMatch,
}

impl Classification {
    pub fn is_confident(&self) -> bool {
        matches!(self, Classification::ConfidentMatches(_))
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::ConfidentMatches(brands) => write!(f, "{}", brands.join(", ")),
            Classification::AmbiguousSingleWord => write!(f, "{}", SINGLE_WORD_BRAND),
            Classification::NoMatch => write!(f, "{}", NO_BRAND_FOUND),
        }
    }
}

/// カンマ区切りのブランド一覧を分割する
///
/// 括弧内のカンマでは分割しない（"Smith, Jones (Holdings, UK)" の "UK)" 手前など）。
/// カンマの後ろに `(` より先に `)` が現れる位置は括弧内とみなす。
/// 括弧の対応が取れない文字列は全体を1件として返す。
pub fn split_brand_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if !parens_balanced(trimmed) {
        return vec![trimmed.to_string()];
    }

    let chars: Vec<(usize, char)> = trimmed.char_indices().collect();
    let mut items = Vec::new();
    let mut start = 0;

    for (pos, &(byte_idx, ch)) in chars.iter().enumerate() {
        if ch != ',' || inside_parens(&chars[pos + 1..]) {
            continue;
        }
        items.push(&trimmed[start..byte_idx]);
        start = byte_idx + ch.len_utf8();
    }
    items.push(&trimmed[start..]);

    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 後続に `(` より先に `)` があるか
fn inside_parens(rest: &[(usize, char)]) -> bool {
    for &(_, ch) in rest {
        match ch {
            '(' => return false,
            ')' => return true,
            _ => {}
        }
    }
    false
}

fn parens_balanced(text: &str) -> bool {
    let mut depth: i32 = 0;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// 末尾のスコア表記 " (86)" を取り除く
pub fn strip_score_suffix(item: &str) -> &str {
    lazy_static::lazy_static! {
        static ref SCORE_RE: Regex = Regex::new(r"\s*\(\d{1,3}(\.\d+)?\)\s*$").unwrap();
    }

    match SCORE_RE.find(item) {
        Some(m) if m.start() > 0 => item[..m.start()].trim_end(),
        _ => item,
    }
}

/// 説明文と候補ブランド名から精査結果を求める
pub fn classify<S: AsRef<str>>(description: &str, brands: &[S]) -> Classification {
    if brands.is_empty() {
        return Classification::NoMatch;
    }

    let normalized_desc = normalize(description);
    let mut accepted = Vec::new();
    let mut saw_single_word = false;

    for brand in brands {
        let brand = brand.as_ref();
        let normalized = normalize(brand);
        let token_count = normalized.split_whitespace().count();

        if token_count == 1 {
            saw_single_word = true;
            continue;
        }

        // 正規化で空になったブランドは確認できない
        if token_count > 1 && normalized_desc.contains(&normalized) {
            accepted.push(brand.to_string());
        }
    }

    if !accepted.is_empty() {
        Classification::ConfidentMatches(accepted)
    } else if saw_single_word {
        Classification::AmbiguousSingleWord
    } else {
        Classification::NoMatch
    }
}

/// 整形済みの候補文字列 ("Name (86), Other (80)") から精査結果を求める
pub fn classify_formatted(description: &str, matched: &str) -> Classification {
    let items = split_brand_list(matched);
    let brands: Vec<&str> = items.iter().map(|item| strip_score_suffix(item)).collect();
    classify(description, &brands)
}
