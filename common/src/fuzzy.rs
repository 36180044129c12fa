//! ファジー照合（トークン集合類似度）
//!
//! 語順や余分な語に影響されにくい token set ratio でブランド語彙を順位付けする。

use crate::types::ScoredCandidate;
use crate::vocabulary::BrandVocabulary;
use std::collections::BTreeSet;

/// 2文字列の類似度 (0.0-1.0)
///
/// `2 * LCS長 / (len1 + len2)`。文字はUnicodeスカラ値単位で比較する。
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_length(&a, &b)) as f64 / total as f64
}

/// 2文字列の類似度 (0-100)
pub fn ratio(s1: &str, s2: &str) -> u8 {
    to_score(similarity(s1, s2))
}

fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ch_a in a {
        for (j, &ch_b) in b.iter().enumerate() {
            curr[j + 1] = if ch_a == ch_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn to_score(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// 空でない部分を空白で連結
fn join_parts(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

/// トークン集合類似度 (0-100)
///
/// 共通トークン、各側にのみあるトークンをそれぞれ整列・連結し、
/// (共通, 共通+A) (共通, 共通+B) (共通+A, 共通+B) の最大値を取る。
/// どちらかのトークンが空なら 0。
pub fn token_set_ratio(s1: &str, s2: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = s1.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = s2.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let sect = tokens_a.intersection(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let only_a = tokens_a.difference(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let only_b = tokens_b.difference(&tokens_a).copied().collect::<Vec<_>>().join(" ");

    let combined_a = join_parts(&sect, &only_a);
    let combined_b = join_parts(&sect, &only_b);

    // 同値の場合は最初に見つかった最大値（値としては同じ）
    let best = [
        similarity(&sect, &combined_a),
        similarity(&sect, &combined_b),
        similarity(&combined_a, &combined_b),
    ]
    .into_iter()
    .fold(0.0_f64, |acc, r| if r > acc { r } else { acc });

    to_score(best)
}

/// クエリに対して語彙を順位付けし、上位 `top_n` 件を返す
///
/// スコア降順。同点は語彙の入力順を保つ。
pub fn rank(query: &str, vocabulary: &BrandVocabulary, top_n: usize) -> Vec<ScoredCandidate> {
    let mut scored: Vec<(usize, u8)> = vocabulary
        .all_normalized()
        .enumerate()
        .map(|(idx, normalized)| (idx, token_set_ratio(query, normalized)))
        .collect();

    // sort_by は安定ソート
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(top_n);

    let entries = vocabulary.entries();
    scored
        .into_iter()
        .map(|(idx, score)| {
            let entry = &entries[idx];
            let brand = vocabulary
                .original_for(&entry.normalized)
                .unwrap_or(entry.original.as_str());
            ScoredCandidate {
                brand: brand.to_string(),
                normalized: entry.normalized.clone(),
                score,
            }
        })
        .collect()
}
