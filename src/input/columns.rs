//! 列の対応付け
//!
//! 明示指定 → 既知の列名から推測 → 先頭列 の順で決める。

use crate::error::{BrandMatchError, Result};

/// 説明文の列名候補
pub const DESCRIPTION_GUESSES: &[&str] = &["description", "descriptions", "product_description", "text"];
/// ブランド名の列名候補
pub const BRAND_GUESSES: &[&str] = &["brand", "brands", "name", "manufacturer"];

/// 列名で検索（前後空白・大文字小文字を無視）
pub fn find_column(headers: &[String], name: &str) -> Option<usize> {
    let target = name.trim().to_lowercase();
    headers
        .iter()
        .position(|h| h.trim().to_lowercase() == target)
}

/// 既知の列名から推測
pub fn guess_column(headers: &[String], guesses: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| guesses.contains(&h.trim().to_lowercase().as_str()))
}

/// 必須列を決める
pub fn resolve_column(headers: &[String], explicit: Option<&str>, guesses: &[&str]) -> Result<usize> {
    match explicit {
        Some(name) => find_column(headers, name).ok_or_else(|| not_found(headers, name)),
        None => Ok(guess_column(headers, guesses).unwrap_or(0)),
    }
}

/// 任意列を決める（指定があるときだけ）
pub fn resolve_optional_column(headers: &[String], explicit: Option<&str>) -> Result<Option<usize>> {
    explicit
        .map(|name| find_column(headers, name).ok_or_else(|| not_found(headers, name)))
        .transpose()
}

fn not_found(headers: &[String], name: &str) -> BrandMatchError {
    BrandMatchError::ColumnNotFound {
        column: name.to_string(),
        available: headers.join(", "),
    }
}
