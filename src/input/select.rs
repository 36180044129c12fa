//! 列の対話式選択

use crate::error::{BrandMatchError, Result};
use dialoguer::Select;

const NONE_LABEL: &str = "(なし)";

/// 必須列を選択
pub fn select_column(prompt: &str, headers: &[String], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(headers)
        .default(default.min(headers.len().saturating_sub(1)))
        .interact()
        .map_err(|e| BrandMatchError::Prompt(e.to_string()))
}

/// 任意列を選択（先頭の「なし」で未指定）
pub fn select_optional_column(prompt: &str, headers: &[String]) -> Result<Option<usize>> {
    let mut items = vec![NONE_LABEL.to_string()];
    items.extend(headers.iter().cloned());

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| BrandMatchError::Prompt(e.to_string()))?;

    Ok(picked.checked_sub(1))
}
