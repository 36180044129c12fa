//! 照合済みファイルの再精査
//!
//! 既存の候補列（"Name (86), Other (80)" 形式）と説明列から精査結果を作り直す。
//! ブランドマスタは参照しない。

use crate::input::Table;
use brand_match_common::export::table::COL_REFINED;
use brand_match_common::export::SheetData;
use brand_match_common::{classify_formatted, Classification};

pub const REFINED_SHEET: &str = "refined";

/// 精査結果を付けた表を返す
///
/// 既に Refined_Brands 列があれば上書きし、なければ末尾に追加する。
pub fn refine_table(table: &Table, desc_idx: usize, matched_idx: usize) -> (SheetData, Vec<Classification>) {
    let mut headers = table.headers.clone();
    let refined_idx = match headers.iter().position(|h| h == COL_REFINED) {
        Some(idx) => idx,
        None => {
            headers.push(COL_REFINED.to_string());
            headers.len() - 1
        }
    };

    let mut sheet = SheetData::new(REFINED_SHEET, headers);
    let mut classifications = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let description = row.get(desc_idx).and_then(|v| v.as_deref()).unwrap_or("");
        let matched = row.get(matched_idx).and_then(|v| v.as_deref()).unwrap_or("");
        let classification = classify_formatted(description, matched);

        let mut out: Vec<String> = row.iter().map(|v| v.clone().unwrap_or_default()).collect();
        out.resize(sheet.headers.len(), String::new());
        out[refined_idx] = classification.to_string();

        sheet.rows.push(out);
        classifications.push(classification);
    }

    (sheet, classifications)
}
