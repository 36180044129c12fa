//! 出力用の表データ

use crate::types::MatchResult;
use serde::Serialize;

/// 結果シートの列名
pub const COL_DATA_KEY: &str = "data_key";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_MATCHED: &str = "Matched_Brands";
pub const COL_REFINED: &str = "Refined_Brands";

/// シート1枚分の表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }
}

/// 照合結果を表にする
///
/// `include_id` のときだけ先頭に data_key 列を置く。
pub fn results_sheet(name: &str, results: &[MatchResult], include_id: bool) -> SheetData {
    let mut headers = Vec::new();
    if include_id {
        headers.push(COL_DATA_KEY.to_string());
    }
    headers.extend([COL_DESCRIPTION, COL_MATCHED, COL_REFINED].map(String::from));

    let mut sheet = SheetData::new(name, headers);
    for result in results {
        let mut row = Vec::with_capacity(4);
        if include_id {
            row.push(result.record.id.clone().unwrap_or_default());
        }
        row.push(result.record.description.clone());
        row.push(result.format_candidates());
        row.push(result.classification.to_string());
        sheet.rows.push(row);
    }
    sheet
}
