pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use brand_match_common::export::{results_sheet, SheetData};
use brand_match_common::MatchResult;
use std::path::{Path, PathBuf};

/// 結果シート名
pub const RESULTS_SHEET: &str = "matches";
/// サンプルシートの最大行数
pub const SAMPLE_ROWS: usize = 1000;

/// 出力ファイルのデフォルト名（拡張子なし）
pub fn default_stem(top_n: usize) -> String {
    format!("brand_match_results_top{}", top_n)
}

fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.xlsx", stem)),
            output.join(format!("{}.json", stem)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        (
            parent.join(format!("{}.xlsx", stem)),
            parent.join(format!("{}.json", stem)),
        )
    }
}

/// 照合結果を書き出し、出力したパスを返す
///
/// `samples` はExcelにだけ追加する入力サンプルシート。
pub fn export_results(
    results: &[MatchResult],
    include_id: bool,
    samples: &[SheetData],
    format: &ExportFormat,
    output: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let mut sheets = vec![results_sheet(RESULTS_SHEET, results, include_id)];
    sheets.extend(samples.iter().cloned());

    let written = match format {
        ExportFormat::Excel => {
            let path = output_path_for_format(output, stem, "xlsx");
            excel::write_workbook(&sheets, &path)?;
            vec![path]
        }
        ExportFormat::Json => {
            let path = output_path_for_format(output, stem, "json");
            json::write_results(results, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (excel_path, json_path) = output_paths_for_both(output, stem);
            excel::write_workbook(&sheets, &excel_path)?;
            json::write_results(results, &json_path)?;
            vec![excel_path, json_path]
        }
    };

    Ok(written)
}
