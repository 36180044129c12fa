//! Excel出力（CLI版）
//!
//! 共通ライブラリでバッファを生成してファイルに保存する。

use crate::error::{BrandMatchError, Result};
use brand_match_common::export::excel_core::generate_workbook_buffer;
use brand_match_common::export::SheetData;
use std::path::Path;

pub fn write_workbook(sheets: &[SheetData], output_path: &Path) -> Result<()> {
    let buffer = generate_workbook_buffer(sheets).map_err(BrandMatchError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
