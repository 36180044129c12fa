//! Excel生成（共通ライブラリ）
//!
//! SheetData をそのままワークシートに書き出す。

use super::table::SheetData;
use rust_xlsxwriter::*;

/// Excelのシート名上限
const MAX_SHEET_NAME: usize = 31;
const MAX_COL_WIDTH: f64 = 80.0;

/// 複数シートのExcelをバッファに生成
pub fn generate_workbook_buffer(sheets: &[SheetData]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        let name: String = sheet.name.chars().take(MAX_SHEET_NAME).collect();
        worksheet.set_name(&name)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        }

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let excel_row = row_idx as u32 + 1;
            for (col, value) in row.iter().enumerate() {
                // 空セルは書かない（読み込み側で欠損として扱える）
                if value.is_empty() {
                    continue;
                }
                worksheet.write_string(excel_row, col as u16, value)
                    .map_err(|e| format!("セル書き込みエラー: {}", e))?;
            }
        }

        // 列幅はヘッダーと値の最大文字数から決める
        for col in 0..sheet.headers.len() {
            let width = sheet
                .rows
                .iter()
                .filter_map(|r| r.get(col))
                .chain(std::iter::once(&sheet.headers[col]))
                .map(|v| v.chars().count())
                .max()
                .unwrap_or(8) as f64;
            worksheet.set_column_width(col as u16, (width + 2.0).min(MAX_COL_WIDTH))
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
        }

        worksheet.set_freeze_panes(1, 0)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
