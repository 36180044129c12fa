//! 入力ファイル読み込みモジュール
//!
//! Excel系（calamine）とCSVを同じ表形式に読み込む。
//! 1行目をヘッダーとして扱う。

pub mod columns;
pub mod select;

use crate::error::{BrandMatchError, Result};
use brand_match_common::export::SheetData;
use brand_match_common::DescriptionRecord;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// 読み込んだ表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    /// 各行はヘッダーと同じ列数。空セルは None
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// 指定列の値
    pub fn column(&self, idx: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |row| row.get(idx).and_then(|v| v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 先頭 `limit` 行を出力用シートにする
    pub fn to_sheet(&self, name: &str, limit: usize) -> SheetData {
        let mut sheet = SheetData::new(name, self.headers.clone());
        sheet.rows = self
            .rows
            .iter()
            .take(limit)
            .map(|row| row.iter().map(|v| v.clone().unwrap_or_default()).collect())
            .collect();
        sheet
    }
}

/// 表ファイルを読み込む
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    if !path.exists() {
        return Err(BrandMatchError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let table = if ext == "csv" {
        read_csv(path)?
    } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        read_spreadsheet(path, sheet)?
    } else {
        return Err(BrandMatchError::UnsupportedFormat(path.display().to_string()));
    };

    log::debug!(
        "{} を読み込み: {}行 {}列",
        path.display(),
        table.rows.len(),
        table.headers.len()
    );
    Ok(table)
}

fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| BrandMatchError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| BrandMatchError::EmptyTable(path.display().to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| BrandMatchError::Spreadsheet(format!("シート '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| BrandMatchError::EmptyTable(path.display().to_string()))?;
    let headers = build_headers(header_row.iter().map(cell_to_text));

    let rows = rows
        .map(|row| pad_row(row.iter().map(cell_to_text).collect(), headers.len()))
        .collect();

    Ok(Table { headers, rows })
}

fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let header_record = reader.headers()?.clone();
    if header_record.is_empty() {
        return Err(BrandMatchError::EmptyTable(path.display().to_string()));
    }
    let headers = build_headers(header_record.iter().map(non_blank));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(pad_row(record.iter().map(non_blank).collect(), headers.len()));
    }

    Ok(Table { headers, rows })
}

/// 空のヘッダーは "Column{n}" にする
fn build_headers(cells: impl Iterator<Item = Option<String>>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(i, cell)| cell.map(|s| s.trim().to_string()).unwrap_or_else(|| format!("Column{}", i + 1)))
        .collect()
}

fn pad_row(mut row: Vec<Option<String>>, width: usize) -> Vec<Option<String>> {
    row.resize(width, None);
    row
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// セル値を文字列に変換（整数値のfloatは小数点なし）
pub fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => non_blank(s),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// 説明列（と任意の識別子列）から入力レコードを作る
///
/// 説明が空のセルは空文字の説明として扱う。
pub fn description_records(
    table: &Table,
    desc_idx: usize,
    id_idx: Option<usize>,
    limit: Option<usize>,
) -> Vec<DescriptionRecord> {
    table
        .rows
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|row| DescriptionRecord {
            description: row.get(desc_idx).cloned().flatten().unwrap_or_default(),
            id: id_idx.and_then(|i| row.get(i).cloned().flatten()),
        })
        .collect()
}
