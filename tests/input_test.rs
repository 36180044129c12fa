//! 入力ファイル読み込みテスト

use brand_match::input::{self, columns};
use brand_match_common::export::excel_core::generate_workbook_buffer;
use brand_match_common::export::SheetData;
use tempfile::tempdir;

fn sheet(name: &str, headers: &[&str], rows: &[&[&str]]) -> SheetData {
    let mut sheet = SheetData::new(name, headers.iter().map(|s| s.to_string()).collect());
    sheet.rows = rows
        .iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect();
    sheet
}

#[test]
fn test_read_csv_with_missing_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("brands.csv");
    std::fs::write(&path, "id,Brand\n1,Acme Foods\n2,\n3,\"Smith, Jones (Holdings)\"\n4\n").unwrap();

    let table = input::read_table(&path, None).expect("CSV読み込み失敗");
    assert_eq!(table.headers, vec!["id", "Brand"]);
    assert_eq!(table.len(), 4);

    let idx = columns::resolve_column(&table.headers, None, columns::BRAND_GUESSES).unwrap();
    assert_eq!(idx, 1);
    let brands: Vec<Option<&str>> = table.column(idx).collect();
    assert_eq!(
        brands,
        vec![Some("Acme Foods"), None, Some("Smith, Jones (Holdings)"), None]
    );
}

#[test]
fn test_read_xlsx_first_and_named_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.xlsx");

    let buffer = generate_workbook_buffer(&[
        sheet(
            "descriptions",
            &["data_key", "Product_Description"],
            &[&["A1", "Premium Cola by Cool Brands Inc"], &["A2", ""]],
        ),
        sheet("brands", &["Manufacturer"], &[&["Cool Brands"], &["Life Brand"]]),
    ])
    .expect("Excel生成失敗");
    std::fs::write(&path, buffer).unwrap();

    let table = input::read_table(&path, None).expect("xlsx読み込み失敗");
    assert_eq!(table.headers, vec!["data_key", "Product_Description"]);
    let desc_idx = columns::resolve_column(&table.headers, None, columns::DESCRIPTION_GUESSES).unwrap();
    assert_eq!(desc_idx, 1);

    let records = input::description_records(&table, desc_idx, Some(0), None);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_deref(), Some("A1"));
    assert_eq!(records[0].description, "Premium Cola by Cool Brands Inc");
    assert_eq!(records[1].description, "");

    let brands = input::read_table(&path, Some("brands")).expect("シート指定の読み込み失敗");
    assert_eq!(brands.headers, vec!["Manufacturer"]);
    assert_eq!(brands.len(), 2);
}

#[test]
fn test_read_xlsx_unknown_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.xlsx");
    let buffer = generate_workbook_buffer(&[sheet("brands", &["Brand"], &[&["Acme"]])]).unwrap();
    std::fs::write(&path, buffer).unwrap();

    assert!(input::read_table(&path, Some("missing")).is_err());
}
