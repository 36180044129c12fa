use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0} (xlsx/xlsm/xls/ods/csv)")]
    UnsupportedFormat(String),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("列が見つかりません: {column} (利用可能: {available})")]
    ColumnNotFound { column: String, available: String },

    #[error("ヘッダー行がありません: {0}")]
    EmptyTable(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] brand_match_common::Error),
}

pub type Result<T> = std::result::Result<T, BrandMatchError>;
