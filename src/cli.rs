use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brand-match")]
#[command(about = "商品説明文とブランドマスタのファジー照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品説明ファイルとブランドファイルを照合して結果を出力
    Match {
        /// 商品説明ファイル (xlsx/xls/ods/csv)
        #[arg(required = true)]
        descriptions: PathBuf,

        /// ブランドファイル (xlsx/xls/ods/csv)
        #[arg(required = true)]
        brands: PathBuf,

        /// 出力ファイル（デフォルト: brand_match_results_topN.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (excel/json/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// 類似度閾値 (0-100、省略時は設定値)
        #[arg(short, long)]
        threshold: Option<u32>,

        /// 1説明あたりの候補数（省略時は設定値）
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// 説明文の列名
        #[arg(long)]
        desc_column: Option<String>,

        /// 識別子の列名（任意）
        #[arg(long)]
        id_column: Option<String>,

        /// ブランド名の列名
        #[arg(long)]
        brand_column: Option<String>,

        /// 説明ファイルのシート名（省略時は先頭シート）
        #[arg(long)]
        desc_sheet: Option<String>,

        /// ブランドファイルのシート名（省略時は先頭シート）
        #[arg(long)]
        brand_sheet: Option<String>,

        /// 列を対話的に選択
        #[arg(short, long)]
        interactive: bool,

        /// 入力サンプルシートを出力しない
        #[arg(long)]
        no_samples: bool,

        /// 処理する説明の最大件数
        #[arg(long)]
        limit: Option<usize>,
    },

    /// 説明文1件を照合して途中経過を表示
    Check {
        /// 商品説明
        #[arg(required = true)]
        text: String,

        /// ブランドファイル
        #[arg(short, long, required = true)]
        brands: PathBuf,

        /// ブランド名の列名
        #[arg(long)]
        brand_column: Option<String>,

        /// 類似度閾値 (0-100)
        #[arg(short, long)]
        threshold: Option<u32>,

        /// 候補数
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// 照合済みファイルに精査結果だけを付け直す
    Refine {
        /// 照合結果ファイル（説明列と候補列を含む）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル（デフォルト: <入力名>_refined.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 説明文の列名
        #[arg(long)]
        desc_column: Option<String>,

        /// 候補ブランドの列名
        #[arg(long, default_value = "Matched_Brands")]
        matched_column: String,

        /// 読み込むシート名
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 類似度閾値の既定値を設定
        #[arg(long)]
        threshold: Option<u32>,

        /// 候補数の既定値を設定
        #[arg(long)]
        top_n: Option<usize>,

        /// 説明文の列名の既定値を設定
        #[arg(long)]
        desc_column: Option<String>,

        /// ブランド名の列名の既定値を設定
        #[arg(long)]
        brand_column: Option<String>,

        /// 識別子の列名の既定値を設定
        #[arg(long)]
        id_column: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
