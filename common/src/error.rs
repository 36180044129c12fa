//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("類似度閾値は0〜100の範囲で指定してください: {0}")]
    InvalidThreshold(u32),

    #[error("候補数は1以上を指定してください: {0}")]
    InvalidTopN(usize),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
