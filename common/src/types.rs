//! 照合結果の型定義
//!
//! CLIとライブラリ利用側で共有される型:
//! - DescriptionRecord: 入力の商品説明1行
//! - ScoredCandidate: ファジー照合の候補（ブランド名 + スコア）
//! - MatchResult: 1行分の最終出力（候補 + 精査結果）

use crate::refine::Classification;
use serde::{Deserialize, Serialize};

/// 入力の商品説明1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRecord {
    /// 説明文（空文字も可）
    pub description: String,

    /// 任意の識別子（入力のまま保持）
    #[serde(default)]
    pub id: Option<String>,
}

impl DescriptionRecord {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            id: None,
        }
    }

    pub fn with_id(description: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            id: Some(id.into()),
        }
    }
}

/// ファジー照合の候補
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    /// マスタ上の元のブランド名
    pub brand: String,
    /// 正規化後のブランド名
    pub normalized: String,
    /// 類似度 (0-100)
    pub score: u8,
}

/// 照合クエリの出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuerySource {
    /// " by " 以降のテキスト
    AfterBy,
    /// 説明文全体
    FullDescription,
    /// " by " 以降で候補がなく、説明文全体で再照合した
    FallbackFullDescription,
}

impl std::fmt::Display for QuerySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuerySource::AfterBy => write!(f, "after ' by '"),
            QuerySource::FullDescription => write!(f, "full description"),
            QuerySource::FallbackFullDescription => write!(f, "full description (fallback)"),
        }
    }
}

/// 1行分の照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub record: DescriptionRecord,
    /// 閾値を通過した候補（スコア降順）
    pub candidates: Vec<ScoredCandidate>,
    pub query_source: QuerySource,
    pub classification: Classification,
}

impl MatchResult {
    /// 候補のブランド名（順序保持）
    pub fn brand_names(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.brand.clone()).collect()
    }

    /// "Name (86), Other (80)" 形式の文字列
    pub fn format_candidates(&self) -> String {
        format_candidates(&self.candidates)
    }
}

/// 候補を "Name (86), Other (80)" 形式に整形
pub fn format_candidates(candidates: &[ScoredCandidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("{} ({})", c.brand, c.score))
        .collect::<Vec<_>>()
        .join(", ")
}
