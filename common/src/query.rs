//! 照合クエリの構築
//!
//! 商品説明は "<商品> by <ブランド>" の形が多いため、
//! " by " 以降があればそちらをクエリにする。

use crate::normalize::normalize;
use crate::types::QuerySource;

const BY_MARKER: &str = " by ";

/// 照合クエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    /// 正規化済みクエリ
    pub text: String,
    pub source: QuerySource,
}

impl CandidateQuery {
    pub fn used_by_heuristic(&self) -> bool {
        self.source == QuerySource::AfterBy
    }
}

/// 説明文からクエリを作る
pub fn build_query(description: &str) -> CandidateQuery {
    let lowered = description.to_lowercase();

    match lowered.split_once(BY_MARKER) {
        Some((_, after_by)) => CandidateQuery {
            text: normalize(after_by),
            source: QuerySource::AfterBy,
        },
        None => full_description_query(description),
    }
}

/// " by " を無視して説明文全体をクエリにする
pub fn full_description_query(description: &str) -> CandidateQuery {
    CandidateQuery {
        text: normalize(description),
        source: QuerySource::FullDescription,
    }
}
