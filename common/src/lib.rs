//! Brand Match Common Library
//!
//! 商品説明文とブランドマスタのファジー照合エンジン。
//! 正規化 → クエリ構築 → トークン集合類似度での順位付け → 精査 の2段構成。

pub mod error;
pub mod export;
pub mod fuzzy;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod refine;
pub mod types;
pub mod vocabulary;

pub use error::{Error, Result};
pub use matcher::{BrandMatcher, MatchSettings, DEFAULT_THRESHOLD, DEFAULT_TOP_N};
pub use normalize::normalize;
pub use query::{build_query, full_description_query, CandidateQuery};
pub use refine::{classify, classify_formatted, split_brand_list, Classification};
pub use types::{format_candidates, DescriptionRecord, MatchResult, QuerySource, ScoredCandidate};
pub use vocabulary::{BrandEntry, BrandVocabulary};
