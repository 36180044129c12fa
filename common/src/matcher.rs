//! 照合の実行
//!
//! 1行ごとに クエリ構築 → 順位付け → 閾値フィルタ → (" by " 失敗時の再照合) → 精査
//! を行う。行同士は独立しており、語彙は読み取り専用で共有する。

use crate::error::{Error, Result};
use crate::fuzzy;
use crate::query::{build_query, full_description_query, CandidateQuery};
use crate::refine::classify_formatted;
use crate::types::{format_candidates, DescriptionRecord, MatchResult, QuerySource, ScoredCandidate};
use crate::vocabulary::BrandVocabulary;

pub const DEFAULT_THRESHOLD: u32 = 75;
pub const DEFAULT_TOP_N: usize = 5;

/// 照合パラメータ（検証済み）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    threshold: u8,
    top_n: usize,
}

impl MatchSettings {
    /// 範囲外の値は丸めずにエラーにする
    pub fn new(threshold: u32, top_n: usize) -> Result<Self> {
        if threshold > 100 {
            return Err(Error::InvalidThreshold(threshold));
        }
        if top_n < 1 {
            return Err(Error::InvalidTopN(top_n));
        }
        Ok(Self {
            threshold: threshold as u8,
            top_n,
        })
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD as u8,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// ブランド照合器
#[derive(Debug, Clone)]
pub struct BrandMatcher {
    vocabulary: BrandVocabulary,
    settings: MatchSettings,
}

impl BrandMatcher {
    pub fn new(vocabulary: BrandVocabulary, settings: MatchSettings) -> Self {
        if vocabulary.is_empty() {
            log::warn!("ブランド語彙が空です。全行が該当なしになります");
        }
        Self { vocabulary, settings }
    }

    pub fn vocabulary(&self) -> &BrandVocabulary {
        &self.vocabulary
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    /// クエリで順位付けし、閾値以上の候補だけを残す
    pub fn candidates_for(&self, query: &CandidateQuery) -> Vec<ScoredCandidate> {
        fuzzy::rank(&query.text, &self.vocabulary, self.settings.top_n)
            .into_iter()
            .filter(|c| c.score >= self.settings.threshold)
            .collect()
    }

    /// 説明1行を照合する
    pub fn match_one(&self, record: &DescriptionRecord) -> MatchResult {
        let query = build_query(&record.description);
        let mut candidates = self.candidates_for(&query);
        let mut query_source = query.source;

        // " by " の誤検出で候補を取りこぼさないよう、全文で1回だけ再照合
        if query.used_by_heuristic() && candidates.is_empty() {
            let retry = full_description_query(&record.description);
            candidates = self.candidates_for(&retry);
            query_source = QuerySource::FallbackFullDescription;
            log::debug!(
                "' by ' 以降で候補なし、全文で再照合: {:?} -> {}件",
                record.description,
                candidates.len()
            );
        }

        // 精査は出力される整形済み文字列に対して行う（refine コマンドと同じ経路）
        let classification = classify_formatted(&record.description, &format_candidates(&candidates));

        MatchResult {
            record: record.clone(),
            candidates,
            query_source,
            classification,
        }
    }

    /// 全行を照合する（出力順は入力順）
    #[cfg(feature = "parallel")]
    pub fn match_all(&self, records: &[DescriptionRecord]) -> Vec<MatchResult> {
        use rayon::prelude::*;
        records.par_iter().map(|r| self.match_one(r)).collect()
    }

    /// 全行を照合する（出力順は入力順）
    #[cfg(not(feature = "parallel"))]
    pub fn match_all(&self, records: &[DescriptionRecord]) -> Vec<MatchResult> {
        records.iter().map(|r| self.match_one(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refine::Classification;

    fn matcher(brands: &[&str], threshold: u32, top_n: usize) -> BrandMatcher {
        BrandMatcher::new(
            BrandVocabulary::from_names(brands),
            MatchSettings::new(threshold, top_n).unwrap(),
        )
    }

    #[test]
    fn test_settings_validation() {
        assert!(MatchSettings::new(0, 1).is_ok());
        assert!(MatchSettings::new(100, 20).is_ok());
        assert!(matches!(MatchSettings::new(101, 5), Err(Error::InvalidThreshold(101))));
        assert!(matches!(MatchSettings::new(75, 0), Err(Error::InvalidTopN(0))));
    }

    #[test]
    fn test_settings_default() {
        let settings = MatchSettings::default();
        assert_eq!(settings.threshold(), 75);
        assert_eq!(settings.top_n(), 5);
    }

    #[test]
    fn test_end_to_end_by_clause() {
        let m = matcher(&["Cool Brands"], 75, 5);
        let result = m.match_one(&DescriptionRecord::new("Premium Cola by Cool Brands Inc"));

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].brand, "Cool Brands");
        assert!(result.candidates[0].score >= 75);
        assert_eq!(result.query_source, QuerySource::AfterBy);
        assert_eq!(
            result.classification,
            Classification::ConfidentMatches(vec!["Cool Brands".to_string()])
        );
        assert_eq!(result.format_candidates(), "Cool Brands (100)");
    }

    #[test]
    fn test_fallback_to_full_description() {
        let m = matcher(&["Widget"], 75, 5);
        let result = m.match_one(&DescriptionRecord::new("Widget by Nobody Certified Label"));

        assert_eq!(result.query_source, QuerySource::FallbackFullDescription);
        assert_eq!(result.brand_names(), vec!["Widget".to_string()]);
        assert_eq!(result.classification, Classification::AmbiguousSingleWord);
    }

    #[test]
    fn test_no_fallback_without_by() {
        let m = matcher(&["Zebra Foods"], 75, 5);
        let result = m.match_one(&DescriptionRecord::new("Plain yoghurt 500g"));
        assert_eq!(result.query_source, QuerySource::FullDescription);
        assert!(result.candidates.is_empty());
        assert_eq!(result.classification, Classification::NoMatch);
    }

    #[test]
    fn test_threshold_monotonic() {
        let brands = ["Acme Foods", "Acme", "Acme Drinks", "Beta Foods", "Gamma"];
        let desc = DescriptionRecord::new("Crackers by Acme Foods Europe");
        let mut prev = usize::MAX;
        for threshold in [0, 25, 50, 75, 90, 100] {
            let count = matcher(&brands, threshold, 5).match_one(&desc).candidates.len();
            assert!(count <= prev, "threshold {} gave {} > {}", threshold, count, prev);
            prev = count;
        }
    }

    #[test]
    fn test_top_n_limits_candidates() {
        let m = matcher(&["Cola One", "Cola Two", "Cola Three"], 0, 2);
        let result = m.match_one(&DescriptionRecord::new("cola"));
        assert_eq!(result.candidates.len(), 2);
    }

    #[test]
    fn test_empty_vocabulary_is_no_match() {
        let m = BrandMatcher::new(BrandVocabulary::default(), MatchSettings::default());
        let result = m.match_one(&DescriptionRecord::new("Cola by Cool Brands"));
        assert!(result.candidates.is_empty());
        assert_eq!(result.classification, Classification::NoMatch);
    }

    #[test]
    fn test_classification_agrees_with_formatted_string() {
        let m = matcher(&["Smith, Jones", "Cool Brands"], 75, 5);
        for desc in ["Tea by Smith, Jones", "Cola by Cool Brands", "Plain water"] {
            let result = m.match_one(&DescriptionRecord::new(desc));
            assert_eq!(
                result.classification,
                classify_formatted(desc, &result.format_candidates()),
                "{}",
                desc
            );
        }
    }

    #[test]
    fn test_comma_in_brand_is_split_like_refine() {
        let m = matcher(&["Smith, Jones"], 75, 5);
        let result = m.match_one(&DescriptionRecord::new("Tea by Smith, Jones"));
        assert_eq!(result.format_candidates(), "Smith, Jones (100)");
        assert_eq!(result.classification, Classification::AmbiguousSingleWord);
    }

    #[test]
    fn test_match_all_preserves_order_and_ids() {
        let m = matcher(&["Cool Brands", "Life Brand"], 75, 5);
        let records = vec![
            DescriptionRecord::with_id("Juice by Life Brand", "1"),
            DescriptionRecord::with_id("", "2"),
            DescriptionRecord::with_id("Cola by Cool Brands", "3"),
        ];
        let results = m.match_all(&records);

        assert_eq!(results.len(), 3);
        let ids: Vec<_> = results.iter().map(|r| r.record.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(results[0].brand_names(), vec!["Life Brand".to_string()]);
        assert!(results[1].candidates.is_empty());
        assert_eq!(results[2].brand_names(), vec!["Cool Brands".to_string()]);
    }
}
