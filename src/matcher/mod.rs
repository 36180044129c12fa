//! 一括照合モジュール
//!
//! 共通ライブラリの照合器を全行に並列適用し、進捗バーを表示する。

use brand_match_common::{BrandMatcher, DescriptionRecord, MatchResult};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// 全行を照合する（出力順は入力順）
pub fn match_descriptions(
    matcher: &BrandMatcher,
    records: &[DescriptionRecord],
    show_progress: bool,
) -> Vec<MatchResult> {
    if !show_progress {
        return matcher.match_all(records);
    }

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  [{elapsed_precise}] {bar:30.green/blue} {pos}/{len} 照合中...")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  "),
    );

    let results: Vec<MatchResult> = records
        .par_iter()
        .progress_with(pb.clone())
        .map(|record| matcher.match_one(record))
        .collect();

    pb.finish_and_clear();
    results
}

/// 照合結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub total: usize,
    /// 候補が1件以上あった行
    pub with_candidates: usize,
    pub confident: usize,
    pub single_word: usize,
    pub no_match: usize,
    /// 全文での再照合が発生した行
    pub fallbacks: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        use brand_match_common::{Classification, QuerySource};

        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };
        for result in results {
            if !result.candidates.is_empty() {
                summary.with_candidates += 1;
            }
            if result.query_source == QuerySource::FallbackFullDescription {
                summary.fallbacks += 1;
            }
            match result.classification {
                Classification::ConfidentMatches(_) => summary.confident += 1,
                Classification::AmbiguousSingleWord => summary.single_word += 1,
                Classification::NoMatch => summary.no_match += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brand_match_common::{BrandVocabulary, MatchSettings};

    #[test]
    fn test_match_descriptions_and_summary() {
        let matcher = BrandMatcher::new(
            BrandVocabulary::from_names(&["Cool Brands", "Widget"]),
            MatchSettings::default(),
        );
        let records = vec![
            DescriptionRecord::new("Premium Cola by Cool Brands Inc"),
            DescriptionRecord::new("Widget by Nobody Certified Label"),
            DescriptionRecord::new("Tap water"),
        ];

        let quiet = match_descriptions(&matcher, &records, false);
        let with_bar = match_descriptions(&matcher, &records, true);
        assert_eq!(quiet, with_bar);

        let summary = MatchSummary::from_results(&quiet);
        assert_eq!(
            summary,
            MatchSummary {
                total: 3,
                with_candidates: 2,
                confident: 1,
                single_word: 1,
                no_match: 1,
                fallbacks: 1,
            }
        );
    }
}
