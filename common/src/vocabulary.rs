//! ブランドマスタ（語彙）
//!
//! 照合前に一度だけ構築し、以降は読み取り専用で共有する。

use crate::normalize::normalize;
use std::collections::HashMap;

/// ブランド1件（元の表記と正規形）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandEntry {
    pub original: String,
    pub normalized: String,
}

/// ブランド語彙
#[derive(Debug, Clone, Default)]
pub struct BrandVocabulary {
    /// 入力順の全エントリ（正規形の重複も保持）
    entries: Vec<BrandEntry>,
    /// 正規形 → 最初に出現したエントリの位置
    first_by_normalized: HashMap<String, usize>,
}

impl BrandVocabulary {
    /// ブランド名の列から語彙を構築
    ///
    /// 欠損（None）と空文字のブランドは候補にならないので除外する。
    pub fn build<'a, I>(brands: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut entries = Vec::new();
        let mut first_by_normalized = HashMap::new();

        for brand in brands.into_iter().flatten() {
            if brand.trim().is_empty() {
                continue;
            }

            let normalized = normalize(brand);
            first_by_normalized
                .entry(normalized.clone())
                .or_insert(entries.len());
            entries.push(BrandEntry {
                original: brand.to_string(),
                normalized,
            });
        }

        log::debug!(
            "ブランド語彙を構築: {}件 (正規形ユニーク {}件)",
            entries.len(),
            first_by_normalized.len()
        );

        Self {
            entries,
            first_by_normalized,
        }
    }

    /// 欠損のないブランド名から構築
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self::build(names.iter().map(|n| Some(n.as_ref())))
    }

    /// 入力順の正規形一覧
    pub fn all_normalized(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.normalized.as_str())
    }

    /// 正規形から元の表記を引く（重複時は最初のもの）
    pub fn original_for(&self, normalized: &str) -> Option<&str> {
        self.first_by_normalized
            .get(normalized)
            .map(|&idx| self.entries[idx].original.as_str())
    }

    pub fn entries(&self) -> &[BrandEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_drops_missing_and_empty() {
        let vocab = BrandVocabulary::build(vec![Some("Acme"), None, Some(""), Some("  "), Some("Zeta Co")]);
        assert_eq!(vocab.len(), 2);
        let normalized: Vec<&str> = vocab.all_normalized().collect();
        assert_eq!(normalized, vec!["acme", "zeta"]);
    }

    #[test]
    fn test_first_original_wins_on_duplicates() {
        let vocab = BrandVocabulary::from_names(&["Acme Inc", "ACME", "Acme (USA)"]);
        // 重複は位置として保持される
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.all_normalized().collect::<Vec<_>>(), vec!["acme", "acme", "acme"]);
        assert_eq!(vocab.original_for("acme"), Some("Acme Inc"));
    }

    #[test]
    fn test_original_for_unknown() {
        let vocab = BrandVocabulary::from_names(&["Acme"]);
        assert_eq!(vocab.original_for("zeta"), None);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = BrandVocabulary::build(Vec::<Option<&str>>::new());
        assert!(vocab.is_empty());
        assert_eq!(vocab.all_normalized().count(), 0);
    }
}
