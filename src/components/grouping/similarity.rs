use super::normalize::TitleNormalizer;

/// Scores how alike two event titles are once their event-type prefixes are removed
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    normalizer: TitleNormalizer,
}

impl SimilarityScorer {
    pub fn new(normalizer: TitleNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &TitleNormalizer {
        &self.normalizer
    }

    /// Word-overlap score in `[0, 1]` between the base titles of `a` and `b`.
    ///
    /// Numbered words act as distinguishers: when both titles contain words
    /// with digits and any of `a`'s numbered words is missing from `b`, the
    /// score is 0. The check only looks in one direction, so
    /// `similarity(a, b)` and `similarity(b, a)` can differ.
    ///
    /// Words are split on single spaces, so a run of spaces yields empty
    /// words that count toward the title length and match each other.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let base_a = self.normalizer.strip_event_type(a).to_lowercase();
        let base_b = self.normalizer.strip_event_type(b).to_lowercase();

        if base_a.is_empty() || base_b.is_empty() {
            return 0.0;
        }

        let words_a: Vec<&str> = base_a.split(' ').collect();
        let words_b: Vec<&str> = base_b.split(' ').collect();

        let nums_a: Vec<&str> = words_a.iter().copied().filter(|w| has_digit(w)).collect();
        let nums_b: Vec<&str> = words_b.iter().copied().filter(|w| has_digit(w)).collect();

        if !nums_a.is_empty()
            && !nums_b.is_empty()
            && !nums_a.iter().all(|n| nums_b.contains(n))
        {
            return 0.0;
        }

        let matches = words_a
            .iter()
            .filter(|word_a| words_b.iter().any(|word_b| words_match(word_a, word_b)))
            .count();

        matches as f64 / words_a.len().max(words_b.len()) as f64
    }
}

fn has_digit(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}

/// Exact match, or substring containment for words longer than three characters
fn words_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    a.chars().count() > 3 && b.chars().count() > 3 && (a.contains(b) || b.contains(a))
}
