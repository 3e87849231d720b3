//! Load metrics.
//!
//! Counters collected by the loader while it drives a parse session. They are
//! cheap (a few integers plus one small map) and always collected; the
//! verbose API surfaces them, the plain API only reports the elapsed time.

use std::collections::BTreeMap;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct LoadMetrics {
    /// Total elapsed time of the load.
    pub total: Duration,
    /// Physical lines read, including blanks and comments.
    pub lines: usize,
    /// Blank and comment lines skipped before reaching the engine.
    pub skipped: usize,
    /// Lines handed to the engine.
    pub directives: usize,
    /// Lines the engine rejected.
    pub failed: usize,
    /// Records finalized.
    pub records: usize,
    /// Successful directives per keyword.
    pub per_keyword: BTreeMap<String, usize>,
}

/// One row of [`LoadMetrics::keyword_counts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

impl LoadMetrics {
    pub(crate) fn count_keyword(&mut self, keyword: &str) {
        *self.per_keyword.entry(keyword.to_string()).or_insert(0) += 1;
    }

    /// Keyword counts, most frequent first (ties by keyword).
    pub fn keyword_counts(&self) -> Vec<KeywordCount> {
        let mut counts: Vec<KeywordCount> = self
            .per_keyword
            .iter()
            .map(|(keyword, &count)| KeywordCount { keyword: keyword.clone(), count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
        counts
    }
}
