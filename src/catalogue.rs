//! Observed Keyword Catalogue
//!
//! Per-shader record of the keyword sets actually used by content. During the
//! scan phase every encountered material's active keywords are recorded
//! against its shader; during generation the catalogue is frozen and each
//! expanded wanted-variant combination is crossed with the shader's observed
//! sets.
//!
//! # Policy
//!
//! Entries are deduplicated by set equality and every shader's list is seeded
//! with the empty set, so content using *no* extra keywords is always
//! represented. Recording an empty set appends nothing: the baseline already
//! covers it. (An alternate historical policy appended every material's raw
//! keyword list unconditionally; the deduplicated, empty-seeded policy is the
//! one implemented here.)

use rustc_hash::FxHashMap;

use crate::keywords::KeywordSet;
use crate::shader::ShaderId;

/// Mapping from shader identity to the ordered, distinct keyword sets
/// observed in content.
#[derive(Debug, Clone, Default)]
pub struct ObservedKeywordCatalogue {
    entries: FxHashMap<ShaderId, Vec<KeywordSet>>,
}

impl ObservedKeywordCatalogue {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Records a keyword set observed on a material using `shader`.
    ///
    /// An empty set is a no-op (the empty baseline covers it). The first
    /// non-empty record for a shader seeds its list with the empty set; the
    /// set itself is then appended unless an existing entry equals it.
    pub fn record(&mut self, shader: ShaderId, keywords: KeywordSet) {
        if keywords.is_empty() {
            return;
        }

        let list = self
            .entries
            .entry(shader)
            .or_insert_with(|| vec![KeywordSet::new()]);

        if !list.iter().any(|existing| *existing == keywords) {
            log::debug!("catalogue: shader {shader} observed keywords '{keywords}'");
            list.push(keywords);
        }
    }

    /// Returns the observed keyword sets for a shader, in record order.
    ///
    /// Returns an empty slice when the shader has no catalogue entry at all;
    /// callers treat that as "the expanded wanted-variant keywords are the
    /// sole candidate", not as an error.
    #[must_use]
    pub fn get(&self, shader: ShaderId) -> &[KeywordSet] {
        self.entries.get(&shader).map_or(&[], Vec::as_slice)
    }

    /// Checks whether a shader has a catalogue entry.
    #[must_use]
    pub fn contains(&self, shader: ShaderId) -> bool {
        self.entries.contains_key(&shader)
    }

    /// Number of shaders with catalogue entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the catalogue has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(shader, observed sets)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ShaderId, &[KeywordSet])> {
        self.entries
            .iter()
            .map(|(&shader, list)| (shader, list.as_slice()))
    }
}
