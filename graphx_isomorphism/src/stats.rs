/// Counters collected while one search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate pairs handed to the feasibility rules.
    pub candidates_tried: u64,
    pub syntactic_rejections: u64,
    pub semantic_rejections: u64,
    pub states_committed: u64,
    pub states_restored: u64,
    pub mappings_emitted: u64,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs accepted by both rule sets.
    #[must_use]
    pub const fn accepted(&self) -> u64 {
        self.candidates_tried - self.syntactic_rejections - self.semantic_rejections
    }

    pub(crate) const fn record_candidate(&mut self) {
        self.candidates_tried += 1;
    }

    pub(crate) const fn record_syntactic_rejection(&mut self) {
        self.syntactic_rejections += 1;
    }

    pub(crate) const fn record_semantic_rejection(&mut self) {
        self.semantic_rejections += 1;
    }

    pub(crate) const fn record_commit(&mut self) {
        self.states_committed += 1;
    }

    pub(crate) const fn record_restore(&mut self) {
        self.states_restored += 1;
    }

    pub(crate) const fn record_mapping(&mut self) {
        self.mappings_emitted += 1;
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "candidates: {}, syntactic rejections: {}, semantic rejections: {}, commits: {}, restores: {}, mappings: {}",
            self.candidates_tried,
            self.syntactic_rejections,
            self.semantic_rejections,
            self.states_committed,
            self.states_restored,
            self.mappings_emitted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_excludes_rejections() {
        let mut stats = SearchStats::new();
        for _ in 0..5 {
            stats.record_candidate();
        }
        stats.record_syntactic_rejection();
        stats.record_semantic_rejection();

        assert_eq!(stats.accepted(), 3);
        assert!(stats.to_string().starts_with("candidates: 5"));
    }
}
