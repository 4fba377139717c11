use std::cmp::Ordering;

use serde::Serialize;

/// Dissimilarity score for one candidate offset. Lower scores indicate a
/// closer pixel match to the reference frame.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub candidate_index: usize,
    pub score: u64,
}

impl Ord for ScoreEntry {
    // Ties resolve to the lowest candidate index.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.candidate_index.cmp(&other.candidate_index))
    }
}

impl PartialOrd for ScoreEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoreEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoreEntry {}
