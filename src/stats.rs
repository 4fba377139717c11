use serde::Serialize;

use crate::scoreentry::ScoreEntry;

#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    pub total_candidates: usize,
    pub candidates_scored: usize,
    pub candidates_failed: usize,
    pub scores: Vec<ScoreEntry>,
}
