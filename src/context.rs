use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::framestore;
use crate::geometry::Geometry;
use crate::stats::SearchStats;

#[derive(Debug, Clone, Serialize)]
pub struct SearchParameters {
    pub reference_path: String,
    pub target_path: String,
    pub width: usize,
    pub height: usize,
    pub frame_rate: f64,
    pub reference_index: usize,
    pub candidate_count: usize,
    pub max_concurrency: usize,
    pub decode_timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct SearchContext {
    pub parameters: SearchParameters,
    pub geometry: Geometry,
    pub reference_frame: Arc<Vec<u8>>,
    pub stats: SearchStats,
}

impl SearchContext {
    /// Loads the reference frame up front. A missing or truncated
    /// reference file is fatal for the whole search and is surfaced here,
    /// before any decode work is scheduled.
    pub fn create_with_reference(params: &SearchParameters) -> Result<Self> {
        if params.frame_rate <= 0.0 {
            return Err(anyhow!("Frame rate must be positive: {}", params.frame_rate));
        }
        if params.candidate_count == 0 {
            return Err(anyhow!("Candidate count must be at least 1"));
        }
        if params.max_concurrency == 0 {
            return Err(anyhow!("Concurrency must be at least 1"));
        }

        let geometry = Geometry::new(params.width, params.height)?;

        info!(
            "Loading reference frame {} from {}",
            params.reference_index, params.reference_path
        );
        let reference_frame = framestore::read_reference_frame(
            &params.reference_path,
            &geometry,
            params.reference_index,
        )?;

        Ok(SearchContext {
            parameters: params.to_owned(),
            geometry,
            reference_frame: Arc::new(reference_frame),
            stats: SearchStats::default(),
        })
    }
}
