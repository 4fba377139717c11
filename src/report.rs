use anyhow::Result;
use serde::Serialize;

use crate::context::{SearchContext, SearchParameters};
use crate::geometry::Geometry;
use crate::search::AlignmentResult;
use crate::stats::SearchStats;

#[derive(Serialize)]
struct SearchReport<'a> {
    parameters: &'a SearchParameters,
    geometry: &'a Geometry,
    stats: &'a SearchStats,
    result: &'a AlignmentResult,
}

pub fn save_report(path: &str, context: &SearchContext, result: &AlignmentResult) -> Result<()> {
    let report = SearchReport {
        parameters: &context.parameters,
        geometry: &context.geometry,
        stats: &context.stats,
        result,
    };

    std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    info!("Saved search report to {}", path);
    Ok(())
}
