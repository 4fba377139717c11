use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::sync::Semaphore;

use crate::context::SearchContext;
use crate::decoder::FrameDecoder;
use crate::error::AlignmentError;
use crate::geometry::Geometry;
use crate::normalize::normalize_frame_length;
use crate::scoreentry::ScoreEntry;
use crate::scoring::sum_absolute_difference;

enum CandidateOutcome {
    Scored(ScoreEntry),
    Failed(usize),
}

#[derive(Debug, Clone, Serialize)]
pub struct AlignmentResult {
    pub frame_offset: usize,
    pub score: u64,
    pub candidates_scored: usize,
    pub candidates_failed: usize,
}

/// Fans one decode task out per candidate offset `1..=candidate_count`,
/// scores each decoded frame against the reference, and reduces to the
/// minimum-scoring candidate.
///
/// Decode tasks run under a counting-permit pool of `max_concurrency` and
/// complete in arbitrary order. A failed decode drops that candidate from
/// the score table without aborting the batch. Ties reduce to the lowest
/// candidate index.
pub async fn frame_offset_search<C, D>(
    context: &mut SearchContext,
    decoder: Arc<D>,
    on_candidate_scored: C,
) -> Result<AlignmentResult>
where
    C: Fn(&ScoreEntry) + Send + Sync + 'static,
    D: FrameDecoder + Send + Sync + 'static,
{
    let frame_size = context.geometry.frame_size();
    let semaphore = Arc::new(Semaphore::new(context.parameters.max_concurrency));
    let (tx, mut rx) = mpsc::channel(context.parameters.max_concurrency);

    for candidate_index in 1..=context.parameters.candidate_count {
        let tx = tx.clone();
        let semaphore = semaphore.clone();
        let decoder = decoder.clone();
        let reference = context.reference_frame.clone();
        let geometry = context.geometry;
        let target_path = context.parameters.target_path.clone();
        let timestamp = candidate_index as f64 / context.parameters.frame_rate;
        let timeout = context.parameters.decode_timeout;

        tokio::spawn(async move {
            let permit = semaphore
                .acquire_owned()
                .await
                .expect("Semaphore unexpectedly closed");

            let outcome = match score_candidate(
                decoder.as_ref(),
                &target_path,
                &geometry,
                timestamp,
                timeout,
                &reference,
                frame_size,
            )
            .await
            {
                Ok(score) => CandidateOutcome::Scored(ScoreEntry {
                    candidate_index,
                    score,
                }),
                Err(why) => {
                    warn!("Discarding candidate {}: {}", candidate_index, why);
                    CandidateOutcome::Failed(candidate_index)
                }
            };

            drop(permit);

            if tx.send(outcome).await.is_err() {
                error!(
                    "Result channel closed before candidate {} reported",
                    candidate_index
                );
            }
        });
    }
    drop(tx);

    // Single-consumer aggregation; the closed channel is the join barrier.
    let mut entries: Vec<ScoreEntry> = Vec::with_capacity(context.parameters.candidate_count);
    let mut failed = 0;
    while let Some(outcome) = rx.recv().await {
        match outcome {
            CandidateOutcome::Scored(entry) => {
                on_candidate_scored(&entry);
                entries.push(entry);
            }
            CandidateOutcome::Failed(_) => failed += 1,
        }
    }

    entries.sort_by_key(|e| e.candidate_index);
    context.stats.total_candidates = context.parameters.candidate_count;
    context.stats.candidates_scored = entries.len();
    context.stats.candidates_failed = failed;
    context.stats.scores = entries;

    let best = context
        .stats
        .scores
        .iter()
        .min()
        .cloned()
        .ok_or(AlignmentError::EmptyResult)?;

    vprintln!(
        "Candidate {} scored lowest at {} ({} of {} scored, {} failed)",
        best.candidate_index,
        best.score,
        context.stats.candidates_scored,
        context.stats.total_candidates,
        failed
    );

    Ok(AlignmentResult {
        frame_offset: best.candidate_index,
        score: best.score,
        candidates_scored: context.stats.candidates_scored,
        candidates_failed: failed,
    })
}

async fn score_candidate<D: FrameDecoder + ?Sized>(
    decoder: &D,
    target_path: &str,
    geometry: &Geometry,
    timestamp: f64,
    timeout: Option<Duration>,
    reference: &[u8],
    frame_size: usize,
) -> Result<u64> {
    let decoded = match timeout {
        Some(limit) => {
            match tokio::time::timeout(limit, decoder.decode_frame(target_path, geometry, timestamp))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    return Err(AlignmentError::DecodeFailed {
                        message: format!("Decoder timed out after {}s", limit.as_secs_f64()),
                    }
                    .into());
                }
            }
        }
        None => decoder.decode_frame(target_path, geometry, timestamp).await?,
    };

    let candidate = normalize_frame_length(decoded, frame_size);
    sum_absolute_difference(reference, &candidate)
}
