use std::sync::Arc;
use std::time::Duration;

use crate::subs::runnable::RunnableSubcommand;
use anyhow::Result;
use clap::Parser;
use framealign::context::{SearchContext, SearchParameters};
use framealign::decoder::FfmpegFrameDecoder;
use framealign::report::save_report;
use framealign::search::frame_offset_search;

pb_create!();

#[derive(Parser)]
#[command(author, version, about = "Estimate the frame offset between a raw reference and a re-encoded stream", long_about = None)]
pub struct Align {
    #[clap(long, short, help = "Raw reference file (planar 4:2:0)")]
    reference: String,

    #[clap(long, short, help = "Re-encoded target stream")]
    target: String,

    #[clap(long, short, help = "Frame width", default_value = "1920")]
    width: usize,

    #[clap(long, short = 'H', help = "Frame height", default_value = "1080")]
    height: usize,

    #[clap(long, short = 'F', help = "Frame rate of the target stream", default_value = "25")]
    framerate: f64,

    #[clap(long, short = 'n', help = "Number of candidate offsets to test", default_value = "511")]
    candidates: usize,

    #[clap(
        long,
        short = 'c',
        help = "Concurrent decoder processes (0 = one per CPU)",
        default_value = "5"
    )]
    concurrency: usize,

    #[clap(long, short = 'i', help = "Reference frame index", default_value = "1")]
    frame_index: usize,

    #[clap(long, short = 'd', help = "Decoder executable", default_value = "ffmpeg")]
    decoder: String,

    #[clap(long, short = 'T', help = "Per-candidate decode timeout, in seconds")]
    timeout: Option<u64>,

    #[clap(long, short = 'R', help = "Search report output path")]
    report: Option<String>,
}

#[async_trait::async_trait]
impl RunnableSubcommand for Align {
    async fn run(&self) -> Result<()> {
        pb_set_print!();

        let parameters = SearchParameters {
            reference_path: self.reference.clone(),
            target_path: self.target.clone(),
            width: self.width,
            height: self.height,
            frame_rate: self.framerate,
            reference_index: self.frame_index,
            candidate_count: self.candidates,
            max_concurrency: if self.concurrency == 0 {
                num_cpus::get()
            } else {
                self.concurrency
            },
            decode_timeout: self.timeout.map(Duration::from_secs),
        };

        info!("Creating search context...");
        let mut context = SearchContext::create_with_reference(&parameters)?;

        info!("Scoring candidate offsets");
        pb_set_prefix!("Scoring Candidate Offsets");
        pb_set_length!(context.parameters.candidate_count);

        let decoder = Arc::new(FfmpegFrameDecoder::new(&self.decoder));
        let result = frame_offset_search(&mut context, decoder, |_entry| {
            pb_inc!();
        })
        .await?;

        pb_done!();

        if context.stats.candidates_failed > 0 {
            warn!(
                "{} of {} candidates failed to decode and were excluded",
                context.stats.candidates_failed, context.stats.total_candidates
            );
        }

        if let Some(report_path) = &self.report {
            save_report(report_path, &context, &result)?;
        }

        println!("Frame offset to sync: {}", result.frame_offset);
        Ok(())
    }
}
