use crate::subs::runnable::RunnableSubcommand;
use anyhow::{anyhow, Result};
use clap::Parser;
use framealign::decoder::{FfmpegFrameDecoder, FrameDecoder};
use framealign::geometry::Geometry;

pb_create_spinner!();

#[derive(Parser)]
#[command(author, version, about = "Extract a single decoded frame at a candidate index", long_about = None)]
pub struct Extract {
    #[clap(long, short, help = "Re-encoded target stream")]
    target: String,

    #[clap(long, short, help = "Output raw frame file")]
    output: String,

    #[clap(long, short, help = "Frame width", default_value = "1920")]
    width: usize,

    #[clap(long, short = 'H', help = "Frame height", default_value = "1080")]
    height: usize,

    #[clap(long, short = 'F', help = "Frame rate of the target stream", default_value = "25")]
    framerate: f64,

    #[clap(long, short = 'i', help = "Candidate frame index", default_value = "0")]
    frame_index: usize,

    #[clap(long, short = 'd', help = "Decoder executable", default_value = "ffmpeg")]
    decoder: String,
}

#[async_trait::async_trait]
impl RunnableSubcommand for Extract {
    async fn run(&self) -> Result<()> {
        pb_set_print!();

        if self.framerate <= 0.0 {
            return Err(anyhow!("Frame rate must be positive: {}", self.framerate));
        }

        let geometry = Geometry::new(self.width, self.height)?;
        let frame_size = geometry.frame_size();
        let timestamp = self.frame_index as f64 / self.framerate;

        info!(
            "Decoding frame {} at {}s from {}",
            self.frame_index, timestamp, self.target
        );
        let decoder = FfmpegFrameDecoder::new(&self.decoder);
        let frame_data = decoder
            .decode_frame(&self.target, &geometry, timestamp)
            .await?;

        // Unlike the alignment search, extraction is strict: a misshapen
        // frame is an error here, not something to pad over.
        if frame_data.len() != frame_size {
            return Err(anyhow!(
                "Extracted frame size ({} bytes) does not match expected size ({} bytes)",
                frame_data.len(),
                frame_size
            ));
        }

        std::fs::write(&self.output, &frame_data)?;
        pb_done!();

        vprintln!("Wrote {} bytes to {}", frame_data.len(), self.output);
        Ok(())
    }
}
