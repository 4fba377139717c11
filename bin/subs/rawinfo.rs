use anyhow::{anyhow, Result};
use clap::Parser;
use framealign::geometry::Geometry;

use crate::subs::runnable::RunnableSubcommand;

#[derive(Parser)]
#[command(author, version, about = "Print information about a raw planar reference file", long_about = None)]
pub struct RawInfo {
    #[clap(long, short, help = "Input raw reference file")]
    input_file: String,

    #[clap(long, short, help = "Frame width", default_value = "1920")]
    width: usize,

    #[clap(long, short = 'H', help = "Frame height", default_value = "1080")]
    height: usize,

    #[clap(long, short = 'F', help = "Frame rate", default_value = "25")]
    framerate: f64,
}

#[async_trait::async_trait]
impl RunnableSubcommand for RawInfo {
    async fn run(&self) -> Result<()> {
        if !std::path::Path::new(&self.input_file).exists() {
            return Err(anyhow!("File not found: {}", self.input_file));
        }

        let geometry = Geometry::new(self.width, self.height)?;
        let frame_size = geometry.frame_size();
        let file_size = std::fs::metadata(&self.input_file)?.len() as usize;

        let whole_frames = file_size / frame_size;
        let trailing_bytes = file_size % frame_size;

        if trailing_bytes > 0 {
            warn!(
                "File does not divide evenly into frames ({} trailing bytes)",
                trailing_bytes
            );
        }

        println!("File:                  {}", self.input_file);
        println!("File size (bytes):     {}", file_size);
        println!("Geometry:              {}x{}", geometry.width, geometry.height);
        println!("Luma plane (bytes):    {}", geometry.luma_size());
        println!("Chroma plane (bytes):  {}", geometry.chroma_size());
        println!("Frame size (bytes):    {}", frame_size);
        println!("Whole frames:          {}", whole_frames);
        println!("Trailing bytes:        {}", trailing_bytes);
        if self.framerate > 0.0 {
            println!(
                "Duration at {} fps:    {:.3}s",
                self.framerate,
                whole_frames as f64 / self.framerate
            );
        }

        Ok(())
    }
}
