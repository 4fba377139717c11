use std::process::Stdio;

use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

use crate::error::AlignmentError;
use crate::geometry::Geometry;

/// A source of decoded candidate frames. The production implementation
/// shells out to an external ffmpeg binary; tests substitute deterministic
/// in-process stubs.
#[async_trait]
pub trait FrameDecoder {
    /// Decode the single frame nearest `timestamp` (seconds) from `source`
    /// as raw planar bytes. The returned buffer is not guaranteed to be
    /// exactly one frame long.
    async fn decode_frame(
        &self,
        source: &str,
        geometry: &Geometry,
        timestamp: f64,
    ) -> Result<Vec<u8>>;
}

pub struct FfmpegFrameDecoder {
    executable: String,
}

impl FfmpegFrameDecoder {
    pub fn new(executable: &str) -> FfmpegFrameDecoder {
        FfmpegFrameDecoder {
            executable: executable.to_owned(),
        }
    }
}

#[async_trait]
impl FrameDecoder for FfmpegFrameDecoder {
    async fn decode_frame(
        &self,
        source: &str,
        geometry: &Geometry,
        timestamp: f64,
    ) -> Result<Vec<u8>> {
        let output = Command::new(&self.executable)
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(source)
            .arg("-ss")
            .arg(format!("{}", timestamp))
            .arg("-frames:v")
            .arg("1")
            .arg("-s")
            .arg(format!("{}x{}", geometry.width, geometry.height))
            .arg("-pix_fmt")
            .arg("yuv420p")
            .arg("-f")
            .arg("rawvideo")
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(AlignmentError::DecodeFailed {
                message: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            }
            .into());
        }

        Ok(output.stdout)
    }
}
