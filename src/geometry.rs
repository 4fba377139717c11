use anyhow::{anyhow, Result};
use serde::Serialize;

/// Frame geometry for planar 4:2:0 video: one full-resolution luma plane
/// followed by two quarter-resolution chroma planes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize) -> Result<Geometry> {
        if width == 0 || height == 0 {
            return Err(anyhow!("Invalid frame geometry: {}x{}", width, height));
        }
        if width % 2 != 0 || height % 2 != 0 {
            warn!(
                "Odd frame dimension {}x{}: chroma planes will be truncated",
                width, height
            );
        }
        Ok(Geometry { width, height })
    }

    pub fn luma_size(&self) -> usize {
        self.width * self.height
    }

    pub fn chroma_size(&self) -> usize {
        (self.width / 2) * (self.height / 2)
    }

    pub fn frame_size(&self) -> usize {
        self.luma_size() + 2 * self.chroma_size()
    }
}
