use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use anyhow::Result;

use crate::error::AlignmentError;
use crate::geometry::Geometry;

/// Reads a single raw frame from a plane-sequential reference file. The
/// file carries no header or frame markers; frames are located purely
/// positionally at `frame_index * frame_size`.
pub fn read_reference_frame(
    path: &str,
    geometry: &Geometry,
    frame_index: usize,
) -> Result<Vec<u8>> {
    let frame_size = geometry.frame_size();
    let mut frame_data = vec![0_u8; frame_size];

    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start((frame_index * frame_size) as u64))?;

    let mut bytes_read = 0;
    while bytes_read < frame_size {
        let read = file.read(&mut frame_data[bytes_read..])?;
        if read == 0 {
            return Err(AlignmentError::TruncatedInput {
                path: path.to_owned(),
                frame_index,
            }
            .into());
        }
        bytes_read += read;
    }

    Ok(frame_data)
}
