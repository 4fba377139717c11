use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("Unexpected end of file while reading frame {frame_index} from {path}")]
    TruncatedInput { path: String, frame_index: usize },

    #[error("Decoder failed: {message}")]
    DecodeFailed { message: String },

    #[error("Buffer length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("No candidate frames produced a score")]
    EmptyResult,
}
