use std::cmp::Ordering;

/// Brings a decoded candidate buffer to the expected byte length. Decoders
/// can emit slightly misshapen output near stream boundaries; oversized
/// buffers are truncated and undersized buffers are right-padded with
/// zeros so a short read never aborts the batch.
pub fn normalize_frame_length(mut buffer: Vec<u8>, expected_size: usize) -> Vec<u8> {
    match buffer.len().cmp(&expected_size) {
        Ordering::Greater => buffer.truncate(expected_size),
        Ordering::Less => buffer.resize(expected_size, 0),
        Ordering::Equal => {}
    }
    buffer
}
