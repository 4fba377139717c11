use framealign::normalize::normalize_frame_length;

#[test]
fn test_oversized_buffer_is_truncated() {
    let buffer = vec![7_u8; 100];
    let normalized = normalize_frame_length(buffer, 64);
    assert_eq!(normalized.len(), 64);
    assert!(normalized.iter().all(|&b| b == 7));
}

#[test]
fn test_undersized_buffer_is_zero_padded() {
    let buffer = vec![7_u8; 40];
    let normalized = normalize_frame_length(buffer, 64);
    assert_eq!(normalized.len(), 64);
    assert!(normalized[..40].iter().all(|&b| b == 7));
    assert!(normalized[40..].iter().all(|&b| b == 0));
}

#[test]
fn test_exact_buffer_is_unchanged() {
    let buffer = vec![7_u8; 64];
    let normalized = normalize_frame_length(buffer.clone(), 64);
    assert_eq!(normalized, buffer);
}

#[test]
fn test_normalization_is_idempotent() {
    for len in [0, 10, 64, 100] {
        let buffer = vec![3_u8; len];
        let once = normalize_frame_length(buffer, 64);
        let twice = normalize_frame_length(once.clone(), 64);
        assert_eq!(once, twice);
    }
}
