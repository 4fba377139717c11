use anyhow::Result;
use framealign::error::AlignmentError;
use framealign::scoring::sum_absolute_difference;

#[test]
fn test_identical_buffers_score_zero() -> Result<()> {
    let buffer = vec![123_u8; 4096];
    assert_eq!(sum_absolute_difference(&buffer, &buffer)?, 0);
    Ok(())
}

#[test]
fn test_score_is_symmetric() -> Result<()> {
    let a: Vec<u8> = (0..=255).collect();
    let b: Vec<u8> = (0..=255).rev().collect();
    assert_eq!(
        sum_absolute_difference(&a, &b)?,
        sum_absolute_difference(&b, &a)?
    );
    Ok(())
}

#[test]
fn test_score_is_bounded() -> Result<()> {
    let len = 1024;
    let zeros = vec![0_u8; len];
    let full = vec![255_u8; len];
    assert_eq!(sum_absolute_difference(&zeros, &full)?, 255 * len as u64);

    let a = vec![10_u8; len];
    let b = vec![200_u8; len];
    let score = sum_absolute_difference(&a, &b)?;
    assert!(score <= 255 * len as u64);
    assert_eq!(score, 190 * len as u64);
    Ok(())
}

#[test]
fn test_length_mismatch_is_an_error() {
    let a = vec![0_u8; 10];
    let b = vec![0_u8; 11];
    let err = sum_absolute_difference(&a, &b).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AlignmentError>(),
        Some(AlignmentError::LengthMismatch { left: 10, right: 11 })
    ));
}
