use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use framealign::error::AlignmentError;
use framealign::framestore::read_reference_frame;
use framealign::geometry::Geometry;

fn write_test_file(name: &str, contents: &[u8]) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!(
        "framealign-framestore-{}-{}.yuv",
        name,
        std::process::id()
    ));
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_reads_frame_at_positional_offset() -> Result<()> {
    let geometry = Geometry::new(4, 4)?;
    let frame_size = geometry.frame_size();

    let mut contents = Vec::new();
    for fill in 0..3_u8 {
        contents.extend(vec![fill; frame_size]);
    }
    let path = write_test_file("positional", &contents)?;

    let frame = read_reference_frame(path.to_str().unwrap(), &geometry, 1)?;
    assert_eq!(frame.len(), frame_size);
    assert!(frame.iter().all(|&b| b == 1));

    let frame = read_reference_frame(path.to_str().unwrap(), &geometry, 2)?;
    assert!(frame.iter().all(|&b| b == 2));

    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_truncated_file_is_an_error() -> Result<()> {
    let geometry = Geometry::new(4, 4)?;
    let frame_size = geometry.frame_size();

    // One whole frame plus half of the second.
    let contents = vec![0_u8; frame_size + frame_size / 2];
    let path = write_test_file("truncated", &contents)?;

    let err = read_reference_frame(path.to_str().unwrap(), &geometry, 1).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AlignmentError>(),
        Some(AlignmentError::TruncatedInput { frame_index: 1, .. })
    ));

    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() -> Result<()> {
    let geometry = Geometry::new(4, 4)?;
    assert!(read_reference_frame("/nonexistent/framealign.yuv", &geometry, 0).is_err());
    Ok(())
}
