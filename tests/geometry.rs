use anyhow::Result;
use framealign::geometry::Geometry;

#[test]
fn test_frame_size_math() -> Result<()> {
    let geometry = Geometry::new(1920, 1080)?;
    assert_eq!(geometry.luma_size(), 1920 * 1080);
    assert_eq!(geometry.chroma_size(), 960 * 540);
    assert_eq!(geometry.frame_size(), 1920 * 1080 + 2 * (960 * 540));
    Ok(())
}

#[test]
fn test_frame_size_consistency() -> Result<()> {
    for (width, height) in [(2, 2), (16, 16), (640, 480), (1280, 720), (3840, 2160)] {
        let geometry = Geometry::new(width, height)?;
        assert_eq!(
            geometry.frame_size(),
            width * height + 2 * ((width / 2) * (height / 2))
        );
        assert_eq!(geometry.frame_size(), width * height * 3 / 2);
    }
    Ok(())
}

#[test]
fn test_zero_dimensions_rejected() {
    assert!(Geometry::new(0, 1080).is_err());
    assert!(Geometry::new(1920, 0).is_err());
    assert!(Geometry::new(0, 0).is_err());
}

#[test]
fn test_odd_dimensions_truncate_chroma() -> Result<()> {
    let geometry = Geometry::new(11, 9)?;
    assert_eq!(geometry.chroma_size(), 5 * 4);
    assert_eq!(geometry.frame_size(), 11 * 9 + 2 * (5 * 4));
    Ok(())
}
