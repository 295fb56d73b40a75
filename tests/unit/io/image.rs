//! Tests for tile decoding and collage export

#[cfg(test)]
mod tests {
    use crate::unit::fixtures::{solid, write_rgba_tile};
    use image::Rgb;
    use std::error::Error;
    use tempfile::TempDir;
    use tilestitch::StitchError;
    use tilestitch::io::image::{load_tile, save_collage};

    // Tests RGBA tiles are flattened to RGB on load
    // Verified by returning the decoded image without conversion
    #[test]
    fn test_load_tile_converts_to_rgb() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_rgba_tile(temp_dir.path(), "tile.0.0.png", 3, [10, 20, 30, 255]);

        let tile = load_tile(&path).unwrap();
        assert_eq!(tile.dimensions(), (3, 3));
        assert_eq!(*tile.get_pixel(2, 2), Rgb([10, 20, 30]));
    }

    // Tests missing tiles report their path
    // Verified by using the generic From conversion
    #[test]
    fn test_load_missing_tile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tile.9.9.png");

        let err = load_tile(&path).unwrap_err();
        assert!(err.to_string().contains("tile.9.9.png"));
        assert!(err.source().is_some());
        match err {
            StitchError::TileLoad { path: reported, .. } => assert_eq!(reported, path),
            other => unreachable!("Expected TileLoad error, got {other}"),
        }
    }

    // Tests export creates missing parent directories
    // Verified by removing directory creation
    #[test]
    fn test_save_collage_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("deeper").join("A.png");

        save_collage(&solid(2, [1, 2, 3]), &output).unwrap();

        let written = image::open(&output).unwrap().into_rgb8();
        assert_eq!(*written.get_pixel(1, 1), Rgb([1, 2, 3]));
    }

    // Tests an unwritable destination is an export error
    // Verified by discarding the save result
    #[test]
    fn test_save_collage_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("taken.png");
        std::fs::create_dir(&output).unwrap();

        let err = save_collage(&solid(2, [0, 0, 0]), &output).unwrap_err();
        assert!(matches!(err, StitchError::ImageExport { .. }));
    }
}
