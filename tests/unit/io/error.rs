//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilestitch::StitchError;
    use tilestitch::io::error::{invalid_parameter, malformed_filename};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = StitchError::FileSystem {
            path: "/tmp/images".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read directory"));
    }

    // Tests EmptyFolder names both the folder and pattern
    // Verified by omitting the pattern from the message
    #[test]
    fn test_empty_folder_error() {
        let error = StitchError::EmptyFolder {
            folder: PathBuf::from("images/A"),
            pattern: "*.png".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("images/A"));
        assert!(message.contains("*.png"));
        assert!(error.source().is_none());
    }

    // Tests TileSizeMismatch reports actual and expected sizes
    // Verified by swapping width and height in the message
    #[test]
    fn test_tile_size_mismatch_error() {
        let error = StitchError::TileSizeMismatch {
            path: PathBuf::from("tile.0.0.png"),
            actual: (256, 128),
            expected: 512,
        };

        let message = error.to_string();
        assert!(message.contains("256x128"));
        assert!(message.contains("512x512"));
    }

    // Tests OverlappingTiles names the contested cell
    // Verified by omitting the cell from the message
    #[test]
    fn test_overlapping_tiles_error() {
        let error = StitchError::OverlappingTiles {
            cell: (3, -4),
            first: PathBuf::from("a.3.-4.png"),
            second: PathBuf::from("b.3.-4.png"),
        };

        assert!(error.to_string().contains("(3, -4)"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = StitchError::ImageExport {
            path: PathBuf::from("/restricted/A.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/A.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests helper constructors fill every field
    // Verified by dropping the value from invalid_parameter
    #[test]
    fn test_helper_constructors() {
        let message = invalid_parameter("scale", &0, &"must be positive").to_string();
        assert!(message.contains("scale"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));

        let error = malformed_filename("tile.x.png", &"x field is missing");
        assert!(matches!(error, StitchError::MalformedFilename { .. }));
        assert!(error.to_string().contains("tile.x.png"));
    }

    // Tests conversions from library errors
    // Verified by mapping io errors to parameter errors
    #[test]
    fn test_from_conversions() {
        let from_io: StitchError = std::io::Error::other("disk gone").into();
        assert!(matches!(from_io, StitchError::FileSystem { .. }));

        let pattern_error = glob::Pattern::new("[").unwrap_err();
        let from_pattern: StitchError = pattern_error.into();
        assert!(matches!(from_pattern, StitchError::InvalidPattern { .. }));

        let too_large = StitchError::CanvasTooLarge {
            columns: 10,
            rows: 20,
            scale: 512,
        };
        assert!(too_large.to_string().contains("10x20"));
    }
}
