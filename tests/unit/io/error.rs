//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilesheet360::ConversionError;
    use tilesheet360::io::error::{
        ErrorContext, WithContext, format_error, index_error, invalid_parameter,
    };

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConversionError::FileSystem {
            path: "/tmp/tiles.bmp".into(),
            operation: "open",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(index_error("insertion", 3, 2).source().is_none());
    }

    // Tests format errors report expected and actual values
    // Verified by omitting the actual value from the message
    #[test]
    fn test_format_error_message() {
        let error = format_error("image width", &"a multiple of the tile width 16", &1000);

        let message = error.to_string();
        assert!(message.contains("image width"));
        assert!(message.contains("a multiple of the tile width 16"));
        assert!(message.contains("1000"));
    }

    // Tests index errors identify the offending position
    // Verified by omitting the index from the message
    #[test]
    fn test_index_error_message() {
        let error = index_error("insertion", 1200, 1057);

        let message = error.to_string();
        assert!(message.contains("1200"));
        assert!(message.contains("1057"));
        assert!(message.contains("insertion"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tiles-per-row", &0, &"must be at least 1");

        let message = error.to_string();
        assert!(message.contains("tiles-per-row"));
        assert!(message.contains('0'));
        assert!(message.contains("must be at least 1"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = ConversionError::ImageExport {
            path: PathBuf::from("/restricted/output-360.bmp"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output-360.bmp"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests batch errors count failures
    // Verified by swapping failed and total
    #[test]
    fn test_batch_error_message() {
        let error = ConversionError::Batch {
            failed: 2,
            total: 5,
        };

        assert_eq!(error.to_string(), "2 of 5 images could not be converted");
    }

    // Tests path context replaces the placeholder path of converted errors
    // Verified by overwriting paths that were already known
    #[test]
    fn test_with_path_fills_unknown_only() {
        let unknown: Result<(), image::ImageError> = Err(image::ImageError::IoError(
            std::io::Error::other("broken"),
        ));
        match unknown.with_path("sheet.bmp") {
            Err(ConversionError::ImageLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("sheet.bmp"));
            }
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }

        let known: Result<(), ConversionError> = Err(ConversionError::FileSystem {
            path: PathBuf::from("real.bmp"),
            operation: "open",
            source: std::io::Error::other("broken"),
        });
        let context = ErrorContext {
            path: Some(PathBuf::from("ignored.bmp")),
            operation: Some("write"),
        };
        match known.with_context(context) {
            Err(ConversionError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("real.bmp"));
                assert_eq!(operation, "write");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }
}
