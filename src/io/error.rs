//! Error types and context management for tile sheet conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum ConversionError {
    /// Image dimensions or encoding do not match the expected grid layout
    Format {
        /// What was measured (e.g. "image width")
        subject: &'static str,
        /// What the layout requires
        expected: String,
        /// What the input actually has
        actual: String,
    },

    /// A tile position referenced by the insertion plan lies outside the grid
    ///
    /// This is a defect in the plan rather than in the input sheet.
    Index {
        /// Operation that dereferenced the position
        operation: &'static str,
        /// The offending position
        index: usize,
        /// Number of tiles in the grid at that point
        len: usize,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save converted image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line or option validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Some images of a multi-file run could not be converted
    Batch {
        /// Number of images that failed
        failed: usize,
        /// Number of images attempted
        total: usize,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format {
                subject,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid tile sheet: {subject} should be {expected}, found {actual}"
                )
            }
            Self::Index {
                operation,
                index,
                len,
            } => {
                write!(
                    f,
                    "Tile index {index} is out of range during {operation} (grid holds {len} tiles)"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Batch { failed, total } => {
                write!(f, "{failed} of {total} images could not be converted")
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, ConversionError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing operation was working on
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Attaches file and operation information to errors raised without it
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the path context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path filled in
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<ConversionError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors created through `From` carry a placeholder path
            match &mut error {
                ConversionError::ImageLoad { path, .. }
                | ConversionError::ImageExport { path, .. } => {
                    if let Some(known) = &context.path {
                        if path.as_os_str() == UNKNOWN_PATH {
                            path.clone_from(known);
                        }
                    }
                }
                ConversionError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(known) = &context.path {
                        if path.as_os_str() == UNKNOWN_PATH {
                            path.clone_from(known);
                        }
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for ConversionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a format error describing an expected vs. actual measurement
pub fn format_error(
    subject: &'static str,
    expected: &impl ToString,
    actual: &impl ToString,
) -> ConversionError {
    ConversionError::Format {
        subject,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Create an out-of-range error for a plan position
pub const fn index_error(operation: &'static str, index: usize, len: usize) -> ConversionError {
    ConversionError::Index {
        operation,
        index,
        len,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ConversionError {
    ConversionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
