//! Error types for feature table loading, slide access, and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all rendering operations
#[derive(Debug)]
pub enum RenderError {
    /// Failed to read or parse a per-slide feature table
    TableLoad {
        /// Path to the CSV file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Feature table structure doesn't meet loader requirements
    MalformedTable {
        /// Path to the CSV file
        path: PathBuf,
        /// Description of what's wrong with the table
        reason: String,
    },

    /// Failed to load a whole-slide image from the filesystem
    SlideLoad {
        /// Path to the slide file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A required column is absent from the feature table
    MissingColumn {
        /// Name of the missing column
        column: String,
        /// Slide whose table lacks the column
        slide: String,
    },

    /// No configured feature column contributed any valid value
    ///
    /// Raised when every configured feature is either absent from the
    /// table or contains no finite value. Halts the whole batch.
    NoValidFeatures {
        /// Slide whose table had no usable feature
        slide: String,
    },

    /// Tile identifier string failed strict validation
    TileName {
        /// The offending tile identifier
        name: String,
        /// Explanation of the formatting problem
        reason: String,
    },

    /// Failed to write a summary table to disk
    TableWrite {
        /// Path to the CSV file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Failed to save a rendered figure to disk
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

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableLoad { path, source } => {
                write!(
                    f,
                    "Failed to load feature table '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedTable { path, reason } => {
                write!(f, "Malformed feature table '{}': {reason}", path.display())
            }
            Self::SlideLoad { path, source } => {
                write!(f, "Failed to load slide '{}': {source}", path.display())
            }
            Self::MissingColumn { column, slide } => {
                write!(f, "Column '{column}' is missing from slide '{slide}'")
            }
            Self::NoValidFeatures { slide } => {
                write!(
                    f,
                    "No valid features found for averaging in slide '{slide}'"
                )
            }
            Self::TileName { name, reason } => {
                write!(f, "Invalid tile identifier '{name}': {reason}")
            }
            Self::TableWrite { path, source } => {
                write!(
                    f,
                    "Failed to write summary table '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TableLoad { source, .. } | Self::TableWrite { source, .. } => Some(source),
            Self::SlideLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, RenderError>;

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        Self::TableLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::SlideLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RenderError {
    RenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tile identifier validation error
pub fn tile_name_error(name: &str, reason: &impl ToString) -> RenderError {
    RenderError::TileName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
