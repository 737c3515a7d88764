//! Error types and context management for batch operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for all catalog, rendering and persistence operations
#[derive(Debug, Error)]
pub enum PlacardError {
    /// A resolved theme has no registry entry
    ///
    /// Unreachable when the rule table and registry agree, so this is treated
    /// as a broken configuration and aborts the batch.
    #[error("Theme '{theme}' has no registry entry")]
    Configuration {
        /// Theme key that failed to resolve
        theme: String,
    },

    /// Preferred font could not be used; the built-in font takes over
    #[error("Font '{}' unavailable: {reason}", path.display())]
    ResourceUnavailable {
        /// Path of the requested font file
        path: PathBuf,
        /// Why the font could not be used
        reason: String,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or save a rendered image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        #[source]
        source: image::ImageError,
    },

    /// Catalog document could not be parsed
    #[error("Failed to load catalog '{}': {source}", path.display())]
    CatalogLoad {
        /// Path of the catalog document
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Runtime parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl PlacardError {
    /// Whether this error should stop the whole batch rather than one item
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::CatalogLoad { .. } | Self::InvalidParameter { .. }
        )
    }
}

/// Convenience type alias for placard results
pub type Result<T> = std::result::Result<T, PlacardError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`PlacardError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation attached
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PlacardError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlacardError {
    PlacardError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error for an unresolved theme
pub fn missing_theme(theme: &impl ToString) -> PlacardError {
    PlacardError::Configuration {
        theme: theme.to_string(),
    }
}
