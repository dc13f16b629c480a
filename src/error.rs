//! Error types for opart.
//!
//! Pattern generation itself is total once its inputs are valid, so almost
//! every error here is an input-validation failure raised before any buffer
//! is allocated.

use std::fmt;

/// Errors raised by the pattern layer: validation, registry lookups and the
/// numeric helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Particle count was negative, fractional or not a finite number.
    InvalidCount(String),
    /// A [`GenerationConfig`](crate::GenerationConfig) field is outside its domain.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// What the field must satisfy.
        expected: &'static str,
    },
    /// No pattern is registered under this identifier.
    UnknownPattern(String),
    /// A pattern with this identifier is already registered.
    DuplicatePattern(String),
    /// A helper hit an undefined operation (division by zero).
    Domain(&'static str),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidCount(raw) => {
                write!(f, "Invalid particle count {}: must be a non-negative integer", raw)
            }
            PatternError::InvalidConfig { field, value, expected } => {
                write!(f, "Invalid config: {} = {} (expected {})", field, value, expected)
            }
            PatternError::UnknownPattern(id) => write!(f, "Unknown pattern '{}'", id),
            PatternError::DuplicatePattern(id) => {
                write!(f, "Pattern '{}' is already registered", id)
            }
            PatternError::Domain(what) => write!(f, "Domain error: {}", what),
        }
    }
}

impl std::error::Error for PatternError {}

/// Errors that can occur while writing a snapshot image or loading settings.
#[derive(Debug)]
pub enum SnapshotError {
    /// Pattern lookup or generation failed.
    Pattern(PatternError),
    /// Failed to encode or write the image.
    Image(image::ImageError),
    /// Failed to read or write a file.
    Io(std::io::Error),
    /// Settings file was not valid JSON for the expected shape.
    Settings(serde_json::Error),
    /// Requested image is too large to render.
    Dimensions(u32, u32),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Pattern(e) => write!(f, "Pattern error: {}", e),
            SnapshotError::Image(e) => write!(f, "Failed to write image: {}", e),
            SnapshotError::Io(e) => write!(f, "I/O error: {}", e),
            SnapshotError::Settings(e) => write!(f, "Failed to parse settings: {}", e),
            SnapshotError::Dimensions(w, h) => write!(f, "Image {}x{} is too large", w, h),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Pattern(e) => Some(e),
            SnapshotError::Image(e) => Some(e),
            SnapshotError::Io(e) => Some(e),
            SnapshotError::Settings(e) => Some(e),
            SnapshotError::Dimensions(..) => None,
        }
    }
}

impl From<PatternError> for SnapshotError {
    fn from(e: PatternError) -> Self {
        SnapshotError::Pattern(e)
    }
}

impl From<image::ImageError> for SnapshotError {
    fn from(e: image::ImageError) -> Self {
        SnapshotError::Image(e)
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Settings(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PatternError::UnknownPattern("nope".into());
        assert_eq!(err.to_string(), "Unknown pattern 'nope'");

        let err = PatternError::InvalidConfig {
            field: "spread",
            value: 0.0,
            expected: "> 0",
        };
        assert!(err.to_string().contains("spread"));
    }

    #[test]
    fn test_snapshot_error_source() {
        use std::error::Error;
        let err: SnapshotError = PatternError::Domain("zero-width range").into();
        assert!(err.source().is_some());
    }
}
