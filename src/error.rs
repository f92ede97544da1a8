//! Error types for the floor-plan data pipeline.
//!
//! One enum per concern, following the crate's propagation policy:
//! row-level problems are absorbed by skipping the row and never appear
//! here; these types only describe document- and resource-level failures,
//! all of which the fetch boundary converts into the skeleton fallback.

use thiserror::Error;

// =============================================================================
// Merge Errors (document level)
// =============================================================================

/// Errors while merging a feed document into the hall skeleton.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The document has no lines at all, not even a header.
    #[error("feed document is empty")]
    EmptyDocument,
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// Errors while retrieving the feed resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-OK status.
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// =============================================================================
// Skeleton Errors
// =============================================================================

/// Errors while loading a hall skeleton from a layout file.
#[derive(Debug, Error)]
pub enum SkeletonError {
    /// Failed to read the layout file.
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),

    /// The layout file is not a valid hall list.
    #[error("invalid layout file: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for skeleton operations.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_error_message() {
        assert!(MergeError::EmptyDocument.to_string().contains("empty"));
    }

    #[test]
    fn test_skeleton_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SkeletonError = io.into();
        assert!(err.to_string().contains("layout file"));
    }
}
