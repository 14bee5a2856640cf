// SPDX-License-Identifier: MPL-2.0
//! Metadata tag extraction port definition.
//!
//! This module defines the [`TagExtractor`] trait used by the tamper heuristic
//! to read EXIF tags from a staged upload. Infrastructure adapters implement
//! it using libraries like `kamadak-exif`.
//!
//! # Design Notes
//!
//! - Extraction reads from a path, since uploads are staged to a temporary
//!   file before inspection
//! - A file that simply carries no EXIF data is an empty [`MetadataTagSet`],
//!   not an error
//! - The `Display` form of [`ExtractionError`] is the bare message, as it is
//!   surfaced verbatim to API clients

use crate::domain::verification::MetadataTagSet;
use std::fmt;
use std::path::Path;

// =============================================================================
// ExtractionError
// =============================================================================

/// Errors that can occur while extracting metadata tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The staged file could not be opened or read.
    Io(String),

    /// The container format is not recognized, or its metadata block is
    /// corrupt.
    Malformed(String),
}

impl ExtractionError {
    /// Returns the raw error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ExtractionError::Io(msg) | ExtractionError::Malformed(msg) => msg,
        }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ExtractionError {}

// =============================================================================
// TagExtractor Trait
// =============================================================================

/// Port for reading metadata tags from an image file.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single extractor is shared by
/// all request handlers.
///
/// # Example
///
/// ```ignore
/// use truthcheck::application::port::TagExtractor;
/// use std::path::Path;
///
/// fn has_software_tag(extractor: &impl TagExtractor, path: &Path) -> bool {
///     extractor
///         .extract_tags(path)
///         .map(|tags| tags.contains("Image Software"))
///         .unwrap_or(false)
/// }
/// ```
pub trait TagExtractor: Send + Sync {
    /// Reads all metadata tags from a file.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if the file cannot be read or its
    /// metadata is malformed.
    fn extract_tags(&self, path: &Path) -> Result<MetadataTagSet, ExtractionError>;
}
