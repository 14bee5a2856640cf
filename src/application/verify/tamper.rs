// SPDX-License-Identifier: MPL-2.0
//! EXIF-based tamper heuristic.
//!
//! Two independent checks run over the extracted tags:
//! - an `Image Software` tag marks the image as possibly edited
//! - a missing `EXIF DateTimeOriginal` tag adds a note but leaves the verdict alone
//!
//! The heuristic is intentionally shallow; it flags the common case of an
//! editor stamping its name into the file and nothing more.

use crate::application::port::TagExtractor;
use crate::domain::verification::{
    MetadataTagSet, Verdict, VerificationResult, TAG_EXIF_DATE_TIME_ORIGINAL, TAG_IMAGE_SOFTWARE,
};
use std::path::Path;

/// Note added when the capture timestamp is absent.
pub const MISSING_TIMESTAMP_NOTE: &str = "Missing original timestamp.";

/// Evaluates a tag set and returns the verdict with its notes.
///
/// This is a pure function of `tags`.
#[must_use]
pub fn evaluate(tags: &MetadataTagSet) -> VerificationResult {
    let mut verdict = Verdict::Genuine;
    let mut notes = Vec::new();

    if let Some(software) = tags.get(TAG_IMAGE_SOFTWARE) {
        notes.push(format!("Edited using: {software}"));
        verdict = Verdict::PossiblyEdited;
    }

    if !tags.contains(TAG_EXIF_DATE_TIME_ORIGINAL) {
        notes.push(MISSING_TIMESTAMP_NOTE.to_string());
    }

    VerificationResult::new(verdict, notes)
}

/// Extracts tags from a staged file and evaluates them.
///
/// Extraction failures do not propagate: the error message becomes the only
/// note and the verdict stays [`Verdict::Genuine`]. The failure is also logged
/// so it stays visible to operators.
pub fn inspect(extractor: &dyn TagExtractor, path: &Path) -> VerificationResult {
    match extractor.extract_tags(path) {
        Ok(tags) => {
            tracing::debug!(tag_count = tags.len(), "extracted metadata tags");
            evaluate(&tags)
        }
        Err(err) => {
            tracing::warn!(error = ?err, "metadata extraction failed");
            VerificationResult::new(Verdict::Genuine, vec![err.to_string()])
        }
    }
}
