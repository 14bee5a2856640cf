// SPDX-License-Identifier: MPL-2.0
//! Verification domain types.
//!
//! This module provides the pure value types shared by the tamper heuristic
//! and the HTTP layer:
//! - [`MetadataTagSet`]: EXIF tags keyed by `"<IFD group> <TagName>"`
//! - [`Verdict`]: Genuine or possibly edited
//! - [`VerificationResult`]: verdict plus a non-empty list of notes
//! - [`Source`]: a cited reference

mod types;

pub use types::{
    MetadataTagSet, Source, Verdict, VerificationResult, NO_EDITS_NOTE,
    TAG_EXIF_DATE_TIME_ORIGINAL, TAG_IMAGE_SOFTWARE,
};
