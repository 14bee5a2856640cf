// SPDX-License-Identifier: MPL-2.0
//! Verification domain types.
//!
//! Pure domain types for verification results with no external dependencies.

use std::collections::BTreeMap;

/// Tag name written by editing software into the primary image IFD.
pub const TAG_IMAGE_SOFTWARE: &str = "Image Software";

/// Tag name of the capture timestamp in the Exif sub-IFD.
pub const TAG_EXIF_DATE_TIME_ORIGINAL: &str = "EXIF DateTimeOriginal";

// =============================================================================
// MetadataTagSet
// =============================================================================

/// Metadata tags extracted from an image, keyed by `"<IFD group> <TagName>"`.
///
/// Values are kept in their display form (e.g. `"Photoshop 25.0"`).
/// A tag set is built per request and discarded after evaluation.
///
/// # Example
///
/// ```ignore
/// let tags: MetadataTagSet = [("Image Software", "GIMP 2.10")].into_iter().collect();
/// assert_eq!(tags.get(TAG_IMAGE_SOFTWARE), Some("GIMP 2.10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTagSet {
    tags: BTreeMap<String, String>,
}

impl MetadataTagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(name.into(), value.into());
    }

    /// Returns the value of a tag, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    /// Returns `true` if the tag is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MetadataTagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// Coarse classification of an uploaded image.
///
/// This is a heuristic signal, not cryptographic proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Genuine,
    PossiblyEdited,
}

impl Verdict {
    /// Returns the label exposed to API clients.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Genuine => "Genuine",
            Verdict::PossiblyEdited => "Possibly Edited",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// VerificationResult
// =============================================================================

/// Note used when no heuristic fired.
pub const NO_EDITS_NOTE: &str = "No edits found.";

/// Outcome of the tamper heuristic: a verdict plus human-readable notes.
///
/// Notes are never empty; [`VerificationResult::new`] substitutes
/// [`NO_EDITS_NOTE`] when given none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    verdict: Verdict,
    notes: Vec<String>,
}

impl VerificationResult {
    #[must_use]
    pub fn new(verdict: Verdict, notes: Vec<String>) -> Self {
        let notes = if notes.is_empty() {
            vec![NO_EDITS_NOTE.to_string()]
        } else {
            notes
        };
        Self { verdict, notes }
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Consumes the result, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Verdict, Vec<String>) {
        (self.verdict, self.notes)
    }
}

// =============================================================================
// Source
// =============================================================================

/// A reference cited alongside a verdict (e.g. a news outlet or search link).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
