// SPDX-License-Identifier: MPL-2.0
//! Fixed answers for news and image-URL verification.
//!
//! Neither check inspects its input yet; they return the same assessment
//! for every request.

use crate::domain::verification::Source;

/// Assessment of a news text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsAssessment {
    pub verdict: &'static str,
    pub confidence: u8,
    pub sources: Vec<Source>,
}

/// Assessment of an image referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlAssessment {
    pub verdict: &'static str,
    pub notes: Vec<String>,
    pub sources: Vec<Source>,
}

/// Returns the assessment for a news text.
#[must_use]
pub fn assess_news(_text: &str) -> NewsAssessment {
    NewsAssessment {
        verdict: "Likely Genuine",
        confidence: 88,
        sources: vec![Source::new("Reuters", "https://reuters.com")],
    }
}

/// Returns the assessment for an image URL.
///
/// EXIF data cannot be read without the file, so the image is always
/// flagged and a reverse image search link is offered instead. The URL is
/// passed through as given.
#[must_use]
pub fn assess_image_url(url: &str) -> ImageUrlAssessment {
    ImageUrlAssessment {
        verdict: "Possibly Edited",
        notes: vec!["EXIF data not available via URL.".to_string()],
        sources: vec![Source::new(
            "Reverse Search",
            format!("https://images.google.com/searchbyimage?image_url={url}"),
        )],
    }
}
