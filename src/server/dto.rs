// SPDX-License-Identifier: MPL-2.0
//! Request and response bodies of the HTTP API.

use crate::application::verify::{ImageUrlAssessment, NewsAssessment};
use crate::domain::verification::{Source, VerificationResult};
use serde::{Deserialize, Serialize};

// =============================================================================
// Requests
// =============================================================================

/// Body of `/verify/news` and `/verify/claim`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextRequest {
    pub text: String,
}

/// Body of `/verify/image`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageUrlRequest {
    pub url: String,
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceBody {
    pub name: String,
    pub url: String,
}

impl From<Source> for SourceBody {
    fn from(source: Source) -> Self {
        Self {
            name: source.name,
            url: source.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsResponse {
    pub verdict: String,
    pub confidence: u8,
    pub sources: Vec<SourceBody>,
}

impl From<NewsAssessment> for NewsResponse {
    fn from(assessment: NewsAssessment) -> Self {
        Self {
            verdict: assessment.verdict.to_string(),
            confidence: assessment.confidence,
            sources: assessment.sources.into_iter().map(SourceBody::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUrlResponse {
    pub verdict: String,
    pub notes: Vec<String>,
    pub sources: Vec<SourceBody>,
}

impl From<ImageUrlAssessment> for ImageUrlResponse {
    fn from(assessment: ImageUrlAssessment) -> Self {
        Self {
            verdict: assessment.verdict.to_string(),
            notes: assessment.notes,
            sources: assessment.sources.into_iter().map(SourceBody::from).collect(),
        }
    }
}

/// Body returned by `/upload/image`. `filename` is echoed as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub verdict: String,
    pub notes: Vec<String>,
    pub filename: Option<String>,
}

impl UploadResponse {
    #[must_use]
    pub fn new(result: VerificationResult, filename: Option<String>) -> Self {
        let (verdict, notes) = result.into_parts();
        Self {
            verdict: verdict.label().to_string(),
            notes,
            filename,
        }
    }
}
