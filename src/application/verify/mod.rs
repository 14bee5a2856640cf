// SPDX-License-Identifier: MPL-2.0
//! Verification use cases.
//!
//! # Available Services
//!
//! - [`tamper`]: EXIF tamper heuristic for uploaded images
//! - [`claim`]: Claim fact-checking through an LLM provider
//! - [`canned`]: Fixed answers for news and image-URL checks

pub mod canned;
pub mod claim;
pub mod tamper;

pub use canned::{assess_image_url, assess_news, ImageUrlAssessment, NewsAssessment};
pub use claim::verify_claim;
pub use tamper::{evaluate, inspect};
