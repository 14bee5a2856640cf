// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the file staging used by uploads.
//!
//! # Available Adapters
//!
//! - [`exif`]: EXIF tag extraction via `kamadak-exif` (implements [`TagExtractor`])
//! - [`openai`]: Chat completion over HTTP (implements [`ClaimChecker`])
//! - [`staging`]: Self-deleting temporary files for uploads
//!
//! [`TagExtractor`]: crate::application::port::TagExtractor
//! [`ClaimChecker`]: crate::application::port::ClaimChecker

pub mod exif;
pub mod openai;
pub mod staging;

// Re-export main types for convenience
pub use self::exif::ExifTagExtractor;
pub use openai::OpenAiClaimChecker;
pub use staging::StagedUpload;
