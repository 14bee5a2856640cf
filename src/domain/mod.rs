// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so serialization and
//! transport concerns stay in the outer layers.
//!
//! # Modules
//!
//! - [`verification`]: Verification types ([`MetadataTagSet`](verification::MetadataTagSet),
//!   [`Verdict`](verification::Verdict), [`VerificationResult`](verification::VerificationResult))

pub mod verification;
