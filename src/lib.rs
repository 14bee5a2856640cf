// SPDX-License-Identifier: MPL-2.0
//! `truthcheck` is the backend of the TruthCheck fact-checking tool.
//!
//! It serves a small HTTP API that fact-checks claims through an LLM
//! provider and inspects uploaded images for signs of editing using their
//! EXIF metadata.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod server;
