// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for HTTP integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use http_body_util::BodyExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use truthcheck::application::port::{
    ClaimChecker, ClaimPrompt, ExtractionError, LlmError, TagExtractor,
};
use truthcheck::domain::verification::MetadataTagSet;
use truthcheck::server::AppState;

pub const BOUNDARY: &str = "truthcheck-test-boundary";

/// Extractor returning a fixed outcome and recording the staged path.
pub struct RecordingExtractor {
    outcome: Result<MetadataTagSet, ExtractionError>,
    seen: Arc<Mutex<Vec<(PathBuf, bool)>>>,
}

impl RecordingExtractor {
    pub fn new(outcome: Result<MetadataTagSet, ExtractionError>) -> Self {
        Self {
            outcome,
            seen: Arc::default(),
        }
    }

    /// Paths handed to the extractor, with whether each existed at the time.
    pub fn seen(&self) -> Arc<Mutex<Vec<(PathBuf, bool)>>> {
        self.seen.clone()
    }
}

impl TagExtractor for RecordingExtractor {
    fn extract_tags(&self, path: &Path) -> Result<MetadataTagSet, ExtractionError> {
        self.seen
            .lock()
            .expect("lock")
            .push((path.to_path_buf(), path.exists()));
        self.outcome.clone()
    }
}

/// Claim checker answering with a fixed reply.
pub struct CannedChecker(pub Result<String, LlmError>);

impl ClaimChecker for CannedChecker {
    fn complete<'a>(&'a self, _prompt: &'a ClaimPrompt) -> BoxFuture<'a, Result<String, LlmError>> {
        let reply = self.0.clone();
        async move { reply }.boxed()
    }
}

pub fn state(extractor: impl TagExtractor + 'static, checker: impl ClaimChecker + 'static) -> AppState {
    AppState {
        extractor: Arc::new(extractor),
        claim_checker: Arc::new(checker),
        staging_dir: None,
    }
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Builds a multipart request with a single field.
pub fn multipart_request(field: &str, filename: Option<&str>, bytes: &[u8]) -> Request<Body> {
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/upload/image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Big-endian JPEG whose only EXIF field is `Software`.
pub fn jpeg_with_software(software: &str) -> Vec<u8> {
    let mut ascii = software.as_bytes().to_vec();
    ascii.push(0);

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\x00\x2a\x00\x00\x00\x08");
    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&0x0131u16.to_be_bytes());
    tiff.extend_from_slice(&2u16.to_be_bytes());
    tiff.extend_from_slice(&(ascii.len() as u32).to_be_bytes());
    tiff.extend_from_slice(&26u32.to_be_bytes());
    tiff.extend_from_slice(&0u32.to_be_bytes());
    tiff.extend_from_slice(&ascii);

    let mut app1 = b"Exif\x00\x00".to_vec();
    app1.extend_from_slice(&tiff);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((app1.len() + 2) as u16).to_be_bytes());
    jpeg.extend_from_slice(&app1);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}
