// SPDX-License-Identifier: MPL-2.0
//! Route handlers.

use super::dto::{
    ErrorBody, ImageUrlRequest, ImageUrlResponse, MessageResponse, NewsResponse, TextRequest,
    UploadResponse,
};
use super::AppState;
use crate::application::verify::{self, tamper};
use crate::error::{Error, Result};
use crate::infrastructure::StagedUpload;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Name of the multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

/// Message served on `/`.
pub const LIVENESS_MESSAGE: &str = "TruthCheck backend is live.";

// =============================================================================
// ApiError
// =============================================================================

/// An error answered with a status code and `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn missing_field(name: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: format!("missing multipart field `{name}`"),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        tracing::error!(error = %err, "request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

pub async fn verify_news(Json(req): Json<TextRequest>) -> Json<NewsResponse> {
    Json(verify::assess_news(&req.text).into())
}

/// Fact-checks a claim. Provider failures are reported in the body as
/// `{"error": ...}` with a success status.
pub async fn verify_claim(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<serde_json::Value> {
    match verify::verify_claim(state.claim_checker.as_ref(), &req.text).await {
        Ok(value) => Json(value),
        Err(err) => {
            tracing::warn!(error = %err, "claim verification failed");
            Json(json!({ "error": err.to_string() }))
        }
    }
}

pub async fn verify_image_url(Json(req): Json<ImageUrlRequest>) -> Json<ImageUrlResponse> {
    Json(verify::assess_image_url(&req.url).into())
}

/// Stages the uploaded image, runs the tamper heuristic and removes the
/// staged file.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> std::result::Result<Json<UploadResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            upload = Some((filename, bytes));
            break;
        }
    }
    let (filename, bytes) = upload.ok_or_else(|| ApiError::missing_field(UPLOAD_FIELD))?;

    tracing::info!(filename = ?filename, size = bytes.len(), "inspecting upload");

    let extractor = state.extractor.clone();
    let staging_dir = state.staging_dir.clone();
    let result = tokio::task::spawn_blocking(move || -> Result<_> {
        let staged = StagedUpload::write(staging_dir.as_deref(), &bytes)?;
        Ok(tamper::inspect(extractor.as_ref(), staged.path()))
    })
    .await
    .map_err(Error::from)??;

    Ok(Json(UploadResponse::new(result, filename)))
}
