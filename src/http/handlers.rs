use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, info, warn};

use super::state::AppState;
use crate::audio::AudioArtifact;
use crate::pipeline::{PipelineError, PipelineRequest};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/upload
/// Accept a single multipart field named `audio` and run it through the
/// pipeline. Upstream failures map to 502 with a generic body; upstream
/// detail stays in the server logs.
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    // Pull the single `audio` field out of the multipart body
    let mut audio: Option<(String, String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("audio") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("recording.webm").to_string();
        let content_type = field.content_type().unwrap_or("audio/webm").to_string();
        match field.bytes().await {
            Ok(bytes) => {
                audio = Some((file_name, content_type, bytes.to_vec()));
            }
            Err(e) => {
                warn!("Failed to read audio field: {e}");
            }
        }
        break;
    }

    let Some((file_name, content_type, bytes)) = audio else {
        return (StatusCode::BAD_REQUEST, "No file uploaded.").into_response();
    };

    info!("Uploading file: {} ({} bytes)", file_name, bytes.len());

    // Persist before transcription; a storage failure is logged but does
    // not fail the request.
    if let Err(e) = state.store.save("audio", &file_name, &bytes) {
        error!("Failed to persist upload: {e:#}");
    }

    let request = PipelineRequest {
        audio: AudioArtifact::from_bytes(bytes, content_type),
    };

    match state.pipeline.handle(request).await {
        Ok(message) => (StatusCode::OK, Json(UploadResponse { message })).into_response(),
        Err(PipelineError::BadRequest) => {
            (StatusCode::BAD_REQUEST, "No file uploaded.").into_response()
        }
        Err(PipelineError::Transcription) => {
            (StatusCode::BAD_GATEWAY, "Transcription failed.").into_response()
        }
        Err(PipelineError::Generation) => {
            (StatusCode::BAD_GATEWAY, "Generation failed.").into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
