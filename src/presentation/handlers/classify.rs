use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{LlmClient, PageExtractor};
use crate::application::services::UploadedFile;
use crate::domain::{ContentType, Document};
use crate::presentation::handlers::filename::decode_multipart_filename;
use crate::presentation::state::AppState;

pub const PDF_FILES_FIELD: &str = "pdfFiles";
pub const MODEL_FIELD: &str = "model";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn classify_handler<P, L>(
    State(state): State<AppState<P, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    P: PageExtractor + 'static,
    L: LlmClient + 'static,
{
    let max_file_size = state.settings.upload.max_file_size_bytes();
    let max_files = state.settings.upload.max_files;

    let mut files: Vec<UploadedFile> = Vec::new();
    let mut logical_model: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("Failed to read multipart body: {}", e));
            }
        };

        let field_name = field.name().map(|s| s.to_string());

        match field_name.as_deref() {
            Some(MODEL_FIELD) => {
                logical_model = match field.text().await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read model field");
                        return bad_request(format!("Failed to read model field: {}", e));
                    }
                };
            }
            Some(PDF_FILES_FIELD) => {
                let raw_name = field.file_name().unwrap_or("unknown.pdf").to_string();
                let filename = decode_multipart_filename(&raw_name);

                let data = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::warn!(filename = %filename, error = %e, "Failed to read file");
                        return bad_request(format!("Failed to read file {}: {}", filename, e));
                    }
                };

                if data.len() > max_file_size {
                    tracing::warn!(filename = %filename, bytes = data.len(), "File too large");
                    return bad_request(format!(
                        "File {} exceeds the {} MB limit",
                        filename, state.settings.upload.max_file_size_mb
                    ));
                }

                if files.len() == max_files {
                    return bad_request(format!("At most {} files per batch", max_files));
                }

                let document =
                    Document::new(filename, ContentType::Pdf, data.len() as u64);
                files.push(UploadedFile {
                    document,
                    data: data.to_vec(),
                });
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown multipart field");
            }
        }
    }

    if files.is_empty() {
        tracing::warn!("Classify request with no files");
        return bad_request("No PDF files uploaded".to_string());
    }

    tracing::info!(
        file_count = files.len(),
        model = logical_model.as_deref().unwrap_or("<default>"),
        "Classifying batch"
    );

    match state
        .classification_service
        .classify_batch(&files, logical_model.as_deref())
        .await
    {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Batch orchestration failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
