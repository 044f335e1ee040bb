use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use triage_core::ProcessingResult;
use triage_nlp::TriageError;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ProcessMessageRequest {
    pub text: String,
    #[serde(default)]
    pub message_id: Option<String>,
}

pub(super) async fn process_message(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ProcessMessageRequest>,
) -> Result<Json<ApiResponse<ProcessingResult>>, ApiError> {
    let result = state
        .pipeline
        .process(&body.text, body.message_id)
        .await
        .map_err(|e| map_triage_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_triage_error(request_id: String, error: &TriageError) -> ApiError {
    match error {
        TriageError::EmptyText => ApiError::new(request_id, "validation_error", error.to_string()),
        TriageError::Analyzer(source) => {
            tracing::error!(error = %source, "linguistic analysis failed");
            ApiError::new(
                request_id,
                "analyzer_unavailable",
                "linguistic analyzer unavailable",
            )
        }
    }
}
