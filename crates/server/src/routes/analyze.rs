//! X-ray analysis relay

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use xray_core::{AnalysisRequest, AnalyzeInput, encode_image};

use crate::AppState;
use crate::error::AppError;

/// POST /analyze - Forward a patient's stored X-ray to the prediction service
///
/// Every identity field is required. The image is looked up by identity tuple,
/// base64 encoded and sent with the patient id and first name; the service's
/// JSON verdict is returned unchanged.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Wrong field types and malformed JSON are client errors like missing fields
    let Json(body) = payload?;
    let input = body.validate()?;

    let image = state
        .images
        .find(&input.identity)
        .await?
        .ok_or_else(|| AppError::NotFound("No X-ray image found for this patient".to_string()))?;

    let request = AnalysisRequest {
        patient_id: input.patient_id,
        patient_first_name: input.identity.first_name,
        image: encode_image(&image),
    };

    tracing::info!(patient_id = %request.patient_id, "Submitting X-ray for analysis");

    let verdict = state.prediction.predict(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Analysis request failed");
        AppError::Internal(format!("AI analysis request failed: {}", e))
    })?;

    Ok(Json(verdict))
}
