//! Patient registration and search relays

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use xray_core::{IdentityTuple, NewPatient, PatientSearch, PatientSummary};

use crate::AppState;
use crate::error::AppError;
use crate::upstream::CreateOutcome;

/// Request body for patient registration
#[derive(Debug, Deserialize, Default)]
pub struct CreatePatientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, rename = "birthDate")]
    pub birth_date: Option<String>,
}

/// Response body after the repository accepted a patient
#[derive(Serialize)]
pub struct CreatedResponse {
    message: &'static str,
    fhir_response: JsonValue,
}

/// Response body when the repository rejected a patient
#[derive(Serialize)]
pub struct RejectedResponse {
    message: &'static str,
    error: String,
}

/// Query parameters for patient search
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<String>,
}

/// POST /create - Register a patient with the FHIR repository
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let patient = NewPatient::new(body.name, body.gender, body.birth_date);

    let outcome = state.fhir.create_patient(&patient).await.map_err(|e| {
        tracing::error!(error = %e, "Patient create request failed");
        AppError::Internal(e)
    })?;

    match outcome {
        CreateOutcome::Created(fhir_response) => {
            tracing::info!(
                patient_id = fhir_response.get("id").and_then(|v| v.as_str()).unwrap_or("unknown"),
                "Patient created"
            );
            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    message: "Patient created",
                    fhir_response,
                }),
            )
                .into_response())
        }
        CreateOutcome::Rejected { status, body } => {
            tracing::warn!(status = %status, "FHIR repository rejected patient");
            Ok((
                status,
                Json(RejectedResponse {
                    message: "Failed",
                    error: body,
                }),
            )
                .into_response())
        }
    }
}

/// GET /search - Search patients and attach stored X-ray images
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let filters = PatientSearch::from_form(params.name, params.last_name, params.birth_date)?;

    let bundle = state.fhir.search_patients(&filters).await.map_err(|e| {
        tracing::error!(error = %e, "Patient search request failed");
        AppError::Internal(e)
    })?;

    let mut patients = Vec::with_capacity(bundle.entry.len());
    for resource in bundle.resources() {
        let image = match IdentityTuple::from_resource(resource) {
            Some(key) => state.images.find(&key).await?,
            None => None,
        };
        patients.push(PatientSummary::from_resource(resource, image.as_deref()));
    }

    tracing::debug!(count = patients.len(), "Patient search complete");

    Ok(Json(patients))
}
