//! Client for the FHIR repository's Patient endpoints

use reqwest::{StatusCode, header};
use serde_json::Value as JsonValue;
use xray_core::{Bundle, NewPatient, PatientSearch};

const FHIR_JSON: &str = "application/fhir+json";

/// Client for `{base}/Patient` on a FHIR R4 repository
#[derive(Clone)]
pub struct FhirClient {
    http: reqwest::Client,
    base_url: String,
}

/// Result of a create call that reached the repository
#[derive(Debug)]
pub enum CreateOutcome {
    /// 200 or 201, with the repository's response body
    Created(JsonValue),
    /// Any other status, with the repository's raw response text
    Rejected { status: StatusCode, body: String },
}

impl FhirClient {
    /// Create a new client rooted at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn patient_url(&self) -> String {
        format!("{}/Patient", self.base_url)
    }

    /// POST a new Patient resource
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<CreateOutcome, String> {
        let body = serde_json::to_vec(patient)
            .map_err(|e| format!("Failed to encode Patient: {}", e))?;

        let response = self
            .http
            .post(self.patient_url())
            .header(header::CONTENT_TYPE, FHIR_JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Ok(CreateOutcome::Rejected { status, body });
        }

        response
            .json::<JsonValue>()
            .await
            .map(CreateOutcome::Created)
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// GET the Patient collection with the given filters
    pub async fn search_patients(&self, search: &PatientSearch) -> Result<Bundle, String> {
        let response = self
            .http
            .get(self.patient_url())
            .query(search)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("FHIR repository error ({}): {}", status, body));
        }

        response
            .json::<Bundle>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
