//! Client for the external image prediction endpoint

use serde_json::Value as JsonValue;
use xray_core::AnalysisRequest;

const PREDICT_PATH: &str = "/predictPneumonia";

/// Client for the pneumonia prediction service
#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    url: String,
}

impl PredictionClient {
    /// Create a new client for the service rooted at `base_url` (no trailing slash)
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}{}", base_url, PREDICT_PATH),
        }
    }

    /// Submit one image and return the service's verdict unchanged
    pub async fn predict(&self, request: &AnalysisRequest) -> Result<JsonValue, String> {
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Prediction service error ({}): {}", status, body));
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
