use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multipart field the prediction service reads the image from.
pub const UPLOAD_FIELD: &str = "file";
pub const PREDICT_PATH: &str = "predict/";
pub const SEGMENTATION_MIME: &str = "image/png";

/// Body returned by `POST /predict/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub classification: String,
    pub confidence: f64,
    pub segmentation: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    Request(String),
}

/// A fully decoded prediction. Only built when all three fields are valid.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    classification: String,
    confidence: f64,
    segmentation: String,
}

impl PredictionResult {
    pub fn decode(body: &[u8]) -> Result<Self, PredictionError> {
        let response: PredictionResponse =
            serde_json::from_slice(body).map_err(|e| PredictionError::Decode(e.to_string()))?;
        Self::try_from(response)
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Raw base64 text as sent by the service.
    pub fn segmentation(&self) -> &str {
        &self.segmentation
    }

    pub fn segmentation_src(&self) -> String {
        format!("data:{};base64,{}", SEGMENTATION_MIME, self.segmentation)
    }

    // Display of f64 is the shortest round-trip form, so 92.5 stays "92.5".
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }
}

/// Maps a completed HTTP exchange to an outcome. Any non-2xx status is a failure,
/// whatever the body holds.
pub fn outcome_from_response(status: u16, body: &[u8]) -> Result<PredictionResult, PredictionError> {
    if !(200..300).contains(&status) {
        return Err(PredictionError::Status {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    PredictionResult::decode(body)
}

impl TryFrom<PredictionResponse> for PredictionResult {
    type Error = PredictionError;

    fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
        let PredictionResponse {
            classification,
            confidence,
            segmentation,
        } = response;

        if classification.trim().is_empty() {
            return Err(PredictionError::Decode("classification is empty".into()));
        }

        if !confidence.is_finite() || !(0.0..=100.0).contains(&confidence) {
            return Err(PredictionError::Decode(format!(
                "confidence {} is outside 0-100",
                confidence
            )));
        }
        // -0.0 passes the range check but would render as "-0%"
        let confidence = if confidence == 0.0 { 0.0 } else { confidence };

        if segmentation.is_empty() {
            return Err(PredictionError::Decode("segmentation is empty".into()));
        }
        STANDARD
            .decode(segmentation.as_bytes())
            .map_err(|e| PredictionError::Decode(format!("segmentation is not base64: {}", e)))?;

        Ok(Self {
            classification,
            confidence,
            segmentation,
        })
    }
}
