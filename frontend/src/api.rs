use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{
    ApiEndpoint, ClientConfig, PredictionError, PredictionRequest, PredictionResult,
    outcome_from_response,
};

const CONFIG_PATH: &str = "/config.json";

/// Endpoint baked in at build time, used until `/config.json` answers.
pub fn initial_endpoint() -> ApiEndpoint {
    match option_env!("PREDICTOR_API_URL") {
        Some(raw) => ApiEndpoint::parse(raw).unwrap_or_else(|e| {
            log::warn!("Ignoring PREDICTOR_API_URL: {}", e);
            ApiEndpoint::default()
        }),
        None => ApiEndpoint::default(),
    }
}

pub async fn fetch_client_config() -> Result<ApiEndpoint, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("{} returned {}", CONFIG_PATH, response.status()));
    }

    let config = response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_PATH, e))?;

    ApiEndpoint::try_from(&config).map_err(|e| e.to_string())
}

/// Sends one multipart POST to `<base>/predict/`. The browser fills in the
/// multipart boundary and content type from the `FormData` body.
pub async fn send_prediction(
    endpoint: &ApiEndpoint,
    request: &PredictionRequest<GlooFile>,
) -> Result<PredictionResult, PredictionError> {
    let image = request.image();
    let form_data = web_sys::FormData::new()
        .map_err(|e| PredictionError::Request(format!("{:?}", e)))?;
    form_data
        .append_with_blob_and_filename(
            request.field_name(),
            image.payload().as_ref(),
            image.filename(),
        )
        .map_err(|e| PredictionError::Request(format!("{:?}", e)))?;

    let url = endpoint.predict_url();
    log::info!(
        "Submitting {} (generation {}) to {}",
        image.filename(),
        request.generation(),
        url
    );

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| PredictionError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| PredictionError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .binary()
        .await
        .map_err(|e| PredictionError::Transport(e.to_string()))?;

    outcome_from_response(status, &body)
}
