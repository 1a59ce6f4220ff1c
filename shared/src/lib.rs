pub mod config;
pub mod media;
pub mod prediction;
pub mod state;
pub mod view;

pub use config::{ApiEndpoint, ClientConfig, ConfigError, DEFAULT_API_URL};
pub use media::{SelectedImage, is_image_media_type};
pub use prediction::{
    PredictionError, PredictionResponse, PredictionResult, UPLOAD_FIELD, outcome_from_response,
};
pub use state::{Event, Generation, Notice, PredictionRequest, PredictorState, SubmissionStatus};
pub use view::{ResultPanel, Screen, notice_text};
