use shared::{ApiEndpoint, DEFAULT_API_URL};
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("PREDICTOR_API_URL: {0}")]
    ApiUrl(#[from] shared::ConfigError),
    #[error("PORT must be a number between 1 and 65535, got '{0}'")]
    Port(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_endpoint: ApiEndpoint,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PREDICTOR_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_endpoint = ApiEndpoint::parse(&api_url)?;

        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ServerError::Port(raw)),
            },
            None => DEFAULT_PORT,
        };

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_frontend_dir);

        Ok(Self {
            api_endpoint,
            port,
            frontend_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist")
}
