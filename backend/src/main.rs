mod config;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::{ServerConfig, ServerError};
use routes::configure_routes;
use shared::ClientConfig;
use std::env;

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    }

    let config = ServerConfig::from_env().inspect_err(|e| {
        log::error!("Invalid configuration: {}", e);
    })?;

    if !config.frontend_dir.is_dir() {
        log::warn!(
            "Frontend bundle not found at {}. Run `trunk build` in frontend/ first.",
            config.frontend_dir.display()
        );
    }

    log::info!("Prediction service: {}", config.api_endpoint.predict_url());

    let client_config = web::Data::new(ClientConfig {
        api_url: config.api_endpoint.base().to_string(),
    });
    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET"])
                    .max_age(3600),
            )
            .app_data(client_config.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
