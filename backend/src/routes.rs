use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::debug;
use serde_json::json;
use shared::ClientConfig;
use std::path::PathBuf;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api_routes(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/config.json").route(web::get().to(client_config)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn client_config(config: web::Data<ClientConfig>) -> HttpResponse {
    debug!("Serving client config: {}", config.api_url);
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    fn client_config_data() -> web::Data<ClientConfig> {
        web::Data::new(ClientConfig {
            api_url: "https://tumor.example.org/".into(),
        })
    }

    #[actix_web::test]
    async fn serves_client_config() {
        let app = test::init_service(
            App::new()
                .app_data(client_config_data())
                .configure(configure_api_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Cache-Control")
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let body: ClientConfig = test::read_body_json(resp).await;
        assert_eq!(body.api_url, "https://tumor.example.org/");
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(App::new().configure(configure_api_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn config_rejects_post() {
        let app = test::init_service(
            App::new()
                .app_data(client_config_data())
                .configure(configure_api_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/config.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
