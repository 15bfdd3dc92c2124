use crate::{
    gemini_client::TextGenerator, http_client::handle_service_result,
    services::password_suggestion::PasswordSuggestionService,
};
use actix_web::{HttpResponse, Responder, web};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

pub type StaticResources = HashMap<&'static str, static_files::Resource>;

#[derive(Debug, Serialize)]
pub struct HealthcheckInfo {
    pub version: &'static str,
    pub provider_configured: bool,
}

#[derive(Clone)]
pub struct Api<Generator>
where
    Generator: TextGenerator,
{
    pub generator: Generator,
}

impl<Generator> Api<Generator>
where
    Generator: TextGenerator,
{
    pub fn new(generator: Generator) -> Self {
        Api { generator }
    }

    pub async fn index(
        static_resources: web::Data<StaticResources>,
    ) -> actix_web::Result<HttpResponse> {
        debug!("index() called");

        let Some(index_html) = static_resources.get("index.html") else {
            return Err(actix_web::error::ErrorNotFound(
                "index.html not found in embedded resources",
            ));
        };

        Ok(HttpResponse::Ok()
            .content_type(index_html.mime_type)
            .body(index_html.data.to_vec()))
    }

    pub async fn healthcheck(api: web::Data<Self>) -> impl Responder {
        debug!("healthcheck() called");

        HttpResponse::Ok().json(HealthcheckInfo {
            version: env!("CARGO_PKG_VERSION"),
            provider_configured: api.generator.is_configured(),
        })
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }

    pub async fn suggest_password(api: web::Data<Self>) -> impl Responder {
        debug!("suggest_password() called");

        handle_service_result(
            PasswordSuggestionService::suggest(&api.generator).await,
            "suggest_password",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use anyhow::Result;
    use serde_json::Value;
    use wifi_connector_core::SuggestedPassword;

    #[derive(Clone)]
    struct FakeGenerator {
        configured: bool,
        reply: Result<&'static str, &'static str>,
    }

    impl TextGenerator for FakeGenerator {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate_json(&self, _prompt: &str, _schema: &Value) -> Result<String> {
            self.reply.map(str::to_string).map_err(anyhow::Error::msg)
        }
    }

    type TestApi = Api<FakeGenerator>;

    fn api(reply: Result<&'static str, &'static str>) -> web::Data<TestApi> {
        web::Data::new(Api::new(FakeGenerator {
            configured: true,
            reply,
        }))
    }

    #[actix_web::test]
    async fn test_suggest_password_returns_json() {
        let app = test::init_service(
            App::new()
                .app_data(api(Ok(r#"{"password":"Qz8!mN4#rT6$wY"}"#)))
                .route("/suggest-password", web::post().to(TestApi::suggest_password)),
        )
        .await;

        let req = test::TestRequest::post().uri("/suggest-password").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: SuggestedPassword = test::read_body_json(resp).await;
        assert_eq!(body.password, "Qz8!mN4#rT6$wY");
    }

    #[actix_web::test]
    async fn test_suggest_password_hides_provider_error() {
        let app = test::init_service(
            App::new()
                .app_data(api(Err("401 Unauthorized: API key not valid")))
                .route("/suggest-password", web::post().to(TestApi::suggest_password)),
        )
        .await;

        let req = test::TestRequest::post().uri("/suggest-password").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(resp).await;
        assert_eq!(body, "suggest_password failed");
    }

    #[actix_web::test]
    async fn test_suggest_password_rejects_empty_password() {
        let app = test::init_service(
            App::new()
                .app_data(api(Ok(r#"{"password":""}"#)))
                .route("/suggest-password", web::post().to(TestApi::suggest_password)),
        )
        .await;

        let req = test::TestRequest::post().uri("/suggest-password").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_healthcheck_reports_provider_state() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Api::new(FakeGenerator {
                    configured: false,
                    reply: Err("unused"),
                })))
                .route("/healthcheck", web::get().to(TestApi::healthcheck)),
        )
        .await;

        let req = test::TestRequest::get().uri("/healthcheck").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["provider_configured"], false);
    }

    #[actix_web::test]
    async fn test_index_without_embedded_shell_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StaticResources::new()))
                .default_service(web::route().to(TestApi::index)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
