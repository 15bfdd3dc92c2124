use actix_web::HttpResponse;
use anyhow::{Context, Result, ensure};
use log::error;
use reqwest::Response;
use wifi_connector_core::SuggestedPassword;

/// Trait for converting service results into HTTP responses
pub trait ServiceResultResponse {
    fn into_response(self) -> HttpResponse;
}

impl ServiceResultResponse for SuggestedPassword {
    fn into_response(self) -> HttpResponse {
        match serde_json::to_string(&self) {
            Ok(json) => HttpResponse::Ok()
                .content_type("application/json")
                .body(json),
            Err(e) => {
                error!("failed to serialize SuggestedPassword: {e:#}");
                HttpResponse::InternalServerError().body("failed to serialize response")
            }
        }
    }
}

/// Convert a service result into a response
///
/// Errors are logged with their full chain. The client only sees
/// `"{operation} failed"`, provider details never leave the server.
pub fn handle_service_result<T>(result: Result<T>, operation: &str) -> HttpResponse
where
    T: ServiceResultResponse,
{
    match result {
        Ok(data) => data.into_response(),
        Err(e) => {
            error!("{operation} failed: {e:#}");
            HttpResponse::InternalServerError().body(format!("{operation} failed"))
        }
    }
}

/// Handle HTTP response by checking status and extracting body
///
/// # Arguments
/// * `res` - The HTTP response to handle
/// * `context_msg` - Context message describing the request (e.g., "POST <url>")
///
/// # Returns
/// * `Ok(String)` - The response body if the status is successful
/// * `Err` - If the status is not successful or reading the body fails
pub async fn handle_http_response(res: Response, context_msg: &str) -> Result<String> {
    let status = res.status();
    let body = res.text().await.context("failed to read response body")?;

    ensure!(
        status.is_success(),
        "{context_msg} failed with status {status} and body: {body}"
    );

    Ok(body)
}
