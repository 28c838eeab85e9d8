//! HTTP handlers served next to the Dioxus app

use axum::Json;
use serde::Serialize;

use crate::settings;

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    /// Backend the client talks to
    pub api_base_url: String,
}

/// GET /status - Service health check
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "riviera-booking",
        version: env!("CARGO_PKG_VERSION"),
        api_base_url: settings::current().api_base_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_reports_service_and_backend() {
        let Json(status) = status_handler().await;
        assert_eq!(status.service, "riviera-booking");
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert!(status.api_base_url.starts_with("http"));

        let json = serde_json::to_value(&status).unwrap();
        assert!(json.get("api_base_url").is_some());
    }
}
