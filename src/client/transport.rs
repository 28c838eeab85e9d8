//! Credentialed JSON requests.
//!
//! In the browser this goes through `fetch` with `credentials: include`
//! so the backend session cookie rides along. During server-side
//! rendering a cookie-keeping `reqwest` client is used instead.

use serde::de::DeserializeOwned;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Clone)]
pub struct Transport {
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    client: reqwest::Client,
}

impl Transport {
    pub fn new() -> Self {
        Self {
            #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!("Failed to build HTTP client with cookie store: {}. Using default.", e);
                    reqwest::Client::default()
                }),
        }
    }

    /// Send a request and decode the JSON response.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        tracing::debug!("{} {}", method.as_str(), url);
        let text = self.send_raw(method, url, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_raw(&self, method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestCredentials, RequestInit, Response};

        let init = RequestInit::new();
        init.set_method(method.as_str());
        init.set_credentials(RequestCredentials::Include);
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Err(ApiError::from_response(
                response.status(),
                &response.status_text(),
                &text,
            ));
        }
        Ok(text)
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    async fn send_raw(&self, method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
        let request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let request = request.header(reqwest::header::CONTENT_TYPE, "application/json");
        let request = match body {
            Some(body) => request.body(body),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_response(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &text,
            ));
        }
        Ok(text)
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    async fn send_raw(&self, _method: Method, url: &str, _body: Option<String>) -> Result<String, ApiError> {
        Err(ApiError::Network(format!("no HTTP transport in this build ({url})")))
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    use wasm_bindgen::JsCast;

    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}
