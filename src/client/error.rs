//! Errors surfaced by the booking API client.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's `detail` when it sent one
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a failed response.
    ///
    /// A JSON body supplies its string `detail` (FastAPI style; validation
    /// errors send a list, which is not a message). The status text is
    /// only used when the body is not JSON at all.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let detail = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(json) => json
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            Err(_) => Some(status_text.to_string()),
        };

        let message = match detail {
            Some(detail) if !detail.is_empty() => detail,
            _ => format!("HTTP error! status: {status}"),
        };

        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 409: seat or timeslot already taken
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// 402: manager balance too low
    pub fn is_payment_required(&self) -> bool {
        self.status() == Some(402)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Server-provided message for HTTP errors, `None` otherwise.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message_wins() {
        let err = ApiError::from_response(409, "Conflict", r#"{"detail":"Seat already booked"}"#);
        assert_eq!(err.to_string(), "Seat already booked");
        assert!(err.is_conflict());
        assert!(!err.is_payment_required());
    }

    #[test]
    fn test_falls_back_to_status_text() {
        let err = ApiError::from_response(402, "Payment Required", "<html>oops</html>");
        assert_eq!(err.to_string(), "Payment Required");
        assert!(err.is_payment_required());
    }

    #[test]
    fn test_structured_detail_is_not_a_message() {
        let err = ApiError::from_response(422, "", r#"{"detail":[{"loc":["query","date"]}]}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 422");
    }

    #[test]
    fn test_json_without_detail_ignores_status_text() {
        let err = ApiError::from_response(400, "Bad Request", r#"{"error":"nope"}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 400");

        let err = ApiError::from_response(502, "", "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn test_network_errors_have_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.server_message(), None);
        assert!(!err.is_unauthorized());
    }
}
