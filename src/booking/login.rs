//! Identity-provider redirect for the login screen.
//!
//! The backend owns the OIDC flow; the client only navigates to
//! `/auth/login` with optional hints.

use url::Url;

use crate::settings::ClientSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email typed on the form, passed through as `login_hint`
    pub login_hint: Option<String>,
    pub manager_name: Option<String>,
    pub employee_name: Option<String>,
}

impl LoginRequest {
    /// Build a request from raw form fields, dropping blank ones.
    pub fn from_form(email: &str, manager_name: &str, employee_name: &str) -> Self {
        Self {
            login_hint: non_blank(email),
            manager_name: non_blank(manager_name),
            employee_name: non_blank(employee_name),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// URL of the backend login endpoint with the request's hints attached.
pub fn login_url(settings: &ClientSettings, request: &LoginRequest) -> Result<String, url::ParseError> {
    let mut url = Url::parse(&settings.endpoint("/auth/login"))?;
    {
        let params = [
            ("login_hint", &request.login_hint),
            ("manager_name", &request.manager_name),
            ("employee_name", &request.employee_name),
        ];
        let mut query = url.query_pairs_mut();
        for (key, value) in params {
            if let Some(value) = value {
                query.append_pair(key, value);
            }
        }
    }
    // An empty serializer still leaves a trailing '?'
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ClientSettings {
        ClientSettings {
            api_base_url: "http://localhost:8000".to_string(),
            ..ClientSettings::default()
        }
    }

    #[test]
    fn test_plain_login() {
        let url = login_url(&settings(), &LoginRequest::default()).unwrap();
        assert_eq!(url, "http://localhost:8000/auth/login");
    }

    #[test]
    fn test_hints_are_encoded() {
        let request = LoginRequest::from_form(" sam@example.com ", "Ada Lovelace", "");
        let url = login_url(&settings(), &request).unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/auth/login?login_hint=sam%40example.com&manager_name=Ada+Lovelace"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = ClientSettings {
            api_base_url: "not a url".to_string(),
            ..ClientSettings::default()
        };
        assert!(login_url(&settings, &LoginRequest::default()).is_err());
    }
}
