//! Authentication payloads: the signed-in user and manager balances.

use serde::{Deserialize, Serialize};

/// The authenticated employee, as returned by `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub employee_uid: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Manager whose Blu-Points pay for this user's bookings
    #[serde(default)]
    pub manager_name: Option<String>,
}

impl User {
    /// "First Last", falling back to the email when no name is on file.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

/// Entry of `/auth/managers`, used by the login picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manager {
    pub name: String,
    pub balance: f64,
}

/// Balance of the signed-in user's manager (`/auth/manager-balance`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagerBalance {
    pub manager_name: String,
    pub balance: f64,
}

impl ManagerBalance {
    /// No points left; bookings are refused client-side.
    pub fn is_exhausted(&self) -> bool {
        self.balance <= 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: 7,
            employee_uid: "E-007".to_string(),
            email: "jo@example.com".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            manager_name: Some("Ada".to_string()),
        }
    }

    #[test]
    fn test_display_name_joins_parts() {
        assert_eq!(user(Some("Jo"), Some("Bloggs")).display_name(), "Jo Bloggs");
        assert_eq!(user(None, Some("Bloggs")).display_name(), "Bloggs");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(None, None).display_name(), "jo@example.com");
        assert_eq!(user(Some(" "), None).display_name(), "jo@example.com");
    }

    #[test]
    fn test_user_tolerates_missing_optional_fields() {
        let json = r#"{"id":1,"employee_uid":"u1","email":"a@b.c"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.manager_name, None);
    }

    #[test]
    fn test_zero_balance_is_exhausted() {
        let balance = ManagerBalance {
            manager_name: "Ada".to_string(),
            balance: 0.0,
        };
        assert!(balance.is_exhausted());
        assert!(!ManagerBalance { balance: 10.0, ..balance }.is_exhausted());
    }
}
