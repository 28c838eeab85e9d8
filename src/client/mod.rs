//! Client for the booking backend's REST API.
//!
//! [`SeatingApi`] lists every endpoint the UI consumes. [`HttpApi`] is the
//! real implementation; the workflow layer only sees the trait, so tests
//! drive it with a recording fake.

mod error;
#[cfg(test)]
pub(crate) mod fake;
mod transport;

use async_trait::async_trait;
use chrono::NaiveDate;
use riviera_wire::{
    BookingsByDate, CreateReservationRequest, DashboardData, LogoutResponse, Manager,
    ManagerBalance, Reservation, ResetResult, Seat, Timeslot, User,
};
use serde::de::DeserializeOwned;

use crate::settings::ClientSettings;

pub use error::ApiError;
pub use transport::Method;
use transport::Transport;

/// Endpoints of the booking backend.
///
/// Futures are not `Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait SeatingApi {
    /// GET /auth/me
    async fn me(&self) -> Result<User, ApiError>;

    /// GET /auth/managers
    async fn managers(&self) -> Result<Vec<Manager>, ApiError>;

    /// GET /auth/manager-balance
    async fn manager_balance(&self) -> Result<ManagerBalance, ApiError>;

    /// POST /auth/logout
    async fn logout(&self) -> Result<LogoutResponse, ApiError>;

    /// GET /reservations/timeslots?date=YYYY-MM-DD
    async fn timeslots(&self, date: NaiveDate) -> Result<Vec<Timeslot>, ApiError>;

    /// GET /reservations/seats?timeslot_id=N
    async fn seats(&self, timeslot_id: i64) -> Result<Vec<Seat>, ApiError>;

    /// GET /reservations/mine
    async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    /// POST /reservations
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ApiError>;

    /// GET /admin/dashboard
    async fn dashboard(&self) -> Result<DashboardData, ApiError>;

    /// GET /admin/bookings
    async fn bookings(&self) -> Result<BookingsByDate, ApiError>;

    /// POST /admin/reset
    async fn reset(&self) -> Result<ResetResult, ApiError>;
}

/// HTTP implementation of [`SeatingApi`].
#[derive(Clone)]
pub struct HttpApi {
    settings: ClientSettings,
    transport: Transport,
}

impl HttpApi {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            settings,
            transport: Transport::new(),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.transport
            .send(Method::Get, &self.settings.endpoint(path), None)
            .await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        self.transport
            .send(Method::Post, &self.settings.endpoint(path), body)
            .await
    }
}

#[async_trait(?Send)]
impl SeatingApi for HttpApi {
    async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    async fn managers(&self) -> Result<Vec<Manager>, ApiError> {
        self.get("/auth/managers").await
    }

    async fn manager_balance(&self) -> Result<ManagerBalance, ApiError> {
        self.get("/auth/manager-balance").await
    }

    async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        self.post("/auth/logout", None).await
    }

    async fn timeslots(&self, date: NaiveDate) -> Result<Vec<Timeslot>, ApiError> {
        self.get(&timeslots_path(date)).await
    }

    async fn seats(&self, timeslot_id: i64) -> Result<Vec<Seat>, ApiError> {
        self.get(&seats_path(timeslot_id)).await
    }

    async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get("/reservations/mine").await
    }

    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ApiError> {
        let body = serde_json::to_string(&request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.post("/reservations", Some(body)).await
    }

    async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get("/admin/dashboard").await
    }

    async fn bookings(&self) -> Result<BookingsByDate, ApiError> {
        self.get("/admin/bookings").await
    }

    async fn reset(&self) -> Result<ResetResult, ApiError> {
        self.post("/admin/reset", None).await
    }
}

fn timeslots_path(date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d").to_string();
    format!("/reservations/timeslots?date={}", urlencoding::encode(&date))
}

fn seats_path(timeslot_id: i64) -> String {
    format!("/reservations/seats?timeslot_id={timeslot_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_paths() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(timeslots_path(date), "/reservations/timeslots?date=2026-02-01");
        assert_eq!(seats_path(42), "/reservations/seats?timeslot_id=42");
    }

    #[test]
    fn test_endpoints_resolve_against_base_url() {
        let api = HttpApi::new(ClientSettings {
            api_base_url: "https://booking.example.com".to_string(),
            ..ClientSettings::default()
        });
        assert_eq!(
            api.settings().endpoint(&seats_path(3)),
            "https://booking.example.com/reservations/seats?timeslot_id=3"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let api = HttpApi::new(ClientSettings {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..ClientSettings::default()
        });
        let err = api.me().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }
}
