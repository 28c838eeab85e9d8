//! Timeslots, seats and reservations.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// A bookable window on a given day (half an hour by default).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeslot {
    pub id: i64,
    #[serde(with = "timestamp::naive")]
    pub starts_at: NaiveDateTime,
    #[serde(with = "timestamp::naive")]
    pub ends_at: NaiveDateTime,
}

impl Timeslot {
    /// "12:00 - 12:30"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.starts_at.format("%H:%M"),
            self.ends_at.format("%H:%M")
        )
    }
}

/// One seat as seen for a specific timeslot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub id: i64,
    pub label: String,
    /// False while someone holds the seat for this timeslot
    pub available: bool,
    /// Held by the signed-in user
    #[serde(default)]
    pub mine: bool,
}

/// Body of `POST /reservations`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateReservationRequest {
    pub seat_id: i64,
    pub timeslot_id: i64,
}

/// A confirmed booking with its seat and timeslot inlined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub seat_id: i64,
    #[serde(default)]
    pub timeslot_id: i64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    /// When the hold on the seat lapses
    #[serde(default, with = "timestamp::optional_instant")]
    pub available_at: Option<DateTime<Utc>>,
    pub seat: Seat,
    pub timeslot: Timeslot,
}

impl Reservation {
    pub const STATUS_CONFIRMED: &'static str = "confirmed";

    pub fn is_confirmed(&self) -> bool {
        self.status.eq_ignore_ascii_case(Self::STATUS_CONFIRMED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVATION_JSON: &str = r#"{
        "id": 1,
        "user_id": 3,
        "seat_id": 12,
        "timeslot_id": 4,
        "status": "confirmed",
        "created_at": "2026-02-01T11:55:00",
        "available_at": "2026-02-01T12:00:00.250000",
        "seat": {"id": 12, "label": "B2", "available": false, "mine": true},
        "timeslot": {"id": 4, "starts_at": "2026-02-01T12:00:00", "ends_at": "2026-02-01T12:30:00"}
    }"#;

    #[test]
    fn test_reservation_from_backend_json() {
        let res: Reservation = serde_json::from_str(RESERVATION_JSON).unwrap();
        assert!(res.is_confirmed());
        assert_eq!(res.seat.label, "B2");
        assert_eq!(res.timeslot.label(), "12:00 - 12:30");
        let expiry = res.available_at.unwrap();
        assert_eq!(expiry.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_available_at_is_optional() {
        let json = r#"{
            "id": 2, "status": "CONFIRMED",
            "seat": {"id": 1, "label": "A1", "available": false},
            "timeslot": {"id": 1, "starts_at": "2026-02-01T12:00:00", "ends_at": "2026-02-01T12:30:00"}
        }"#;
        let res: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(res.available_at, None);
        assert!(res.is_confirmed());
        assert!(!res.seat.mine);
    }

    #[test]
    fn test_create_request_shape() {
        let body = serde_json::to_value(CreateReservationRequest {
            seat_id: 5,
            timeslot_id: 9,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"seat_id": 5, "timeslot_id": 9}));
    }
}
