//! Admin dashboard aggregates (`/admin/dashboard`, `/admin/bookings`,
//! `/admin/reset`).
//!
//! The dashboard renders these as-is; timestamps stay as the strings the
//! backend produced so nothing is lost in display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    #[serde(default)]
    pub active_reservations: Vec<ActiveReservation>,
    #[serde(default)]
    pub managers: Vec<ManagerSummary>,
    #[serde(default)]
    pub recent_charges: Vec<ChargeRecord>,
    #[serde(default)]
    pub seat_occupancy: Vec<SeatOccupancy>,
    #[serde(default)]
    pub statistics: DashboardStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveReservation {
    pub id: i64,
    pub user_email: String,
    pub user_name: String,
    pub seat_label: String,
    pub timeslot_start: String,
    pub timeslot_end: String,
    pub created_at: String,
    #[serde(default)]
    pub available_at: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagerSummary {
    pub id: i64,
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChargeRecord {
    pub id: i64,
    pub manager_name: String,
    pub amount: f64,
    pub created_at: String,
    #[serde(default)]
    pub reservation_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatOccupancy {
    pub id: i64,
    pub label: String,
    pub active_reservations: u32,
    pub is_occupied: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStatistics {
    pub total_active_reservations: u32,
    pub bookings_today: u32,
    pub total_revenue: f64,
    #[serde(default)]
    pub most_booked_seats: Vec<SeatPopularity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatPopularity {
    pub seat: String,
    pub bookings: u32,
}

/// Today's and tomorrow's reservations grouped by timeslot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingsByDate {
    /// Dates in display order (`YYYY-MM-DD`)
    pub dates: Vec<String>,
    #[serde(default)]
    pub bookings_by_date: BTreeMap<String, Vec<TimeslotBookings>>,
}

impl BookingsByDate {
    /// Timeslot buckets for a date, empty when the backend sent none.
    pub fn timeslots_for(&self, date: &str) -> &[TimeslotBookings] {
        self.bookings_by_date
            .get(date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeslotBookings {
    pub id: i64,
    pub starts_at: String,
    pub ends_at: String,
    #[serde(default)]
    pub date: Option<String>,
    /// "12:00 - 12:30"
    pub time_range: String,
    #[serde(default)]
    pub reservations_count: usize,
    #[serde(default)]
    pub reservations: Vec<TimeslotReservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeslotReservation {
    pub id: i64,
    pub user_email: String,
    pub user_name: String,
    pub seat_label: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub available_at: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
}

/// Response of `POST /admin/reset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetResult {
    #[serde(default)]
    pub message: String,
    pub cancelled_reservations: u32,
    pub restored_managers: u32,
}

impl ResetResult {
    /// Human summary shown after a successful reset.
    pub fn summary(&self) -> String {
        format!(
            "System reset: {} reservations cancelled, {} managers restored.",
            self.cancelled_reservations, self.restored_managers
        )
    }
}
