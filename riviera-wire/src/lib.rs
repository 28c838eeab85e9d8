//! Wire types exchanged with the Riviera booking backend.
//!
//! These are the JSON shapes the REST service sends and accepts. The
//! client crate depends on this crate instead of declaring them inline.
//!
//! # Modules
//! - [`auth`] - users, managers and balances
//! - [`reservation`] - timeslots, seats and reservations
//! - [`admin`] - dashboard aggregates and reset results
//! - [`timestamp`] - serde helpers for backend timestamps

pub mod admin;
pub mod auth;
pub mod reservation;
pub mod timestamp;

pub use admin::{
    ActiveReservation, BookingsByDate, ChargeRecord, DashboardData, DashboardStatistics,
    ManagerSummary, ResetResult, SeatOccupancy, SeatPopularity, TimeslotBookings,
    TimeslotReservation,
};
pub use auth::{LogoutResponse, Manager, ManagerBalance, User};
pub use reservation::{CreateReservationRequest, Reservation, Seat, Timeslot};
