//! Riviera Booking
//!
//! Cafeteria seat reservations: pick a date, a timeslot and up to two
//! seats, pay with the manager's Blu-Points, and watch the hold count
//! down. Admins get a live occupancy dashboard.
//!
//! Layers, innermost first:
//! - [`booking`]: synchronous state machines (selection rules, calendar,
//!   countdowns, session screens, admin data)
//! - [`client`]: the backend REST API behind the [`client::SeatingApi`] trait
//! - [`workflow`]: async sequencing and polling over the two above
//! - [`app`]: Dioxus components rendering it all

#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod app;
pub mod booking;
pub mod client;
pub mod settings;
pub mod workflow;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
