//! Booking state, free of rendering and transport.
//!
//! Each submodule is a plain state machine: the UI feeds it clicks and
//! API results, it answers with what to fetch next or what to tell the
//! user. Nothing here awaits.

pub mod admin;
pub mod calendar;
pub mod countdown;
pub mod login;
pub mod notice;
pub mod selection;
pub mod session;

pub use admin::AdminState;
pub use calendar::CalendarMonth;
pub use countdown::HoldCountdown;
pub use login::LoginRequest;
pub use notice::{Notice, NoticeLevel};
pub use selection::{BookingDetails, BookingOutcome, SeatSelection, SeatStatus};
pub use session::{Screen, Session};
