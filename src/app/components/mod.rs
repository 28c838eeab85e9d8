//! Shared UI components.

pub mod calendar;
pub mod countdown;
pub mod layout;
pub mod nav;
pub mod seat_grid;
pub mod theme;
pub mod toast;

pub use calendar::Calendar;
pub use countdown::HoldCountdowns;
pub use layout::Layout;
pub use nav::Nav;
pub use seat_grid::SeatGrid;
pub use toast::{use_toaster, use_toaster_provider, ToastHost, Toaster};
