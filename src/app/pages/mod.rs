//! Routed pages and the screens they switch between.

mod admin;
mod booking_success;
mod home;
mod login;
mod seat_selection;

pub use admin::Admin;
pub use booking_success::BookingSuccess;
pub use home::Home;
pub use login::LoginPage;
pub use seat_selection::SeatSelectionPage;
