//! Which top-level screen is shown, and for whom.

use riviera_wire::User;

use super::selection::BookingDetails;
use crate::client::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Waiting on `/auth/me`
    Loading,
    Login,
    SeatSelection,
    Success(BookingDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    screen: Screen,
    user: Option<User>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Loading,
            user: None,
        }
    }
}

impl Session {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Resolve the initial `/auth/me` check.
    pub fn apply_me(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                tracing::info!("Signed in as {}", user.email);
                self.user = Some(user);
                self.screen = Screen::SeatSelection;
            }
            Err(e) => {
                tracing::debug!("No active session: {}", e);
                self.user = None;
                self.screen = Screen::Login;
            }
        }
    }

    /// Ignored unless a user is signed in.
    pub fn booking_confirmed(&mut self, details: BookingDetails) {
        if self.user.is_some() {
            self.screen = Screen::Success(details);
        }
    }

    pub fn back_to_booking(&mut self) {
        if self.user.is_some() {
            self.screen = Screen::SeatSelection;
        }
    }

    pub fn logged_out(&mut self) {
        self.user = None;
        self.screen = Screen::Login;
    }
}
