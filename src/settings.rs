//! Client settings shared by the browser build and server-side rendering.
//!
//! The browser build only sees compile-time defaults. The server loads
//! overrides through [`crate::config`] and installs them once at startup.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Seat grid refresh while a timeslot is selected
pub const SEAT_REFRESH_SECS: u64 = 5;
/// Own reservations (drives the hold countdown)
pub const RESERVATION_REFRESH_SECS: u64 = 5;
/// Manager balance shown next to the booking form
pub const BALANCE_REFRESH_SECS: u64 = 5;
/// Admin dashboard statistics and bookings
pub const ADMIN_REFRESH_SECS: u64 = 3;

static INSTALLED: OnceLock<ClientSettings> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_seat_refresh")]
    pub seat_refresh_secs: u64,
    #[serde(default = "default_reservation_refresh")]
    pub reservation_refresh_secs: u64,
    #[serde(default = "default_balance_refresh")]
    pub balance_refresh_secs: u64,
    #[serde(default = "default_admin_refresh")]
    pub admin_refresh_secs: u64,
}

fn default_api_base_url() -> String {
    option_env!("RIVIERA_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

fn default_seat_refresh() -> u64 {
    SEAT_REFRESH_SECS
}

fn default_reservation_refresh() -> u64 {
    RESERVATION_REFRESH_SECS
}

fn default_balance_refresh() -> u64 {
    BALANCE_REFRESH_SECS
}

fn default_admin_refresh() -> u64 {
    ADMIN_REFRESH_SECS
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            seat_refresh_secs: SEAT_REFRESH_SECS,
            reservation_refresh_secs: RESERVATION_REFRESH_SECS,
            balance_refresh_secs: BALANCE_REFRESH_SECS,
            admin_refresh_secs: ADMIN_REFRESH_SECS,
        }
    }
}

impl ClientSettings {
    pub fn seat_refresh(&self) -> Duration {
        Duration::from_secs(self.seat_refresh_secs.max(1))
    }

    pub fn reservation_refresh(&self) -> Duration {
        Duration::from_secs(self.reservation_refresh_secs.max(1))
    }

    pub fn balance_refresh(&self) -> Duration {
        Duration::from_secs(self.balance_refresh_secs.max(1))
    }

    pub fn admin_refresh(&self) -> Duration {
        Duration::from_secs(self.admin_refresh_secs.max(1))
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Install settings for the rest of the process. Returns false if
/// settings were already installed.
pub fn install(settings: ClientSettings) -> bool {
    INSTALLED.set(settings).is_ok()
}

/// Installed settings, or the compile-time defaults.
pub fn current() -> ClientSettings {
    INSTALLED.get().cloned().unwrap_or_default()
}
