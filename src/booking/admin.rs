//! Admin dashboard state: the two polled payloads plus when they last
//! arrived.

use chrono::{DateTime, Utc};
use riviera_wire::{BookingsByDate, DashboardData, ManagerSummary};

use crate::client::ApiError;

pub const RESET_CONFIRMATION: &str = "Are you sure you want to reset the entire system? \
This will cancel all bookings and restore all manager balances.";

/// Reservations listed per timeslot before collapsing into "+N more"
pub const BUCKET_PREVIEW: usize = 5;

const HEALTHY_BALANCE: f64 = 50_000.0;
const LOW_BALANCE: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Healthy,
    Low,
    Critical,
}

impl BalanceTone {
    pub fn for_balance(balance: f64) -> Self {
        if balance > HEALTHY_BALANCE {
            BalanceTone::Healthy
        } else if balance > LOW_BALANCE {
            BalanceTone::Low
        } else {
            BalanceTone::Critical
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            BalanceTone::Healthy => "bar-healthy",
            BalanceTone::Low => "bar-low",
            BalanceTone::Critical => "bar-critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceBar {
    pub name: String,
    pub balance: f64,
    /// 0.0..=100.0, relative to the richest manager
    pub width_pct: f64,
    pub tone: BalanceTone,
}

pub fn balance_bars(managers: &[ManagerSummary]) -> Vec<BalanceBar> {
    let max = managers.iter().map(|m| m.balance).fold(0.0_f64, f64::max);
    managers
        .iter()
        .map(|m| BalanceBar {
            name: m.name.clone(),
            balance: m.balance,
            width_pct: if max > 0.0 {
                (m.balance / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
            tone: BalanceTone::for_balance(m.balance),
        })
        .collect()
}

/// First [`BUCKET_PREVIEW`] items and how many were left out.
pub fn preview<T>(items: &[T]) -> (&[T], usize) {
    let shown = items.len().min(BUCKET_PREVIEW);
    (&items[..shown], items.len() - shown)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    dashboard: Option<DashboardData>,
    bookings: Option<BookingsByDate>,
    last_update: Option<DateTime<Utc>>,
    error: Option<String>,
    resetting: bool,
}

impl AdminState {
    pub fn dashboard(&self) -> Option<&DashboardData> {
        self.dashboard.as_ref()
    }

    pub fn bookings(&self) -> Option<&BookingsByDate> {
        self.bookings.as_ref()
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Most recent fetch failure, cleared by the next success
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.dashboard.is_none() && self.error.is_none()
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    pub fn set_resetting(&mut self, resetting: bool) {
        self.resetting = resetting;
    }

    /// Previous data stays on screen when a poll fails.
    pub fn apply_dashboard(&mut self, result: Result<DashboardData, ApiError>, now: DateTime<Utc>) {
        match result {
            Ok(data) => {
                self.dashboard = Some(data);
                self.last_update = Some(now);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch dashboard data: {}", e);
                self.error = Some(format!("Failed to load dashboard data: {e}"));
            }
        }
    }

    pub fn apply_bookings(&mut self, result: Result<BookingsByDate, ApiError>) {
        match result {
            Ok(bookings) => self.bookings = Some(bookings),
            Err(e) => tracing::warn!("Failed to fetch bookings: {}", e),
        }
    }
}
