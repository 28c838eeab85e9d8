//! Hold countdowns for the signed-in user's reservations.

use chrono::{DateTime, Utc};
use riviera_wire::Reservation;

/// Whole seconds until `available_at`, or `None` once it has passed.
pub fn remaining_secs(available_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u64> {
    let remaining = available_at.signed_duration_since(now).num_seconds();
    (remaining > 0).then_some(remaining as u64)
}

/// "MM:SS"
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldCountdown {
    pub reservation_id: i64,
    pub seat_label: String,
    pub remaining_secs: u64,
}

impl HoldCountdown {
    /// "Seat A1: 04:59 remaining"
    pub fn display(&self) -> String {
        format!(
            "Seat {}: {} remaining",
            self.seat_label,
            format_mmss(self.remaining_secs)
        )
    }
}

/// Countdowns for confirmed reservations whose hold has not lapsed.
pub fn countdowns(reservations: &[Reservation], now: DateTime<Utc>) -> Vec<HoldCountdown> {
    reservations
        .iter()
        .filter(|r| r.is_confirmed())
        .filter_map(|r| {
            let remaining_secs = remaining_secs(r.available_at?, now)?;
            Some(HoldCountdown {
                reservation_id: r.id,
                seat_label: r.seat.label.clone(),
                remaining_secs,
            })
        })
        .collect()
}
