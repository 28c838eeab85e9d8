//! Seat selection state for one booking.
//!
//! Every transition is synchronous and returns what the caller has to do
//! next (fetch timeslots, fetch seats, show a notice). The async side
//! lives in [`crate::workflow::seat_selection`].
//!
//! Invariants:
//! - at most [`MAX_SEATS_PER_BOOKING`] seats, counting confirmed
//!   reservations the user already holds
//! - booked or already-mine seats never enter the selection
//! - results are only applied if they match the current date/timeslot

use chrono::NaiveDate;
use riviera_wire::{CreateReservationRequest, ManagerBalance, Reservation, Seat, Timeslot};

use super::calendar::is_bookable;
use super::notice::{self, Notice};
use crate::client::ApiError;

pub const MAX_SEATS_PER_BOOKING: usize = 2;

/// Blu-Points charged per reservation
pub const SEAT_PRICE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Selected,
    /// Held by someone else
    Booked,
    /// Held by the signed-in user
    Mine,
}

impl SeatStatus {
    /// Whether a click can change this seat.
    pub fn is_interactive(self) -> bool {
        matches!(self, SeatStatus::Available | SeatStatus::Selected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Deselected,
    /// Unknown, booked or own seat
    Ignored,
}

/// Summary handed to the success screen. Built locally, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub seats: Vec<String>,
    pub time_slot: String,
    pub quantity: usize,
    pub total_cost: f64,
    pub date: String,
}

/// A validated booking about to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBooking {
    pub request: CreateReservationRequest,
    pub details: BookingDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(BookingDetails),
    Rejected {
        notice: Notice,
        refresh_seats: bool,
        refresh_balance: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatSelection {
    selected_date: Option<NaiveDate>,
    timeslots: Vec<Timeslot>,
    timeslots_loading: bool,
    selected_timeslot: Option<i64>,
    seats: Vec<Seat>,
    /// Seat ids in click order; the first one is submitted
    selected: Vec<i64>,
    reservations: Vec<Reservation>,
    balance: Option<ManagerBalance>,
    submitting: bool,
}

impl SeatSelection {
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    pub fn timeslots_loading(&self) -> bool {
        self.timeslots_loading
    }

    pub fn selected_timeslot(&self) -> Option<i64> {
        self.selected_timeslot
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn selected_seats(&self) -> &[i64] {
        &self.selected
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn balance(&self) -> Option<&ManagerBalance> {
        self.balance.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Confirmed reservations already counting against the seat limit.
    pub fn active_reservations(&self) -> usize {
        self.reservations.iter().filter(|r| r.is_confirmed()).count()
    }

    pub fn seat_status(&self, seat: &Seat) -> SeatStatus {
        if seat.mine {
            SeatStatus::Mine
        } else if !seat.available {
            SeatStatus::Booked
        } else if self.selected.contains(&seat.id) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }

    /// Seats paired with their display status.
    pub fn seat_views(&self) -> Vec<(Seat, SeatStatus)> {
        self.seats
            .iter()
            .map(|seat| (seat.clone(), self.seat_status(seat)))
            .collect()
    }

    /// Pick a date. Returns the date to fetch timeslots for, or `None`
    /// when the click changes nothing (not bookable, or already chosen).
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
        if !is_bookable(date, today) || self.selected_date == Some(date) {
            return None;
        }
        self.selected_date = Some(date);
        self.timeslots.clear();
        self.timeslots_loading = true;
        self.clear_timeslot();
        Some(date)
    }

    pub fn apply_timeslots(
        &mut self,
        date: NaiveDate,
        result: Result<Vec<Timeslot>, ApiError>,
    ) -> Option<Notice> {
        if self.selected_date != Some(date) {
            tracing::debug!("Dropping timeslots for {} (no longer selected)", date);
            return None;
        }
        self.timeslots_loading = false;
        match result {
            Ok(timeslots) => {
                self.timeslots = timeslots;
                None
            }
            Err(e) => {
                tracing::warn!("Failed to load timeslots for {}: {}", date, e);
                self.timeslots.clear();
                Some(Notice::error(notice::FAILED_TIMESLOTS))
            }
        }
    }

    /// Pick a timeslot. Returns the id to fetch seats for, or `None` if
    /// the timeslot is unknown or already selected.
    pub fn select_timeslot(&mut self, timeslot_id: i64) -> Option<i64> {
        if self.selected_timeslot == Some(timeslot_id)
            || !self.timeslots.iter().any(|t| t.id == timeslot_id)
        {
            return None;
        }
        self.clear_timeslot();
        self.selected_timeslot = Some(timeslot_id);
        Some(timeslot_id)
    }

    pub fn apply_seats(
        &mut self,
        timeslot_id: i64,
        result: Result<Vec<Seat>, ApiError>,
    ) -> Option<Notice> {
        if self.selected_timeslot != Some(timeslot_id) {
            tracing::debug!("Dropping seats for timeslot {} (no longer selected)", timeslot_id);
            return None;
        }
        match result {
            Ok(seats) => {
                self.selected.retain(|id| {
                    seats
                        .iter()
                        .any(|seat| seat.id == *id && seat.available && !seat.mine)
                });
                self.seats = seats;
                None
            }
            Err(e) => {
                tracing::warn!("Failed to load seats for timeslot {}: {}", timeslot_id, e);
                Some(Notice::error(notice::FAILED_SEATS))
            }
        }
    }

    pub fn set_reservations(&mut self, reservations: Vec<Reservation>) {
        self.reservations = reservations;
    }

    pub fn set_balance(&mut self, balance: ManagerBalance) {
        self.balance = Some(balance);
    }

    /// Toggle a seat in the selection.
    pub fn toggle_seat(&mut self, seat_id: i64) -> Result<SeatToggle, Notice> {
        let Some(seat) = self.seats.iter().find(|s| s.id == seat_id) else {
            return Ok(SeatToggle::Ignored);
        };
        match self.seat_status(seat) {
            SeatStatus::Booked | SeatStatus::Mine => Ok(SeatToggle::Ignored),
            SeatStatus::Selected => {
                self.selected.retain(|id| *id != seat_id);
                Ok(SeatToggle::Deselected)
            }
            SeatStatus::Available => {
                if self.selected.len() + self.active_reservations() >= MAX_SEATS_PER_BOOKING {
                    return Err(Notice::error(notice::TWO_SEAT_LIMIT));
                }
                self.selected.push(seat_id);
                Ok(SeatToggle::Selected)
            }
        }
    }

    /// Validate the form and build the request for the first selected
    /// seat, plus the summary for the success screen.
    pub fn prepare_booking(&self) -> Result<PendingBooking, Notice> {
        let date = self
            .selected_date
            .ok_or_else(|| Notice::error(notice::SELECT_DATE))?;
        let timeslot = self
            .selected_timeslot
            .and_then(|id| self.timeslots.iter().find(|t| t.id == id))
            .ok_or_else(|| Notice::error(notice::SELECT_TIMESLOT))?;
        let first_seat = *self
            .selected
            .first()
            .ok_or_else(|| Notice::error(notice::SELECT_SEAT))?;
        if self.balance.as_ref().is_some_and(ManagerBalance::is_exhausted) {
            return Err(Notice::error(notice::ZERO_BALANCE));
        }

        let seats: Vec<String> = self
            .selected
            .iter()
            .filter_map(|id| self.seats.iter().find(|s| s.id == *id))
            .map(|s| s.label.clone())
            .collect();
        let quantity = seats.len();

        Ok(PendingBooking {
            request: CreateReservationRequest {
                seat_id: first_seat,
                timeslot_id: timeslot.id,
            },
            details: BookingDetails {
                seats,
                time_slot: timeslot.label(),
                quantity,
                total_cost: quantity as f64 * SEAT_PRICE,
                date: date.format("%a %b %d %Y").to_string(),
            },
        })
    }

    /// [`Self::prepare_booking`] and mark the form as submitting.
    pub fn begin_submit(&mut self) -> Result<PendingBooking, Notice> {
        if self.submitting {
            return Err(Notice::info(notice::BOOKING_IN_PROGRESS));
        }
        let pending = self.prepare_booking()?;
        self.submitting = true;
        Ok(pending)
    }

    pub fn finish_submit(
        &mut self,
        pending: &PendingBooking,
        result: Result<Reservation, ApiError>,
    ) -> BookingOutcome {
        self.submitting = false;
        match result {
            Ok(reservation) => {
                tracing::info!(
                    "Reserved seat {} for timeslot {}",
                    reservation.seat.label,
                    reservation.timeslot_id
                );
                self.selected.clear();
                self.reservations.retain(|r| r.id != reservation.id);
                self.reservations.push(reservation);
                BookingOutcome::Confirmed(pending.details.clone())
            }
            Err(e) if e.is_conflict() => BookingOutcome::Rejected {
                notice: Notice::error(notice::SEAT_TAKEN),
                refresh_seats: true,
                refresh_balance: false,
            },
            Err(e) if e.is_payment_required() => BookingOutcome::Rejected {
                notice: Notice::error(notice::INSUFFICIENT_BALANCE),
                refresh_seats: true,
                refresh_balance: true,
            },
            Err(e) => {
                tracing::warn!("Reservation failed: {}", e);
                let message = e
                    .server_message()
                    .unwrap_or(notice::FAILED_BOOKING)
                    .to_string();
                BookingOutcome::Rejected {
                    notice: Notice::error(message),
                    refresh_seats: false,
                    refresh_balance: false,
                }
            }
        }
    }

    fn clear_timeslot(&mut self) {
        self.selected_timeslot = None;
        self.seats.clear();
        self.selected.clear();
    }
}
