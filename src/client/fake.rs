//! Recording fake of [`SeatingApi`] for workflow tests.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use riviera_wire::{
    BookingsByDate, CreateReservationRequest, DashboardData, LogoutResponse, Manager,
    ManagerBalance, Reservation, ResetResult, Seat, Timeslot, User,
};

use super::{ApiError, SeatingApi};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Me,
    Managers,
    ManagerBalance,
    Logout,
    Timeslots(NaiveDate),
    Seats(i64),
    MyReservations,
    CreateReservation(CreateReservationRequest),
    Dashboard,
    Bookings,
    Reset,
}

/// Every endpoint answers from a canned result and records the call.
pub struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    pub me: RefCell<Result<User, ApiError>>,
    pub managers: RefCell<Result<Vec<Manager>, ApiError>>,
    pub balance: RefCell<Result<ManagerBalance, ApiError>>,
    pub timeslots: RefCell<Result<Vec<Timeslot>, ApiError>>,
    pub seats: RefCell<Result<Vec<Seat>, ApiError>>,
    pub reservations: RefCell<Result<Vec<Reservation>, ApiError>>,
    pub create: RefCell<Result<Reservation, ApiError>>,
    pub dashboard: RefCell<Result<DashboardData, ApiError>>,
    pub bookings: RefCell<Result<BookingsByDate, ApiError>>,
    pub reset: RefCell<Result<ResetResult, ApiError>>,
}

pub fn http_error(status: u16, message: &str) -> ApiError {
    ApiError::Http {
        status,
        message: message.to_string(),
    }
}

pub fn user() -> User {
    User {
        id: 1,
        employee_uid: "E-001".to_string(),
        email: "sam@example.com".to_string(),
        first_name: Some("Sam".to_string()),
        last_name: Some("Rivera".to_string()),
        manager_name: Some("Ada".to_string()),
    }
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

pub fn timeslot(id: i64, date: NaiveDate, hour: u32, minute: u32) -> Timeslot {
    let starts_at = at(date, hour, minute);
    Timeslot {
        id,
        starts_at,
        ends_at: starts_at + chrono::Duration::minutes(30),
    }
}

pub fn seat(id: i64, label: &str, available: bool, mine: bool) -> Seat {
    Seat {
        id,
        label: label.to_string(),
        available,
        mine,
    }
}

pub fn reservation(id: i64, seat: Seat, timeslot: Timeslot) -> Reservation {
    Reservation {
        id,
        user_id: 1,
        seat_id: seat.id,
        timeslot_id: timeslot.id,
        status: Reservation::STATUS_CONFIRMED.to_string(),
        created_at: None,
        available_at: None,
        seat,
        timeslot,
    }
}

impl RecordingApi {
    pub fn new() -> Self {
        let day = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        Self {
            calls: RefCell::new(Vec::new()),
            me: RefCell::new(Ok(user())),
            managers: RefCell::new(Ok(Vec::new())),
            balance: RefCell::new(Ok(ManagerBalance {
                manager_name: "Ada".to_string(),
                balance: 100.0,
            })),
            timeslots: RefCell::new(Ok(Vec::new())),
            seats: RefCell::new(Ok(Vec::new())),
            reservations: RefCell::new(Ok(Vec::new())),
            create: RefCell::new(Ok(reservation(
                1,
                seat(1, "A1", false, true),
                timeslot(1, day, 12, 0),
            ))),
            dashboard: RefCell::new(Ok(DashboardData::default())),
            bookings: RefCell::new(Ok(BookingsByDate::default())),
            reset: RefCell::new(Ok(ResetResult {
                message: "System reset successful".to_string(),
                cancelled_reservations: 0,
                restored_managers: 0,
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| predicate(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl SeatingApi for RecordingApi {
    async fn me(&self) -> Result<User, ApiError> {
        self.record(Call::Me);
        self.me.borrow().clone()
    }

    async fn managers(&self) -> Result<Vec<Manager>, ApiError> {
        self.record(Call::Managers);
        self.managers.borrow().clone()
    }

    async fn manager_balance(&self) -> Result<ManagerBalance, ApiError> {
        self.record(Call::ManagerBalance);
        self.balance.borrow().clone()
    }

    async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        self.record(Call::Logout);
        Ok(LogoutResponse {
            message: "Logged out".to_string(),
        })
    }

    async fn timeslots(&self, date: NaiveDate) -> Result<Vec<Timeslot>, ApiError> {
        self.record(Call::Timeslots(date));
        self.timeslots.borrow().clone()
    }

    async fn seats(&self, timeslot_id: i64) -> Result<Vec<Seat>, ApiError> {
        self.record(Call::Seats(timeslot_id));
        self.seats.borrow().clone()
    }

    async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.record(Call::MyReservations);
        self.reservations.borrow().clone()
    }

    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ApiError> {
        self.record(Call::CreateReservation(request));
        self.create.borrow().clone()
    }

    async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.record(Call::Dashboard);
        self.dashboard.borrow().clone()
    }

    async fn bookings(&self) -> Result<BookingsByDate, ApiError> {
        self.record(Call::Bookings);
        self.bookings.borrow().clone()
    }

    async fn reset(&self) -> Result<ResetResult, ApiError> {
        self.record(Call::Reset);
        self.reset.borrow().clone()
    }
}
