//! Transient user notifications.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

pub const TWO_SEAT_LIMIT: &str = "You can only book up to two seats per timeslot";
pub const ZERO_BALANCE: &str =
    "Your manager has 0 Blu-Points. Booking not allowed. Please contact your manager to add funds.";
pub const SEAT_TAKEN: &str =
    "This seat was just booked by someone else. Please choose a different seat.";
pub const INSUFFICIENT_BALANCE: &str =
    "Insufficient Blu-Points balance. Please contact your manager to add funds.";
pub const FAILED_TIMESLOTS: &str = "Failed to load timeslots";
pub const FAILED_SEATS: &str = "Failed to load seats";
pub const FAILED_BOOKING: &str = "Failed to create reservation";
pub const FAILED_RESET: &str = "Failed to reset system";
pub const SELECT_DATE: &str = "Please select a date";
pub const SELECT_TIMESLOT: &str = "Please select a timeslot";
pub const SELECT_SEAT: &str = "Please select at least one seat";
pub const BOOKING_IN_PROGRESS: &str = "Booking already in progress";
