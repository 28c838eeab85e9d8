//! Seat map for the selected timeslot.

use dioxus::prelude::*;
use riviera_wire::Seat;

use crate::booking::SeatStatus;

pub fn seat_class(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Available => "seat seat-available",
        SeatStatus::Selected => "seat seat-selected",
        SeatStatus::Booked => "seat seat-booked",
        SeatStatus::Mine => "seat seat-mine",
    }
}

fn seat_title(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Available => "Available",
        SeatStatus::Selected => "Selected",
        SeatStatus::Booked => "Booked",
        SeatStatus::Mine => "Your reservation",
    }
}

#[component]
pub fn SeatGrid(seats: Vec<(Seat, SeatStatus)>, on_toggle: EventHandler<i64>) -> Element {
    if seats.is_empty() {
        return rsx! {
            p { class: "muted", "No seats for this timeslot." }
        };
    }

    rsx! {
        div { class: "seat-grid",
            for (seat, status) in seats {
                button {
                    key: "{seat.id}",
                    class: seat_class(status),
                    title: seat_title(status),
                    disabled: !status.is_interactive(),
                    aria_pressed: status == SeatStatus::Selected,
                    onclick: move |_| on_toggle.call(seat.id),
                    "{seat.label}"
                }
            }
        }
        div { class: "seat-legend",
            span { class: "seat-available", "Available" }
            span { class: "seat-selected", "Selected" }
            span { class: "seat-booked", "Booked" }
            span { class: "seat-mine", "Yours" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_free_and_selected_seats_are_clickable() {
        for status in [SeatStatus::Booked, SeatStatus::Mine] {
            assert!(!status.is_interactive(), "{status:?} must render disabled");
        }
        assert!(SeatStatus::Available.is_interactive());
        assert_eq!(seat_class(SeatStatus::Booked), "seat seat-booked");
    }
}
