//! Date, timeslot and seat picking plus checkout.

use chrono::{Local, NaiveDate};
use dioxus::core::Task;
use dioxus::prelude::*;
use riviera_wire::User;

use crate::app::components::{use_toaster, Calendar, HoldCountdowns, Layout, SeatGrid};
use crate::app::use_api;
use crate::booking::selection::MAX_SEATS_PER_BOOKING;
use crate::booking::{BookingDetails, Notice, SeatSelection};
use crate::settings;
use crate::workflow::seat_selection::{
    change_date, change_timeslot, confirm_booking, poll_balance, poll_reservations, watch_seats,
};

#[component]
pub fn SeatSelectionPage(
    user: User,
    on_booked: EventHandler<BookingDetails>,
    on_logout: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toaster = use_toaster();
    let mut state = use_signal(SeatSelection::default);
    let mut seat_watch = use_signal(|| None::<Task>);
    // Re-read every render so a page left open past midnight moves on
    let today = Local::now().date_naive();
    let (seat_every, reservation_every, balance_every) = use_hook(|| {
        let settings = settings::current();
        (
            settings.seat_refresh(),
            settings.reservation_refresh(),
            settings.balance_refresh(),
        )
    });

    use_effect(move || {
        spawn(async move {
            let api = api.cloned();
            poll_reservations(&api, &state, reservation_every).await;
        });
        spawn(async move {
            let api = api.cloned();
            poll_balance(&api, &state, balance_every).await;
        });
    });

    let pick_date = move |date: NaiveDate| {
        spawn(async move {
            let api = api.cloned();
            let today = Local::now().date_naive();
            if let Some(notice) = change_date(&api, &state, date, today).await {
                toaster.show(notice);
            }
        });
    };

    let mut pick_timeslot = move |timeslot_id: i64| {
        if state.read().selected_timeslot() == Some(timeslot_id) {
            return;
        }
        if let Some(previous) = seat_watch.take() {
            previous.cancel();
        }
        let task = spawn(async move {
            let api = api.cloned();
            if let Some(notice) = change_timeslot(&api, &state, timeslot_id).await {
                toaster.show(notice);
            }
            watch_seats(&api, &state, timeslot_id, seat_every, move |notice| {
                toaster.show(notice)
            })
            .await;
        });
        seat_watch.set(Some(task));
    };

    let toggle_seat = move |seat_id: i64| {
        let result = state.write().toggle_seat(seat_id);
        if let Err(notice) = result {
            toaster.show(notice);
        }
    };

    let confirm = move |_| {
        spawn(async move {
            let api = api.cloned();
            match confirm_booking(&api, &state).await {
                Ok(details) => {
                    toaster.show(Notice::success("Booking confirmed"));
                    on_booked.call(details);
                }
                Err(notice) => toaster.show(notice),
            }
        });
    };

    let current = state.read();
    let selected_date = current.selected_date();
    let selected_timeslot = current.selected_timeslot();
    let timeslots = current.timeslots().to_vec();
    let timeslots_loading = current.timeslots_loading();
    let seats = current.seat_views();
    let reservations = current.reservations().to_vec();
    let balance = current.balance().cloned();
    let submitting = current.is_submitting();
    let summary = current.prepare_booking().ok().map(|p| p.details);
    let held = current.active_reservations();
    drop(current);

    rsx! {
        Layout {
            title: "Book a seat".to_string(),
            nav_active: "book".to_string(),
            user_name: Some(user.display_name()),
            on_logout: Some(on_logout),

            hgroup {
                h1 { "Riviera Booking" }
                p { "Reserve a cafeteria seat for today or tomorrow." }
            }

            if let Some(balance) = balance {
                p {
                    class: if balance.is_exhausted() { "balance-empty" } else { "balance-ok" },
                    "{balance.manager_name}: {balance.balance:.2} Blu-Points"
                }
            }

            HoldCountdowns { reservations }

            div { class: "booking-layout",
                section {
                    Calendar {
                        selected: selected_date,
                        today,
                        on_select: pick_date,
                    }
                }

                section {
                    h3 { "Choose a timeslot" }
                    if selected_date.is_none() {
                        p { class: "muted", "Pick a date first." }
                    } else if timeslots_loading {
                        p { aria_busy: "true", "Loading timeslots..." }
                    } else if timeslots.is_empty() {
                        p { class: "muted", "No timeslots available for this date." }
                    } else {
                        div { class: "timeslots",
                            for timeslot in timeslots {
                                button {
                                    key: "{timeslot.id}",
                                    class: if selected_timeslot == Some(timeslot.id) { "" } else { "outline" },
                                    onclick: move |_| pick_timeslot(timeslot.id),
                                    "{timeslot.label()}"
                                }
                            }
                        }
                    }

                    if selected_timeslot.is_some() {
                        h3 { "Choose table" }
                        small { "Up to {MAX_SEATS_PER_BOOKING} seats per timeslot, including ones you already hold ({held})." }
                        SeatGrid { seats, on_toggle: toggle_seat }
                    }

                    article {
                        header { strong { "Booking details" } }
                        if let Some(summary) = summary {
                            dl { class: "summary",
                                dt { "Date" }
                                dd { "{summary.date}" }
                                dt { "Time" }
                                dd { "{summary.time_slot}" }
                                dt { "Seats" }
                                dd { {summary.seats.join(", ")} }
                                dt { "Total" }
                                dd { "{summary.total_cost:.2} Blu-Points" }
                            }
                        } else {
                            p { class: "muted", "Select a date, a timeslot and a seat." }
                        }
                        footer {
                            button {
                                disabled: submitting,
                                aria_busy: if submitting { "true" } else { "false" },
                                onclick: confirm,
                                "Confirm Booking"
                            }
                        }
                    }
                }
            }
        }
    }
}
