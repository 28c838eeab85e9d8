//! `/admin`: live occupancy and balances, plus the system reset.

use chrono::Local;
use dioxus::prelude::*;
use riviera_wire::{BookingsByDate, DashboardData, TimeslotBookings};

use crate::app::browser;
use crate::app::components::{use_toaster, Layout};
use crate::app::use_api;
use crate::booking::admin::{balance_bars, preview, AdminState};
use crate::settings;
use crate::workflow::admin::{poll_dashboard, refresh_dashboard, reset_system};

#[component]
pub fn Admin() -> Element {
    let api = use_api();
    let toaster = use_toaster();
    let state = use_signal(AdminState::default);
    let period = use_hook(|| settings::current().admin_refresh());

    use_effect(move || {
        spawn(async move {
            let api = api.cloned();
            poll_dashboard(&api, &state, period).await;
        });
    });

    let refresh = move |_| {
        spawn(async move {
            let api = api.cloned();
            refresh_dashboard(&api, &state).await;
        });
    };

    let reset = move |_| {
        spawn(async move {
            let api = api.cloned();
            if let Some(notice) = reset_system(&api, &state, browser::confirm).await {
                toaster.show(notice);
            }
        });
    };

    let current = state.read();
    let loading = current.is_loading();
    let resetting = current.is_resetting();
    let error = current.error().map(str::to_string);
    let last_update = current
        .last_update()
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string());
    let dashboard = current.dashboard().cloned();
    let bookings = current.bookings().cloned();
    drop(current);

    rsx! {
        Layout {
            title: "Admin".to_string(),
            nav_active: "admin".to_string(),

            div { style: "display:flex;justify-content:space-between;align-items:center;flex-wrap:wrap;gap:1rem;",
                hgroup {
                    h1 { "Admin Dashboard" }
                    if let Some(time) = last_update {
                        p { "Last updated {time}" }
                    }
                }
                div { style: "display:flex;gap:0.5rem;",
                    button { class: "outline", onclick: refresh, "Refresh" }
                    button {
                        class: "secondary",
                        disabled: resetting,
                        aria_busy: if resetting { "true" } else { "false" },
                        onclick: reset,
                        "Reset System"
                    }
                }
            }

            if let Some(error) = error {
                p { class: "balance-empty", "{error}" }
            }

            if loading {
                article { aria_busy: "true", "Loading dashboard..." }
            } else if let Some(data) = dashboard {
                DashboardPanels { data, bookings }
            }
        }
    }
}

#[component]
fn DashboardPanels(data: DashboardData, bookings: Option<BookingsByDate>) -> Element {
    let stats = data.statistics.clone();
    let bars = balance_bars(&data.managers);

    rsx! {
        section { class: "stats",
            article {
                small { "Active reservations" }
                strong { "{stats.total_active_reservations}" }
            }
            article {
                small { "Bookings today" }
                strong { "{stats.bookings_today}" }
            }
            article {
                small { "Revenue" }
                strong { "{stats.total_revenue:.2}" }
            }
        }

        div { class: "grid",
            article {
                header { strong { "Manager balances" } }
                for bar in bars {
                    div { key: "{bar.name}", style: "margin-bottom:0.75rem;",
                        div { style: "display:flex;justify-content:space-between;",
                            span { "{bar.name}" }
                            small { "{bar.balance:.2}" }
                        }
                        div { class: "bar-track",
                            div { class: bar.tone.as_class(), style: "width: {bar.width_pct:.1}%;" }
                        }
                    }
                }
            }
            article {
                header { strong { "Most booked seats" } }
                if stats.most_booked_seats.is_empty() {
                    p { class: "muted", "No bookings yet." }
                }
                ol {
                    for popular in stats.most_booked_seats.iter() {
                        li { key: "{popular.seat}", "{popular.seat} ({popular.bookings})" }
                    }
                }
            }
        }

        if let Some(bookings) = bookings {
            BookingsPanel { bookings }
        }

        article {
            header { strong { "Seat occupancy" } }
            div { class: "occupancy",
                for seat in data.seat_occupancy.iter() {
                    span {
                        key: "{seat.id}",
                        class: if seat.is_occupied { "occupied" } else { "" },
                        title: "{seat.active_reservations} active",
                        "{seat.label}"
                    }
                }
            }
        }

        article {
            header { strong { "Active reservations" } }
            table {
                thead {
                    tr {
                        th { "User" }
                        th { "Seat" }
                        th { "Timeslot" }
                        th { "Manager" }
                    }
                }
                tbody {
                    for r in data.active_reservations.iter() {
                        tr { key: "{r.id}",
                            td { "{r.user_name}" br {} small { "{r.user_email}" } }
                            td { "{r.seat_label}" }
                            td { "{r.timeslot_start} - {r.timeslot_end}" }
                            td { {r.manager_name.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
        }

        article {
            header { strong { "Recent charges" } }
            table {
                tbody {
                    for charge in data.recent_charges.iter() {
                        tr { key: "{charge.id}",
                            td { "{charge.manager_name}" }
                            td { "{charge.amount:.2}" }
                            td { small { "{charge.created_at}" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookingsPanel(bookings: BookingsByDate) -> Element {
    rsx! {
        article {
            header { strong { "Bookings by date" } }
            for date in bookings.dates.iter() {
                details { key: "{date}", open: true,
                    summary { "{date}" }
                    for slot in bookings.timeslots_for(date) {
                        SlotBookings { key: "{slot.id}", slot: slot.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SlotBookings(slot: TimeslotBookings) -> Element {
    let (shown, more) = preview(&slot.reservations);

    rsx! {
        div { style: "margin-bottom:0.75rem;",
            strong { "{slot.time_range}" }
            small { " {slot.reservations_count} booked" }
            ul {
                for r in shown {
                    li { key: "{r.id}", "{r.seat_label}: {r.user_name}" }
                }
                if more > 0 {
                    li { class: "muted", "+{more} more" }
                }
            }
        }
    }
}
