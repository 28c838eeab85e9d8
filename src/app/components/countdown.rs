//! Live hold countdowns for the user's reservations.

use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;
use riviera_wire::Reservation;

use crate::booking::countdown::countdowns;
use crate::workflow::poll::sleep;

#[component]
pub fn HoldCountdowns(reservations: Vec<Reservation>) -> Element {
    let mut now = use_signal(Utc::now);

    use_effect(move || {
        spawn(async move {
            loop {
                sleep(Duration::from_secs(1)).await;
                now.set(Utc::now());
            }
        });
    });

    let entries = countdowns(&reservations, now());
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        article { class: "countdowns",
            header { strong { "Your seat holds" } }
            ul {
                for entry in entries {
                    li { key: "{entry.reservation_id}", "{entry.display()}" }
                }
            }
        }
    }
}
