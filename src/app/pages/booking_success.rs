//! Confirmation summary after a successful booking.

use dioxus::prelude::*;
use riviera_wire::User;

use crate::app::components::Layout;
use crate::booking::BookingDetails;

#[component]
pub fn BookingSuccess(
    details: BookingDetails,
    user: User,
    on_again: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let seats = details.seats.join(", ");

    rsx! {
        Layout {
            title: "Booking confirmed".to_string(),
            nav_active: "book".to_string(),
            user_name: Some(user.display_name()),
            on_logout: Some(on_logout),

            article { style: "max-width: 32rem; margin: 2rem auto;",
                header {
                    h2 { "Booking Confirmed!" }
                    p { class: "muted", "Your seat is reserved. Enjoy your meal." }
                }
                dl { class: "summary",
                    dt { "Date" }
                    dd { "{details.date}" }
                    dt { "Time" }
                    dd { "{details.time_slot}" }
                    dt { "Seats" }
                    dd { "{seats}" }
                    dt { "Quantity" }
                    dd { "{details.quantity}" }
                    dt { "Total" }
                    dd { "{details.total_cost:.2} Blu-Points" }
                }
                footer {
                    div { class: "grid",
                        button { onclick: move |_| on_again.call(()), "Make Another Booking" }
                        button { class: "outline secondary", onclick: move |_| on_logout.call(()), "Logout" }
                    }
                }
            }
        }
    }
}
