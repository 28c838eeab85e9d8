//! `/`: the signed-in booking flow, switching screens by session state.

use dioxus::prelude::*;

use super::{BookingSuccess, LoginPage, SeatSelectionPage};
use crate::app::components::Layout;
use crate::app::use_api;
use crate::booking::{Screen, Session};
use crate::workflow::session::{logout, restore_session};

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let mut session = use_signal(Session::default);

    // Effects only run in the browser, where the session cookie lives.
    use_effect(move || {
        spawn(async move {
            let api = api.cloned();
            restore_session(&api, &session).await;
        });
    });

    let on_logout = move |_| {
        spawn(async move {
            let api = api.cloned();
            logout(&api, &session).await;
        });
    };

    let screen = session.read().screen().clone();
    let user = session.read().user().cloned();

    match (screen, user) {
        (Screen::Loading, _) => rsx! {
            Layout {
                title: "Loading".to_string(),
                nav_active: "book".to_string(),
                article { aria_busy: "true", "Checking your session..." }
            }
        },
        (Screen::SeatSelection, Some(user)) => rsx! {
            SeatSelectionPage {
                user,
                on_booked: move |details| session.write().booking_confirmed(details),
                on_logout,
            }
        },
        (Screen::Success(details), Some(user)) => rsx! {
            BookingSuccess {
                details,
                user,
                on_again: move |_| session.write().back_to_booking(),
                on_logout,
            }
        },
        _ => rsx! {
            LoginPage {}
        },
    }
}
