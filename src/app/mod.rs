//! Dioxus fullstack application.
//!
//! Pages render server-side and hydrate in the browser. All backend
//! traffic starts from effects, so it only ever runs client-side with the
//! user's cookies.

use dioxus::prelude::*;

pub mod browser;
pub mod components;
pub mod pages;
mod store;

use crate::client::HttpApi;
use crate::settings;
use components::{use_toaster_provider, ToastHost};
use pages::{Admin, Home};

/// Root component: shared backend client, notifications, routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(HttpApi::new(settings::current())));
    use_toaster_provider();

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}

/// Backend client provided by [`App`].
pub fn use_api() -> Signal<HttpApi> {
    use_context::<Signal<HttpApi>>()
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/admin")]
    Admin {},
}
