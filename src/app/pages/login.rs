//! Sign-in screen. Authentication itself happens at the identity
//! provider; this page only builds the redirect.

use dioxus::prelude::*;
use riviera_wire::Manager;

use crate::app::browser;
use crate::app::components::Layout;
use crate::app::use_api;
use crate::booking::login::{login_url, LoginRequest};
use crate::client::SeatingApi;

#[component]
pub fn LoginPage() -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut manager = use_signal(String::new);
    let mut employee = use_signal(String::new);
    let mut managers = use_signal(Vec::<Manager>::new);

    use_effect(move || {
        spawn(async move {
            let api = api.cloned();
            match api.managers().await {
                Ok(list) => managers.set(list),
                Err(e) => tracing::warn!("Failed to load managers: {}", e),
            }
        });
    });

    let sign_in = move |request: LoginRequest| {
        match login_url(api.peek().settings(), &request) {
            Ok(url) => browser::redirect(&url),
            Err(e) => tracing::error!("Cannot build login URL: {}", e),
        }
    };

    rsx! {
        Layout {
            title: "Sign in".to_string(),
            nav_active: "book".to_string(),

            article { style: "max-width: 28rem; margin: 2rem auto;",
                header {
                    h2 { "Welcome back" }
                    p { class: "muted", "Sign in to reserve your cafeteria seat" }
                }

                label {
                    "Email address"
                    input {
                        r#type: "email",
                        placeholder: "name@company.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                if !managers.read().is_empty() {
                    label {
                        "Manager"
                        select {
                            value: "{manager}",
                            onchange: move |evt| manager.set(evt.value()),
                            option { value: "", "Select your manager" }
                            for m in managers.read().iter() {
                                option { key: "{m.name}", value: "{m.name}", "{m.name}" }
                            }
                        }
                    }
                    label {
                        "Employee name"
                        input {
                            r#type: "text",
                            placeholder: "First and last name",
                            value: "{employee}",
                            oninput: move |evt| employee.set(evt.value()),
                        }
                    }
                }

                button {
                    onclick: move |_| sign_in(LoginRequest::from_form(&email(), &manager(), &employee())),
                    "Sign in"
                }
                hr {}
                button {
                    class: "outline",
                    onclick: move |_| sign_in(LoginRequest::default()),
                    "Continue with W3ID"
                }
            }
        }
    }
}
