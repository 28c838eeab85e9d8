//! Top navigation bar.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// "book" or "admin"
    pub active: String,
    #[props(default)]
    pub user_name: Option<String>,
    #[props(default)]
    pub on_logout: Option<EventHandler<()>>,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    let current = |page: &str| if props.active == page { "page" } else { "false" };

    rsx! {
        nav {
            ul {
                li {
                    a { href: "/", strong { "Riviera Booking" } }
                }
            }
            ul {
                li { a { href: "/", aria_current: current("book"), "Book a seat" } }
                li { a { href: "/admin", aria_current: current("admin"), "Admin" } }
                if let Some(name) = &props.user_name {
                    li { small { "{name}" } }
                }
                if let Some(on_logout) = props.on_logout {
                    li {
                        button {
                            class: "outline secondary",
                            onclick: move |_| on_logout.call(()),
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
