//! Page chrome: head elements, header with navigation, footer.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::{theme_script, ThemeToggle};

/// Styles on top of Pico CSS.
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; --seat-size: 3.25rem; }
small, .muted { color: var(--pico-muted-color); }
.booking-layout { display: grid; grid-template-columns: minmax(260px, 1fr) 2fr; gap: 1.5rem; }
@media (max-width: 900px) { .booking-layout { grid-template-columns: 1fr; } }
.calendar-header { display: flex; justify-content: space-between; align-items: center; }
.calendar-header button { margin: 0; padding: 0.25rem 0.75rem; }
.calendar-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 0.25rem; text-align: center; }
.calendar-weekday { font-size: 0.75rem; color: var(--pico-muted-color); }
.calendar-day { margin: 0; padding: 0.4rem 0; font-size: 0.85rem; }
.calendar-day.today { font-weight: 700; }
.calendar-day:disabled { opacity: 0.35; }
.timeslots { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.timeslots button { margin: 0; padding: 0.4rem 0.8rem; }
.seat-grid { display: grid; grid-template-columns: repeat(auto-fill, var(--seat-size)); gap: 0.5rem; }
.seat { width: var(--seat-size); height: var(--seat-size); margin: 0; padding: 0; font-size: 0.8rem; }
.seat-available { background: var(--pico-card-background-color); color: var(--pico-color); border-color: var(--pico-primary-border); }
.seat-selected { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.seat-booked { background: var(--pico-muted-border-color); color: var(--pico-muted-color); border-color: transparent; }
.seat-mine { background: var(--pico-ins-color); color: #fff; border-color: transparent; }
.seat-legend { display: flex; gap: 1rem; font-size: 0.8rem; margin-top: 0.75rem; }
.seat-legend span::before { content: ""; display: inline-block; width: 0.8rem; height: 0.8rem; margin-right: 0.3rem; border-radius: 3px; vertical-align: middle; background: currentColor; }
.summary dt { color: var(--pico-muted-color); font-size: 0.8rem; }
.summary dd { margin: 0 0 0.5rem 0; }
.balance-ok { color: var(--pico-ins-color); }
.balance-empty { color: var(--pico-del-color); }
.countdowns li { list-style: none; font-variant-numeric: tabular-nums; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; }
.stats article { margin: 0; text-align: center; }
.stats strong { display: block; font-size: 1.75rem; }
.bar-track { height: 0.6rem; background: var(--pico-muted-border-color); border-radius: 0.3rem; overflow: hidden; }
.bar-track div { height: 100%; }
.bar-healthy { background: #2e9f5b; }
.bar-low { background: #d9a400; }
.bar-critical { background: #d93526; }
.occupancy { display: grid; grid-template-columns: repeat(auto-fill, minmax(4rem, 1fr)); gap: 0.5rem; }
.occupancy span { text-align: center; padding: 0.35rem; border-radius: 0.3rem; border: 1px solid var(--pico-muted-border-color); }
.occupancy .occupied { background: var(--pico-del-color); color: #fff; }
.toast-host { position: fixed; top: 1rem; right: 1rem; z-index: 100; display: flex; flex-direction: column; gap: 0.5rem; max-width: 24rem; }
.toast { display: flex; justify-content: space-between; align-items: start; gap: 0.75rem; padding: 0.75rem 1rem; border-radius: 0.5rem; box-shadow: 0 4px 12px rgba(0,0,0,.15); color: #fff; }
.toast-success { background: #2e9f5b; }
.toast-info { background: #1f6fd1; }
.toast-error { background: #d93526; }
.toast-dismiss { background: none; border: none; color: inherit; margin: 0; padding: 0 0.25rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Browser tab title
    pub title: String,
    /// Active navigation item ("book" or "admin")
    pub nav_active: String,
    pub children: Element,
    /// Signed-in user, shown next to the logout button
    #[props(default)]
    pub user_name: Option<String>,
    #[props(default)]
    pub on_logout: Option<EventHandler<()>>,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Riviera Booking", props.title);

    rsx! {
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
        document::Script { {theme_script()} }

        header { class: "container",
            Nav {
                active: props.nav_active.clone(),
                user_name: props.user_name.clone(),
                on_logout: props.on_logout,
            }
        }
        main { class: "container",
            {props.children}
        }
        footer {
            class: "container",
            style: "display:flex;justify-content:space-between;align-items:center;",
            small { "Riviera Booking v{version}" }
            ThemeToggle {}
        }
    }
}
