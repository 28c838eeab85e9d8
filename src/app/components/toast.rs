//! Transient notifications in the corner of the screen.

use std::time::Duration;

use dioxus::prelude::*;

use crate::booking::{Notice, NoticeLevel};
use crate::workflow::poll::sleep;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Handle for showing notices, provided once at the app root.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn show(&self, notice: Notice) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        if notice.is_error() {
            tracing::debug!("Showing error: {}", notice.message);
        }
        toasts.write().push(Toast { id, notice });

        // Outlives the component that raised it
        dioxus::core::spawn_forever(async move {
            sleep(TOAST_DURATION).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

pub fn use_toaster_provider() -> Toaster {
    use_context_provider(|| Toaster {
        toasts: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

fn toast_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Info => "toast toast-info",
        NoticeLevel::Error => "toast toast-error",
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx! {
        div { class: "toast-host", aria_live: "polite",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.notice.level),
                    role: "status",
                    span { "{toast.notice.message}" }
                    button {
                        class: "toast-dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_have_distinct_styles() {
        let classes = [
            toast_class(NoticeLevel::Success),
            toast_class(NoticeLevel::Info),
            toast_class(NoticeLevel::Error),
        ];
        assert!(classes.iter().all(|c| c.starts_with("toast ")));
        assert_ne!(classes[0], classes[2]);
        assert_ne!(classes[1], classes[2]);
    }
}
