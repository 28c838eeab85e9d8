//! Light/dark toggle, persisted in localStorage.

use dioxus::prelude::*;

const STORAGE_KEY: &str = "riviera-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(|| Theme::Light);

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let stored = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
            if let Some(stored) = stored {
                theme.set(Theme::parse(&stored));
            }
        }
    });

    let current = theme();
    let label = match current {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        button {
            class: "outline secondary theme-toggle",
            onclick: move |_| {
                let next = current.toggled();
                theme.set(next);
                #[cfg(target_arch = "wasm32")]
                apply(next);
            },
            "{label}"
        }
    }
}

/// Applies the stored theme before first paint.
pub fn theme_script() -> String {
    format!(
        "document.documentElement.setAttribute('data-theme', localStorage.getItem('{STORAGE_KEY}') === 'dark' ? 'dark' : 'light');"
    )
}
