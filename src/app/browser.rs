//! Thin wrappers over `window` for things with no Dioxus API.
//!
//! Outside the browser these are inert.

/// Full-page navigation (used for the identity-provider redirect).
pub fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::warn!("Redirect to {} failed: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Ignoring redirect to {} outside the browser", url);
}

/// Blocking `window.confirm`. Anything but an explicit "OK" is a no.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("No confirm dialog outside the browser: {}", message);
        false
    }
}
