//! Session bootstrap and logout.

use super::Store;
use crate::booking::Session;
use crate::client::SeatingApi;

/// Resolve the `Loading` screen from `/auth/me`.
pub async fn restore_session<A, S>(api: &A, store: &S)
where
    A: SeatingApi + ?Sized,
    S: Store<Session>,
{
    let result = api.me().await;
    store.update(|s| s.apply_me(result));
}

/// Log out on the backend and return to the login screen. A failed
/// logout call still clears local state.
pub async fn logout<A, S>(api: &A, store: &S)
where
    A: SeatingApi + ?Sized,
    S: Store<Session>,
{
    if let Err(e) = api.logout().await {
        tracing::warn!("Logout request failed: {}", e);
    }
    store.update(|s| s.logged_out());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Screen;
    use crate::client::fake::{http_error, Call, RecordingApi};
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_restore_and_logout() {
        let api = RecordingApi::new();
        let store = RefCell::new(Session::default());

        restore_session(&api, &store).await;
        assert_eq!(store.borrow().screen(), &Screen::SeatSelection);

        logout(&api, &store).await;
        assert_eq!(store.borrow().screen(), &Screen::Login);
        assert_eq!(api.calls(), vec![Call::Me, Call::Logout]);
    }

    #[tokio::test]
    async fn test_unauthenticated_goes_to_login() {
        let api = RecordingApi::new();
        *api.me.borrow_mut() = Err(http_error(401, "Not authenticated"));
        let store = RefCell::new(Session::default());

        restore_session(&api, &store).await;
        assert_eq!(store.borrow().screen(), &Screen::Login);
        assert!(store.borrow().user().is_none());
    }
}
