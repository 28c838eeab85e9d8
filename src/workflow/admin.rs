//! Admin dashboard polling and system reset.

use std::ops::ControlFlow;
use std::time::Duration;

use chrono::Utc;

use super::poll::every;
use super::Store;
use crate::booking::admin::{AdminState, RESET_CONFIRMATION};
use crate::booking::{notice, Notice};
use crate::client::SeatingApi;

/// Fetch dashboard and bookings concurrently and apply both.
pub async fn refresh_dashboard<A, S>(api: &A, store: &S)
where
    A: SeatingApi + ?Sized,
    S: Store<AdminState>,
{
    tracing::debug!("Refreshing admin dashboard");
    let (dashboard, bookings) = futures::join!(api.dashboard(), api.bookings());
    let now = Utc::now();
    store.update(|s| {
        s.apply_dashboard(dashboard, now);
        s.apply_bookings(bookings);
    });
}

/// Refresh now and then every `period`, forever.
pub async fn poll_dashboard<A, S>(api: &A, store: &S, period: Duration)
where
    A: SeatingApi + ?Sized,
    S: Store<AdminState>,
{
    every(period, move || async move {
        refresh_dashboard(api, store).await;
        ControlFlow::Continue(())
    })
    .await
}

/// Reset every reservation and balance after `confirm` approves the
/// prompt. Declining sends nothing and returns `None`.
pub async fn reset_system<A, S>(api: &A, store: &S, confirm: impl FnOnce(&str) -> bool) -> Option<Notice>
where
    A: SeatingApi + ?Sized,
    S: Store<AdminState>,
{
    if store.read(|s| s.is_resetting()) || !confirm(RESET_CONFIRMATION) {
        return None;
    }

    store.update(|s| s.set_resetting(true));
    let result = api.reset().await;
    store.update(|s| s.set_resetting(false));

    match result {
        Ok(reset) => {
            tracing::info!(
                "System reset: {} reservations cancelled, {} managers restored",
                reset.cancelled_reservations,
                reset.restored_managers
            );
            refresh_dashboard(api, store).await;
            Some(Notice::success(reset.summary()))
        }
        Err(e) => {
            tracing::warn!("System reset failed: {}", e);
            Some(Notice::error(notice::FAILED_RESET))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::NoticeLevel;
    use crate::client::fake::{http_error, Call, RecordingApi};
    use riviera_wire::ResetResult;
    use std::cell::RefCell;

    fn dashboard_calls(api: &RecordingApi) -> (usize, usize) {
        (
            api.count(|c| matches!(c, Call::Dashboard)),
            api.count(|c| matches!(c, Call::Bookings)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_fetches_both_endpoints_each_interval() {
        let api = RecordingApi::new();
        let store = RefCell::new(AdminState::default());

        let _ = tokio::time::timeout(
            Duration::from_millis(6_500),
            poll_dashboard(&api, &store, Duration::from_secs(3)),
        )
        .await;

        assert_eq!(dashboard_calls(&api), (3, 3));
        assert!(store.borrow().last_update().is_some());
    }

    #[tokio::test]
    async fn test_manual_refresh_is_one_pair() {
        let api = RecordingApi::new();
        let store = RefCell::new(AdminState::default());

        refresh_dashboard(&api, &store).await;
        assert_eq!(dashboard_calls(&api), (1, 1));
        assert!(store.borrow().bookings().is_some());
    }

    #[tokio::test]
    async fn test_declined_reset_sends_nothing() {
        let api = RecordingApi::new();
        let store = RefCell::new(AdminState::default());
        let mut prompt = None;

        let shown = reset_system(&api, &store, |text| {
            prompt = Some(text.to_string());
            false
        })
        .await;

        assert_eq!(shown, None);
        assert_eq!(prompt.as_deref(), Some(RESET_CONFIRMATION));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_reset_repolls() {
        let api = RecordingApi::new();
        *api.reset.borrow_mut() = Ok(ResetResult {
            message: "System reset successful".to_string(),
            cancelled_reservations: 4,
            restored_managers: 2,
        });
        let store = RefCell::new(AdminState::default());

        let shown = reset_system(&api, &store, |_| true).await.unwrap();
        assert_eq!(shown.level, NoticeLevel::Success);
        assert_eq!(
            shown.message,
            "System reset: 4 reservations cancelled, 2 managers restored."
        );
        assert_eq!(api.calls()[0], Call::Reset);
        assert_eq!(dashboard_calls(&api), (1, 1));
        assert!(!store.borrow().is_resetting());
    }

    #[tokio::test]
    async fn test_failed_reset_skips_repoll() {
        let api = RecordingApi::new();
        *api.reset.borrow_mut() = Err(http_error(403, "Forbidden"));
        let store = RefCell::new(AdminState::default());

        let shown = reset_system(&api, &store, |_| true).await.unwrap();
        assert_eq!(shown.message, notice::FAILED_RESET);
        assert_eq!(dashboard_calls(&api), (0, 0));
    }
}
