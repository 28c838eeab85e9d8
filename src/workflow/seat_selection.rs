//! Requests behind the seat selection screen.

use std::ops::ControlFlow;
use std::time::Duration;

use chrono::NaiveDate;

use super::poll::{every, sleep};
use super::Store;
use crate::booking::selection::{BookingDetails, BookingOutcome, SeatSelection};
use crate::booking::Notice;
use crate::client::SeatingApi;

/// Select a date and load its timeslots. Exactly one fetch per actual
/// change; a no-op click fetches nothing.
pub async fn change_date<A, S>(api: &A, store: &S, date: NaiveDate, today: NaiveDate) -> Option<Notice>
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    let date = store.update(|s| s.select_date(date, today))?;
    tracing::debug!("Fetching timeslots for {}", date);
    let result = api.timeslots(date).await;
    store.update(|s| s.apply_timeslots(date, result))
}

/// Select a timeslot and load its seats.
pub async fn change_timeslot<A, S>(api: &A, store: &S, timeslot_id: i64) -> Option<Notice>
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    let timeslot_id = store.update(|s| s.select_timeslot(timeslot_id))?;
    load_seats(api, store, timeslot_id).await
}

/// Reload seats for whichever timeslot is selected.
pub async fn refresh_seats<A, S>(api: &A, store: &S) -> Option<Notice>
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    let timeslot_id = store.read(|s| s.selected_timeslot())?;
    load_seats(api, store, timeslot_id).await
}

async fn load_seats<A, S>(api: &A, store: &S, timeslot_id: i64) -> Option<Notice>
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    tracing::debug!("Fetching seats for timeslot {}", timeslot_id);
    let result = api.seats(timeslot_id).await;
    store.update(|s| s.apply_seats(timeslot_id, result))
}

/// Refresh the seat grid every `period` while `timeslot_id` stays
/// selected. The first refresh happens one period after the call;
/// [`change_timeslot`] already did the initial load.
pub async fn watch_seats<A, S>(
    api: &A,
    store: &S,
    timeslot_id: i64,
    period: Duration,
    notify: impl Fn(Notice),
) where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    loop {
        sleep(period).await;
        if store.read(|s| s.selected_timeslot()) != Some(timeslot_id) {
            tracing::debug!("Stopped seat refresh for timeslot {}", timeslot_id);
            return;
        }
        if let Some(notice) = load_seats(api, store, timeslot_id).await {
            notify(notice);
        }
    }
}

pub async fn refresh_reservations<A, S>(api: &A, store: &S)
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    match api.my_reservations().await {
        Ok(reservations) => store.update(|s| s.set_reservations(reservations)),
        Err(e) => tracing::warn!("Failed to fetch reservations: {}", e),
    }
}

pub async fn refresh_balance<A, S>(api: &A, store: &S)
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    match api.manager_balance().await {
        Ok(balance) => store.update(|s| s.set_balance(balance)),
        Err(e) => tracing::warn!("Failed to fetch manager balance: {}", e),
    }
}

/// Poll the user's reservations (for hold countdowns) forever.
pub async fn poll_reservations<A, S>(api: &A, store: &S, period: Duration)
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    every(period, move || async move {
        refresh_reservations(api, store).await;
        ControlFlow::Continue(())
    })
    .await
}

/// Poll the manager balance forever.
pub async fn poll_balance<A, S>(api: &A, store: &S, period: Duration)
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    every(period, move || async move {
        refresh_balance(api, store).await;
        ControlFlow::Continue(())
    })
    .await
}

/// Validate and submit the booking.
///
/// On rejection the seat grid (and for 402 the balance) is reloaded
/// before the notice is returned.
pub async fn confirm_booking<A, S>(api: &A, store: &S) -> Result<BookingDetails, Notice>
where
    A: SeatingApi + ?Sized,
    S: Store<SeatSelection>,
{
    let pending = store.update(|s| s.begin_submit())?;
    tracing::debug!(
        "Creating reservation for seat {} in timeslot {}",
        pending.request.seat_id,
        pending.request.timeslot_id
    );
    let result = api.create_reservation(pending.request).await;

    match store.update(|s| s.finish_submit(&pending, result)) {
        BookingOutcome::Confirmed(details) => Ok(details),
        BookingOutcome::Rejected {
            notice,
            refresh_seats: reload_seats,
            refresh_balance: reload_balance,
        } => {
            if reload_seats {
                if let Some(failed) = refresh_seats(api, store).await {
                    tracing::warn!("Seat reload after rejected booking: {}", failed.message);
                }
            }
            if reload_balance {
                refresh_balance(api, store).await;
            }
            Err(notice)
        }
    }
}
