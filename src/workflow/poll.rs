//! Timers that work in the browser and under tokio.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

pub async fn sleep(period: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(period).await;

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    tokio::time::sleep(period).await;

    // Native builds without a runtime never poll.
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        let _ = period;
        futures::future::pending::<()>().await;
    }
}

/// Run `tick` now and then once per `period` until it breaks.
///
/// Ticks never overlap: a slow tick delays the next one.
pub async fn every<F, Fut>(period: Duration, mut tick: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ControlFlow<()>>,
{
    loop {
        if tick().await.is_break() {
            return;
        }
        sleep(period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn test_every_ticks_immediately_then_per_period() {
        let ticks = Cell::new(0);
        let counter = &ticks;
        let result = tokio::time::timeout(
            Duration::from_millis(2500),
            every(Duration::from_secs(1), move || async move {
                counter.set(counter.get() + 1);
                ControlFlow::Continue(())
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(ticks.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_stops_on_break() {
        let ticks = Cell::new(0);
        let counter = &ticks;
        every(Duration::from_secs(1), move || async move {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await;
        assert_eq!(ticks.get(), 2);
    }
}
