use std::{future::Future, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Repeats a task on a fixed interval: once immediately, then once per
/// interval. The handle cancels future ticks; dropping it cancels too.
///
/// Ticks are awaited one at a time. If a tick outlives the interval the
/// next one is delayed rather than run concurrently, so a slow fetch can
/// never stack unbounded in-flight work. A tick that fails is the task's
/// own concern; the schedule continues regardless.
pub struct Poller {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn<F, Fut>(period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let tick_token = token.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = tick_token.cancelled() => {
                        debug!("Poller cancelled, stopping");
                        break;
                    }
                    _ = ticker.tick() => task().await,
                }
            }
        });
        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels and waits for the tick loop to wind down.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    const PERIOD: Duration = Duration::from_secs(30);

    fn counting_poller(count: Arc<AtomicUsize>) -> Poller {
        Poller::spawn(PERIOD, move || {
            let count = count.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate() {
        let count = Arc::new(AtomicUsize::new(0));
        let poller = counting_poller(count.clone());

        // Yield to the poller task; the paused clock does not advance a
        // full period for this.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn one_tick_per_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let poller = counting_poller(count.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        tokio::time::sleep(PERIOD).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(count.load(Ordering::SeqCst), 5);
        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_future_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let poller = counting_poller(count.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        poller.shutdown().await;
        let after_cancel = count.load(Ordering::SeqCst);

        tokio::time::sleep(PERIOD * 5).await;
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_without_awaiting_shutdown_stops_future_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let poller = counting_poller(count.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(!poller.is_cancelled());
        poller.cancel();
        assert!(poller.is_cancelled());

        // The handle stays usable after a fire-and-forget cancel; the
        // schedule must not tick again.
        tokio::time::sleep(PERIOD * 5).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        let poller = counting_poller(count.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        drop(poller);
        tokio::time::sleep(PERIOD * 5).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn a_slow_tick_delays_the_next_instead_of_overlapping() {
        let running = Arc::new(AtomicUsize::new(0));
        let max_overlap = Arc::new(AtomicUsize::new(0));
        let poller = {
            let running = running.clone();
            let max_overlap = max_overlap.clone();
            Poller::spawn(PERIOD, move || {
                let running = running.clone();
                let max_overlap = max_overlap.clone();
                async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    max_overlap.fetch_max(now, Ordering::SeqCst);
                    // Each tick takes two periods.
                    tokio::time::sleep(PERIOD * 2).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                }
            })
        };

        tokio::time::sleep(PERIOD * 8).await;
        assert_eq!(max_overlap.load(Ordering::SeqCst), 1);
        poller.shutdown().await;
    }
}
