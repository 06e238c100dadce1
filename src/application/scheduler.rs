// Interval scheduling with explicit cancellation
//
// Rotation timers must never outlive the page that owns them, so every
// scheduled task hands back a handle that aborts it. Tests run under
// tokio's paused clock and drive ticks with virtual time.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancellation handle for a scheduled task. Aborts the task when
/// invoked explicitly and again when dropped, so a discarded session can
/// never be mutated by a stray tick.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `on_tick` every `period`, starting one period from now.
pub fn spawn_interval<F>(period: Duration, mut on_tick: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick of a tokio interval completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            on_tick();
        }
    });
    TimerHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_virtual_time() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let _handle = spawn_interval(Duration::from_secs(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_future_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = spawn_interval(Duration::from_secs(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        settle().await;
        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        handle.cancel();
        settle().await;
        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_the_task() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = spawn_interval(Duration::from_secs(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(handle);

        settle().await;
        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }
}
