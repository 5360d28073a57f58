//! Per-countdown refresh task.
//!
//! A [`CountdownTicker`] recomputes one deadline's [`TimeRemaining`] every
//! tick and publishes it on a watch channel. It belongs to whatever displays
//! the countdown: cancelling or dropping it stops the task, so no tick
//! outlives the display.

use crate::domain::{classify_status, compute_time_remaining, CountdownStatus, TimeRemaining};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Source of "now" for countdowns.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    pub fn advance(&self, by: chrono::Duration) {
        *self.0.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock()
    }
}

pub struct CountdownTicker {
    rx: watch::Receiver<TimeRemaining>,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start ticking towards `deadline` once per [`TICK_INTERVAL`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(deadline: DateTime<Utc>, clock: Arc<dyn Clock>) -> Self {
        Self::spawn_with_interval(deadline, clock, TICK_INTERVAL)
    }

    /// Like [`spawn`](Self::spawn) with a custom period, floored at one millisecond.
    pub fn spawn_with_interval(
        deadline: DateTime<Utc>,
        clock: Arc<dyn Clock>,
        period: Duration,
    ) -> Self {
        let period = period.max(MIN_PERIOD);
        let initial = compute_time_remaining(deadline, clock.now());
        let (tx, rx) = watch::channel(initial);

        let task = tokio::spawn(async move {
            if initial.is_expired() {
                return;
            }

            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; the initial value covers it.
            interval.tick().await;

            loop {
                interval.tick().await;
                let remaining = compute_time_remaining(deadline, clock.now());
                if tx.send(remaining).is_err() {
                    break;
                }
                if remaining.is_expired() {
                    debug!(%deadline, "Countdown reached its deadline");
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Latest computed value.
    pub fn current(&self) -> TimeRemaining {
        *self.rx.borrow()
    }

    pub fn status(&self) -> CountdownStatus {
        classify_status(&self.current())
    }

    /// A receiver notified on every tick. It reports closed once the ticker
    /// is cancelled, dropped, or the deadline has passed.
    pub fn subscribe(&self) -> watch::Receiver<TimeRemaining> {
        self.rx.clone()
    }

    /// False once the deadline has passed or the ticker was stopped.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop ticking. Same as dropping the ticker.
    pub fn cancel(self) {}
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn spawn(deadline_secs: i64) -> (Arc<ManualClock>, CountdownTicker) {
        let clock = Arc::new(ManualClock::new(start()));
        let ticker = CountdownTicker::spawn(
            start() + chrono::Duration::seconds(deadline_secs),
            clock.clone(),
        );
        (clock, ticker)
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_on_each_tick() {
        let (clock, ticker) = spawn(90);
        let mut rx = ticker.subscribe();
        assert_eq!((ticker.current().minutes, ticker.current().seconds), (1, 30));
        assert_eq!(ticker.status(), CountdownStatus::Urgent);

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert_eq!((ticker.current().minutes, ticker.current().seconds), (1, 29));

        clock.advance(chrono::Duration::seconds(30));
        rx.changed().await.unwrap();
        assert_eq!((ticker.current().minutes, ticker.current().seconds), (0, 59));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticking() {
        let (_clock, ticker) = spawn(3_600);
        let mut rx = ticker.subscribe();
        ticker.cancel();
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_ticking() {
        let (_clock, ticker) = spawn(3_600);
        let mut rx = ticker.subscribe();
        drop(ticker);
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stops_by_itself_at_the_deadline() {
        let (clock, ticker) = spawn(2);
        let mut rx = ticker.subscribe();

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert_eq!(ticker.current().seconds, 1);

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert!(ticker.current().is_expired());
        assert_eq!(ticker.status(), CountdownStatus::Expired);

        assert!(rx.changed().await.is_err());
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_floored() {
        let clock = Arc::new(ManualClock::new(start()));
        let ticker = CountdownTicker::spawn_with_interval(
            start() + chrono::Duration::seconds(10),
            clock.clone(),
            Duration::ZERO,
        );
        let mut rx = ticker.subscribe();

        clock.advance(chrono::Duration::seconds(4));
        rx.changed().await.unwrap();
        assert_eq!(ticker.current().seconds, 6);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn past_deadline_never_ticks() {
        let (_clock, ticker) = spawn(-5);
        let mut rx = ticker.subscribe();
        assert!(ticker.current().is_expired());
        assert!(rx.changed().await.is_err());
    }
}
