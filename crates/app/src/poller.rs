//! Periodic refresh of the dashboard state.
//!
//! The first tick fires immediately, then every `period`. Each tick spawns a
//! status refresh and a readings refresh as independent tasks, so a slow or
//! hung request never delays the timer or the other read. A refresh still
//! pending when the next one of its kind is spawned is aborted: its response
//! would be dropped as stale anyway.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::ports::{Backend, Clock};
use crate::services::dashboard::DashboardController;

/// Handle on the background polling task.
///
/// Stopping (or dropping) the poller aborts the timer and every refresh still
/// in flight, so no state update happens after teardown.
pub struct Poller {
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn the polling loop on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn start<B, C>(controller: Arc<DashboardController<B, C>>, period: Duration) -> Self
    where
        B: Backend + Send + Sync + 'static,
        C: Clock + 'static,
    {
        assert!(!period.is_zero(), "poll period must be non-zero");
        tracing::info!(period_secs = period.as_secs_f64(), "dashboard polling started");
        Self {
            handle: Some(tokio::spawn(poll_loop(controller, period))),
        }
    }

    /// Whether the polling task is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Abort the polling task and wait until it is gone.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            // Cancellation is the expected outcome here.
            let _ = handle.await;
            tracing::info!("dashboard polling stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("dashboard polling task aborted");
        }
    }
}

async fn poll_loop<B, C>(controller: Arc<DashboardController<B, C>>, period: Duration)
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // Dropped together with this task, which aborts pending refreshes.
    let mut in_flight = JoinSet::new();
    let mut status_task: Option<AbortHandle> = None;
    let mut readings_task: Option<AbortHandle> = None;

    loop {
        ticker.tick().await;
        supersede(status_task.as_ref(), "status");
        supersede(readings_task.as_ref(), "readings");
        while in_flight.try_join_next().is_some() {}

        let ctrl = Arc::clone(&controller);
        status_task = Some(in_flight.spawn(async move {
            ctrl.refresh_status().await;
        }));
        let ctrl = Arc::clone(&controller);
        readings_task = Some(in_flight.spawn(async move {
            ctrl.refresh_readings().await;
        }));
        tracing::trace!(in_flight = in_flight.len(), "poll tick");
    }
}

fn supersede(previous: Option<&AbortHandle>, kind: &'static str) {
    if let Some(task) = previous
        && !task.is_finished()
    {
        task.abort();
        tracing::debug!(kind, "aborting unanswered refresh");
    }
}
