//! Dashboard controller — owns the in-memory view of the heating controller
//! and the use-cases the dashboard exposes.
//!
//! Backend failures never propagate out of this service: they are logged and
//! the last-known-good state is kept.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveTime;

use solarheat_domain::reading::Reading;
use solarheat_domain::status::{Dif, Status};
use solarheat_domain::time::{NEVER_REFRESHED_LABEL, format_time_of_day};
use solarheat_domain::window::{IndexedReading, TimeWindow, windowed_series};

use crate::ports::{Backend, Clock, SystemClock};

/// Result of a refresh, mostly useful to tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response replaced the local state.
    Applied,
    /// A newer request of the same kind was issued meanwhile; response dropped.
    Stale,
    /// The backend call failed; local state unchanged.
    Failed,
}

/// Result of pushing the differential to the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaveOutcome {
    Sent(Dif),
    Failed(Dif),
}

impl SaveOutcome {
    /// The value that was submitted.
    #[must_use]
    pub fn dif(self) -> Dif {
        match self {
            Self::Sent(dif) | Self::Failed(dif) => dif,
        }
    }

    #[must_use]
    pub fn is_sent(self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Point-in-time copy of the dashboard state handed to the rendering layer.
///
/// Cloning is cheap: the readings series is shared.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Full readings series, oldest first, as last returned by the backend.
    pub readings: Arc<[Reading]>,
    /// Status as last confirmed by the backend.
    pub status: Status,
    /// Differential edited locally and not yet confirmed by a status read.
    pub pending_dif: Option<Dif>,
    pub time_window: TimeWindow,
    /// Local time of the last successful readings refresh.
    pub last_refresh: Option<NaiveTime>,
}

impl DashboardSnapshot {
    /// Most recent reading, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Differential shown in the input: the pending edit, else the confirmed one.
    #[must_use]
    pub fn displayed_dif(&self) -> Dif {
        self.pending_dif.unwrap_or(self.status.dif)
    }

    /// `HH:MM:SS` of the last readings refresh.
    #[must_use]
    pub fn last_refresh_label(&self) -> String {
        self.last_refresh.map_or_else(
            || NEVER_REFRESHED_LABEL.to_string(),
            format_time_of_day,
        )
    }

    /// Chart series for the selected window.
    #[must_use]
    pub fn series(&self) -> Vec<IndexedReading> {
        windowed_series(&self.readings, self.time_window)
    }
}

/// Application service backing the dashboard.
///
/// Every operation takes `&self` so the controller can be shared behind an
/// `Arc` between the poller and HTTP handlers. The state lock is never held
/// across an `.await`.
pub struct DashboardController<B, C = SystemClock> {
    backend: B,
    clock: C,
    state: RwLock<DashboardSnapshot>,
    status_requests: AtomicU64,
    readings_requests: AtomicU64,
    /// First status sequence allowed to settle a delivered pending dif, `0`
    /// while the pending value (if any) is unsaved.
    pending_settles_from: AtomicU64,
}

impl<B: Backend> DashboardController<B> {
    /// Create a controller using the system clock.
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: Backend, C: Clock> DashboardController<B, C> {
    /// Create a controller with an explicit clock.
    pub fn with_clock(backend: B, clock: C) -> Self {
        Self {
            backend,
            clock,
            state: RwLock::new(DashboardSnapshot::default()),
            status_requests: AtomicU64::new(0),
            readings_requests: AtomicU64::new(0),
            pending_settles_from: AtomicU64::new(0),
        }
    }

    /// Read the controller status and replace the confirmed status with it.
    ///
    /// A pending differential is cleared when the newly confirmed value equals
    /// it, or when the request was issued after the pending value was saved.
    /// In the latter case the backend's value wins, even if it normalised or
    /// replaced what was sent.
    pub async fn refresh_status(&self) -> RefreshOutcome {
        let seq = self.status_requests.fetch_add(1, Ordering::SeqCst) + 1;
        match self.backend.fetch_status().await {
            Ok(status) => self.apply_status(seq, status),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch status");
                RefreshOutcome::Failed
            }
        }
    }

    /// Read the full readings series and stamp the refresh time.
    pub async fn refresh_readings(&self) -> RefreshOutcome {
        let seq = self.readings_requests.fetch_add(1, Ordering::SeqCst) + 1;
        match self.backend.fetch_readings().await {
            Ok(readings) => self.apply_readings(seq, readings),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch readings");
                RefreshOutcome::Failed
            }
        }
    }

    /// Select which suffix of the series is presented.
    pub fn set_time_window(&self, window: TimeWindow) {
        self.write_state().time_window = window;
        tracing::debug!(%window, "time window selected");
    }

    /// Edit the differential locally, clamped to its valid range.
    pub fn set_pending_dif(&self, value: f64) -> Dif {
        let dif = Dif::new(value);
        let mut state = self.write_state();
        state.pending_dif = Some(dif);
        self.pending_settles_from.store(0, Ordering::SeqCst);
        drop(state);
        tracing::debug!(%dif, "pending differential set");
        dif
    }

    /// Push the displayed differential to the backend.
    ///
    /// Issues exactly one write and no follow-up read. Nothing is rolled back
    /// on failure.
    pub async fn save_dif(&self) -> SaveOutcome {
        let dif = self.displayed_dif();
        match self.backend.update_dif(dif).await {
            Ok(()) => {
                self.mark_saved(dif);
                tracing::info!(%dif, "differential saved");
                SaveOutcome::Sent(dif)
            }
            Err(err) => {
                tracing::warn!(error = %err, %dif, "failed to update differential");
                SaveOutcome::Failed(dif)
            }
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.read_state().clone()
    }

    fn displayed_dif(&self) -> Dif {
        self.read_state().displayed_dif()
    }

    fn mark_saved(&self, dif: Dif) {
        let state = self.write_state();
        // An edit made while the write was in flight is still unsaved.
        if state.pending_dif == Some(dif) {
            let next = self.status_requests.load(Ordering::SeqCst) + 1;
            self.pending_settles_from.store(next, Ordering::SeqCst);
        }
    }

    fn apply_status(&self, seq: u64, status: Status) -> RefreshOutcome {
        let mut state = self.write_state();
        let latest = self.status_requests.load(Ordering::SeqCst);
        if seq != latest {
            tracing::debug!(seq, latest, "dropping stale status response");
            return RefreshOutcome::Stale;
        }
        let settles_from = self.pending_settles_from.load(Ordering::SeqCst);
        let issued_after_save = settles_from != 0 && seq >= settles_from;
        if state.pending_dif == Some(status.dif) || issued_after_save {
            state.pending_dif = None;
            self.pending_settles_from.store(0, Ordering::SeqCst);
        }
        state.status = status;
        tracing::debug!(dif = %status.dif, time = status.time, "status refreshed");
        RefreshOutcome::Applied
    }

    fn apply_readings(&self, seq: u64, readings: Vec<Reading>) -> RefreshOutcome {
        let mut state = self.write_state();
        let latest = self.readings_requests.load(Ordering::SeqCst);
        if seq != latest {
            tracing::debug!(seq, latest, "dropping stale readings response");
            return RefreshOutcome::Stale;
        }
        let count = readings.len();
        state.readings = readings.into();
        state.last_refresh = Some(self.clock.now().time());
        tracing::debug!(count, "readings refreshed");
        RefreshOutcome::Applied
    }

    fn read_state(&self) -> RwLockReadGuard<'_, DashboardSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DashboardSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
