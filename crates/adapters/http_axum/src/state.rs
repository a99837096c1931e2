//! Shared application state for axum handlers.

use std::sync::Arc;

use solarheat_app::ports::{Backend, Clock, SystemClock};
use solarheat_app::services::dashboard::DashboardController;

/// Default `<meta http-equiv="refresh">` interval of dashboard pages.
pub const DEFAULT_REFRESH_SECONDS: u32 = 10;

/// Application state shared across all axum handlers.
///
/// Generic over the backend and clock to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<B, C = SystemClock> {
    /// Dashboard use-cases, shared with the poller.
    pub dashboard: Arc<DashboardController<B, C>>,
    /// Auto-reload interval of the HTML dashboard, in seconds.
    pub refresh_seconds: u32,
}

impl<B, C> Clone for AppState<B, C> {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<B, C> AppState<B, C>
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    /// Create a new application state owning the controller.
    pub fn new(dashboard: DashboardController<B, C>) -> Self {
        Self::from_arc(Arc::new(dashboard))
    }

    /// Create a new application state from a pre-wrapped `Arc` controller.
    ///
    /// Use this when the controller is shared with the background poller.
    pub fn from_arc(dashboard: Arc<DashboardController<B, C>>) -> Self {
        Self {
            dashboard,
            refresh_seconds: DEFAULT_REFRESH_SECONDS,
        }
    }

    /// Override the dashboard auto-reload interval.
    #[must_use]
    pub fn with_refresh_seconds(mut self, refresh_seconds: u32) -> Self {
        self.refresh_seconds = refresh_seconds;
        self
    }
}
