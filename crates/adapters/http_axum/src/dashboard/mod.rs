//! Server-side rendered HTML dashboard (no JavaScript).

pub mod chart;
pub mod home;

use axum::Router;
use axum::routing::{get, post};

use solarheat_app::ports::{Backend, Clock};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<B, C>() -> Router<AppState<B, C>>
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/", get(home::index::<B, C>))
        .route("/window", post(home::select_window::<B, C>))
        .route("/dif", post(home::save_dif::<B, C>))
}
