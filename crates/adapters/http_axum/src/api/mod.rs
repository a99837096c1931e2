//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod dashboard;
#[allow(clippy::missing_errors_doc)]
pub mod dif;

use axum::Router;
use axum::routing::{get, post, put};

use solarheat_app::ports::{Backend, Clock};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<B, C>() -> Router<AppState<B, C>>
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    Router::new()
        // State
        .route("/dashboard", get(dashboard::get::<B, C>))
        .route("/series", get(dashboard::series::<B, C>))
        .route("/window", put(dashboard::set_window::<B, C>))
        // Differential
        .route("/dif", put(dif::set_pending::<B, C>))
        .route("/dif/save", post(dif::save::<B, C>))
}
