//! JSON handlers for the dashboard state and chart series.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use solarheat_app::ports::{Backend, Clock};
use solarheat_domain::reading::Reading;
use solarheat_domain::status::{Dif, Status};
use solarheat_domain::window::{IndexedReading, TimeWindow, windowed_series};

use crate::state::AppState;

/// Body returned by `GET /api/dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub latest: Option<Reading>,
    pub reading_count: usize,
    pub status: Status,
    /// Differential shown to the user (pending edit, else confirmed).
    pub dif: Dif,
    pub pending_dif: Option<Dif>,
    pub time_window: TimeWindow,
    pub last_refresh: String,
}

/// Query string of `GET /api/series`.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Window name; the currently selected window when absent.
    pub window: Option<String>,
}

/// Request body for `PUT /api/window`.
#[derive(Debug, Deserialize)]
pub struct WindowRequest {
    pub window: TimeWindow,
}

/// Possible responses from the window endpoint.
pub enum SetWindowResponse {
    NoContent,
}

impl IntoResponse for SetWindowResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/dashboard`
pub async fn get<B, C>(State(state): State<AppState<B, C>>) -> Json<DashboardView>
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    let snapshot = state.dashboard.snapshot();
    Json(DashboardView {
        latest: snapshot.latest().copied(),
        reading_count: snapshot.readings.len(),
        status: snapshot.status,
        dif: snapshot.displayed_dif(),
        pending_dif: snapshot.pending_dif,
        time_window: snapshot.time_window,
        last_refresh: snapshot.last_refresh_label(),
    })
}

/// `GET /api/series?window=`
pub async fn series<B, C>(
    State(state): State<AppState<B, C>>,
    Query(query): Query<SeriesQuery>,
) -> Json<Vec<IndexedReading>>
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    let snapshot = state.dashboard.snapshot();
    let window = query
        .window
        .as_deref()
        .map_or(snapshot.time_window, TimeWindow::parse_lenient);
    Json(windowed_series(&snapshot.readings, window))
}

/// `PUT /api/window`
pub async fn set_window<B, C>(
    State(state): State<AppState<B, C>>,
    Json(body): Json<WindowRequest>,
) -> SetWindowResponse
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    state.dashboard.set_time_window(body.window);
    SetWindowResponse::NoContent
}
