//! Dashboard home page — readouts, relay indicator, differential form and chart.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Local;
use serde::Deserialize;

use solarheat_app::ports::{Backend, Clock};
use solarheat_domain::status::{Dif, Status};
use solarheat_domain::time::{NEVER_REFRESHED_LABEL, format_time_of_day};
use solarheat_domain::window::TimeWindow;

use super::chart::{self, ChartView};
use crate::state::AppState;

/// A time-window selector button.
pub struct WindowButton {
    value: &'static str,
    label: &'static str,
    active: bool,
}

/// Home page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct HomeTemplate {
    refresh_seconds: u32,
    solar: f64,
    pump: f64,
    security: f64,
    relay_on: bool,
    last_entry: String,
    dif: Dif,
    dif_min: f64,
    dif_max: f64,
    last_refresh: String,
    windows: Vec<WindowButton>,
    chart: ChartView,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the form handlers (PRG pattern).
pub enum FormResponse {
    /// Redirect back to the dashboard.
    Redirect(Redirect),
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// Form data for the time window buttons.
#[derive(Deserialize)]
pub struct WindowForm {
    pub window: String,
}

/// Form data for the differential input.
#[derive(Deserialize)]
pub struct DifForm {
    pub dif: f64,
}

/// Local `HH:MM:SS` of the backend's last update.
fn last_entry_label(status: &Status) -> String {
    status.updated_at().map_or_else(
        || NEVER_REFRESHED_LABEL.to_string(),
        |ts| format_time_of_day(ts.with_timezone(&Local).time()),
    )
}

/// `GET /` — the dashboard.
pub async fn index<B, C>(State(state): State<AppState<B, C>>) -> HomeTemplate
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    let snapshot = state.dashboard.snapshot();
    let latest = snapshot.latest().copied().unwrap_or_default();

    let windows = TimeWindow::SELECTABLE
        .iter()
        .map(|window| WindowButton {
            value: window.as_str(),
            label: window.label(),
            active: *window == snapshot.time_window,
        })
        .collect();

    HomeTemplate {
        refresh_seconds: state.refresh_seconds,
        solar: latest.solar,
        pump: latest.pump,
        security: latest.security,
        relay_on: latest.rel.is_on(),
        last_entry: last_entry_label(&snapshot.status),
        dif: snapshot.displayed_dif(),
        dif_min: Dif::MIN,
        dif_max: Dif::MAX,
        last_refresh: snapshot.last_refresh_label(),
        windows,
        chart: chart::build(&snapshot.series()),
    }
}

/// `POST /window` — select a time window (PRG).
pub async fn select_window<B, C>(
    State(state): State<AppState<B, C>>,
    Form(form): Form<WindowForm>,
) -> FormResponse
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    state
        .dashboard
        .set_time_window(TimeWindow::parse_lenient(&form.window));
    FormResponse::Redirect(Redirect::to("/"))
}

/// `POST /dif` — set the differential and push it to the backend (PRG).
pub async fn save_dif<B, C>(
    State(state): State<AppState<B, C>>,
    Form(form): Form<DifForm>,
) -> FormResponse
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    state.dashboard.set_pending_dif(form.dif);
    let outcome = state.dashboard.save_dif().await;
    if !outcome.is_sent() {
        tracing::warn!(dif = %outcome.dif(), "differential from form not delivered");
    }
    FormResponse::Redirect(Redirect::to("/"))
}
