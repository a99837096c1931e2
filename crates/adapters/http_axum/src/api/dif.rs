//! JSON handlers for editing and saving the differential threshold.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use solarheat_app::ports::{Backend, Clock};
use solarheat_domain::status::Dif;

use crate::state::AppState;

/// Request body for `PUT /api/dif`.
#[derive(Debug, Deserialize)]
pub struct SetDifRequest {
    pub dif: f64,
}

/// Body returned by `PUT /api/dif`: the value after clamping.
#[derive(Debug, Serialize)]
pub struct DifView {
    pub dif: Dif,
}

/// Body returned by `POST /api/dif/save`.
#[derive(Debug, Serialize)]
pub struct SaveView {
    pub dif: Dif,
    pub sent: bool,
}

/// Possible responses from the save endpoint.
pub enum SaveResponse {
    Accepted(Json<SaveView>),
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted(json) => (StatusCode::ACCEPTED, json).into_response(),
        }
    }
}

/// `PUT /api/dif` — edit the differential locally, no backend call.
pub async fn set_pending<B, C>(
    State(state): State<AppState<B, C>>,
    Json(body): Json<SetDifRequest>,
) -> Json<DifView>
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    let dif = state.dashboard.set_pending_dif(body.dif);
    Json(DifView { dif })
}

/// `POST /api/dif/save` — push the displayed differential to the backend.
///
/// Always answers `202 Accepted`; `sent` tells whether the backend took it.
pub async fn save<B, C>(State(state): State<AppState<B, C>>) -> SaveResponse
where
    B: Backend + Send + Sync + 'static,
    C: Clock + 'static,
{
    let outcome = state.dashboard.save_dif().await;
    if !outcome.is_sent() {
        tracing::warn!(dif = %outcome.dif(), "differential not delivered, answering sent=false");
    }
    SaveResponse::Accepted(Json(SaveView {
        dif: outcome.dif(),
        sent: outcome.is_sent(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::router;
    use crate::testing::{StubBackend, backend_with_readings, body_string, refreshed_state};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use solarheat_domain::status::Dif;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_clamp_pending_dif() {
        let state = refreshed_state(backend_with_readings(1)).await;
        let dashboard = state.dashboard.clone();
        let app = router::build(state);

        let response = app
            .oneshot(json_request("PUT", "/api/dif", r#"{"dif":35}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({"dif": 20}));
        assert_eq!(dashboard.snapshot().pending_dif, Some(Dif::new(20.0)));
    }

    #[tokio::test]
    async fn should_save_displayed_dif() {
        let state = refreshed_state(backend_with_readings(1)).await;
        let dashboard = state.dashboard.clone();
        dashboard.set_pending_dif(15.0);
        let app = router::build(state);

        let response = app
            .oneshot(json_request("POST", "/api/dif/save", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({"dif": 15, "sent": true}));
    }

    #[tokio::test]
    async fn should_report_unsent_dif_when_backend_rejects_write() {
        let backend = StubBackend {
            fail_writes: true,
            ..backend_with_readings(1)
        };
        let state = refreshed_state(backend).await;
        state.dashboard.set_pending_dif(12.5);
        let app = router::build(state);

        let response = app
            .oneshot(json_request("POST", "/api/dif/save", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({"dif": 12.5, "sent": false}));
    }

    #[tokio::test]
    async fn should_reject_non_numeric_dif() {
        let app = router::build(refreshed_state(backend_with_readings(1)).await);

        let response = app
            .oneshot(json_request("PUT", "/api/dif", r#"{"dif":"high"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
