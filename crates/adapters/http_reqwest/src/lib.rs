//! # solarheat-adapter-http-reqwest
//!
//! Driven adapter implementing the [`Backend`] port against the heating
//! controller's REST API.
//!
//! ## Endpoints
//!
//! | Call | Method & path | Body |
//! |------|---------------|------|
//! | `fetch_readings` | `GET {url}/temperatures` | — |
//! | `fetch_status` | `GET {url}/temperatures/status` | — |
//! | `update_dif` | `POST {url}/temperatures/dif` | `{"dif": n}` |
//!
//! No authentication headers are sent. Any transport failure, non-2xx status
//! or undecodable body is reported as [`HttpClientError`] and converted into
//! `SolarHeatError::Backend` at the port boundary.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `solarheat-app` and `solarheat-domain`.

mod config;
mod error;

pub use config::{BackendConfig, DEFAULT_BASE_URL};
pub use error::HttpClientError;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use solarheat_app::ports::Backend;
use solarheat_domain::error::SolarHeatError;
use solarheat_domain::reading::Reading;
use solarheat_domain::status::{Dif, Status};

const READINGS_PATH: &str = "/temperatures";
const STATUS_PATH: &str = "/temperatures/status";
const DIF_PATH: &str = "/temperatures/dif";

#[derive(Serialize)]
struct DifUpdate {
    dif: Dif,
}

/// [`Backend`] implementation over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestBackend {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidBaseUrl`] if the URL is not an
    /// absolute `http`/`https` URL, or [`HttpClientError::Client`] if the
    /// HTTP client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, HttpClientError> {
        let base_url = normalize_base_url(&config.url)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(HttpClientError::Client)?;

        tracing::debug!(url = %base_url, "backend client ready");
        Ok(Self { client, base_url })
    }

    /// The normalised base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpClientError> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| HttpClientError::Request {
                url: url.clone(),
                source,
            })?;
        let response = check_status(&url, response)?;
        let body = response
            .bytes()
            .await
            .map_err(|source| HttpClientError::Request {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| HttpClientError::Decode { url, source })
    }

    async fn post_dif(&self, dif: Dif) -> Result<(), HttpClientError> {
        let url = self.endpoint(DIF_PATH);
        let response = self
            .client
            .post(&url)
            .json(&DifUpdate { dif })
            .send()
            .await
            .map_err(|source| HttpClientError::Request {
                url: url.clone(),
                source,
            })?;
        check_status(&url, response)?;
        Ok(())
    }
}

impl Backend for ReqwestBackend {
    async fn fetch_status(&self) -> Result<Status, SolarHeatError> {
        Ok(self.get_json(STATUS_PATH).await?)
    }

    async fn fetch_readings(&self) -> Result<Vec<Reading>, SolarHeatError> {
        Ok(self.get_json(READINGS_PATH).await?)
    }

    async fn update_dif(&self, dif: Dif) -> Result<(), SolarHeatError> {
        Ok(self.post_dif(dif).await?)
    }
}

fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response, HttpClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(HttpClientError::Status {
        url: url.to_string(),
        status,
    })
}

fn normalize_base_url(raw: &str) -> Result<String, HttpClientError> {
    let invalid = |reason: String| HttpClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = reqwest::Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use solarheat_domain::reading::RelayState;
    use std::sync::{Arc, Mutex};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn backend_at(url: String) -> ReqwestBackend {
        ReqwestBackend::new(&BackendConfig {
            url,
            ..BackendConfig::default()
        })
        .unwrap()
    }

    fn healthy_router(writes: Arc<Mutex<Vec<Value>>>) -> Router {
        Router::new()
            .route(
                "/temperatures",
                get(|| async {
                    Json(json!([
                        {"pump": 40, "solar": 50, "security": 10, "rel": 0},
                        {"pump": 41.5, "solar": 55, "security": 11, "rel": 1}
                    ]))
                }),
            )
            .route(
                "/temperatures/status",
                get(|| async { Json(json!({"dif": 6, "time": 1_700_000_000_000_i64})) }),
            )
            .route(
                "/temperatures/dif",
                post(
                    |State(writes): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                        writes.lock().unwrap().push(body);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(writes)
    }

    #[tokio::test]
    async fn should_fetch_readings_in_backend_order() {
        let url = spawn_backend(healthy_router(Arc::default())).await;
        let backend = backend_at(url);

        let readings = backend.fetch_readings().await.unwrap();

        assert_eq!(
            readings,
            vec![
                Reading::new(40.0, 50.0, 10.0, RelayState::Off),
                Reading::new(41.5, 55.0, 11.0, RelayState::On),
            ]
        );
    }

    #[tokio::test]
    async fn should_fetch_status() {
        let url = spawn_backend(healthy_router(Arc::default())).await;
        let backend = backend_at(url);

        let status = backend.fetch_status().await.unwrap();

        assert_eq!(status, Status::new(Dif::new(6.0), 1_700_000_000_000));
    }

    #[tokio::test]
    async fn should_post_dif_as_json_body() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let url = spawn_backend(healthy_router(Arc::clone(&writes))).await;
        let backend = backend_at(url);

        backend.update_dif(Dif::new(15.0)).await.unwrap();

        assert_eq!(*writes.lock().unwrap(), vec![json!({"dif": 15})]);
    }

    #[tokio::test]
    async fn should_fail_when_backend_answers_server_error() {
        let router = Router::new().route(
            "/temperatures/status",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let url = spawn_backend(router).await;
        let backend = backend_at(url);

        let err = backend.get_json::<Status>(STATUS_PATH).await.unwrap_err();

        assert!(matches!(
            err,
            HttpClientError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn should_fail_when_body_is_malformed() {
        let router = Router::new().route("/temperatures", get(|| async { "not json" }));
        let url = spawn_backend(router).await;
        let backend = backend_at(url);

        let err = backend.get_json::<Vec<Reading>>(READINGS_PATH).await.unwrap_err();
        assert!(matches!(err, HttpClientError::Decode { .. }));

        let result = backend.fetch_readings().await;
        assert!(matches!(result, Err(SolarHeatError::Backend(_))));
    }

    #[tokio::test]
    async fn should_fail_with_reason_when_relay_flag_is_invalid() {
        let router = Router::new().route(
            "/temperatures",
            get(|| async {
                Json(json!([
                    {"pump": 1, "solar": 2, "security": 3, "rel": 1},
                    {"pump": 1, "solar": 2, "security": 3, "rel": 5}
                ]))
            }),
        );
        let url = spawn_backend(router).await;
        let backend = backend_at(url);

        let err = backend.fetch_readings().await.unwrap_err();

        assert!(matches!(err, SolarHeatError::Backend(_)));
        let message = err.to_string();
        assert!(message.contains("/temperatures"), "{message}");
        assert!(message.contains("invalid relay state 5"), "{message}");
    }

    #[tokio::test]
    async fn should_fail_when_backend_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let backend = backend_at(format!("http://{addr}"));

        let err = backend.get_json::<Status>(STATUS_PATH).await.unwrap_err();

        assert!(matches!(err, HttpClientError::Request { .. }));
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let backend = backend_at("http://localhost:8080/".to_string());
        assert_eq!(backend.base_url(), "http://localhost:8080");
        assert_eq!(
            backend.endpoint(STATUS_PATH),
            "http://localhost:8080/temperatures/status"
        );
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let backend = backend_at("http://localhost/api/".to_string());
        assert_eq!(
            backend.endpoint(READINGS_PATH),
            "http://localhost/api/temperatures"
        );
    }

    #[test]
    fn should_reject_relative_base_url() {
        let result = ReqwestBackend::new(&BackendConfig {
            url: "solar-heat-backend".to_string(),
            ..BackendConfig::default()
        });
        assert!(matches!(result, Err(HttpClientError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn should_reject_non_http_scheme() {
        let result = ReqwestBackend::new(&BackendConfig {
            url: "ftp://example.com".to_string(),
            ..BackendConfig::default()
        });
        assert!(matches!(result, Err(HttpClientError::InvalidBaseUrl { .. })));
    }
}
