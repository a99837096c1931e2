//! Test doubles shared by the handler tests.

use std::future::Future;
use std::sync::Mutex;

use axum::response::Response;
use http_body_util::BodyExt;

use solarheat_app::ports::Backend;
use solarheat_app::services::dashboard::DashboardController;
use solarheat_domain::error::SolarHeatError;
use solarheat_domain::reading::{Reading, RelayState};
use solarheat_domain::status::{Dif, Status};

use crate::state::AppState;

#[derive(Default)]
pub struct StubBackend {
    pub status: Option<Status>,
    pub readings: Option<Vec<Reading>>,
    pub writes: Mutex<Vec<Dif>>,
    pub fail_writes: bool,
}

fn offline() -> SolarHeatError {
    SolarHeatError::Backend(Box::new(std::io::Error::other("offline")))
}

impl Backend for StubBackend {
    fn fetch_status(&self) -> impl Future<Output = Result<Status, SolarHeatError>> + Send {
        let result = self.status.ok_or_else(offline);
        async { result }
    }

    fn fetch_readings(&self) -> impl Future<Output = Result<Vec<Reading>, SolarHeatError>> + Send {
        let result = self.readings.clone().ok_or_else(offline);
        async { result }
    }

    fn update_dif(&self, dif: Dif) -> impl Future<Output = Result<(), SolarHeatError>> + Send {
        self.writes.lock().unwrap().push(dif);
        let result = if self.fail_writes {
            Err(offline())
        } else {
            Ok(())
        };
        async { result }
    }
}

/// A backend holding `count` readings whose pump temperature is their position.
pub fn backend_with_readings(count: u32) -> StubBackend {
    StubBackend {
        status: Some(Status::new(Dif::new(6.0), 1_700_000_000_000)),
        readings: Some(
            (0..count)
                .map(|i| Reading::new(f64::from(i), 50.0, 10.0, RelayState::On))
                .collect(),
        ),
        writes: Mutex::default(),
        fail_writes: false,
    }
}

/// State whose controller already pulled everything from `backend`.
pub async fn refreshed_state(backend: StubBackend) -> AppState<StubBackend> {
    let controller = DashboardController::new(backend);
    controller.refresh_status().await;
    controller.refresh_readings().await;
    AppState::new(controller)
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
