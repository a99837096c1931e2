//! Backend port — reads and writes against the remote heating controller.

use std::future::Future;

use solarheat_domain::error::SolarHeatError;
use solarheat_domain::reading::Reading;
use solarheat_domain::status::{Dif, Status};

/// Remote controller API consumed by the dashboard.
///
/// Implementations must treat transport failures, non-success responses and
/// undecodable bodies alike: each is an `Err`.
pub trait Backend {
    /// Read the current controller status.
    fn fetch_status(&self) -> impl Future<Output = Result<Status, SolarHeatError>> + Send;

    /// Read the full readings series, oldest first.
    fn fetch_readings(&self) -> impl Future<Output = Result<Vec<Reading>, SolarHeatError>> + Send;

    /// Push a new differential threshold. The response body is ignored.
    fn update_dif(&self, dif: Dif) -> impl Future<Output = Result<(), SolarHeatError>> + Send;
}

impl<T: Backend + Send + Sync> Backend for std::sync::Arc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<Status, SolarHeatError>> + Send {
        (**self).fetch_status()
    }

    fn fetch_readings(&self) -> impl Future<Output = Result<Vec<Reading>, SolarHeatError>> + Send {
        (**self).fetch_readings()
    }

    fn update_dif(&self, dif: Dif) -> impl Future<Output = Result<(), SolarHeatError>> + Send {
        (**self).update_dif(dif)
    }
}
