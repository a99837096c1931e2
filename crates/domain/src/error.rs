//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SolarHeatError`] via `#[from]` (or an explicit `From` impl) when an error
//! crosses a port boundary.

/// Top-level error shared by the domain, application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum SolarHeatError {
    /// A value received or constructed violated a domain invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The remote controller backend could not be reached or answered badly.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The relay flag of a reading was neither `0` nor `1`.
    #[error("invalid relay state {0}, expected 0 or 1")]
    InvalidRelayState(u8),
}
