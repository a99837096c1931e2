//! # solarheat-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Backend` — read status and readings, write the differential
//!   - `Clock` — local wall-clock time for refresh stamps
//! - Define **driving/inbound** use-cases:
//!   - `DashboardController` — refresh, select a time window, edit and save
//!     the differential, snapshot state for rendering
//! - Own the **polling lifecycle** (`Poller`) that drives periodic refreshes
//!
//! ## Dependency rule
//! Depends on `solarheat-domain` only (plus `tokio` for tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
pub mod services;
