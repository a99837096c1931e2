//! # solarheat-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript** — pure HTML forms + `<meta http-equiv="refresh">`
//!   for live updates, and an inline SVG chart
//! - Serve a small **JSON API** exposing the same state (`/api/dashboard`,
//!   `/api/series`, `/api/window`, `/api/dif`)
//! - Map HTTP requests into dashboard controller calls (driving adapter)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Interactive controls (time window buttons, differential input) are
//!   `<form>` elements that POST back to the server and redirect (PRG pattern).
//! - The page reloads itself at a configurable interval.
//!
//! ## Dependency rule
//! Depends on `solarheat-app` (for port traits and services) and
//! `solarheat-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
