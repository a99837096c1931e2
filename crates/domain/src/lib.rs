//! # solarheat-domain
//!
//! Pure domain model for the solarheat dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, clock formatting
//! - Define **Readings** (pump/solar/security temperatures plus relay state)
//! - Define the controller **Status** and its clamped differential (`Dif`)
//! - Define **Time windows** and the windowed, re-indexed chart series
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod reading;
pub mod status;
pub mod window;
