//! goldcalc server library entry.
//!
//! Wires config, rendering, observability, and the page/receipt handlers into
//! an axum router. Consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod render;
pub mod router;
pub mod web;
