//! Observability: metrics registry, request instrumentation, and log setup.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.

pub mod instrument;
pub mod logging;
pub mod metrics;
