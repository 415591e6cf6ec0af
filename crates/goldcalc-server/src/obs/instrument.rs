//! Per-request instrumentation layered around the page and receipt routes.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Count requests by endpoint/method/status and observe latency by endpoint.
///
/// Must be installed with `route_layer` so `MatchedPath` is populated.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let method = req.method().as_str().to_owned();
    let start = Instant::now();

    let resp = next.run(req).await;

    let status = resp.status().as_u16().to_string();
    let metrics = state.metrics();
    metrics.requests.inc(&[
        ("endpoint", endpoint.as_str()),
        ("method", method.as_str()),
        ("status", status.as_str()),
    ]);
    metrics
        .request_latency
        .observe(&[("endpoint", endpoint.as_str())], start.elapsed());

    resp
}
