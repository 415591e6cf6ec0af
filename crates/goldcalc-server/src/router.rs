//! Axum router wiring.
//!
//! Page and receipt routes are instrumented; ops routes are not.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops, web};

pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(web::quote::show_form).post(web::quote::submit_quote))
        .route("/receipt", get(web::receipt::download_receipt))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::instrument::track_requests,
        ));

    Router::new()
        .merge(pages)
        .route("/health", get(ops::health))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
