//! goldcalc server
//!
//! - Quote form: GET/POST /
//! - PDF receipt: GET /receipt?...
//! - Ops: /health, /readyz, /metrics
//! - Config from the environment (plus `.env` when present), read once

use goldcalc_core::error::{GoldCalcError, Result};
use goldcalc_server::{app_state::AppState, config, obs, router};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("goldcalc: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let cfg = config::load_from_env()?;
    obs::logging::init(&cfg.logging);
    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded .env");
    }

    let listen = cfg.listen.socket_addr()?;
    tracing::info!(
        gst_gold = cfg.quote.tax.gst_on_gold_percent,
        gst_making = cfg.quote.tax.gst_on_making_percent,
        policy = ?cfg.quote.defaults.policy(),
        types = ?cfg.quote.defaults.known_types(),
        "quote config loaded"
    );

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "goldcalc starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| GoldCalcError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| GoldCalcError::Internal(format!("server failed: {e}")))?;

    tracing::info!("goldcalc stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl-c handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state.metrics().set_draining();
    tracing::info!("shutdown signal received, draining");
}
