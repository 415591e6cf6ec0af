//! Shared application state for the goldcalc server.
//!
//! Everything here is built once at startup and read-only afterwards, apart
//! from the atomic metric cells.

use std::sync::Arc;

use goldcalc_core::error::Result;
use goldcalc_core::quote::QuoteConfig;

use crate::config::ServerConfig;
use crate::obs::metrics::GoldcalcMetrics;
use crate::render::{PdfRenderer, Templates, TextLayoutPdf};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GoldcalcMetrics>,
    pdf: Arc<dyn PdfRenderer>,
}

struct AppStateInner {
    quote: QuoteConfig,
    templates: Templates,
    jewelry_types: Vec<String>,
}

impl AppState {
    /// Build application state with the builtin PDF renderer.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_renderer(cfg, Arc::new(TextLayoutPdf::default()))
    }

    pub fn with_renderer(cfg: ServerConfig, pdf: Arc<dyn PdfRenderer>) -> Result<Self> {
        let templates = Templates::new()?;
        let jewelry_types = cfg
            .quote
            .defaults
            .known_types()
            .iter()
            .map(|k| title_case(k))
            .collect();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                quote: cfg.quote,
                templates,
                jewelry_types,
            }),
            metrics: Arc::new(GoldcalcMetrics::default()),
            pdf,
        })
    }

    pub fn quote_config(&self) -> &QuoteConfig {
        &self.inner.quote
    }

    pub fn templates(&self) -> &Templates {
        &self.inner.templates
    }

    /// Configured jewelry types, for the form's suggestion list.
    pub fn jewelry_types(&self) -> &[String] {
        &self.inner.jewelry_types
    }

    pub fn metrics(&self) -> &GoldcalcMetrics {
        &self.metrics
    }

    pub fn pdf(&self) -> Arc<dyn PdfRenderer> {
        Arc::clone(&self.pdf)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}

/// `NOSE PIN` -> `Nose Pin`.
fn title_case(key: &str) -> String {
    key.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
