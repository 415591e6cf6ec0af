//! `/receipt`: echo a previously computed quote into a downloadable PDF.
//!
//! The record arrives as query parameters and is not recomputed.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use chrono::Local;

use goldcalc_core::error::Result;

use crate::app_state::AppState;
use crate::web::WebError;

pub const RECEIPT_FILENAME: &str = "Jewellery_Receipt.pdf";
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

pub async fn download_receipt(
    State(state): State<AppState>,
    Query(mut fields): Query<BTreeMap<String, String>>,
) -> std::result::Result<Response, WebError> {
    fields.insert(
        "timestamp".to_string(),
        Local::now().format(TIMESTAMP_FORMAT).to_string(),
    );

    match render(&state, &fields).await {
        Ok(pdf) => {
            state.metrics().receipts.inc(&[("outcome", "ok")]);
            tracing::info!(
                jewelry_type = fields.get("jewelry_type").map_or("-", String::as_str),
                total = fields.get("total_price").map_or("-", String::as_str),
                bytes = pdf.len(),
                "receipt generated"
            );
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{RECEIPT_FILENAME}\""),
                    ),
                ],
                pdf,
            )
                .into_response())
        }
        Err(e) => {
            state.metrics().receipts.inc(&[("outcome", "error")]);
            Err(e.into())
        }
    }
}

async fn render(state: &AppState, fields: &BTreeMap<String, String>) -> Result<Bytes> {
    let html = state.templates().render_receipt(fields)?;
    state.pdf().render_pdf(&html).await
}
