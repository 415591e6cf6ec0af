//! `/` form page: GET shows the empty form, POST computes a quote.
//!
//! Invalid input and calculation failures still render the page (HTTP 200)
//! with a plain-language message, so the user can correct the form.

use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::Html,
};

use goldcalc_core::error::{ClientCode, GoldCalcError, Result};
use goldcalc_core::quote::{compute_quote, QuoteForm, QuoteResult};

use crate::app_state::AppState;
use crate::render::IndexPage;
use crate::web::WebError;

pub async fn show_form(State(state): State<AppState>) -> std::result::Result<Html<String>, WebError> {
    let page = IndexPage {
        jewelry_types: state.jewelry_types().to_vec(),
        ..IndexPage::default()
    };
    Ok(Html(state.templates().render_index(&page)?))
}

pub async fn submit_quote(
    State(state): State<AppState>,
    form: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> std::result::Result<Html<String>, WebError> {
    let outcome = match form {
        Ok(Form(pairs)) => QuoteForm::from_pairs(pairs).parse(),
        Err(rejection) => Err(GoldCalcError::invalid("form", rejection.body_text())),
    }
    .and_then(|input| compute_quote(&input, state.quote_config()));
    record_outcome(&state, &outcome);

    let receipt_href = match &outcome {
        Ok(res) => Some(receipt_href(res)?),
        Err(_) => None,
    };
    let page = IndexPage {
        result: outcome.as_ref().ok(),
        error: outcome.as_ref().err().map(|e| e.client_code().message()),
        receipt_href,
        jewelry_types: state.jewelry_types().to_vec(),
    };
    Ok(Html(state.templates().render_index(&page)?))
}

fn record_outcome(state: &AppState, outcome: &Result<QuoteResult>) {
    let label = match outcome {
        Ok(res) => {
            tracing::info!(
                jewelry_type = %res.jewelry_type,
                base_cost = res.base_cost,
                total = res.total_price,
                "calculation success"
            );
            "ok"
        }
        Err(e) => match e.client_code() {
            ClientCode::InvalidInput => {
                tracing::warn!(error = %e, "bad input");
                "invalid_input"
            }
            ClientCode::Internal => {
                tracing::error!(error = %e, "unexpected error");
                "error"
            }
        },
    };
    state.metrics().quotes.inc(&[("outcome", label)]);
}

/// Link to the PDF receipt carrying the computed record as query parameters.
pub fn receipt_href(res: &QuoteResult) -> Result<String> {
    let qs = serde_urlencoded::to_string(res)
        .map_err(|e| GoldCalcError::Internal(format!("encode receipt query: {e}")))?;
    Ok(format!("/receipt?{qs}"))
}
