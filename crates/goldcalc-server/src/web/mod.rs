//! Page and receipt handlers.

pub mod quote;
pub mod receipt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use goldcalc_core::error::{ClientCode, GoldCalcError};

/// Handler error. Logs the full error; the client only sees the generic message.
#[derive(Debug)]
pub struct WebError(pub GoldCalcError);

impl From<GoldCalcError> for WebError {
    fn from(e: GoldCalcError) -> Self {
        Self(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::InvalidInput => {
                tracing::warn!(error = %self.0, "bad input");
                StatusCode::BAD_REQUEST
            }
            ClientCode::Internal => {
                tracing::error!(error = %self.0, code = code.as_str(), "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, code.message()).into_response()
    }
}
