// Handler for the hello forwarding endpoint

use std::backtrace::Backtrace;
use std::fmt;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info, instrument};

use crate::config::state::AppState;

// Fixed greeting forwarded to the echo service on every call.
const HELLO_PAYLOAD: &str = "Hello, Cloud!";

/// Forwards the fixed greeting to the echo service and relays its response
/// body untouched.
///
/// Both log records are emitted on every call, before the outbound request;
/// the error-level line is not gated by any check.
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn hello_handler(State(state): State<AppState>) -> Result<String, EchoError> {
    info!("---------Hello method started---------");
    error!("---------Hello method started, id missing!---------");

    let body: String = state.echo.forward(HELLO_PAYLOAD).await?;

    Ok(body)
}

/// Failure of the outbound call. Rendered as a bare 500 with no body; the
/// failure path adds no log records of its own.
#[derive(Debug)]
pub struct EchoError(reqwest::Error);

impl fmt::Display for EchoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "echo service call failed: {}", self.0)
    }
}

impl std::error::Error for EchoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<reqwest::Error> for EchoError {
    fn from(err: reqwest::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
