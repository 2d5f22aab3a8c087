//! Conversion of application errors into HTML responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tally_shared::AppError;
use tracing::error;

use crate::views;

/// Error returned by handlers; renders as an error page.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.error_code();

        // Server-side details stay in the log.
        let message = if status.is_server_error() {
            error!(error = %self.0, code, "Request failed");
            "Something went wrong. Please try again later.".to_string()
        } else {
            self.0.to_string()
        };

        (status, Html(views::error::render(code, &message))).into_response()
    }
}
