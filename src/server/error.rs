use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

/// Maps any failure escaping a handler to a plain 500. Expected
/// conditions (absent storage, text that is not a contribution)
/// never take this path; those are ordinary values.
pub(crate) struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ServerError(err.into())
    }
}
