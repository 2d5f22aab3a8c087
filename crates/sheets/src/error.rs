//! Row store error types.

use thiserror::Error;
use tally_shared::AppError;

/// Errors talking to the row store.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The request could not be sent or the connection failed.
    #[error("request to row store failed: {0}")]
    Request(String),

    /// The row store answered with a non-success status.
    #[error("row store returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not what we expected.
    #[error("unexpected row store response: {0}")]
    Decode(String),

    /// The listing did not contain the table's collection key.
    #[error("row store response has no `{0}` collection")]
    MissingCollection(String),
}

impl From<reqwest::Error> for SheetError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<SheetError> for AppError {
    fn from(err: SheetError) -> Self {
        Self::ExternalService(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SheetError::Status {
                status: 402,
                body: "quota exceeded".into()
            }
            .to_string(),
            "row store returned 402: quota exceeded"
        );
        assert_eq!(
            SheetError::MissingCollection("expenses".into()).to_string(),
            "row store response has no `expenses` collection"
        );
    }

    #[test]
    fn test_maps_to_external_service() {
        let err: AppError = SheetError::Request("connection refused".into()).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }
}
