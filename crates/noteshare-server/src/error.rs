//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use noteshare_store::StoreError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Domain error from the store layer.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(e) => match e {
                StoreError::MissingField(_)
                | StoreError::UnknownStudent(_)
                | StoreError::UnknownNote(_) => "BAD_REQUEST",
                StoreError::RequestNotFound(_) | StoreError::NoteNotFound(_) => "NOT_FOUND",
                StoreError::AccessDenied { .. } => "FORBIDDEN",
                StoreError::Unauthorized => "UNAUTHORIZED",
            },
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// A bad admin credential maps to 403, not 401: the caller is known to
    /// the transport, it just is not allowed through the approval gate.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::MissingField(_)
                | StoreError::UnknownStudent(_)
                | StoreError::UnknownNote(_) => StatusCode::BAD_REQUEST,
                StoreError::RequestNotFound(_) | StoreError::NoteNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                StoreError::AccessDenied { .. } | StoreError::Unauthorized => {
                    StatusCode::FORBIDDEN
                }
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use noteshare_core::{NoteId, RequestId};

    #[test]
    fn validation_failures_are_bad_requests() {
        for err in [
            StoreError::MissingField("student"),
            StoreError::UnknownStudent("eve".into()),
            StoreError::UnknownNote(NoteId(9)),
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(api.code(), "BAD_REQUEST");
        }
    }

    #[test]
    fn lookup_failures_are_not_found() {
        assert_eq!(
            ApiError::from(StoreError::RequestNotFound(RequestId(9))).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::NoteNotFound(NoteId(9))).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn denials_are_forbidden() {
        let denied = ApiError::from(StoreError::AccessDenied {
            note_id: NoteId(1),
            student: "alice".to_string(),
        });
        assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(denied.code(), "FORBIDDEN");

        // Bad admin token is 403 as well, with its own code.
        let unauthorized = ApiError::from(StoreError::Unauthorized);
        assert_eq!(unauthorized.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(unauthorized.code(), "UNAUTHORIZED");
    }

    #[test]
    fn error_body_shape() {
        let api = ApiError::from(StoreError::MissingField("noteId"));
        let body = ErrorResponse {
            error: ErrorDetails {
                code: api.code().to_string(),
                message: api.to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "noteId required");
    }
}
