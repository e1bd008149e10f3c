//! Admin credential extraction from the x-admin-token header.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the shared-secret approval credential.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// The credential as supplied by the caller, if any.
///
/// Extraction never rejects a missing header: whether an absent credential
/// is acceptable is the admin gate's decision, not the transport's.
#[derive(Debug, Clone)]
pub struct AdminToken(pub Option<String>);

impl AdminToken {
    /// The credential as a borrowed string, if present.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(ADMIN_TOKEN_HEADER) {
            None => None,
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| {
                        ApiError::BadRequest(
                            "x-admin-token header contains invalid characters".to_string(),
                        )
                    })?
                    .to_string(),
            ),
        };
        Ok(Self(token))
    }
}
