//! Access-request routes: submission, listing, and admin approval.
//!
//! - POST /requests - Student asks for access to a note
//! - GET /requests - Full ledger in creation order
//! - POST /approve - Admin approves a pending request

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use noteshare_core::{AccessRequest, IdParam, StudentRef};

use crate::error::ApiResult;
use crate::extract::AdminToken;
use crate::state::AppState;

/// Request body for submitting an access request.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    /// Student name or numeric id.
    #[serde(default)]
    pub student: Option<StudentRef>,
    /// Target note id; a numeric string is accepted.
    #[serde(default, rename = "noteId")]
    pub note_id: Option<IdParam>,
}

/// Request body for approving a request.
#[derive(Debug, Deserialize)]
pub struct ApproveBody {
    /// Id of the request to approve; a numeric string is accepted.
    #[serde(default, rename = "requestId")]
    pub request_id: Option<IdParam>,
}

/// Response for listing requests.
#[derive(Debug, Serialize)]
pub struct RequestsResponse {
    /// All access requests in creation order.
    pub requests: Vec<AccessRequest>,
}

/// POST /requests - Submit an access request.
///
/// # Request
///
/// Body: `{ "student": "alice" | 1, "noteId": 1 | "1" }`
///
/// # Response
///
/// - 200 OK: the stored request, status `pending`
/// - 400 Bad Request: missing field, unknown student, or unknown note
async fn submit_request(
    State(state): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> ApiResult<Json<AccessRequest>> {
    let request = state.service().submit_request(body.student, body.note_id)?;
    Ok(Json(request))
}

/// POST /approve - Approve a pending request.
///
/// The admin gate is consulted before the ledger: an unauthorized call has
/// no side effects. Re-approving an approved request succeeds unchanged.
///
/// # Request
///
/// Body: `{ "requestId": 1 }`
/// Header: `x-admin-token` - required only when `ADMIN_TOKEN` is configured
///
/// # Response
///
/// - 200 OK: the request, status `approved`
/// - 400 Bad Request: missing request id
/// - 403 Forbidden: credential does not match the configured token
/// - 404 Not Found: no request with that id
async fn approve_request(
    State(state): State<AppState>,
    token: AdminToken,
    Json(body): Json<ApproveBody>,
) -> ApiResult<Json<AccessRequest>> {
    let request = state.service().approve_request(body.request_id, token.as_deref())?;
    Ok(Json(request))
}

/// GET /requests - List all access requests.
async fn list_requests(State(state): State<AppState>) -> Json<RequestsResponse> {
    Json(RequestsResponse { requests: state.service().list_requests() })
}

/// Build request routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(submit_request).get(list_requests))
        .route("/approve", post(approve_request))
}
