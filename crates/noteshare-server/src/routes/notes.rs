//! Note routes: public metadata listing and gated content disclosure.
//!
//! - GET /notes - List note metadata (public)
//! - GET /notes/{id}/content?student=name - Content for an approved student

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use noteshare_core::{Note, NoteId};
use noteshare_store::NoteContent;

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for listing notes.
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    /// All cataloged notes, metadata only.
    pub notes: Vec<Note>,
}

/// Query parameters for the content endpoint.
#[derive(Debug, Deserialize)]
pub struct ContentParams {
    /// Claimed student name. Trusted as-is and matched against the ledger;
    /// absence simply matches nothing.
    #[serde(default)]
    pub student: Option<String>,
}

/// GET /notes - List public note metadata.
async fn list_notes(State(state): State<AppState>) -> Json<NotesResponse> {
    Json(NotesResponse { notes: state.service().list_notes() })
}

/// GET /notes/{id}/content - Return content to an approved student.
///
/// # Response
///
/// - 200 OK: `{ "id": 1, "title": "...", "content": ["..."] }`
/// - 403 Forbidden: No approved request for this note and student
/// - 404 Not Found: Note does not exist
async fn note_content(
    State(state): State<AppState>,
    Path(note_id): Path<NoteId>,
    Query(params): Query<ContentParams>,
) -> ApiResult<Json<NoteContent>> {
    let content = state.service().note_content(note_id, params.student.as_deref())?;

    tracing::debug!(
        note_id = %note_id,
        student = params.student.as_deref().unwrap_or(""),
        "note content served"
    );

    Ok(Json(content))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes))
        .route("/notes/{id}/content", get(note_content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::error::ApiError;
    use noteshare_core::IdParam;
    use noteshare_store::{AccessService, AdminGate, Catalog, StoreError};

    fn sample_state() -> AppState {
        AppState::new(
            AccessService::new(Catalog::sample(), AdminGate::open()),
            ServerConfig::default(),
        )
    }

    #[tokio::test]
    async fn lists_all_notes() {
        let response = list_notes(State(sample_state())).await;
        assert_eq!(response.notes.len(), 2);
        assert_eq!(response.notes[0].title, "AWS Questions");
    }

    #[tokio::test]
    async fn content_requires_an_approved_request() {
        let state = sample_state();
        state
            .service()
            .submit_request(Some("alice".into()), Some(IdParam::Num(1)))
            .unwrap();

        let denied = note_content(
            State(state.clone()),
            Path(NoteId(1)),
            Query(ContentParams { student: Some("alice".to_string()) }),
        )
        .await;
        assert!(matches!(
            denied,
            Err(ApiError::Store(StoreError::AccessDenied { .. }))
        ));

        state.service().approve_request(Some(IdParam::Num(1)), None).unwrap();

        let served = note_content(
            State(state),
            Path(NoteId(1)),
            Query(ContentParams { student: Some("alice".to_string()) }),
        )
        .await
        .unwrap();
        assert_eq!(served.0.title, "AWS Questions");
        assert_eq!(served.0.content, ["What is IAM?", "Explain EBS vs EFS"]);
    }

    #[tokio::test]
    async fn unknown_note_is_not_found() {
        let result = note_content(
            State(sample_state()),
            Path(NoteId(99)),
            Query(ContentParams { student: Some("alice".to_string()) }),
        )
        .await;
        assert!(matches!(
            result,
            Err(ApiError::Store(StoreError::NoteNotFound(NoteId(99))))
        ));
    }

    #[tokio::test]
    async fn missing_student_param_is_denied_not_an_error() {
        let result = note_content(
            State(sample_state()),
            Path(NoteId(1)),
            Query(ContentParams { student: None }),
        )
        .await;
        assert!(matches!(
            result,
            Err(ApiError::Store(StoreError::AccessDenied { .. }))
        ));
    }

    #[test]
    fn notes_response_wire_shape() {
        let response = NotesResponse { notes: Catalog::sample().notes().to_vec() };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["notes"].is_array());
        assert_eq!(json["notes"][0]["id"], 1);
    }
}
