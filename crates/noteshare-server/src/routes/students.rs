//! Student listing endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use noteshare_core::Student;

use crate::state::AppState;

/// Response for listing students.
#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    /// All registered students.
    pub students: Vec<Student>,
}

/// GET /students - List registered students.
async fn list_students(State(state): State<AppState>) -> Json<StudentsResponse> {
    Json(StudentsResponse { students: state.service().list_students() })
}

/// Build student routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/students", get(list_students))
}
