//! Error types for the domain layer.

use noteshare_core::{NoteId, RequestId, StudentRef};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// All of these are local, typed outcomes returned to the caller; none is
/// fatal and a failed operation never leaves partial state behind. The
/// boundary layer decides how each kind maps to a caller-visible status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Required input absent, empty, or not coercible to the expected type.
    #[error("{0} required")]
    MissingField(&'static str),

    /// Submitted student identifier does not resolve to a registered student.
    #[error("student not found: {0}")]
    UnknownStudent(StudentRef),

    /// Submitted note id does not resolve to a cataloged note.
    #[error("note not found: {0}")]
    UnknownNote(NoteId),

    /// No access request with this id exists.
    #[error("request not found: {0}")]
    RequestNotFound(RequestId),

    /// Content fetch for a note id that does not exist.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// No approved request matches the note and the claimed student.
    #[error("access not granted for note {note_id} to {student:?}")]
    AccessDenied {
        note_id: NoteId,
        student: String,
    },

    /// Admin credential missing or wrong while a token is configured.
    #[error("unauthorized")]
    Unauthorized,
}
