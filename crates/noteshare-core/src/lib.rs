//! noteshare-core: shared data types for the note access service
//!
//! This crate defines the catalog entities (notes, students), the access
//! request record with its approval state, and the tolerant reference types
//! used where callers may identify entities by name, numeric id, or a
//! numeric string.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

pub mod types;

pub use types::{
    AccessRequest, IdParam, Note, NoteId, RequestId, RequestStatus, Student, StudentId, StudentRef,
};
