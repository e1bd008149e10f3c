//! Core data types for the note access service.
//!
//! The service deals in three entities:
//!
//! - A [`Note`] is a reference document whose metadata is public but whose
//!   content is access-gated.
//! - A [`Student`] is a registered identity that may ask for access.
//! - An [`AccessRequest`] records one student's ask for one note, together
//!   with its approval state.
//!
//! Wire formats follow the service's JSON contract: camelCase field names
//! and lowercase status strings.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps the catalog's integer id, providing type safety to distinguish note
/// ids from other integer identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    /// Returns the inner integer.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NoteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl StudentId {
    /// Returns the inner integer.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unique identifier for an access request.
///
/// Request ids are allocated by the ledger, strictly increasing over its
/// lifetime, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl RequestId {
    /// Returns the inner integer.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Catalog Entities
// ============================================================================

/// A reference note. Metadata is public; content disclosure is gated on an
/// approved access request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique, stable identifier.
    pub id: NoteId,
    /// Human-readable title. Also keys the deterministic content source.
    pub title: String,
    /// Short description shown in listings.
    pub description: String,
    /// Name of the owning account.
    pub owner: String,
}

/// A registered student identity.
///
/// The name is unique and is the canonical form stored on access requests,
/// whatever identifier the caller originally supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier.
    pub id: StudentId,
    /// Unique name.
    pub name: String,
}

// ============================================================================
// Access Requests
// ============================================================================

/// Approval state of an access request.
///
/// The only transition is `Pending` to `Approved`; there is no reverse
/// transition and `Approved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted, awaiting admin approval.
    Pending,
    /// Approved by an admin; content may be disclosed.
    Approved,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
        }
    }
}

/// A student's ask to view a specific note's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    /// Ledger-allocated identifier.
    pub id: RequestId,
    /// Canonical student name at submission time.
    pub student: String,
    /// The note the request is for.
    pub note_id: NoteId,
    /// Current approval state.
    pub status: RequestStatus,
}

// ============================================================================
// Caller-Supplied References
// ============================================================================

/// A caller-supplied student identifier: either a name or a numeric id.
///
/// Deserialized untagged, so a JSON number is an id and a JSON string is a
/// name. A string never matches an id and a number never matches a name;
/// callers rely on that strict split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentRef {
    /// Numeric student id.
    Id(u64),
    /// Exact student name.
    Name(String),
}

impl StudentRef {
    /// True for an empty name string, which counts as an absent field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Name(name) if name.is_empty())
    }
}

impl fmt::Display for StudentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for StudentRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<u64> for StudentRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

/// A numeric id that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdParam {
    /// Already numeric.
    Num(u64),
    /// String form, coerced on use.
    Text(String),
}

impl IdParam {
    /// Coerce to an integer id. Empty or non-numeric text yields `None`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True for an empty text value, which counts as an absent field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl From<u64> for IdParam {
    fn from(id: u64) -> Self {
        Self::Num(id)
    }
}

impl From<&str> for IdParam {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
