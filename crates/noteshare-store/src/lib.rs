//! noteshare-store: in-memory domain layer for the note access service
//!
//! This crate provides:
//! - `Catalog`: fixed lookup tables of notes and students
//! - `RequestLedger`: the owned collection of access requests and the state
//!   machine each request undergoes
//! - `ContentGate`: the disclosure decision for note content
//! - `AccessService`: the boundary-facing facade composing the above
//!
//! # Architecture
//!
//! All state lives in process memory for the lifetime of the service. The
//! catalog is immutable after seeding; the ledger is the single owner of
//! mutable state and serializes mutations behind one lock. Every operation
//! returns a typed [`StoreError`] on failure and leaves the ledger exactly
//! as it was; nothing here panics or performs I/O.
//!
//! # Usage
//!
//! ```rust
//! use noteshare_store::{AccessService, AdminGate, Catalog};
//!
//! let service = AccessService::new(Catalog::sample(), AdminGate::open());
//! let request = service.submit_request(Some("alice".into()), Some(1u64.into()))?;
//! let approved = service.approve_request(Some(request.id.get().into()), None)?;
//! assert_eq!(approved.status, noteshare_core::RequestStatus::Approved);
//! # Ok::<(), noteshare_store::StoreError>(())
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod service;

pub use catalog::Catalog;
pub use content::{ContentGate, NoteContent};
pub use error::{StoreError, StoreResult};
pub use ledger::RequestLedger;
pub use metrics::Counters;
pub use service::{AccessService, AdminGate};

// Re-export noteshare-core for downstream crates
pub use noteshare_core;
