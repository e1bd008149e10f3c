//! The access facade composing catalog, ledger, and content gate.

use std::sync::Arc;

use noteshare_core::{AccessRequest, IdParam, Note, NoteId, Student, StudentRef};

use crate::catalog::Catalog;
use crate::content::{ContentGate, NoteContent};
use crate::error::{StoreError, StoreResult};
use crate::ledger::RequestLedger;
use crate::metrics::Counters;

/// Approval credential policy.
///
/// `None` means the gate is disabled and any or no credential is accepted;
/// `Some` requires an exact token match. The permissive-when-unconfigured
/// behavior is part of the service contract and must not be tightened
/// silently.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    token: Option<String>,
}

impl AdminGate {
    /// Build the gate from an optionally configured token. An empty token
    /// counts as unconfigured.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()) }
    }

    /// A gate with no configured token, accepting everything.
    #[must_use]
    pub fn open() -> Self {
        Self { token: None }
    }

    /// Check the supplied credential against the configured token.
    pub fn authorize(&self, credential: Option<&str>) -> StoreResult<()> {
        match &self.token {
            None => Ok(()),
            Some(expected) if credential == Some(expected.as_str()) => Ok(()),
            Some(_) => Err(StoreError::Unauthorized),
        }
    }
}

/// Boundary-facing operation set over the note access domain.
///
/// Owns the catalog, the request ledger, and the content gate; the HTTP
/// layer holds one of these and translates its typed outcomes into status
/// codes. Fresh instances are independent, which is what test isolation
/// relies on.
#[derive(Debug)]
pub struct AccessService {
    catalog: Arc<Catalog>,
    ledger: Arc<RequestLedger>,
    gate: ContentGate,
    admin: AdminGate,
    counters: Arc<Counters>,
}

impl AccessService {
    /// Wire up a service over the given catalog and admin policy.
    #[must_use]
    pub fn new(catalog: Catalog, admin: AdminGate) -> Self {
        let catalog = Arc::new(catalog);
        let counters = Arc::new(Counters::new());
        let ledger = Arc::new(RequestLedger::new(Arc::clone(&catalog), Arc::clone(&counters)));
        let gate = ContentGate::new(Arc::clone(&catalog), Arc::clone(&ledger));
        Self { catalog, ledger, gate, admin, counters }
    }

    /// The observability counters for this service instance.
    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// All notes in catalog order.
    #[must_use]
    pub fn list_notes(&self) -> Vec<Note> {
        self.catalog.notes().to_vec()
    }

    /// All students in catalog order.
    #[must_use]
    pub fn list_students(&self) -> Vec<Student> {
        self.catalog.students().to_vec()
    }

    /// All access requests in creation order.
    #[must_use]
    pub fn list_requests(&self) -> Vec<AccessRequest> {
        self.ledger.list()
    }

    /// Submit an access request on behalf of a student.
    pub fn submit_request(
        &self,
        student: Option<StudentRef>,
        note: Option<IdParam>,
    ) -> StoreResult<AccessRequest> {
        self.ledger.submit(student, note)
    }

    /// Approve a pending request.
    ///
    /// The admin gate is consulted before the ledger is touched: an
    /// unauthorized call mutates nothing and bumps no counter.
    pub fn approve_request(
        &self,
        request: Option<IdParam>,
        credential: Option<&str>,
    ) -> StoreResult<AccessRequest> {
        self.admin.authorize(credential)?;
        self.ledger.approve(request)
    }

    /// Fetch a note's content for a claimed student name.
    pub fn note_content(
        &self,
        note_id: NoteId,
        claimed_student: Option<&str>,
    ) -> StoreResult<NoteContent> {
        self.gate.fetch(note_id, claimed_student)
    }
}
