//! The access-request ledger and its state machine.

use std::sync::{Arc, RwLock};

use noteshare_core::{AccessRequest, IdParam, NoteId, RequestId, RequestStatus, StudentRef};

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};
use crate::metrics::Counters;

/// Exclusive owner of the access-request collection.
///
/// Requests are only ever created by [`submit`](RequestLedger::submit) and
/// mutated by [`approve`](RequestLedger::approve); nothing deletes them.
/// Ids are allocated under the write lock and only after validation has
/// passed, so a failed submission never consumes an id and concurrent
/// submissions cannot produce duplicates or break monotonicity.
#[derive(Debug)]
pub struct RequestLedger {
    catalog: Arc<Catalog>,
    counters: Arc<Counters>,
    inner: RwLock<LedgerInner>,
}

#[derive(Debug)]
struct LedgerInner {
    requests: Vec<AccessRequest>,
    next_id: u64,
}

impl RequestLedger {
    /// Create an empty ledger validating against the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, counters: Arc<Counters>) -> Self {
        Self {
            catalog,
            counters,
            inner: RwLock::new(LedgerInner { requests: Vec::new(), next_id: 1 }),
        }
    }

    /// Submit a new access request.
    ///
    /// Validation order is fixed, first failure wins: both fields present
    /// and non-empty, then the student must resolve, then the note id must
    /// coerce to an integer and resolve. The stored request carries the
    /// catalog's canonical student name, not the identifier the caller
    /// supplied.
    pub fn submit(
        &self,
        student: Option<StudentRef>,
        note: Option<IdParam>,
    ) -> StoreResult<AccessRequest> {
        let student_ref = match student {
            Some(s) if !s.is_empty() => s,
            _ => return Err(StoreError::MissingField("student")),
        };
        let note_param = match note {
            Some(n) if !n.is_empty() => n,
            _ => return Err(StoreError::MissingField("noteId")),
        };

        let student = self
            .catalog
            .find_student(&student_ref)
            .ok_or_else(|| StoreError::UnknownStudent(student_ref.clone()))?;

        let note_id = note_param
            .as_u64()
            .map(NoteId)
            .ok_or(StoreError::MissingField("noteId"))?;
        let note = self
            .catalog
            .find_note(note_id)
            .ok_or(StoreError::UnknownNote(note_id))?;

        let request = {
            let mut inner = self.inner.write().expect("request ledger poisoned");
            let request = AccessRequest {
                id: RequestId(inner.next_id),
                student: student.name.clone(),
                note_id: note.id,
                status: RequestStatus::Pending,
            };
            inner.next_id += 1;
            inner.requests.push(request.clone());
            request
        };

        self.counters.record_submission();
        tracing::info!(
            request_id = %request.id,
            student = %request.student,
            note_id = %request.note_id,
            "access request submitted"
        );
        Ok(request)
    }

    /// Approve the request with the given id.
    ///
    /// Approving an already-approved request is a no-op success returning
    /// the current record. An unknown id changes nothing.
    pub fn approve(&self, request: Option<IdParam>) -> StoreResult<AccessRequest> {
        let request_id = request
            .filter(|param| !param.is_empty())
            .and_then(|param| param.as_u64())
            .map(RequestId)
            .ok_or(StoreError::MissingField("requestId"))?;

        let approved = {
            let mut inner = self.inner.write().expect("request ledger poisoned");
            let Some(entry) = inner.requests.iter_mut().find(|r| r.id == request_id) else {
                return Err(StoreError::RequestNotFound(request_id));
            };
            entry.status = RequestStatus::Approved;
            entry.clone()
        };

        self.counters.record_approval();
        tracing::info!(request_id = %approved.id, "access request approved");
        Ok(approved)
    }

    /// True iff an approved request exists for exactly this note and this
    /// canonical student name.
    #[must_use]
    pub fn is_approved(&self, note_id: NoteId, student: &str) -> bool {
        self.inner
            .read()
            .expect("request ledger poisoned")
            .requests
            .iter()
            .any(|r| {
                r.note_id == note_id && r.student == student && r.status == RequestStatus::Approved
            })
    }

    /// All requests in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<AccessRequest> {
        self.inner.read().expect("request ledger poisoned").requests.clone()
    }
}
