//! Content disclosure gate.

use std::sync::Arc;

use serde::Serialize;

use noteshare_core::{Note, NoteId};

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};
use crate::ledger::RequestLedger;

/// Content revealed to a student with an approved request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteContent {
    /// The note's id.
    pub id: NoteId,
    /// The note's title.
    pub title: String,
    /// The gated topic strings.
    pub content: Vec<String>,
}

/// Decides whether note content may be disclosed.
///
/// The claimed student name is trusted as-is: there is no authentication
/// step between the caller's claim and the ledger lookup. That trust
/// boundary is inherited from the service contract; an identity check would
/// slot in here, before the ledger is consulted.
#[derive(Debug)]
pub struct ContentGate {
    catalog: Arc<Catalog>,
    ledger: Arc<RequestLedger>,
}

impl ContentGate {
    /// Build a gate over the given catalog and ledger.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, ledger: Arc<RequestLedger>) -> Self {
        Self { catalog, ledger }
    }

    /// Fetch the content of a note for a claimed student.
    ///
    /// The note must exist (`NoteNotFound` otherwise, regardless of any
    /// approval state) and the ledger must hold an approved request for
    /// exactly this note and name (`AccessDenied` otherwise — a pending
    /// request is not enough). No side effects.
    pub fn fetch(&self, note_id: NoteId, claimed_student: Option<&str>) -> StoreResult<NoteContent> {
        let note = self
            .catalog
            .find_note(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;

        // An absent claim can never match a stored name.
        let claimed = claimed_student.unwrap_or_default();
        if !self.ledger.is_approved(note_id, claimed) {
            return Err(StoreError::AccessDenied { note_id, student: claimed.to_string() });
        }

        Ok(NoteContent {
            id: note.id,
            title: note.title.clone(),
            content: topics_for(note),
        })
    }
}

/// Deterministic per-note content, keyed by title.
fn topics_for(note: &Note) -> Vec<String> {
    let topics: &[&str] = if note.title == "AWS Questions" {
        &["What is IAM?", "Explain EBS vs EFS"]
    } else {
        &["Event loop", "Streams"]
    };
    topics.iter().map(|topic| (*topic).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Counters;

    fn gate() -> (ContentGate, Arc<RequestLedger>) {
        let catalog = Arc::new(Catalog::sample());
        let ledger = Arc::new(RequestLedger::new(
            Arc::clone(&catalog),
            Arc::new(Counters::new()),
        ));
        (ContentGate::new(catalog, Arc::clone(&ledger)), ledger)
    }

    #[test]
    fn unknown_note_is_not_found_regardless_of_approvals() {
        let (gate, _ledger) = gate();
        assert_eq!(
            gate.fetch(NoteId(99), Some("alice")),
            Err(StoreError::NoteNotFound(NoteId(99)))
        );
    }

    #[test]
    fn pending_request_is_not_enough() {
        let (gate, ledger) = gate();
        ledger.submit(Some("alice".into()), Some(1u64.into())).unwrap();
        let denied = gate.fetch(NoteId(1), Some("alice"));
        assert!(matches!(denied, Err(StoreError::AccessDenied { .. })));
    }

    #[test]
    fn approved_request_discloses_content() {
        let (gate, ledger) = gate();
        let request = ledger.submit(Some("alice".into()), Some(1u64.into())).unwrap();
        ledger.approve(Some(request.id.get().into())).unwrap();

        let content = gate.fetch(NoteId(1), Some("alice")).unwrap();
        assert_eq!(content.id, NoteId(1));
        assert_eq!(content.title, "AWS Questions");
        assert_eq!(content.content, ["What is IAM?", "Explain EBS vs EFS"]);
    }

    #[test]
    fn content_is_deterministic_per_note() {
        let (gate, ledger) = gate();
        for note in [1u64, 2] {
            let request = ledger.submit(Some("bob".into()), Some(note.into())).unwrap();
            ledger.approve(Some(request.id.get().into())).unwrap();
        }
        let aws = gate.fetch(NoteId(1), Some("bob")).unwrap();
        let node = gate.fetch(NoteId(2), Some("bob")).unwrap();
        assert_ne!(aws.content, node.content);
        assert_eq!(node.content, ["Event loop", "Streams"]);
        // Fetching twice yields the same content.
        assert_eq!(gate.fetch(NoteId(2), Some("bob")).unwrap(), node);
    }

    #[test]
    fn note_content_wire_shape() {
        let content = NoteContent {
            id: NoteId(1),
            title: "AWS Questions".to_string(),
            content: vec!["What is IAM?".to_string()],
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "AWS Questions",
                "content": ["What is IAM?"]
            })
        );
    }

    #[test]
    fn approval_does_not_leak_to_other_students() {
        let (gate, ledger) = gate();
        let request = ledger.submit(Some("alice".into()), Some(1u64.into())).unwrap();
        ledger.approve(Some(request.id.get().into())).unwrap();

        assert!(matches!(
            gate.fetch(NoteId(1), Some("bob")),
            Err(StoreError::AccessDenied { .. })
        ));
        assert!(matches!(gate.fetch(NoteId(1), None), Err(StoreError::AccessDenied { .. })));
    }
}
