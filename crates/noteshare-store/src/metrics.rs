//! Process-lifetime counters for externally observable side effects.

use std::sync::atomic::{AtomicU64, Ordering};

/// Best-effort observability counters.
///
/// Only successful ledger transitions bump these; a failed or unauthorized
/// call leaves them untouched. The increments are not correctness-critical,
/// so relaxed ordering is sufficient.
#[derive(Debug, Default)]
pub struct Counters {
    requests_submitted: AtomicU64,
    approvals_processed: AtomicU64,
}

impl Counters {
    /// Create a fresh set of counters, all zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully submitted access request.
    pub fn record_submission(&self) {
        self.requests_submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one processed approval.
    pub fn record_approval(&self) {
        self.approvals_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Total access requests successfully submitted.
    #[must_use]
    pub fn requests_submitted(&self) -> u64 {
        self.requests_submitted.load(Ordering::Relaxed)
    }

    /// Total approvals processed.
    #[must_use]
    pub fn approvals_processed(&self) -> u64 {
        self.approvals_processed.load(Ordering::Relaxed)
    }
}
