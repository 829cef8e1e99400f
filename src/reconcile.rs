use crate::types::{RequestId, TokenTotals};
use std::collections::HashMap;

/// Final usage for one API call: the component-wise maximum across every
/// snapshot seen for its request id, and the model from the first snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledCall {
    pub model: String,
    pub tokens: TokenTotals,
}

/// Folds streamed, re-emitted usage snapshots into one total per call.
///
/// Each snapshot is cumulative, so per request id the right merge is the
/// running maximum per counter; the session-wide totals are kept current by
/// adding only the positive delta of each fold. The two views stay equal:
/// summing the per-call maxima gives the same numbers as `running_totals`.
#[derive(Debug, Default)]
pub struct Reconciler {
    by_request: HashMap<RequestId, ReconciledCall>,
    anonymous: Vec<ReconciledCall>,
    running: TokenTotals,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one snapshot. Snapshots without a request id cannot be matched
    /// against later re-emissions: they count immediately and stand alone.
    pub fn observe(&mut self, request_id: Option<RequestId>, model: &str, snapshot: TokenTotals) {
        match request_id {
            Some(id) if !id.is_empty() => {
                let call = self.by_request.entry(id).or_insert_with(|| ReconciledCall {
                    model: model.to_string(),
                    tokens: TokenTotals::default(),
                });
                let delta = call.tokens.fold_max(&snapshot);
                self.running.add(&delta);
            }
            _ => {
                self.running.add(&snapshot);
                self.anonymous.push(ReconciledCall {
                    model: model.to_string(),
                    tokens: snapshot,
                });
            }
        }
    }

    /// All reconciled calls, deduplicated ones first
    pub fn calls(&self) -> impl Iterator<Item = &ReconciledCall> {
        self.by_request.values().chain(self.anonymous.iter())
    }

    /// Distinct tagged request ids seen so far
    pub fn unique_requests(&self) -> usize {
        self.by_request.len()
    }

    /// Session totals maintained by delta accumulation
    pub fn running_totals(&self) -> &TokenTotals {
        &self.running
    }
}
