use serde::{Deserialize, Serialize};
use tracing::trace;

/// Excerpt window request, possibly deferred while an edit is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExcerptRequest {
    pub from: f64,
    pub to: f64,
    pub has_margin: bool,
}

impl ExcerptRequest {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            has_margin: true,
        }
    }

    #[must_use]
    pub fn without_margin(mut self) -> Self {
        self.has_margin = false;
        self
    }
}

/// Quiesce gate serializing excerpting against point edits.
///
/// Excerpting replaces displayed series wholesale, so it must not run while
/// the host is mid-edit on a displayed point. While the busy flag is raised,
/// the gate holds exactly one pending request: the latest window wins and
/// superseded intermediates are discarded. On busy-clear the pending request
/// runs once.
#[derive(Debug, Default)]
pub struct ExcerptGate {
    editing: bool,
    pending: Option<ExcerptRequest>,
}

impl ExcerptGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        trace!("edit began, deferring excerpt requests");
        self.editing = true;
    }

    /// Admits a request for immediate execution, or stashes it while editing.
    ///
    /// Returns `true` when the caller should run the request now.
    pub fn admit(&mut self, request: ExcerptRequest) -> bool {
        if !self.editing {
            return true;
        }

        if let Some(superseded) = self.pending.replace(request) {
            trace!(
                from = superseded.from,
                to = superseded.to,
                "superseded deferred excerpt request"
            );
        }
        false
    }

    /// Clears the busy flag and hands back the latest deferred request, if any.
    pub fn end_edit(&mut self) -> Option<ExcerptRequest> {
        self.editing = false;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExcerptGate, ExcerptRequest};

    #[test]
    fn idle_gate_admits_immediately() {
        let mut gate = ExcerptGate::new();
        assert!(gate.admit(ExcerptRequest::new(0.0, 10.0)));
        assert!(gate.end_edit().is_none());
    }

    #[test]
    fn busy_gate_defers_and_keeps_latest_request() {
        let mut gate = ExcerptGate::new();
        gate.begin_edit();

        assert!(!gate.admit(ExcerptRequest::new(0.0, 10.0)));
        assert!(!gate.admit(ExcerptRequest::new(5.0, 15.0)));

        let pending = gate.end_edit().expect("latest request survives");
        assert_eq!(pending.from, 5.0);
        assert_eq!(pending.to, 15.0);
        assert!(!gate.is_editing());
    }

    #[test]
    fn end_edit_without_requests_yields_nothing() {
        let mut gate = ExcerptGate::new();
        gate.begin_edit();
        assert!(gate.end_edit().is_none());
    }
}
