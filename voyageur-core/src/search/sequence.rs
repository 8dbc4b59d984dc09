use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a single issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter. Only the response of the most recently
/// issued ticket may be applied; everything older is stale.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    latest: AtomicU64,
}

impl SequenceCounter {
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidates every outstanding ticket.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
