/// Last-writer-wins guard for debounced recompute. Every rate edit issues
/// a new sequence number; a prefill response is applied only when it
/// carries the latest issued number, so a slow stale response can never
/// overwrite a fresh one regardless of arrival order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefillSequencer {
    issued: u64,
    applied: u64,
}

impl PrefillSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the next in-flight aggregation request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }

    /// Accepts a completed response only when it is the latest issued and
    /// has not been applied yet. Everything else is discarded.
    pub fn accept<T>(&mut self, seq: u64, value: T) -> Option<T> {
        if seq == self.issued && seq > self.applied {
            self.applied = seq;
            Some(value)
        } else {
            None
        }
    }
}
