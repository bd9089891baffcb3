use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonic run counter for the upload/summarize pipeline.
///
/// Each file selection begins a new run and receives a token. A run checks
/// its token after every suspension point and drops its remaining writes
/// once a newer run has begun, so quick successive selections supersede
/// each other instead of racing over the shared output regions.
#[derive(Debug, Default)]
pub struct RunSequence(AtomicU32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u32);

impl RunSequence {
    /// Start a new run, superseding any run still in flight.
    pub fn begin(&self) -> RunToken {
        RunToken(self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// A token stays current until the next `begin`.
    pub fn is_current(&self, token: RunToken) -> bool {
        self.0.load(Ordering::Relaxed) == token.0
    }
}
