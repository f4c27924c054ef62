//! Synchronization primitives.
//!
//! Provides the cooperative cancellation flag shared by perft workers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A thread-safe stop flag for cancelling a perft walk.
///
/// Clones share the same flag, so a caller can keep one and hand another to the walk.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Create a stop flag that is already set.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Request cancellation. Workers notice it between sibling moves.
    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}
