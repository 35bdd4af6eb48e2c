//! Cooperative cancellation
//!
//! The traversal polls this flag between steps; nothing is interrupted
//! mid-fetch and no control-flow exception ever crosses the loop boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation handle shared between the signal handler and the
/// orchestrator
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; observed at the next poll point
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
