//! Identifiers for parsed code-model instances.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_MODEL_ID: AtomicU32 = AtomicU32::new(0);

/// A process-unique identifier for one parsed code model.
///
/// Every parse produces a fresh model, and every fresh model gets a fresh
/// `ModelId`. Anything cached per model (the completion candidate list) is
/// keyed by this handle, so a reparse never sees a stale entry:
/// - Comparisons are O(1)
/// - Cheap to copy and hash
/// - Never reused within a process
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ModelId(u32);

impl ModelId {
    /// Allocate the next unused id.
    pub fn fresh() -> Self {
        Self(NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelId({})", self.0)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model#{}", self.0)
    }
}
