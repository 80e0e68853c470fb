//! Memoized read-all result

use super::frame::InvoiceFrame;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared slot holding the last loaded frame.
///
/// Valid until the next write through the owning ledger. Clones share the
/// same slot.
#[derive(Clone, Default)]
pub struct FrameCache {
    slot: Arc<RwLock<Option<Arc<InvoiceFrame>>>>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<InvoiceFrame>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn store(&self, frame: Arc<InvoiceFrame>) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(frame);
    }

    pub fn invalidate(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_warm(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_invalidate() {
        let cache = FrameCache::new();
        assert!(!cache.is_warm());

        cache.store(Arc::new(InvoiceFrame::default()));
        assert!(cache.is_warm());

        let shared = cache.clone();
        shared.invalidate();
        assert!(!cache.is_warm());
    }
}
