//! Shared backing storage for root regions and their slices.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::RegionConfig;
use crate::error::AllocError;

/// The backing allocation behind one root region.
///
/// Exactly one `Store` exists per root; the root handle and every slice
/// derived from it hold an `Rc` to the same store. The allocation length
/// is fixed at creation and only byte contents change afterwards. The
/// store drops, and the allocation with it, when the last handle drops.
#[derive(Debug)]
pub(super) struct Store {
    bytes: RefCell<Box<[u8]>>,
    len: usize,
}

impl Store {
    /// Allocate `len` zero-initialized bytes, honoring the config limit.
    pub(super) fn allocate(len: usize, config: &RegionConfig) -> Result<Rc<Self>, AllocError> {
        if len > config.max_allocation {
            return Err(AllocError::LimitExceeded {
                requested: len,
                limit: config.max_allocation,
            });
        }
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| AllocError::Failed { requested: len })?;
        bytes.resize(len, 0);
        tracing::trace!(len, "allocated backing store");
        Ok(Rc::new(Self {
            bytes: RefCell::new(bytes.into_boxed_slice()),
            len,
        }))
    }

    /// Fixed allocation length.
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Run `f` over the raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if a mutable borrow is active (a write operation re-entered
    /// through the closure).
    pub(super) fn with<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes.borrow())
    }

    /// Run `f` over the raw bytes with write access.
    ///
    /// # Panics
    ///
    /// Panics if any other borrow is active.
    pub(super) fn with_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        f(&mut self.bytes.borrow_mut())
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        tracing::trace!(len = self.len, "released backing store");
    }
}
