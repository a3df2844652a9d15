//! The `ByteRegion` handle: allocation, slicing, byte access, and copying.

use std::fmt;
use std::rc::Rc;

use super::store::Store;
use crate::config::RegionConfig;
use crate::error::{AllocError, RangeError};

/// A handle onto a contiguous off-heap byte allocation.
///
/// A region is either a *root*, created by [`allocate`](Self::allocate) and
/// owning a fresh zero-initialized allocation, or a *slice*, created by
/// [`slice`](Self::slice) and sharing its root's allocation through a
/// narrowed window. Slicing copies no bytes; writes through any handle are
/// visible to every handle whose window overlaps the written byte.
///
/// The allocation is released when the last handle referencing it drops,
/// regardless of whether that handle is the root or a slice.
///
/// # Examples
///
/// ```
/// use byteregion::ByteRegion;
///
/// let root = ByteRegion::allocate(8).unwrap();
/// let window = root.slice(2, 6).unwrap();
///
/// // A write through the slice lands in the root's bytes.
/// window.set_byte_at(0, 0xFF).unwrap();
/// assert_eq!(root.byte_at(2).unwrap(), 0xFF);
/// ```
#[derive(Clone)]
pub struct ByteRegion {
    /// The backing store, shared with the root and all sibling slices.
    store: Rc<Store>,
    /// Start of this handle's window within the store.
    offset: usize,
    /// Number of bytes visible through this handle.
    len: usize,
    /// Whether this handle was created by allocation.
    root: bool,
}

impl ByteRegion {
    /// Allocate `len` zero-initialized bytes and return the root handle,
    /// using the default [`RegionConfig`].
    ///
    /// # Errors
    ///
    /// [`AllocError::LimitExceeded`] when `len` is over the configured
    /// limit, [`AllocError::Failed`] when the allocator refuses the
    /// request.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteregion::ByteRegion;
    ///
    /// let region = ByteRegion::allocate(4).unwrap();
    /// assert_eq!(region.len(), 4);
    /// assert!(region.is_root());
    /// assert_eq!(region.byte_at(0).unwrap(), 0);
    /// ```
    pub fn allocate(len: usize) -> Result<Self, AllocError> {
        Self::allocate_with(&RegionConfig::default(), len)
    }

    /// Allocate with an explicit config.
    pub fn allocate_with(config: &RegionConfig, len: usize) -> Result<Self, AllocError> {
        let store = Store::allocate(len, config)?;
        Ok(Self {
            store,
            offset: 0,
            len,
            root: true,
        })
    }

    /// Construct a zero-copy view of `[start, end)`.
    ///
    /// The slice shares the root's allocation; no bytes are copied. Slicing
    /// a slice attaches the new handle directly to the same store, so
    /// nested slices cost one indirection, not a chain.
    ///
    /// # Errors
    ///
    /// [`RangeError::Span`] unless `start <= end <= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteregion::ByteRegion;
    ///
    /// let root = ByteRegion::allocate(10).unwrap();
    /// let mid = root.slice(2, 8).unwrap();
    /// let inner = mid.slice(1, 3).unwrap();
    ///
    /// // `inner` views root bytes [3, 5).
    /// inner.set_byte_at(0, 7).unwrap();
    /// assert_eq!(root.byte_at(3).unwrap(), 7);
    /// assert!(!inner.is_root());
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, RangeError> {
        self.check_span(start, end)?;
        Ok(Self {
            store: Rc::clone(&self.store),
            offset: self.offset + start,
            len: end - start,
            root: false,
        })
    }

    /// Number of bytes visible through this handle.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the window is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if this handle was created by allocation rather than
    /// slicing.
    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.root
    }

    /// Number of live handles (root, slices, and clones) sharing this
    /// handle's allocation.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.store)
    }

    /// Returns true if `other` shares this handle's allocation.
    #[must_use]
    pub fn shares_allocation(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Read the byte at `index`.
    ///
    /// # Errors
    ///
    /// [`RangeError::Index`] unless `index < self.len()`.
    pub fn byte_at(&self, index: usize) -> Result<u8, RangeError> {
        self.check_index(index)?;
        Ok(self.with_bytes(|bytes| bytes[index]))
    }

    /// Write the byte at `index`.
    ///
    /// The write goes through the shared store: every handle whose window
    /// covers the byte observes it immediately.
    ///
    /// # Errors
    ///
    /// [`RangeError::Index`] unless `index < self.len()`.
    pub fn set_byte_at(&self, index: usize, value: u8) -> Result<(), RangeError> {
        self.check_index(index)?;
        self.with_bytes_mut(|bytes| bytes[index] = value);
        Ok(())
    }

    /// Set every byte in `[start, end)` to `value`.
    ///
    /// # Errors
    ///
    /// [`RangeError::Span`] unless `start <= end <= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteregion::ByteRegion;
    ///
    /// let region = ByteRegion::allocate(5).unwrap();
    /// region.fill(b'x', 1, 4).unwrap();
    /// assert_eq!(region.to_vec(), b"\0xxx\0");
    /// ```
    pub fn fill(&self, value: u8, start: usize, end: usize) -> Result<(), RangeError> {
        self.check_span(start, end)?;
        self.with_bytes_mut(|bytes| {
            for b in &mut bytes[start..end] {
                *b = value;
            }
        });
        Ok(())
    }

    /// Copy raw bytes from `self[source_start..source_end)` into `target`
    /// at `target_offset`, returning the number of bytes copied.
    ///
    /// This is the best-effort counterpart to the fail-fast accessors: the
    /// source span is clamped to the source window and to the capacity left
    /// in the target past `target_offset`. Inverted or out-of-window spans
    /// copy nothing and return 0; nothing is ever written out of bounds.
    ///
    /// The copy behaves as if staged through an intermediate buffer, so a
    /// source and target overlapping in the same allocation cannot corrupt
    /// each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteregion::ByteRegion;
    ///
    /// let src = ByteRegion::allocate(10).unwrap();
    /// src.fill(7, 0, 10).unwrap();
    ///
    /// let dst = ByteRegion::allocate(10).unwrap();
    /// // Only one byte of capacity remains past offset 9.
    /// assert_eq!(src.copy_into(&dst, 9, 0, 10), 1);
    /// assert_eq!(dst.byte_at(9).unwrap(), 7);
    /// ```
    pub fn copy_into(
        &self,
        target: &Self,
        target_offset: usize,
        source_start: usize,
        source_end: usize,
    ) -> usize {
        let source_end = source_end.min(self.len);
        if source_start >= source_end {
            return 0;
        }
        let capacity = target.len.saturating_sub(target_offset);
        let count = (source_end - source_start).min(capacity);
        if count == 0 {
            return 0;
        }

        // Staged through a scratch buffer: the source borrow must end
        // before the target borrow starts when both windows share a store.
        let staged =
            self.with_bytes(|bytes| bytes[source_start..source_start + count].to_vec());
        target.with_bytes_mut(|bytes| {
            bytes[target_offset..target_offset + count].copy_from_slice(&staged);
        });
        count
    }

    /// Copy raw bytes from `source` into `self` — the mirror of
    /// [`copy_into`](Self::copy_into), with identical clamping.
    pub fn copy_from(
        &self,
        source: &Self,
        target_offset: usize,
        source_start: usize,
        source_end: usize,
    ) -> usize {
        source.copy_into(self, target_offset, source_start, source_end)
    }

    /// Run `f` over this handle's visible bytes without copying.
    ///
    /// This is the zero-copy read surface for binding layers. The borrow
    /// lasts for the closure; `f` must not call write operations on any
    /// handle sharing the allocation.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.store
            .with(|bytes| f(&bytes[self.offset..self.offset + self.len]))
    }

    /// Copy the visible bytes out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(<[u8]>::to_vec)
    }

    /// Run `f` over this handle's visible bytes with write access.
    pub(super) fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        self.store
            .with_mut(|bytes| f(&mut bytes[self.offset..self.offset + self.len]))
    }

    /// Validate a `[start, end)` range against the window.
    pub(super) fn check_span(&self, start: usize, end: usize) -> Result<(), RangeError> {
        if start > end || end > self.len {
            return Err(RangeError::Span {
                start,
                end,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), RangeError> {
        if index >= self.len {
            return Err(RangeError::Index {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for ByteRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_bytes(|bytes| {
            f.debug_struct("ByteRegion")
                .field("len", &self.len)
                .field("root", &self.root)
                .field("handles", &self.handle_count())
                .field("data", &bytes)
                .finish()
        })
    }
}

impl PartialEq for ByteRegion {
    fn eq(&self, other: &Self) -> bool {
        self.with_bytes(|a| other.with_bytes(|b| a == b))
    }
}

impl Eq for ByteRegion {}

impl PartialEq<[u8]> for ByteRegion {
    fn eq(&self, other: &[u8]) -> bool {
        self.with_bytes(|a| a == other)
    }
}

impl PartialEq<ByteRegion> for [u8] {
    fn eq(&self, other: &ByteRegion) -> bool {
        other.with_bytes(|b| self == b)
    }
}

impl std::hash::Hash for ByteRegion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.with_bytes(|bytes| bytes.hash(state));
    }
}
