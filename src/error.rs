//! Error types for region allocation and access.
//!
//! Two kinds of failure exist: an allocation request can be refused
//! ([`AllocError`]), and a direct index or range argument can fall outside
//! a region's bounds ([`RangeError`]). Truncating operations
//! ([`copy_into`](crate::ByteRegion::copy_into),
//! [`ascii_write`](crate::ByteRegion::ascii_write),
//! [`utf8_write`](crate::ByteRegion::utf8_write)) clamp instead of failing
//! and report the count actually processed; malformed UTF-8 is substituted
//! during decode rather than surfaced as an error.

use thiserror::Error;

/// Errors from allocating a root region.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The request exceeds the configured allocation limit.
    #[error("allocation of {requested} bytes exceeds the {limit} byte limit")]
    LimitExceeded {
        /// Requested allocation size in bytes.
        requested: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The underlying allocator refused the request.
    #[error("allocation of {requested} bytes failed")]
    Failed {
        /// Requested allocation size in bytes.
        requested: usize,
    },
}

/// Errors from indexing or ranged access into a region.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A byte index or position is outside the region.
    #[error("index {index} out of bounds for region of length {len}")]
    Index {
        /// The offending index.
        index: usize,
        /// Length of the region.
        len: usize,
    },

    /// A `[start, end)` range is inverted or extends past the region.
    #[error("invalid range {start}..{end} for region of length {len}")]
    Span {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Length of the region.
        len: usize,
    },

    /// A fixed-width read extends past the end of the region.
    #[error("{width}-byte read at offset {offset} overruns region of length {len}")]
    Overrun {
        /// Width of the value in bytes.
        width: usize,
        /// Offset the read started at.
        offset: usize,
        /// Length of the region.
        len: usize,
    },
}
