//! Byteregion: reference-counted off-heap byte regions with zero-copy slicing.
//!
//! # Overview
//!
//! A [`ByteRegion`] is a handle onto a contiguous byte allocation held
//! outside any host-managed heap. A *root* region owns the allocation; a
//! *slice* narrows the visible window of an existing region without copying
//! a single byte. Every handle shares ownership of the backing allocation,
//! which is released only when the last handle (root or slice, in any
//! order) is dropped.
//!
//! On top of raw byte access, regions support encoding-aware operations:
//! ASCII and UTF-8 reads, truncating text writes that never split a
//! multi-byte code point, and fixed-format network-order numeric reads.
//!
//! # Core Guarantees
//!
//! - **Zero-copy slicing**: a slice aliases its root's bytes; mutation
//!   through any handle is visible to every overlapping handle
//! - **Lifetime**: dropping the root never invalidates live slices; the
//!   allocation outlives the longest-lived handle
//! - **Fail fast on bounds**: direct index and range arguments are checked
//!   and surfaced as [`RangeError`], never silently clamped
//! - **Best effort on truncating writes**: `ascii_write`, `utf8_write`, and
//!   `copy_into` clamp to available space and report the count actually
//!   processed
//!
//! # Module Structure
//!
//! - [`region`]: the [`ByteRegion`] handle, slicing, byte access, copying,
//!   text interpretation, and unpacking
//! - [`error`]: [`AllocError`] and [`RangeError`]
//! - [`config`]: [`RegionConfig`] allocation limits
//!
//! # Examples
//!
//! ```
//! use byteregion::ByteRegion;
//!
//! let region = ByteRegion::allocate(10).unwrap();
//! region.fill(0, 0, 10).unwrap();
//! region.set_byte_at(3, b'A').unwrap();
//!
//! // A slice is a window, not a copy.
//! let view = region.slice(3, 4).unwrap();
//! assert_eq!(view.ascii_slice(0, 1).unwrap(), "A");
//!
//! // The allocation lives as long as any handle does.
//! drop(region);
//! assert_eq!(view.byte_at(0).unwrap(), b'A');
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_inception)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod error;
pub mod region;

pub use config::RegionConfig;
pub use error::{AllocError, RangeError};
pub use region::{utf8_byte_length, ByteRegion, WireFormat};
