//! Growable, index-addressable integer storage with manual capacity
//! management.
//!
//! The crate provides one container, [`IntBuffer`]: a contiguous,
//! zero-initialised block of `i32` whose capacity grows on demand as larger
//! indices are written. There is no separate used-length — every slot within
//! capacity is addressable and defaults to zero, and capacity never shrinks.
//!
//! # Design
//!
//! - **Growth is driven by the written index.** An out-of-capacity
//!   `set(index, value)` reallocates to `index * 2` slots (with a floor of
//!   `index + 1` for the degenerate zero case), not to double the current
//!   capacity. See [`IntBuffer::set`].
//! - **Reads are checked.** [`IntBuffer::get`] returns
//!   [`BufferError::IndexOutOfBounds`] for indices at or beyond capacity;
//!   it never clamps and never silently returns a default.
//! - **Export is copy-only.** The buffer hands out no references to its
//!   backing storage; [`IntBuffer::to_vec`] is the sole way to observe the
//!   contents without borrowing the buffer, and the copy is independent.
//!
//! # Concurrency
//!
//! Single-threaded, single-owner. The buffer has no internal
//! synchronisation; callers sharing one across threads must wrap it in
//! external exclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;

// Public re-exports for the primary API surface.
pub use buffer::IntBuffer;
pub use error::BufferError;
