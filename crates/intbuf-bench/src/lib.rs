//! Benchmark workload builders for the `intbuf` buffer.
//!
//! Provides pre-built buffers for benchmarking:
//!
//! - [`dense_buffer`]: every slot written with a non-zero value
//! - [`grown_buffer`]: a default buffer grown once by a single sparse write

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use intbuf::IntBuffer;

/// Build a buffer of `capacity` slots with every slot written non-zero.
///
/// Useful for worst-case membership scans: `contains` on a value that is
/// absent must visit every slot.
pub fn dense_buffer(capacity: usize) -> IntBuffer {
    let mut buf = IntBuffer::with_capacity(capacity);
    for i in 0..capacity {
        buf.set(i, i as i32 + 1);
    }
    buf
}

/// Build a default buffer grown by one write at `index`.
///
/// The resulting capacity is `index * 2`, matching the index-doubling
/// growth rule.
pub fn grown_buffer(index: usize) -> IntBuffer {
    let mut buf = IntBuffer::new();
    buf.set(index, 1);
    buf
}
