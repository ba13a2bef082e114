//! The growable integer buffer.
//!
//! [`IntBuffer`] is a contiguous `Vec<i32>` kept fully materialised at its
//! current capacity. Writes beyond capacity reallocate to a size derived
//! from the triggering index; reads are bounds-checked and export is
//! copy-only.

use crate::error::BufferError;

/// A growable, index-addressable buffer of `i32`.
///
/// Backing storage is always fully materialised and zero-initialised: every
/// index in `0..capacity` is valid, and slots that were never explicitly
/// written read as zero. There is no used-length distinct from capacity —
/// [`IntBuffer::len`] and [`IntBuffer::capacity`] return the same value.
///
/// Capacity is monotonically non-decreasing: [`IntBuffer::set`] may grow the
/// buffer, nothing shrinks it.
///
/// The buffer hands out no references to its storage. The only way to
/// observe the contents without borrowing the buffer is the copying
/// [`IntBuffer::to_vec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntBuffer {
    /// Backing storage. Always at full capacity: `data.len()` IS the
    /// buffer's capacity.
    data: Vec<i32>,
}

impl IntBuffer {
    /// Capacity of a freshly constructed buffer.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Create a buffer with [`IntBuffer::DEFAULT_CAPACITY`] zeroed slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a buffer with the given capacity, all slots zero.
    ///
    /// A capacity of 0 yields a buffer with no addressable slots; the first
    /// `set` will grow it (see [`IntBuffer::set`] for the degenerate
    /// index-0 case).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
        }
    }

    /// Read the value at `index`.
    ///
    /// Returns [`BufferError::IndexOutOfBounds`] if `index` is at or beyond
    /// the current capacity. Out-of-range reads are never clamped and never
    /// return a default.
    pub fn get(&self, index: usize) -> Result<i32, BufferError> {
        self.data
            .get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfBounds {
                index,
                capacity: self.data.len(),
            })
    }

    /// Store `value` at `index`, growing the buffer if needed.
    ///
    /// In-range writes overwrite in place without reallocating. An
    /// out-of-range write grows capacity to `index * 2` — doubling of the
    /// triggering index, not of the current capacity — then writes `value`
    /// at `index`. Existing values keep their positions and new slots are
    /// zeroed.
    ///
    /// Large sparse indices allocate far more than strictly needed:
    /// `set(1_000_000, v)` on a default buffer materialises two million
    /// slots. Callers writing sparse data at large indices should size the
    /// buffer up front with [`IntBuffer::with_capacity`].
    pub fn set(&mut self, index: usize, value: i32) {
        if index >= self.data.len() {
            // Floor of index + 1 so the degenerate index-0 write on a
            // zero-capacity buffer cannot produce an empty allocation.
            // Saturation hands impossible capacities to the allocator,
            // which refuses them.
            let new_capacity = index.saturating_mul(2).max(index.saturating_add(1));
            self.data.resize(new_capacity, 0);
        }
        self.data[index] = value;
    }

    /// Test whether `value` occurs anywhere in the buffer.
    ///
    /// Scans all `capacity` slots, including slots never explicitly
    /// written — so `contains(0)` holds for any buffer with at least one
    /// untouched slot.
    pub fn contains(&self, value: i32) -> bool {
        self.data.contains(&value)
    }

    /// Copy out all `capacity` slots, in index order.
    ///
    /// The returned vector shares no storage with the buffer: mutating
    /// either side leaves the other untouched.
    pub fn to_vec(&self) -> Vec<i32> {
        self.data.clone()
    }

    /// Number of addressable slots.
    ///
    /// Identical to [`IntBuffer::capacity`]: this design tracks no
    /// used-length distinct from capacity.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has zero addressable slots.
    ///
    /// Only reachable via [`IntBuffer::with_capacity`] with capacity 0;
    /// a default-constructed buffer is never empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Total capacity in slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<i32>()
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}
