//! Contiguous chunking of an index range.

use core::ops::Range;

/// Splits `[0, len)` into `workers` ranges of `len / workers` items followed by
/// one remainder range of `len % workers` items.
///
/// The ranges are disjoint, ascending, and their union is exactly `[0, len)`.
/// There are always `workers + 1` ranges; trailing ones may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    len: usize,
    workers: usize,
    batch: usize,
}

impl Partition {
    /// Creates the partition.
    ///
    /// # Panics
    ///
    /// Panics if `workers == 0`.
    pub fn new(len: usize, workers: usize) -> Self {
        assert!(workers != 0, "workers must be > 0");
        Self {
            len,
            workers,
            batch: len / workers,
        }
    }

    /// Total item count.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there is nothing to process.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of equal-sized worker ranges.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Length of each worker range.
    #[inline]
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Length of the final range.
    #[inline]
    pub fn remainder(&self) -> usize {
        self.len - self.batch * self.workers
    }

    /// The worker ranges, then the remainder range.
    pub fn ranges(&self) -> impl ExactSizeIterator<Item = Range<usize>> {
        let Self { len, workers, batch } = *self;
        (0..workers + 1).map(move |i| {
            let start = i * batch;
            let end = if i == workers { len } else { start + batch };
            start..end
        })
    }

    /// Splits `slice` (of length `len()`) into `&mut` chunks aligned with
    /// [`ranges`](Self::ranges).
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() != len()`.
    pub fn split_mut<'a, T>(&self, slice: &'a mut [T]) -> Vec<(Range<usize>, &'a mut [T])> {
        assert_eq!(slice.len(), self.len, "slice length must match the partition");
        let mut rest = slice;
        let mut chunks = Vec::with_capacity(self.workers + 1);
        for range in self.ranges() {
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(range.len());
            chunks.push((range, head));
            rest = tail;
        }
        chunks
    }
}
