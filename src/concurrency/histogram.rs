//! Common-neighbor-count histograms.
//!
//! Workers tally into a private [`LocalHistogram`] and publish it into the
//! shared [`AtomicHistogram`] with one `fetch_add` per non-empty bucket. The
//! shared critical section is therefore a single atomic add, and hot keys
//! (0 and 1 dominate on sparse graphs) do not bounce a cache line per pair.

use core::sync::atomic::{AtomicU64, Ordering};

/// Shared frequency table keyed by common-neighbor count.
///
/// Buckets are pre-sized to `max_key + 1`: a common-neighbor count never
/// exceeds the smaller of the two degrees, so `max_key = max_degree` is enough.
#[derive(Debug)]
pub struct AtomicHistogram {
    buckets: Box<[AtomicU64]>,
}

impl AtomicHistogram {
    /// Creates a histogram accepting keys `0..=max_key`.
    pub fn new(max_key: usize) -> Self {
        Self {
            buckets: (0..=max_key).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    /// Adds one occurrence of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` exceeds the `max_key` given at construction.
    #[inline]
    pub fn increment(&self, key: usize) {
        self.add(key, 1);
    }

    /// Adds `count` occurrences of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` exceeds the `max_key` given at construction.
    #[inline]
    pub fn add(&self, key: usize, count: u64) {
        self.buckets[key].fetch_add(count, Ordering::Relaxed);
    }

    /// Publishes a worker-local tally.
    ///
    /// # Panics
    ///
    /// Panics if `local` holds a key above `max_key`.
    pub fn merge(&self, local: &LocalHistogram) {
        for (key, &count) in local.counts.iter().enumerate() {
            if count != 0 {
                self.add(key, count);
            }
        }
    }

    /// Observed keys and their counts, ascending by key.
    ///
    /// Call after the pass has joined its workers; relaxed loads are enough
    /// because the join synchronizes with every `fetch_add`.
    pub fn snapshot(&self) -> CnHistogram {
        let entries = self
            .buckets
            .iter()
            .enumerate()
            .filter_map(|(key, bucket)| {
                let count = bucket.load(Ordering::Relaxed);
                (count != 0).then_some((key, count))
            })
            .collect();
        CnHistogram { entries }
    }
}

/// Worker-private tally, grown on demand.
#[derive(Debug, Clone, Default)]
pub struct LocalHistogram {
    counts: Vec<u64>,
}

impl LocalHistogram {
    /// Creates an empty tally with room for keys `0..=max_key`.
    pub fn with_max_key(max_key: usize) -> Self {
        Self {
            counts: vec![0; max_key + 1],
        }
    }

    /// Adds one occurrence of `key`.
    #[inline]
    pub fn increment(&mut self, key: usize) {
        self.add(key, 1);
    }

    /// Adds `count` occurrences of `key`.
    #[inline]
    pub fn add(&mut self, key: usize, count: u64) {
        if key >= self.counts.len() {
            self.counts.resize(key + 1, 0);
        }
        self.counts[key] += count;
    }
}

/// Final histogram: `(common-neighbor count, number of pairs)` for every
/// observed count, ascending by count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CnHistogram {
    entries: Vec<(usize, u64)>,
}

impl CnHistogram {
    /// Builds a histogram from `(key, count)` entries; zero counts are dropped
    /// and repeated keys are summed.
    pub fn from_entries<I: IntoIterator<Item = (usize, u64)>>(entries: I) -> Self {
        let mut entries: Vec<(usize, u64)> = entries.into_iter().filter(|&(_, c)| c != 0).collect();
        entries.sort_unstable_by_key(|&(key, _)| key);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        Self { entries }
    }

    /// Entries ascending by key.
    pub fn entries(&self) -> &[(usize, u64)] {
        &self.entries
    }

    /// Number of distinct observed keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no pair was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count recorded for `key` (0 if never observed).
    pub fn get(&self, key: usize) -> u64 {
        self.entries
            .binary_search_by_key(&key, |&(k, _)| k)
            .map_or(0, |i| self.entries[i].1)
    }

    /// Sum of all counts (the number of pairs examined).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }
}
