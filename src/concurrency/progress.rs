//! Per-pass completion counter.

use core::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crossbeam_utils::CachePadded;
use tracing::{debug, info};

/// Monotonic item counter for one pass, reported through `tracing`.
///
/// Purely informational: it is updated with relaxed atomics, never read by
/// the computation, and can be disabled without changing any output. One
/// `Progress` belongs to one pass; nothing here is process-global.
#[derive(Debug)]
pub struct Progress {
    label: &'static str,
    total: u64,
    stride: u64,
    enabled: bool,
    started: Instant,
    done: CachePadded<AtomicU64>,
}

impl Progress {
    /// Number of debug events emitted over a whole pass.
    const REPORTS: u64 = 100;

    /// Creates an enabled counter for `total` items.
    pub fn new(label: &'static str, total: u64) -> Self {
        Self {
            label,
            total,
            stride: (total / Self::REPORTS).max(1),
            enabled: true,
            started: Instant::now(),
            done: CachePadded::new(AtomicU64::new(0)),
        }
    }

    /// Creates a counter that counts but never reports.
    pub fn silent(label: &'static str, total: u64) -> Self {
        Self {
            enabled: false,
            ..Self::new(label, total)
        }
    }

    /// Records `n` completed items.
    #[inline]
    pub fn add(&self, n: u64) {
        let before = self.done.fetch_add(n, Ordering::Relaxed);
        let after = before + n;
        if self.enabled && before / self.stride != after / self.stride {
            debug!(pass = self.label, done = after, total = self.total, "progress");
        }
    }

    /// Records one completed item.
    #[inline]
    pub fn tick(&self) {
        self.add(1);
    }

    /// Items recorded so far.
    pub fn done(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    /// Logs the completion of the pass.
    pub fn finish(&self) {
        if self.enabled {
            info!(
                pass = self.label,
                items = self.done(),
                elapsed = ?self.started.elapsed(),
                "pass complete"
            );
        }
    }
}
