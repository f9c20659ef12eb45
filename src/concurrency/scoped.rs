//! Scoped-thread execution of partitioned passes (std-only, minimal overhead).
//!
//! One pass = one [`Partition`] of the item range. In [`ExecutionMode::Threads`]
//! each worker range gets a fresh `std::thread::scope` thread; all of them are
//! joined before the remainder range runs on the calling thread. Threads are
//! not kept between passes, so each pass pays the spawn/join cost once.
//!
//! Borrowed data (the graph, the output slice) never needs `Arc`: scoped
//! threads cannot outlive the call.

use core::ops::Range;

use super::Partition;

/// How the ranges of a pass are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One OS thread per worker range, remainder on the caller.
    #[default]
    Threads,
    /// Every range in order on the caller. Produces the same results as
    /// `Threads`; used for debugging.
    Sequential,
    /// The same ranges on the global rayon pool, reused across passes.
    #[cfg(feature = "parallel")]
    Pool,
}

/// Runs partitioned passes with a fixed worker count.
///
/// The worker count does not depend on the input size: a pass over 10 items
/// and a pass over 10⁸ items are both cut into `workers` ranges plus a
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executor {
    workers: usize,
    mode: ExecutionMode,
}

impl Default for Executor {
    fn default() -> Self {
        Self::detect()
    }
}

impl Executor {
    /// Worker count used when the platform reports no parallelism hint.
    pub const FALLBACK_WORKERS: usize = 8;

    /// Uses the detected hardware parallelism (or [`FALLBACK_WORKERS`](Self::FALLBACK_WORKERS)).
    pub fn detect() -> Self {
        let workers = std::thread::available_parallelism()
            .map_or(Self::FALLBACK_WORKERS, std::num::NonZeroUsize::get);
        Self::new(workers, ExecutionMode::Threads)
    }

    /// Creates an executor with an explicit worker count.
    ///
    /// # Panics
    ///
    /// Panics if `workers == 0`.
    pub fn new(workers: usize, mode: ExecutionMode) -> Self {
        assert!(workers != 0, "workers must be > 0");
        Self { workers, mode }
    }

    /// Same worker count, different mode.
    #[must_use]
    pub fn with_mode(self, mode: ExecutionMode) -> Self {
        Self { mode, ..self }
    }

    /// Number of worker ranges per pass.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Execution mode.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// The partition this executor applies to `len` items.
    #[inline]
    pub fn partition(&self, len: usize) -> Partition {
        Partition::new(len, self.workers)
    }

    /// Calls `work` once per range of the partition of `[0, len)`.
    ///
    /// Returns after every range has completed.
    pub fn for_each_range<F>(&self, len: usize, work: F)
    where
        F: Fn(Range<usize>) + Sync,
    {
        let units: Vec<Range<usize>> = self.partition(len).ranges().collect();
        self.run(units, work);
    }

    /// Fills `out[i]` by calling `work(i, &mut out[i])` for every index.
    ///
    /// Each range owns a disjoint `&mut` chunk of `out`, so writes need no
    /// synchronization and land at their index regardless of which worker
    /// finishes first.
    pub fn fill<T, F>(&self, out: &mut [T], work: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        let units = self.partition(out.len()).split_mut(out);
        self.run(units, |(range, chunk)| {
            for (index, slot) in range.zip(chunk.iter_mut()) {
                work(index, slot);
            }
        });
    }

    /// Runs `units` (worker units followed by the remainder unit).
    fn run<U, F>(&self, mut units: Vec<U>, work: F)
    where
        U: Send,
        F: Fn(U) + Sync,
    {
        match self.mode {
            ExecutionMode::Sequential => units.into_iter().for_each(work),
            ExecutionMode::Threads => {
                let Some(remainder) = units.pop() else {
                    return;
                };
                let work = &work;
                let outcomes: Vec<_> = std::thread::scope(|scope| {
                    let handles: Vec<_> = units
                        .into_iter()
                        .map(|unit| scope.spawn(move || work(unit)))
                        .collect();
                    handles.into_iter().map(|h| h.join()).collect()
                });
                // Every worker is joined at this point; surface the first panic.
                for outcome in outcomes {
                    if let Err(payload) = outcome {
                        std::panic::resume_unwind(payload);
                    }
                }
                work(remainder);
            }
            #[cfg(feature = "parallel")]
            ExecutionMode::Pool => {
                use rayon::prelude::*;
                let work = &work;
                units.into_par_iter().for_each(|unit| work(unit));
            }
        }
    }
}
