//! Work partitioning and the shared aggregates metric passes write into.
//!
//! Important: nothing in here locks the graph. Passes only read the adjacency
//! index; the mutable state is either owned per range (output slots) or
//! updated with single atomic adds (histogram buckets, progress).

pub mod histogram;
pub mod partition;
pub mod progress;
pub mod scoped;

pub use histogram::{AtomicHistogram, CnHistogram, LocalHistogram};
pub use partition::Partition;
pub use progress::Progress;
pub use scoped::{ExecutionMode, Executor};
