//! Error types.
//!
//! Every error here is fatal to a run: the tool is a single-pass batch job and a
//! malformed input or unknown dataset invalidates the whole computation. Numerical
//! singularities (division by zero, `ln(1)`) are *not* errors; they travel through
//! the score columns as IEEE special values.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading an edge list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("failed to read edge list {path}: {source}")]
    Io {
        /// Path of the edge list (or `<reader>` for in-memory sources).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A token was not a non-negative integer.
    #[error("line {line}: expected a non-negative integer, found {token:?}")]
    Parse {
        /// 1-based line number of the offending token.
        line: usize,
        /// The token as read.
        token: String,
    },

    /// The source ended before the declared header or edge count was read.
    #[error("edge list truncated: expected {expected} edges, read {read}")]
    Truncated {
        /// Declared edge count.
        expected: usize,
        /// Complete pairs read before end of input.
        read: usize,
    },

    /// The file header is missing (layered inputs start with `n m`).
    #[error("edge list header missing: expected `<nodes> <edges>`")]
    MissingHeader,

    /// An endpoint is not a valid node id.
    #[error("edge {position} ({u}, {v}) references a node outside [0, {nodes})")]
    NodeOutOfRange {
        /// Position of the edge in input order.
        position: usize,
        /// First endpoint.
        u: u64,
        /// Second endpoint.
        v: u64,
        /// Declared node count.
        nodes: usize,
    },

    /// The declared node count does not fit the node id type.
    #[error("{nodes} nodes exceed the supported maximum of {max}")]
    TooManyNodes {
        /// Declared node count.
        nodes: usize,
        /// Largest supported node count.
        max: usize,
    },
}

/// Failure while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The dataset selector is not in the registry.
    #[error("unknown dataset {0:?}")]
    UnknownDataset(String),

    /// A registry file could not be read.
    #[error("failed to read registry {path}: {source}")]
    Io {
        /// Registry path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A registry file is not valid JSON for the expected schema.
    #[error("invalid registry {path}: {source}")]
    Json {
        /// Registry path.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Two registry entries share the same selector token.
    #[error("dataset token {0:?} is defined more than once")]
    DuplicateToken(String),
}

/// Failure while wiring metric passes together.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A precomputed column does not align with the edge list.
    #[error("column {metric} has {actual} values but the graph has {expected} edges")]
    ColumnLength {
        /// Metric suffix of the column.
        metric: &'static str,
        /// Edge count of the graph.
        expected: usize,
        /// Length of the supplied column.
        actual: usize,
    },
}

/// Any library error.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`LoadError`].
    #[error(transparent)]
    Load(#[from] LoadError),
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`MetricsError`].
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Library result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
