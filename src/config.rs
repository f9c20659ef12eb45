//! Dataset registry and on-disk path layout.
//!
//! The metric passes never see this module: they take a [`Graph`](crate::Graph)
//! directly. The binary uses it to turn a selector token such as `FL` into an
//! input path plus a `(nodes, edges)` size hint.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::output::OutputLayout;

/// One known dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetSpec {
    /// Selector token given on the command line.
    pub token: String,
    /// Canonical name; the stem of every input and output file.
    pub name: String,
    /// Node count `n`.
    pub nodes: usize,
    /// Edge count `m` of the flat edge list.
    pub edges: usize,
}

impl DatasetSpec {
    /// Creates an entry.
    pub fn new(
        token: impl Into<String>,
        name: impl Into<String>,
        nodes: usize,
        edges: usize,
    ) -> Self {
        Self {
            token: token.into(),
            name: name.into(),
            nodes,
            edges,
        }
    }
}

/// Token → dataset lookup.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    entries: Vec<DatasetSpec>,
    by_token: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct RegistryFile {
    datasets: Vec<DatasetSpec>,
}

impl DatasetRegistry {
    /// Builds a registry, rejecting repeated tokens.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateToken`] on the first repeated token.
    pub fn new(entries: Vec<DatasetSpec>) -> Result<Self, ConfigError> {
        let mut by_token = HashMap::with_capacity(entries.len());
        for (index, spec) in entries.iter().enumerate() {
            if by_token.insert(spec.token.clone(), index).is_some() {
                return Err(ConfigError::DuplicateToken(spec.token.clone()));
            }
        }
        Ok(Self { entries, by_token })
    }

    /// The datasets the tool ships with.
    pub fn builtin() -> Self {
        let entries = vec![
            DatasetSpec::new("OF", "OF", 987, 71_380),
            DatasetSpec::new("FL", "openflights", 2_905, 15_645),
            DatasetSpec::new("th-UB", "threads-ask-ubuntu-proj-graph", 82_075, 182_648),
            DatasetSpec::new("th-MA", "threads-math-sx-proj-graph", 152_702, 1_088_735),
            DatasetSpec::new("th-SO", "threads-stack-overflow-proj-graph", 2_301_070, 20_989_078),
            DatasetSpec::new("sx-UB", "sx-askubuntu", 152_599, 453_221),
            DatasetSpec::new("sx-MA", "sx-mathoverflow", 24_668, 187_939),
            DatasetSpec::new("sx-SO", "sx-stackoverflow", 2_572_345, 28_177_464),
            DatasetSpec::new("sx-SU", "sx-superuser", 189_191, 712_870),
            DatasetSpec::new("co-DB", "coauth-DBLP-proj-graph", 1_654_109, 7_713_116),
            DatasetSpec::new("co-GE", "coauth-MAG-Geology-proj-graph", 898_648, 4_891_112),
        ];
        let by_token = entries
            .iter()
            .enumerate()
            .map(|(index, spec)| (spec.token.clone(), index))
            .collect();
        Self { entries, by_token }
    }

    /// Parses `{"datasets": [{"token": .., "name": .., "nodes": .., "edges": ..}, ..]}`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] on malformed input (reported against `origin`),
    /// [`ConfigError::DuplicateToken`] on repeated tokens.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let file: RegistryFile = serde_json::from_str(json).map_err(|source| ConfigError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        Self::new(file.datasets)
    }

    /// Reads a registry file (see [`from_json_str`](Self::from_json_str)).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    /// Looks up a selector token (case-sensitive).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownDataset`] if no entry has this token.
    pub fn resolve(&self, token: &str) -> Result<&DatasetSpec, ConfigError> {
        self.by_token
            .get(token)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| ConfigError::UnknownDataset(token.to_owned()))
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DatasetSpec> + '_ {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory layout under a data root; every field but `data_dir` is relative
/// to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathLayout {
    /// Root of all inputs and outputs.
    pub data_dir: PathBuf,
    /// Flat edge lists: `<edge_dir>/<name>.edge_txt`.
    pub edge_dir: PathBuf,
    /// Layered edge lists: `<layer_dir>/<name>_layer<i>.edge_txt`.
    pub layer_dir: PathBuf,
    /// Per-edge metric columns.
    pub metrics_dir: PathBuf,
    /// Pair histograms.
    pub pairs_dir: PathBuf,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            edge_dir: PathBuf::from("edge_txt"),
            layer_dir: PathBuf::from("edge_txt_layers"),
            metrics_dir: PathBuf::from("metrics"),
            pairs_dir: PathBuf::from("cn_pair_counts"),
        }
    }
}

impl PathLayout {
    /// Default layout rooted at `data_dir`.
    pub fn rooted(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Flat edge list of `dataset`.
    pub fn edge_list(&self, dataset: &DatasetSpec) -> PathBuf {
        self.data_dir
            .join(&self.edge_dir)
            .join(format!("{}.edge_txt", dataset.name))
    }

    /// Edge list of one layer of `dataset`.
    pub fn layer_edge_list(&self, dataset: &DatasetSpec, layer: u32) -> PathBuf {
        self.data_dir
            .join(&self.layer_dir)
            .join(format!("{}_layer{layer}.edge_txt", dataset.name))
    }

    /// Output naming for this layout.
    pub fn outputs(&self) -> OutputLayout {
        OutputLayout::new(
            self.data_dir.join(&self.metrics_dir),
            self.data_dir.join(&self.pairs_dir),
        )
    }
}
