//! Plain-text edge-list reader.
//!
//! The format is a stream of whitespace-separated non-negative integers: an
//! optional `nodes edges` header followed by `edges` endpoint pairs. Line breaks
//! carry no meaning; a pair may straddle two lines. Anything after the last
//! declared pair is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use super::{EdgeList, Graph, NodeId};
use crate::error::LoadError;

/// Upper bound on rows reserved up front; a declared count only sizes the
/// first allocation and the list grows as pairs are actually read.
const MAX_RESERVE: usize = 1 << 20;

/// Where the node and edge counts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Counts are supplied by the caller; the source holds only the pairs.
    Declared {
        /// Node count `n`.
        nodes: usize,
        /// Edge count `m`.
        edges: usize,
    },
    /// The source starts with `n m`, which is authoritative. The optional hint
    /// `(nodes, edges)` is an upper bound that only sizes allocations; a
    /// header above it is logged.
    InFile {
        /// Expected `(nodes, edges)`, if known.
        hint: Option<(usize, usize)>,
    },
}

/// Reads the edge list at `path` and builds the graph.
///
/// # Errors
///
/// Any [`LoadError`]; none of them leave a partial graph behind.
pub fn load_graph(path: impl AsRef<Path>, header: Header) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(BufReader::new(file), header, path)
}

/// Reads an edge list from any buffered reader.
///
/// # Errors
///
/// Any [`LoadError`]; I/O errors report the path as `<reader>`.
pub fn read_graph<R: BufRead>(reader: R, header: Header) -> Result<Graph, LoadError> {
    read_from(reader, header, Path::new("<reader>"))
}

fn read_from<R: BufRead>(reader: R, header: Header, origin: &Path) -> Result<Graph, LoadError> {
    let start = Instant::now();
    let mut tokens = Tokens::new(reader, origin);

    let (nodes, edges, reserve) = match header {
        Header::Declared { nodes, edges } => (nodes, edges, edges),
        Header::InFile { hint } => {
            let nodes = tokens.next_count()?.ok_or(LoadError::MissingHeader)?;
            let edges = tokens.next_count()?.ok_or(LoadError::MissingHeader)?;
            let reserve = match hint {
                Some((hint_nodes, hint_edges)) => {
                    if nodes > hint_nodes || edges > hint_edges {
                        warn!(
                            path = %origin.display(),
                            nodes, edges, hint_nodes, hint_edges,
                            "edge list header exceeds the expected size; using the header"
                        );
                    }
                    hint_edges.min(edges)
                }
                None => edges,
            };
            (nodes, edges, reserve)
        }
    };

    let max = NodeId::MAX as usize + 1;
    if nodes > max {
        return Err(LoadError::TooManyNodes { nodes, max });
    }

    let mut list = EdgeList::with_capacity(reserve.min(MAX_RESERVE));
    for position in 0..edges {
        let truncated = || LoadError::Truncated {
            expected: edges,
            read: position,
        };
        let u = tokens.next_u64()?.ok_or_else(truncated)?;
        let v = tokens.next_u64()?.ok_or_else(truncated)?;
        if u >= nodes as u64 || v >= nodes as u64 {
            return Err(LoadError::NodeOutOfRange {
                position,
                u,
                v,
                nodes,
            });
        }
        // both endpoints are < nodes <= NodeId::MAX + 1
        list.push(u as NodeId, v as NodeId);
    }

    let graph = Graph::new(nodes, list);
    info!(
        path = %origin.display(),
        nodes,
        edges,
        entries = graph.adjacency().entry_count(),
        elapsed = ?start.elapsed(),
        "edge list loaded"
    );
    Ok(graph)
}

/// Whitespace tokenizer over a line-buffered reader.
struct Tokens<'p, R> {
    reader: R,
    origin: &'p Path,
    line: String,
    pos: usize,
    line_no: usize,
}

impl<'p, R: BufRead> Tokens<'p, R> {
    fn new(reader: R, origin: &'p Path) -> Self {
        Self {
            reader,
            origin,
            line: String::new(),
            pos: 0,
            line_no: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, usize)>, LoadError> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(offset) = rest.find(|c: char| !c.is_ascii_whitespace()) {
                let begin = self.pos + offset;
                let len = self.line[begin..]
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(self.line.len() - begin);
                self.pos = begin + len;
                return Ok(Some((begin, begin + len)));
            }

            self.line.clear();
            self.pos = 0;
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|source| LoadError::Io {
                    path: PathBuf::from(self.origin),
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;
        }
    }

    fn next_u64(&mut self) -> Result<Option<u64>, LoadError> {
        let Some((begin, end)) = self.next_token()? else {
            return Ok(None);
        };
        let token = &self.line[begin..end];
        token.parse().map(Some).map_err(|_| LoadError::Parse {
            line: self.line_no,
            token: token.to_owned(),
        })
    }

    fn next_count(&mut self) -> Result<Option<usize>, LoadError> {
        match self.next_u64()? {
            None => Ok(None),
            Some(value) => usize::try_from(value).map(Some).map_err(|_| LoadError::Parse {
                line: self.line_no,
                token: value.to_string(),
            }),
        }
    }
}
