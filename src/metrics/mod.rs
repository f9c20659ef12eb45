//! Neighborhood-based similarity and link-prediction metrics.
//!
//! Every evaluator looks at two sorted neighbor sets `N(u)`, `N(v)`, computes
//! their intersection `C` once and derives its scores from `|C|`, the degrees
//! `du = |N(u)|`, `dv = |N(v)|`, and for some metrics the degrees of the members
//! of `C` or the rows of other nodes.
//!
//! | Metric | Formula |
//! |--------|---------|
//! | CN | `\|C\|` |
//! | SA | `CN / sqrt(du·dv)` |
//! | JC | `CN / (du + dv − CN)` |
//! | HP | `CN / min(du, dv)` |
//! | HD | `CN / max(du, dv)` |
//! | SI | `CN / (du + dv)` |
//! | LI | `CN / (du·dv)` |
//! | AA | `Σ_{x∈C} 1 / ln(deg x)` |
//! | RA | `Σ_{x∈C} 1 / deg x` |
//! | PA | `du·dv` |
//! | FM | `#{(x, y) ∈ N(u)×N(v) : x = y ∨ y ∈ N(x)}` |
//! | DL | `du + dv − 2` |
//! | LP | `1 + CN + ε·#{(x, y) ∈ N(u)×N(v) : x ≠ y ∧ y ∈ N(x)}`, `ε = 0.001` |
//!
//! ## Singular values
//!
//! The formulas are applied verbatim. A degree-zero endpoint makes the ratio
//! metrics `0/0 = NaN`; a common neighbor of degree 1 (only possible on a
//! self-loop row) contributes `1/ln(1) = +inf` to AA. These IEEE values are
//! results, not errors, and are written out as such.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

pub mod edge;
pub mod engine;
pub mod local_path;
pub mod pairwise;

pub use crate::concurrency::CnHistogram;
pub use edge::score_edge;
pub use engine::MetricsEngine;
pub use local_path::{local_path_score, LOCAL_PATH_EPSILON};

/// A named metric; its [`suffix`](Metric::suffix) names the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// CN
    CommonNeighbors,
    /// SA
    Salton,
    /// JC
    Jaccard,
    /// HP
    HubPromoted,
    /// HD
    HubDepressed,
    /// SI
    Sorensen,
    /// LI
    LeichtHolmeNewman,
    /// AA
    AdamicAdar,
    /// RA
    ResourceAllocation,
    /// PA
    PreferentialAttachment,
    /// FM
    FriendsMeasure,
    /// DL
    Distance,
    /// LP (separate pass)
    LocalPath,
}

impl Metric {
    /// The metrics of one per-edge pass, in output order.
    pub const EDGE: [Metric; 12] = [
        Metric::CommonNeighbors,
        Metric::Salton,
        Metric::Jaccard,
        Metric::HubPromoted,
        Metric::HubDepressed,
        Metric::Sorensen,
        Metric::LeichtHolmeNewman,
        Metric::AdamicAdar,
        Metric::ResourceAllocation,
        Metric::PreferentialAttachment,
        Metric::FriendsMeasure,
        Metric::Distance,
    ];

    /// Every metric, LP last.
    pub const ALL: [Metric; 13] = [
        Metric::CommonNeighbors,
        Metric::Salton,
        Metric::Jaccard,
        Metric::HubPromoted,
        Metric::HubDepressed,
        Metric::Sorensen,
        Metric::LeichtHolmeNewman,
        Metric::AdamicAdar,
        Metric::ResourceAllocation,
        Metric::PreferentialAttachment,
        Metric::FriendsMeasure,
        Metric::Distance,
        Metric::LocalPath,
    ];

    /// Lowercase two-letter code used in file names.
    pub fn suffix(self) -> &'static str {
        match self {
            Metric::CommonNeighbors => "cn",
            Metric::Salton => "sa",
            Metric::Jaccard => "jc",
            Metric::HubPromoted => "hp",
            Metric::HubDepressed => "hd",
            Metric::Sorensen => "si",
            Metric::LeichtHolmeNewman => "li",
            Metric::AdamicAdar => "aa",
            Metric::ResourceAllocation => "ra",
            Metric::PreferentialAttachment => "pa",
            Metric::FriendsMeasure => "fm",
            Metric::Distance => "dl",
            Metric::LocalPath => "lp",
        }
    }

    /// `true` for the metrics computed by the per-edge pass.
    pub fn is_edge_metric(self) -> bool {
        self != Metric::LocalPath
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A metric code that is not one of [`Metric::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric {0:?} (expected one of cn sa jc hp hd si li aa ra pa fm dl lp)")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.suffix() == lower)
            .ok_or_else(|| UnknownMetric(s.to_owned()))
    }
}

/// All per-edge scores of one edge row.
///
/// Values follow the formulas in the [module docs](self) exactly, including
/// `NaN` / `inf` where a formula divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeScores {
    /// Common Neighbors.
    pub cn: f64,
    /// Salton.
    pub sa: f64,
    /// Jaccard.
    pub jc: f64,
    /// Hub Promoted.
    pub hp: f64,
    /// Hub Depressed.
    pub hd: f64,
    /// Sorensen.
    pub si: f64,
    /// Leicht-Holme-Newman.
    pub li: f64,
    /// Adamic-Adar.
    pub aa: f64,
    /// Resource Allocation.
    pub ra: f64,
    /// Preferential Attachment.
    pub pa: f64,
    /// Friends-Measure.
    pub fm: f64,
    /// Distance.
    pub dl: f64,
}

impl EdgeScores {
    /// Score for `metric`, or `None` for [`Metric::LocalPath`] (not part of
    /// this record).
    pub fn get(&self, metric: Metric) -> Option<f64> {
        Some(match metric {
            Metric::CommonNeighbors => self.cn,
            Metric::Salton => self.sa,
            Metric::Jaccard => self.jc,
            Metric::HubPromoted => self.hp,
            Metric::HubDepressed => self.hd,
            Metric::Sorensen => self.si,
            Metric::LeichtHolmeNewman => self.li,
            Metric::AdamicAdar => self.aa,
            Metric::ResourceAllocation => self.ra,
            Metric::PreferentialAttachment => self.pa,
            Metric::FriendsMeasure => self.fm,
            Metric::Distance => self.dl,
            Metric::LocalPath => return None,
        })
    }
}
