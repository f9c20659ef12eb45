//! Output Writer: plain-text serialization of finished columns.
//!
//! A metric column is one value per line in edge order; a histogram is one
//! `count frequency` line per observed count, ascending. Floats use the
//! shortest round-trip `Display` form, so `2` prints as `2`, `1/3` as
//! `0.3333333333333333`, and singular values as `NaN` / `inf`. The files are
//! therefore not byte-compatible with outputs written through C++ stream
//! defaults (six significant digits, `nan`).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::concurrency::CnHistogram;
use crate::metrics::{EdgeScores, Metric};

/// Writes one value per line.
///
/// # Errors
///
/// Any error of `writer`.
pub fn write_column<W, I>(writer: &mut W, values: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = f64>,
{
    for value in values {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

/// Writes the `metric` column of a per-edge pass.
///
/// # Panics
///
/// Panics for [`Metric::LocalPath`], which is not part of [`EdgeScores`].
///
/// # Errors
///
/// Any error of `writer`.
pub fn write_edge_column<W: Write + ?Sized>(
    writer: &mut W,
    scores: &[EdgeScores],
    metric: Metric,
) -> io::Result<()> {
    assert!(metric.is_edge_metric(), "{metric} is not a per-edge score");
    write_column(writer, scores.iter().filter_map(|s| s.get(metric)))
}

/// Writes `count frequency` lines in ascending count order.
///
/// # Errors
///
/// Any error of `writer`.
pub fn write_histogram<W: Write + ?Sized>(
    writer: &mut W,
    histogram: &CnHistogram,
) -> io::Result<()> {
    for &(count, frequency) in histogram.entries() {
        writeln!(writer, "{count} {frequency}")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and hands a buffered writer to `body`.
///
/// # Errors
///
/// Any error creating, writing, or flushing the file.
pub fn write_file<F>(path: &Path, body: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    body(&mut writer)?;
    writer.flush()
}

/// Output file naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    metrics_dir: PathBuf,
    pairs_dir: PathBuf,
}

impl OutputLayout {
    /// Per-edge columns go to `metrics_dir`, pair histograms to `pairs_dir`.
    pub fn new(metrics_dir: impl Into<PathBuf>, pairs_dir: impl Into<PathBuf>) -> Self {
        Self {
            metrics_dir: metrics_dir.into(),
            pairs_dir: pairs_dir.into(),
        }
    }

    /// `<metrics_dir>/<dataset>_<metric>.txt`
    pub fn metric_path(&self, dataset: &str, metric: Metric) -> PathBuf {
        self.metrics_dir.join(format!("{dataset}_{}.txt", metric.suffix()))
    }

    /// `<pairs_dir>/<dataset>_layer<layer>.txt`
    pub fn layer_path(&self, dataset: &str, layer: u32) -> PathBuf {
        self.pairs_dir.join(format!("{dataset}_layer{layer}.txt"))
    }

    /// Creates the metrics directory if missing.
    ///
    /// # Errors
    ///
    /// Any error of [`fs::create_dir_all`].
    pub fn ensure_metrics_dir(&self) -> io::Result<&Path> {
        fs::create_dir_all(&self.metrics_dir)?;
        Ok(&self.metrics_dir)
    }

    /// Creates the pair-histogram directory if missing.
    ///
    /// # Errors
    ///
    /// Any error of [`fs::create_dir_all`].
    pub fn ensure_pairs_dir(&self) -> io::Result<&Path> {
        fs::create_dir_all(&self.pairs_dir)?;
        Ok(&self.pairs_dir)
    }
}
