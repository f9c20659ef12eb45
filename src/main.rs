use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use proximity::metrics::Metric;
use proximity::output;
use proximity::{
    load_graph, DatasetRegistry, DatasetSpec, ExecutionMode, Executor, Header, MetricsEngine,
    PathLayout,
};

#[cfg(feature = "alloc-mimalloc")]
use mimalloc::MiMalloc;

#[cfg(feature = "alloc-mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(all(feature = "alloc-jemalloc", not(feature = "alloc-mimalloc")))]
use jemallocator::Jemalloc;

#[cfg(all(feature = "alloc-jemalloc", not(feature = "alloc-mimalloc")))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Parser)]
#[command(name = "proximity")]
#[command(about = "Neighborhood similarity metrics over large static graphs", long_about = None)]
struct Cli {
    /// Root directory of inputs and outputs
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// JSON dataset registry replacing the built-in table
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Worker count (defaults to the detected hardware parallelism)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Run every range on the calling thread
    #[arg(long, global = true, default_value_t = false)]
    sequential: bool,

    /// Run ranges on a reused rayon pool instead of fresh threads
    #[cfg(feature = "parallel")]
    #[arg(long, global = true, default_value_t = false)]
    pool: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-edge scores of a dataset, one file per metric
    Metrics {
        /// Dataset selector (e.g. FL, sx-UB)
        dataset: String,

        /// Also run the local-path pass
        #[arg(long, default_value_t = false)]
        local_path: bool,

        /// Only write these metrics (suffixes such as cn, jc, lp); repeatable
        #[arg(long = "metric", value_name = "METRIC")]
        metrics: Vec<Metric>,
    },
    /// Local-path index of a dataset
    LocalPath {
        /// Dataset selector
        dataset: String,
    },
    /// Common-neighbor histogram over all node pairs of one layer
    CnPairs {
        /// Dataset selector
        dataset: String,

        /// Layer index of the pre-partitioned input
        layer: u32,
    },
    /// List the known datasets
    Datasets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let registry = match &cli.registry {
        Some(path) => DatasetRegistry::from_json_file(path)?,
        None => DatasetRegistry::builtin(),
    };
    let layout = PathLayout::rooted(&cli.data_dir);
    let engine = MetricsEngine::new(executor(&cli));

    match &cli.command {
        Commands::Metrics {
            dataset,
            local_path,
            metrics,
        } => {
            let spec = registry.resolve(dataset)?;
            let selected = select(metrics, *local_path);
            run_metrics(&engine, &layout, spec, &selected)?;
        }
        Commands::LocalPath { dataset } => {
            let spec = registry.resolve(dataset)?;
            run_metrics(&engine, &layout, spec, &[Metric::LocalPath])?;
        }
        Commands::CnPairs { dataset, layer } => {
            let spec = registry.resolve(dataset)?;
            run_cn_pairs(&engine, &layout, spec, *layer)?;
        }
        Commands::Datasets => {
            for spec in registry.iter() {
                println!(
                    "{:<8} {:<36} n={:<10} m={}",
                    spec.token, spec.name, spec.nodes, spec.edges
                );
            }
        }
    }

    Ok(())
}

fn executor(cli: &Cli) -> Executor {
    let mut exec = Executor::detect();
    if let Some(threads) = cli.threads {
        exec = Executor::new(threads.max(1), exec.mode());
    }
    #[cfg(feature = "parallel")]
    if cli.pool {
        exec = exec.with_mode(ExecutionMode::Pool);
    }
    // debugging mode wins over any parallel mode
    if cli.sequential {
        exec = exec.with_mode(ExecutionMode::Sequential);
    }
    exec
}

/// Metrics to write: the explicit list, or every per-edge metric (plus LP).
fn select(requested: &[Metric], local_path: bool) -> Vec<Metric> {
    let mut selected = if requested.is_empty() {
        Metric::EDGE.to_vec()
    } else {
        requested.to_vec()
    };
    if local_path {
        selected.push(Metric::LocalPath);
    }
    selected.sort_unstable();
    selected.dedup();
    selected
}

fn run_metrics(
    engine: &MetricsEngine,
    layout: &PathLayout,
    spec: &DatasetSpec,
    selected: &[Metric],
) -> Result<()> {
    let start = Instant::now();
    let path = layout.edge_list(spec);
    let graph = load_graph(
        &path,
        Header::Declared {
            nodes: spec.nodes,
            edges: spec.edges,
        },
    )
    .with_context(|| format!("loading dataset {}", spec.token))?;

    let wants_edge = selected.iter().any(|m| m.is_edge_metric());
    let wants_lp = selected.contains(&Metric::LocalPath);

    // every pass finishes before the first file is written
    let scores = wants_edge.then(|| engine.edge_scores(&graph));
    let lp = if wants_lp {
        let cn = match &scores {
            Some(scores) => scores.iter().map(|s| s.cn).collect(),
            None => engine.common_neighbors(&graph),
        };
        Some(engine.local_path(&graph, &cn)?)
    } else {
        None
    };

    let outputs = layout.outputs();
    let dir = outputs
        .ensure_metrics_dir()
        .context("creating metrics directory")?;
    for &metric in selected {
        let target = outputs.metric_path(&spec.name, metric);
        match (metric, &scores, &lp) {
            (Metric::LocalPath, _, Some(lp)) => {
                write(&target, |w| output::write_column(w, lp.iter().copied()))?;
            }
            (_, Some(scores), _) => {
                write(&target, |w| output::write_edge_column(w, scores, metric))?;
            }
            _ => continue,
        }
    }

    info!(
        dataset = %spec.name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        files = selected.len(),
        dir = %dir.display(),
        elapsed = ?start.elapsed(),
        "metrics written"
    );
    Ok(())
}

fn run_cn_pairs(
    engine: &MetricsEngine,
    layout: &PathLayout,
    spec: &DatasetSpec,
    layer: u32,
) -> Result<()> {
    let start = Instant::now();
    let path = layout.layer_edge_list(spec, layer);
    let graph = load_graph(
        &path,
        Header::InFile {
            hint: Some((spec.nodes, spec.edges)),
        },
    )
    .with_context(|| format!("loading layer {layer} of dataset {}", spec.token))?;

    let histogram = engine.pair_histogram(graph.adjacency());

    let outputs = layout.outputs();
    outputs
        .ensure_pairs_dir()
        .context("creating pair-count directory")?;
    write(&outputs.layer_path(&spec.name, layer), |w| output::write_histogram(w, &histogram))?;

    info!(
        dataset = %spec.name,
        layer,
        pairs = histogram.total(),
        distinct = histogram.len(),
        elapsed = ?start.elapsed(),
        "pair histogram written"
    );
    Ok(())
}

fn write<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut std::io::BufWriter<std::fs::File>) -> std::io::Result<()>,
{
    output::write_file(path, body).with_context(|| format!("writing {}", path.display()))
}
