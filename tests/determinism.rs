use proximity::metrics::Metric;
use proximity::output::{self, OutputLayout};
use proximity::{EdgeScores, ExecutionMode, Executor, Graph, MetricsEngine, NodeId};

/// Deterministic skewed graph: a few hubs plus uniform noise, with repeats
/// and self-loops left in.
fn synthetic(nodes: usize, edges: usize, seed: u64) -> Graph {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };
    let pairs: Vec<(NodeId, NodeId)> = (0..edges)
        .map(|_| {
            let u = if next() % 4 == 0 { next() % 8 } else { next() % nodes };
            let v = next() % nodes;
            (u as NodeId, v as NodeId)
        })
        .collect();
    Graph::from_pairs(nodes, &pairs)
}

fn bits(scores: &[EdgeScores]) -> Vec<[u64; 12]> {
    scores
        .iter()
        .map(|s| {
            let mut row = [0; 12];
            for (slot, metric) in row.iter_mut().zip(Metric::EDGE) {
                *slot = s.get(metric).map(f64::to_bits).unwrap_or_default();
            }
            row
        })
        .collect()
}

fn modes() -> Vec<Executor> {
    #[allow(unused_mut)]
    let mut modes = vec![
        Executor::new(1, ExecutionMode::Threads),
        Executor::new(3, ExecutionMode::Threads),
        Executor::new(8, ExecutionMode::Threads),
        Executor::new(13, ExecutionMode::Threads),
        Executor::new(5, ExecutionMode::Sequential),
    ];
    #[cfg(feature = "parallel")]
    modes.push(Executor::new(6, ExecutionMode::Pool));
    modes
}

#[test]
fn edge_scores_identical_across_modes() {
    let graph = synthetic(300, 2_000, 7);
    let reference = MetricsEngine::new(Executor::new(1, ExecutionMode::Sequential)).quiet();
    let expected = bits(&reference.edge_scores(&graph));

    for exec in modes() {
        let engine = MetricsEngine::new(exec).quiet();
        assert_eq!(bits(&engine.edge_scores(&graph)), expected, "{exec:?}");
    }
}

#[test]
fn local_path_identical_across_modes() {
    let graph = synthetic(200, 1_500, 11);
    let reference = MetricsEngine::new(Executor::new(1, ExecutionMode::Sequential)).quiet();
    let cn = reference.common_neighbors(&graph);
    let expected: Vec<u64> = reference
        .local_path(&graph, &cn)
        .unwrap()
        .into_iter()
        .map(f64::to_bits)
        .collect();

    for exec in modes() {
        let engine = MetricsEngine::new(exec).quiet();
        let lp: Vec<u64> = engine
            .local_path(&graph, &engine.common_neighbors(&graph))
            .unwrap()
            .into_iter()
            .map(f64::to_bits)
            .collect();
        assert_eq!(lp, expected, "{exec:?}");
    }
}

#[test]
fn pair_histogram_identical_across_modes() {
    let graph = synthetic(150, 600, 3);
    let reference = MetricsEngine::new(Executor::new(1, ExecutionMode::Sequential)).quiet();
    let expected = reference.pair_histogram(graph.adjacency());
    assert_eq!(expected.total(), 150 * 149 / 2);

    for exec in modes() {
        let engine = MetricsEngine::new(exec).quiet();
        assert_eq!(engine.pair_histogram(graph.adjacency()), expected, "{exec:?}");
    }
}

#[test]
fn repeated_runs_write_identical_bytes() {
    let graph = synthetic(250, 1_200, 42);
    let engine = MetricsEngine::new(Executor::new(4, ExecutionMode::Threads)).quiet();

    let render = |dir: &std::path::Path| -> Vec<Vec<u8>> {
        let layout = OutputLayout::new(dir.join("metrics"), dir.join("pairs"));
        layout.ensure_metrics_dir().unwrap();
        layout.ensure_pairs_dir().unwrap();

        let scores = engine.edge_scores(&graph);
        let cn: Vec<f64> = scores.iter().map(|s| s.cn).collect();
        let lp = engine.local_path(&graph, &cn).unwrap();
        let hist = engine.pair_histogram(graph.adjacency());

        let mut files = Vec::new();
        for metric in Metric::EDGE {
            let path = layout.metric_path("synthetic", metric);
            output::write_file(&path, |w| output::write_edge_column(w, &scores, metric)).unwrap();
            files.push(path);
        }
        let lp_path = layout.metric_path("synthetic", Metric::LocalPath);
        output::write_file(&lp_path, |w| output::write_column(w, lp.iter().copied())).unwrap();
        files.push(lp_path);
        let hist_path = layout.layer_path("synthetic", 1);
        output::write_file(&hist_path, |w| output::write_histogram(w, &hist)).unwrap();
        files.push(hist_path);

        files.iter().map(|p| std::fs::read(p).unwrap()).collect()
    };

    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = render(first.path());
    let b = render(second.path());

    assert_eq!(a.len(), 14);
    assert_eq!(a, b);
    // one line per edge
    assert_eq!(a[0].iter().filter(|&&b| b == b'\n').count(), graph.edge_count());
}
