use std::collections::BTreeSet;

use petgraph::graphmap::UnGraphMap;
use proximity::{ExecutionMode, Executor, Graph, MetricsEngine, NodeId};

fn reference(nodes: usize, pairs: &[(NodeId, NodeId)]) -> UnGraphMap<NodeId, ()> {
    let mut g = UnGraphMap::new();
    for v in 0..nodes as NodeId {
        g.add_node(v);
    }
    for &(u, v) in pairs {
        g.add_edge(u, v, ());
    }
    g
}

fn neighbor_set(g: &UnGraphMap<NodeId, ()>, v: NodeId) -> BTreeSet<NodeId> {
    g.neighbors(v).collect()
}

fn karate_like() -> (usize, Vec<(NodeId, NodeId)>) {
    let pairs = vec![
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (0, 10), (0, 11),
        (0, 12), (0, 13), (0, 17), (0, 19), (0, 21), (0, 31), (1, 2), (1, 3), (1, 7), (1, 13),
        (1, 17), (1, 19), (1, 21), (1, 30), (2, 3), (2, 7), (2, 8), (2, 9), (2, 13), (2, 27),
        (2, 28), (2, 32), (3, 7), (3, 12), (3, 13), (4, 6), (4, 10), (5, 6), (5, 10), (5, 16),
        (6, 16), (8, 30), (8, 32), (8, 33), (9, 33), (13, 33), (14, 32), (14, 33), (15, 32),
        (15, 33), (18, 32), (18, 33), (19, 33), (20, 32), (20, 33), (22, 32), (22, 33), (23, 25),
        (23, 27), (23, 29), (23, 32), (23, 33), (24, 25), (24, 27), (24, 31), (25, 31), (26, 29),
        (26, 33), (27, 33), (28, 31), (28, 33), (29, 32), (29, 33), (30, 32), (30, 33), (31, 32),
        (31, 33), (32, 33),
        // repeats, a reversed duplicate, and two self-loops
        (0, 1), (33, 32), (5, 5), (20, 20),
    ];
    (34, pairs)
}

#[test]
fn adjacency_matches_petgraph() {
    let (n, pairs) = karate_like();
    let graph = Graph::from_pairs(n, &pairs);
    let pg = reference(n, &pairs);
    let adj = graph.adjacency();

    assert!(adj.is_symmetric());
    for v in 0..n as NodeId {
        let expected: Vec<NodeId> = neighbor_set(&pg, v).into_iter().collect();
        assert_eq!(adj.neighbors(v), expected.as_slice(), "row {v}");
    }
}

#[test]
fn edge_metrics_match_petgraph_neighborhoods() {
    let (n, pairs) = karate_like();
    let graph = Graph::from_pairs(n, &pairs);
    let pg = reference(n, &pairs);
    let scores = MetricsEngine::new(Executor::new(4, ExecutionMode::Threads))
        .quiet()
        .edge_scores(&graph);

    for (i, &(u, v)) in pairs.iter().enumerate() {
        let nu = neighbor_set(&pg, u);
        let nv = neighbor_set(&pg, v);
        let common: Vec<NodeId> = nu.intersection(&nv).copied().collect();
        let (du, dv) = (nu.len() as f64, nv.len() as f64);
        let cn = common.len() as f64;

        let s = &scores[i];
        assert_eq!(s.cn, cn, "cn of edge {i}");
        assert_eq!(s.pa, du * dv, "pa of edge {i}");
        assert_eq!(s.jc, cn / (du + dv - cn), "jc of edge {i}");

        let ra: f64 = common.iter().map(|&x| 1.0 / neighbor_set(&pg, x).len() as f64).sum();
        assert!((s.ra - ra).abs() < 1e-12, "ra of edge {i}");

        let fm = nu
            .iter()
            .flat_map(|&x| nv.iter().map(move |&y| (x, y)))
            .filter(|&(x, y)| x == y || pg.contains_edge(x, y))
            .count();
        assert_eq!(s.fm, fm as f64, "fm of edge {i}");
    }
}

#[test]
fn pair_histogram_matches_petgraph_neighborhoods() {
    let (n, pairs) = karate_like();
    let graph = Graph::from_pairs(n, &pairs);
    let pg = reference(n, &pairs);

    let mut expected = std::collections::BTreeMap::<usize, u64>::new();
    for i in 0..n as NodeId {
        let ni = neighbor_set(&pg, i);
        for j in i + 1..n as NodeId {
            *expected.entry(ni.intersection(&neighbor_set(&pg, j)).count()).or_default() += 1;
        }
    }

    let hist = MetricsEngine::new(Executor::new(5, ExecutionMode::Threads))
        .quiet()
        .pair_histogram(graph.adjacency());
    assert_eq!(hist.entries(), expected.into_iter().collect::<Vec<_>>().as_slice());
}
