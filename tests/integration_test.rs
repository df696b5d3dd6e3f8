// Integration tests for shortpath
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortpath::{
    find_shortest, load_graph, parse_matrix, render, EngineConfig, Error, Graph, NodeId,
    OutputFormat, Path, ShortestPathEngine, Weight,
};
use std::io::Write;
use std::process::Command;

fn write_graph(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Five nodes 1..5 (0 is isolated), unit weights:
/// 1->2, 1->3, 3->2, 2->4, 3->5, 4->5
const FIVE_NODE_DAG: &str = "\
6
0 0 0 0 0 0
0 0 1 1 0 0
0 0 0 0 1 0
0 0 1 0 0 1
0 0 0 0 0 1
0 0 0 0 0 0
";

#[test]
fn test_five_node_dag_from_file() {
    let file = write_graph(FIVE_NODE_DAG);
    let graph = load_graph(file.path()).unwrap();
    assert_eq!(graph.edge_count(), 6);

    let path = find_shortest(&graph, 1, 5).unwrap();
    assert_eq!(path.nodes(), &[1, 3, 5]);
    assert_eq!(path.cost(), Some(2));
    assert_eq!(path.hops(), Some(2));
}

#[test]
fn test_isolated_node_is_unreachable() {
    let graph = parse_matrix(FIVE_NODE_DAG).unwrap();
    assert_eq!(find_shortest(&graph, 1, 0).unwrap(), Path::Unreachable);
    // edges only run forward
    assert_eq!(find_shortest(&graph, 5, 1).unwrap(), Path::Unreachable);
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = parse_matrix(FIVE_NODE_DAG).unwrap();
    let engine = ShortestPathEngine::new(&graph);
    let first = engine.find_shortest(1, 4).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.find_shortest(1, 4).unwrap(), first);
    }
    // a different source on the same engine starts from an empty cache
    assert_eq!(engine.find_shortest(3, 4).unwrap().nodes(), &[3, 2, 4]);
    assert_eq!(engine.find_shortest(1, 4).unwrap(), first);
}

#[test]
fn test_mutual_predecessors_report_cycle() {
    // 3 -> 5 and 5 -> 3 both exist, so solving 5 needs 3 which needs 5
    let mut rows = vec![vec![0; 6]; 6];
    for (from, to) in [(1, 2), (1, 3), (3, 2), (2, 4), (3, 5), (5, 3), (4, 5)] {
        rows[from][to] = 1;
    }
    let graph = Graph::from_rows(rows).unwrap();
    match find_shortest(&graph, 1, 5) {
        Err(Error::CycleDetected { path }) => assert_eq!(path, vec![5, 3, 5]),
        other => panic!("expected CycleDetected, got {:?}", other),
    }
}

#[test]
fn test_concurrent_queries_share_graph() {
    let graph = parse_matrix(FIVE_NODE_DAG).unwrap();
    let results: Vec<Path> = std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=5)
            .map(|dest| {
                let graph = &graph;
                scope.spawn(move || find_shortest(graph, 1, dest).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let costs: Vec<Option<Weight>> = results.iter().map(Path::cost).collect();
    assert_eq!(costs, vec![Some(0), Some(1), Some(1), Some(2), Some(2)]);
}

fn random_dag(rng: &mut StdRng, node_count: usize) -> Graph {
    let mut rows = vec![vec![0; node_count]; node_count];
    for from in 0..node_count {
        for to in from + 1..node_count {
            if rng.random_bool(0.4) {
                rows[from][to] = rng.random_range(1..=9);
            }
        }
    }
    Graph::from_rows(rows).unwrap()
}

fn brute_force_min(graph: &Graph, node: NodeId, dest: NodeId, cost: Weight) -> Option<Weight> {
    if node == dest {
        return Some(cost);
    }
    (0..graph.node_count())
        .filter(|&next| graph.has_edge(node, next).unwrap())
        .filter_map(|next| {
            let weight = graph.edge_weight(node, next).unwrap();
            brute_force_min(graph, next, dest, cost + weight)
        })
        .min()
}

#[test]
fn test_matches_brute_force_on_random_dags() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let node_count = rng.random_range(1..=7);
        let graph = random_dag(&mut rng, node_count);

        for source in 0..node_count {
            for dest in 0..node_count {
                let path = find_shortest(&graph, source, dest).unwrap();
                let expected = brute_force_min(&graph, source, dest, 0);
                assert_eq!(path.cost(), expected, "{} -> {} in {:?}", source, dest, graph);

                if let Path::Valid { nodes, cost } = &path {
                    assert_eq!(nodes.first(), Some(&source));
                    assert_eq!(nodes.last(), Some(&dest));
                    let walked: Weight = nodes
                        .windows(2)
                        .map(|w| {
                            assert!(graph.has_edge(w[0], w[1]).unwrap());
                            graph.edge_weight(w[0], w[1]).unwrap()
                        })
                        .sum();
                    assert_eq!(walked, *cost);
                }
            }
        }
    }
}

#[test]
fn test_legacy_engine_agrees_on_dags() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_dag(&mut rng, 8);
    let guarded = ShortestPathEngine::new(&graph);
    let legacy = ShortestPathEngine::with_config(&graph, EngineConfig::legacy());
    for dest in 0..8 {
        assert_eq!(
            guarded.find_shortest(0, dest).unwrap(),
            legacy.find_shortest(0, dest).unwrap()
        );
    }
}

#[test]
fn test_render_formats() {
    let graph = parse_matrix("3 0 2 10 0 0 3 0 0 0").unwrap();
    let path = find_shortest(&graph, 0, 2).unwrap();
    assert_eq!(render(&path, OutputFormat::Text).unwrap(), "0, 1, 2 (cost 5)");
    assert_eq!(
        render(&path, OutputFormat::Json).unwrap(),
        r#"{"status":"valid","nodes":[0,1,2],"cost":5}"#
    );
    assert_eq!(render(&Path::Unreachable, OutputFormat::Text).unwrap(), "No path exists.");
}

fn shortpath() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shortpath"))
}

#[test]
fn test_cli_prints_path() {
    let file = write_graph("3\n0 2 10\n0 0 3\n0 0 0\n");
    let output = shortpath().arg(file.path()).args(["0", "2"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0, 1, 2 (cost 5)");
}

#[test]
fn test_cli_no_path_still_succeeds() {
    let file = write_graph("3\n0 2 0\n0 0 0\n0 0 0\n");
    let output = shortpath().arg(file.path()).args(["0", "2"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No path exists.");
}

#[test]
fn test_cli_json_output() {
    let file = write_graph("2\n0 4\n0 0\n");
    let output = shortpath()
        .arg(file.path())
        .args(["0", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"status":"valid","nodes":[0,1],"cost":4}"#
    );
}

#[test]
fn test_cli_rejects_wrong_argument_count() {
    let file = write_graph("1\n0\n");
    let output = shortpath().arg(file.path()).arg("0").output().unwrap();
    assert!(!output.status.success());
    let output = shortpath().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_out_of_range_fails() {
    let file = write_graph("2\n0 1\n0 0\n");
    let output = shortpath().arg(file.path()).args(["0", "9"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}
