// Integration tests for the graph search emitters

use algoviz::algorithms::graph::Graph;
use algoviz::algorithms::Algorithm;
use algoviz::input::Input;
use algoviz::session::build_emitter;
use algoviz::snapshot::{Frame, NodeTint, DIST, PATH, VISITED};
use std::collections::{HashSet, VecDeque};

fn run(algorithm: Algorithm, graph: Graph, start: usize, goal: Option<usize>) -> Vec<Frame> {
    build_emitter(algorithm, &Input::graph(graph, start, goal))
        .expect("Emitter creation failed")
        .collect()
}

/// Nodes in the order they were settled (frames tinting the highlight as current)
fn settled_nodes(frames: &[Frame]) -> Vec<usize> {
    frames
        .iter()
        .filter(|f| f.highlighted.len() == 1)
        .filter(|f| {
            let node = f.highlighted[0];
            f.snapshot.tints().is_some_and(|t| t[node] == Some(NodeTint::Current))
        })
        .map(|f| f.highlighted[0])
        .collect()
}

fn hop_counts(graph: &Graph, start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.node_count()];
    dist[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &v in graph.neighbors(u) {
            if dist[v].is_none() {
                dist[v] = Some(dist[u].unwrap() + 1);
                queue.push_back(v);
            }
        }
    }
    dist
}

#[test]
fn test_full_traversal_visits_every_node_once() {
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        for (rows, cols) in [(1, 1), (3, 4), (6, 8)] {
            let frames = run(algorithm, Graph::grid(rows, cols), 0, None);
            let settled = settled_nodes(&frames);
            let unique: HashSet<usize> = settled.iter().copied().collect();
            assert_eq!(settled.len(), rows * cols, "{} on {}x{}", algorithm, rows, cols);
            assert_eq!(unique.len(), rows * cols);
            let last = frames.last().unwrap();
            assert_eq!(last.metadata.count(VISITED), Some(rows * cols));
            assert!(!last.found());
        }
    }
}

#[test]
fn test_dijkstra_matches_bfs_hop_counts() {
    let graph = Graph::grid(5, 7);
    let hops = hop_counts(&graph, 10);
    let frames = run(Algorithm::Dijkstra, graph, 10, None);
    let dist = frames.last().unwrap().metadata.distances(DIST).unwrap().to_vec();
    for (node, d) in dist.iter().enumerate() {
        assert_eq!(Some(*d as usize), hops[node]);
    }
}

#[test]
fn test_paths_are_contiguous_and_shortest() {
    let (rows, cols) = (5, 6);
    let grid = Graph::grid(rows, cols);
    let goal = rows * cols - 3;
    let hops = hop_counts(&grid, 2);

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
        let frames = run(algorithm, grid.clone(), 2, Some(goal));
        let last = frames.last().unwrap();
        assert!(last.found(), "{} missed the goal", algorithm);
        let path = last.metadata.path(PATH).unwrap();
        assert_eq!(path.first(), Some(&2));
        assert_eq!(path.last(), Some(&goal));
        for pair in path.windows(2) {
            let on_edge = grid.edges().contains(&(pair[0], pair[1]))
                || grid.edges().contains(&(pair[1], pair[0]));
            assert!(on_edge, "{}: {:?} is not an edge", algorithm, pair);
        }
        if algorithm != Algorithm::Dfs {
            assert_eq!(Some(path.len() - 1), hops[goal]);
        }
        let tints = last.snapshot.tints().unwrap();
        assert!(path.iter().all(|&n| tints[n] == Some(NodeTint::Path)));
    }
}

#[test]
fn test_disconnected_goal_ends_without_path() {
    let graph = Graph::new(
        vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
        vec![(0, 1), (2, 3)],
    )
    .unwrap();
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
        let frames = run(algorithm, graph.clone(), 0, Some(3));
        let last = frames.last().unwrap();
        assert!(!last.found());
        assert!(last.metadata.path(PATH).is_none());
        assert_eq!(last.metadata.count(VISITED), Some(2));
        assert!(last.highlighted.is_empty());
    }
}

#[test]
fn test_graph_runs_are_deterministic() {
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
        let a = run(algorithm, Graph::grid(4, 5), 7, Some(19));
        let b = run(algorithm, Graph::grid(4, 5), 7, Some(19));
        assert_eq!(a, b);
    }
}

#[test]
fn test_start_equal_to_goal() {
    let frames = run(Algorithm::Bfs, Graph::grid(3, 3), 4, Some(4));
    let last = frames.last().unwrap();
    assert!(last.found());
    assert_eq!(last.metadata.path(PATH), Some(&[4][..]));
}
