//! 4-neighbor lattice builder

use super::Graph;
use rustc_hash::FxHashMap;

/// Build a `rows × cols` grid with row-major ids (`r * cols + c`).
///
/// Node `(r, c)` sits at `(c, -r)` so row 0 is drawn on top. Edges are added
/// node by node, right neighbor before down neighbor, so every adjacency list
/// reads up, left, right, down.
pub fn build_grid(rows: usize, cols: usize) -> Graph {
    let mut positions = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            positions.push((c as f64, -(r as f64)));
        }
    }

    let mut edges = Vec::new();
    let mut neighbors = vec![Vec::new(); rows * cols];
    let mut connect = |a: usize, b: usize| {
        edges.push((a, b));
        neighbors[a].push(b);
        neighbors[b].push(a);
    };
    for r in 0..rows {
        for c in 0..cols {
            let id = r * cols + c;
            if c + 1 < cols {
                connect(id, id + 1);
            }
            if r + 1 < rows {
                connect(id, id + cols);
            }
        }
    }

    Graph {
        positions,
        edges,
        neighbors,
        weights: FxHashMap::default(),
    }
}

impl Graph {
    /// Convenience alias for [`build_grid`]
    pub fn grid(rows: usize, cols: usize) -> Graph {
        build_grid(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let graph = build_grid(3, 4);
        assert_eq!(graph.node_count(), 12);
        // horizontal 3*3 + vertical 2*4
        assert_eq!(graph.edges().len(), 17);
    }

    #[test]
    fn test_grid_adjacency_order() {
        let graph = build_grid(3, 3);
        // center node: up, left, right, down
        assert_eq!(graph.neighbors(4), &[1, 3, 5, 7]);
        assert_eq!(graph.neighbors(0), &[1, 3]);
    }

    #[test]
    fn test_grid_positions_row_major() {
        let graph = build_grid(2, 3);
        assert_eq!(graph.positions()[4], (1.0, -1.0));
    }
}
