//! Unit-weight shortest paths over a connectivity graph.

use crate::graph::ConnectivityGraph;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;
use tactgrid_core::CellIndex;

/// Shortest path from `start` to `target`, inclusive of both ends.
///
/// All edges cost one, so breadth-first order is exact. Returns an
/// empty vector when either endpoint is disabled or out of range, or
/// when no enabled route exists; a path from a cell to itself is the
/// single-element vector. Disabled points are never traversed.
pub fn shortest_path(
    graph: &ConnectivityGraph,
    start: CellIndex,
    target: CellIndex,
) -> Vec<CellIndex> {
    if !graph.is_enabled(start) || !graph.is_enabled(target) {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let count = graph.point_count();
    let mut visited = FixedBitSet::with_capacity(count);
    let mut predecessor: Vec<Option<CellIndex>> = vec![None; count];
    let mut queue = VecDeque::new();

    visited.insert(start.as_usize());
    queue.push_back(start);

    'search: while let Some(current) = queue.pop_front() {
        for neighbour in graph.edges(current) {
            if visited.contains(neighbour.as_usize()) || !graph.is_enabled(neighbour) {
                continue;
            }
            visited.insert(neighbour.as_usize());
            predecessor[neighbour.as_usize()] = Some(current);
            if neighbour == target {
                break 'search;
            }
            queue.push_back(neighbour);
        }
    }

    if predecessor[target.as_usize()].is_none() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut cursor = target;
    while let Some(previous) = predecessor[cursor.as_usize()] {
        path.push(previous);
        cursor = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_connectivity;
    use tactgrid_space::MovementModel;

    fn grid_3x3(model: MovementModel, blocked: &[u32]) -> ConnectivityGraph {
        build_connectivity(3, 3, model, |i| !blocked.contains(&i.0)).graph
    }

    #[test]
    fn straight_line_four_dir() {
        let g = grid_3x3(MovementModel::FourDirection, &[]);
        let path = shortest_path(&g, CellIndex(0), CellIndex(2));
        assert_eq!(path, vec![CellIndex(0), CellIndex(1), CellIndex(2)]);
    }

    #[test]
    fn corner_to_corner_four_dir_is_five_cells() {
        let g = grid_3x3(MovementModel::FourDirection, &[]);
        let path = shortest_path(&g, CellIndex(0), CellIndex(8));
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&CellIndex(0)));
        assert_eq!(path.last(), Some(&CellIndex(8)));
    }

    #[test]
    fn corner_to_corner_eight_dir_uses_diagonals() {
        let g = grid_3x3(MovementModel::EightDirection, &[]);
        let path = shortest_path(&g, CellIndex(0), CellIndex(8));
        assert_eq!(path, vec![CellIndex(0), CellIndex(4), CellIndex(8)]);
    }

    #[test]
    fn routes_around_disabled_cells() {
        // Center blocked: 0 -> 2 must go around, still length 3.
        let g = grid_3x3(MovementModel::FourDirection, &[4]);
        let path = shortest_path(&g, CellIndex(0), CellIndex(2));
        assert_eq!(path, vec![CellIndex(0), CellIndex(1), CellIndex(2)]);
        // 0 -> 8 cannot cross the center.
        let path = shortest_path(&g, CellIndex(0), CellIndex(8));
        assert_eq!(path.len(), 5);
        assert!(!path.contains(&CellIndex(4)));
    }

    #[test]
    fn disabled_endpoint_yields_empty_path() {
        let g = grid_3x3(MovementModel::FourDirection, &[0]);
        assert!(shortest_path(&g, CellIndex(0), CellIndex(8)).is_empty());
        assert!(shortest_path(&g, CellIndex(8), CellIndex(0)).is_empty());
    }

    #[test]
    fn disconnected_target_yields_empty_path() {
        // Wall down the middle column.
        let g = grid_3x3(MovementModel::FourDirection, &[1, 4, 7]);
        assert!(shortest_path(&g, CellIndex(0), CellIndex(2)).is_empty());
    }

    #[test]
    fn start_equals_target() {
        let g = grid_3x3(MovementModel::FourDirection, &[]);
        assert_eq!(
            shortest_path(&g, CellIndex(4), CellIndex(4)),
            vec![CellIndex(4)]
        );
    }

    #[test]
    fn out_of_range_endpoint_yields_empty_path() {
        let g = grid_3x3(MovementModel::FourDirection, &[]);
        assert!(shortest_path(&g, CellIndex(0), CellIndex(99)).is_empty());
    }

    #[test]
    fn six_dir_path_follows_parity_tables() {
        let g = build_connectivity(5, 5, MovementModel::SixDirection, |_| true).graph;
        // (0,0) -> (2,0): NE/SE zig-zag keeps each hop adjacent.
        let path = shortest_path(&g, CellIndex(0), CellIndex(10));
        assert_eq!(path.len(), 3);
        for pair in path.windows(2) {
            assert!(g.has_edge(pair[0], pair[1]));
        }
    }
}
