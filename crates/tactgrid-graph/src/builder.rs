//! Connectivity builders for the three movement models.

use crate::graph::ConnectivityGraph;
use smallvec::SmallVec;
use tactgrid_core::CellIndex;
use tactgrid_space::MovementModel;

/// A built connectivity snapshot: the query graph plus the plain
/// structural neighbor list of every cell.
///
/// The neighbor lists record every in-bounds adjacent cell for the
/// movement model regardless of walkability; the graph's edges encode
/// the model's traversal rules.
#[derive(Clone, Debug, Default)]
pub struct GridConnectivity {
    /// The query graph.
    pub graph: ConnectivityGraph,
    /// Per-cell structural neighbors, indexed by cell.
    pub neighbour_lists: Vec<SmallVec<[CellIndex; 8]>>,
}

/// Build the connectivity snapshot for a `rows x columns` grid.
///
/// All cells are registered as graph points at `(column, row)`,
/// disabled when unwalkable. Edge rules differ per model:
///
/// - Four-direction connects each cell to its right and down
///   neighbors; the undirected graph supplies the reverse directions.
/// - Six-direction connects a pair only when **both** endpoints are
///   walkable.
/// - Eight-direction connects when the **neighbor** is walkable; the
///   disabled flag on the source point keeps paths out of unwalkable
///   cells anyway.
pub fn build_connectivity(
    rows: u32,
    columns: u32,
    model: MovementModel,
    walkable: impl Fn(CellIndex) -> bool,
) -> GridConnectivity {
    let cell_count = (rows as usize) * (columns as usize);
    let mut graph = ConnectivityGraph::with_capacity(cell_count);
    let mut neighbour_lists = Vec::with_capacity(cell_count);

    for row in 0..rows {
        for column in 0..columns {
            let index = CellIndex::from_row_column(row, column, columns);
            graph.add_point((column as i32, row as i32), walkable(index));
            neighbour_lists.push(model.structural_neighbours(rows, columns, row, column));
        }
    }

    for row in 0..rows {
        for column in 0..columns {
            let index = CellIndex::from_row_column(row, column, columns);
            match model {
                MovementModel::FourDirection => {
                    if column + 1 < columns {
                        graph.connect(index, CellIndex::from_row_column(row, column + 1, columns));
                    }
                    if row + 1 < rows {
                        graph.connect(index, CellIndex::from_row_column(row + 1, column, columns));
                    }
                }
                MovementModel::SixDirection => {
                    if !walkable(index) {
                        continue;
                    }
                    for &neighbour in &neighbour_lists[index.as_usize()] {
                        if walkable(neighbour) {
                            graph.connect(index, neighbour);
                        }
                    }
                }
                MovementModel::EightDirection => {
                    for &neighbour in &neighbour_lists[index.as_usize()] {
                        if walkable(neighbour) {
                            graph.connect(index, neighbour);
                        }
                    }
                }
            }
        }
    }

    GridConnectivity {
        graph,
        neighbour_lists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_walkable(_: CellIndex) -> bool {
        true
    }

    // ── Four-direction tests ────────────────────────────────────

    #[test]
    fn four_dir_edges_are_orthogonal_only() {
        let c = build_connectivity(3, 3, MovementModel::FourDirection, all_walkable);
        let center = CellIndex(4);
        assert_eq!(c.graph.edges(center).count(), 4);
        assert!(c.graph.has_edge(center, CellIndex(1)));
        assert!(c.graph.has_edge(center, CellIndex(3)));
        assert!(c.graph.has_edge(center, CellIndex(5)));
        assert!(c.graph.has_edge(center, CellIndex(7)));
        assert!(!c.graph.has_edge(center, CellIndex(0)));
    }

    #[test]
    fn four_dir_keeps_edges_to_unwalkable_cells() {
        // Walkability gates traversal via the disabled flag, not edges.
        let c = build_connectivity(3, 3, MovementModel::FourDirection, |i| i != CellIndex(4));
        assert!(c.graph.has_edge(CellIndex(1), CellIndex(4)));
        assert!(!c.graph.is_enabled(CellIndex(4)));
    }

    #[test]
    fn four_dir_neighbour_list_order() {
        let c = build_connectivity(3, 3, MovementModel::FourDirection, all_walkable);
        let list: Vec<u32> = c.neighbour_lists[4].iter().map(|i| i.0).collect();
        assert_eq!(list, vec![5, 3, 7, 1]); // right, left, down, up
    }

    // ── Six-direction tests ─────────────────────────────────────

    #[test]
    fn six_dir_requires_both_endpoints_walkable() {
        let blocked = CellIndex(7);
        let c = build_connectivity(5, 5, MovementModel::SixDirection, |i| i != blocked);
        assert!(!c.graph.has_edge(CellIndex(12), blocked));
        assert!(!c.graph.has_edge(blocked, CellIndex(12)));
        assert!(c.graph.has_edge(CellIndex(12), CellIndex(13)));
        // Structural neighbours still list the blocked cell.
        assert!(c.neighbour_lists[12].contains(&blocked));
    }

    #[test]
    fn six_dir_interior_has_six_edges() {
        let c = build_connectivity(5, 5, MovementModel::SixDirection, all_walkable);
        assert_eq!(c.graph.edges(CellIndex(12)).count(), 6);
    }

    // ── Eight-direction tests ───────────────────────────────────

    #[test]
    fn eight_dir_connects_when_neighbour_is_walkable() {
        let blocked = CellIndex(4);
        let c = build_connectivity(3, 3, MovementModel::EightDirection, |i| i != blocked);
        // The blocked cell still connects to its walkable neighbours;
        // its disabled flag is what keeps paths away.
        assert!(c.graph.has_edge(blocked, CellIndex(0)));
        assert!(!c.graph.is_enabled(blocked));
    }

    #[test]
    fn eight_dir_interior_has_eight_edges() {
        let c = build_connectivity(3, 3, MovementModel::EightDirection, all_walkable);
        assert_eq!(c.graph.edges(CellIndex(4)).count(), 8);
    }

    // ── Registration tests ──────────────────────────────────────

    #[test]
    fn all_cells_registered_with_grid_positions() {
        let c = build_connectivity(2, 3, MovementModel::FourDirection, all_walkable);
        assert_eq!(c.graph.point_count(), 6);
        assert_eq!(c.graph.position(CellIndex(5)), Some((2, 1)));
        assert_eq!(c.neighbour_lists.len(), 6);
    }
}
