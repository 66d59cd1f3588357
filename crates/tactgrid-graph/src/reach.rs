//! Reachability analysis over structural neighbor lists.

use fixedbitset::FixedBitSet;
use smallvec::SmallVec;
use std::collections::VecDeque;
use tactgrid_core::CellIndex;

/// Walkable cells not connected to `start` through walkable cells.
///
/// Runs a breadth-first flood from `start` over the structural
/// neighbor lists. The start cell is seeded visited regardless of its
/// own walkability; unwalkable cells are never expanded, so walkable
/// pockets sealed behind them are reported. When the start cell itself
/// is unwalkable, every other walkable cell is unreachable.
///
/// Returns the unreachable cells in index order. An out-of-range start
/// returns an empty list.
pub fn unreachable_cells(
    neighbour_lists: &[SmallVec<[CellIndex; 8]>],
    walkable: impl Fn(CellIndex) -> bool,
    start: CellIndex,
) -> Vec<CellIndex> {
    let count = neighbour_lists.len();
    if start.as_usize() >= count {
        return Vec::new();
    }

    let mut visited = FixedBitSet::with_capacity(count);
    let mut queue = VecDeque::new();
    visited.insert(start.as_usize());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !walkable(current) {
            continue;
        }
        for &neighbour in &neighbour_lists[current.as_usize()] {
            if !visited.contains(neighbour.as_usize()) {
                visited.insert(neighbour.as_usize());
                queue.push_back(neighbour);
            }
        }
    }

    (0..count as u32)
        .map(CellIndex)
        .filter(|&index| walkable(index) && !visited.contains(index.as_usize()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_connectivity;
    use tactgrid_space::MovementModel;

    fn lists(
        rows: u32,
        columns: u32,
        model: MovementModel,
    ) -> Vec<SmallVec<[CellIndex; 8]>> {
        build_connectivity(rows, columns, model, |_| true).neighbour_lists
    }

    #[test]
    fn fully_open_grid_has_no_unreachable_cells() {
        let lists = lists(3, 3, MovementModel::FourDirection);
        assert!(unreachable_cells(&lists, |_| true, CellIndex(0)).is_empty());
    }

    #[test]
    fn walled_off_pocket_is_unreachable() {
        // Middle column blocked: right column is sealed from cell 0.
        let lists = lists(3, 3, MovementModel::FourDirection);
        let blocked = [1u32, 4, 7];
        let out = unreachable_cells(&lists, |i| !blocked.contains(&i.0), CellIndex(0));
        assert_eq!(out, vec![CellIndex(2), CellIndex(5), CellIndex(8)]);
    }

    #[test]
    fn diagonal_gap_differs_between_models() {
        // Corner 0 boxed in orthogonally by 1 and 3; only the diagonal
        // through 4 leads out.
        let blocked = [1u32, 3];
        let walkable = |i: CellIndex| !blocked.contains(&i.0);

        let lists4 = lists(3, 3, MovementModel::FourDirection);
        let out = unreachable_cells(&lists4, walkable, CellIndex(0));
        assert_eq!(out.len(), 6);

        let lists8 = lists(3, 3, MovementModel::EightDirection);
        let out = unreachable_cells(&lists8, walkable, CellIndex(0));
        assert!(out.is_empty());
    }

    #[test]
    fn unwalkable_start_reaches_nothing() {
        let lists = lists(3, 3, MovementModel::FourDirection);
        let out = unreachable_cells(&lists, |i| i != CellIndex(0), CellIndex(0));
        // The start never expands, so all 8 walkable cells are cut off.
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn unwalkable_cells_are_never_reported() {
        let lists = lists(3, 3, MovementModel::FourDirection);
        let blocked = [1u32, 4, 7];
        let out = unreachable_cells(&lists, |i| !blocked.contains(&i.0), CellIndex(0));
        for b in blocked {
            assert!(!out.contains(&CellIndex(b)));
        }
    }

    #[test]
    fn out_of_range_start_returns_empty() {
        let lists = lists(3, 3, MovementModel::FourDirection);
        assert!(unreachable_cells(&lists, |_| true, CellIndex(99)).is_empty());
    }
}
