//! Dense undirected connectivity graph over grid cells.

use indexmap::IndexSet;
use tactgrid_core::CellIndex;

/// A single graph point.
#[derive(Clone, Debug)]
struct GraphPoint {
    /// Grid position as `(column, row)`.
    position: (i32, i32),
    /// Disabled points never appear in paths or reachability.
    enabled: bool,
}

/// A dense, undirected graph with one point per grid cell.
///
/// Points are addressed by [`CellIndex`] and carry an enabled flag;
/// edges are undirected and unit-weight. Adjacency sets iterate in
/// insertion order, so path tie-breaking is deterministic for a given
/// build order.
#[derive(Clone, Debug, Default)]
pub struct ConnectivityGraph {
    points: Vec<GraphPoint>,
    adjacency: Vec<IndexSet<u32>>,
}

impl ConnectivityGraph {
    /// An empty graph with storage reserved for `cell_count` points.
    pub fn with_capacity(cell_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(cell_count),
            adjacency: Vec::with_capacity(cell_count),
        }
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Register the next point, at grid position `(column, row)`.
    ///
    /// Points must be added densely in index order; the new point's
    /// index is `point_count() - 1` after the call.
    pub fn add_point(&mut self, position: (i32, i32), enabled: bool) -> CellIndex {
        self.points.push(GraphPoint { position, enabled });
        self.adjacency.push(IndexSet::new());
        CellIndex(self.points.len() as u32 - 1)
    }

    /// Connect two points with an undirected edge. Out-of-range or
    /// self-referential pairs are ignored.
    pub fn connect(&mut self, a: CellIndex, b: CellIndex) {
        if a == b || a.as_usize() >= self.points.len() || b.as_usize() >= self.points.len() {
            return;
        }
        self.adjacency[a.as_usize()].insert(b.0);
        self.adjacency[b.as_usize()].insert(a.0);
    }

    /// Whether `index` names a registered, enabled point.
    pub fn is_enabled(&self, index: CellIndex) -> bool {
        self.points
            .get(index.as_usize())
            .is_some_and(|p| p.enabled)
    }

    /// Enable or disable a point. Out-of-range indices are ignored.
    pub fn set_enabled(&mut self, index: CellIndex, enabled: bool) {
        if let Some(point) = self.points.get_mut(index.as_usize()) {
            point.enabled = enabled;
        }
    }

    /// Grid position `(column, row)` of a point.
    pub fn position(&self, index: CellIndex) -> Option<(i32, i32)> {
        self.points.get(index.as_usize()).map(|p| p.position)
    }

    /// The points adjacent to `index`, in edge insertion order.
    ///
    /// Empty for out-of-range indices.
    pub fn edges(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        self.adjacency
            .get(index.as_usize())
            .into_iter()
            .flatten()
            .map(|&i| CellIndex(i))
    }

    /// Whether an edge exists between `a` and `b`.
    pub fn has_edge(&self, a: CellIndex, b: CellIndex) -> bool {
        self.adjacency
            .get(a.as_usize())
            .is_some_and(|set| set.contains(&b.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_is_undirected() {
        let mut g = ConnectivityGraph::with_capacity(2);
        let a = g.add_point((0, 0), true);
        let b = g.add_point((1, 0), true);
        g.connect(a, b);
        assert!(g.has_edge(a, b));
        assert!(g.has_edge(b, a));
    }

    #[test]
    fn connect_ignores_self_and_out_of_range() {
        let mut g = ConnectivityGraph::with_capacity(1);
        let a = g.add_point((0, 0), true);
        g.connect(a, a);
        g.connect(a, CellIndex(7));
        assert_eq!(g.edges(a).count(), 0);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut g = ConnectivityGraph::with_capacity(2);
        let a = g.add_point((0, 0), true);
        let b = g.add_point((1, 0), true);
        g.connect(a, b);
        g.connect(b, a);
        assert_eq!(g.edges(a).count(), 1);
    }

    #[test]
    fn disabled_flag_round_trips() {
        let mut g = ConnectivityGraph::with_capacity(1);
        let a = g.add_point((0, 0), false);
        assert!(!g.is_enabled(a));
        g.set_enabled(a, true);
        assert!(g.is_enabled(a));
        assert!(!g.is_enabled(CellIndex(9)));
    }
}
