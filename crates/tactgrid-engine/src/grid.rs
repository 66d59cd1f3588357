//! The grid state machine.

use crate::cell::CellTransform;
use crate::config::GridConfig;
use crate::custom::CustomCellData;
use crate::oracle::TerrainOracle;
use crate::store::CellStore;
use log::{debug, warn};
use tactgrid_core::{CellExtent, CellFlags, CellIndex, GridFlags, GridInstanceId, Rgba, WorldPoint};
use tactgrid_graph::{build_connectivity, shortest_path, unreachable_cells, GridConnectivity};
use tactgrid_space::{
    HexLayout, LayoutError, LayoutKind, MovementModel, SquareLayout, Tessellation,
};

/// A complete interactive tactical grid.
///
/// Owns the tessellation, the cell store, the connectivity snapshot,
/// the custom-data descriptor table, and the hover/select interaction
/// state. Everything is single-threaded and synchronous; queries read
/// the snapshot from the most recent rebuild, and walkability changes
/// only affect paths after the next centering or explicit rebuild.
///
/// Interactive operations never fail: bad indices and calls in the
/// wrong lifecycle state are logged and ignored, so input-event noise
/// cannot poison the grid. Only [`create`](Self::create) returns a
/// `Result`, for misconfigured dimensions.
pub struct GridState {
    config: GridConfig,
    instance_id: GridInstanceId,
    flags: GridFlags,
    visible: bool,
    layout: Option<Box<dyn Tessellation>>,
    store: CellStore,
    connectivity: GridConnectivity,
    custom_data: Vec<CustomCellData>,
    selected: Vec<CellIndex>,
    hovered: Option<CellIndex>,
}

impl GridState {
    /// A grid in the not-created state.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            instance_id: GridInstanceId::next(),
            flags: GridFlags::empty(),
            visible: false,
            layout: None,
            store: CellStore::new(0, Default::default(), false),
            connectivity: GridConnectivity::default(),
            custom_data: Vec::new(),
            selected: Vec::new(),
            hovered: None,
        }
    }

    // ── Lifecycle ──────────────────────────────────────────────

    /// Build the tessellation and cell storage, then run a full
    /// centering batch at `position` and show the grid.
    ///
    /// No-op if already created. Fails only on invalid dimensions.
    pub fn create(
        &mut self,
        oracle: &dyn TerrainOracle,
        position: WorldPoint,
    ) -> Result<(), LayoutError> {
        if self.is_created() {
            return Ok(());
        }
        let layout: Box<dyn Tessellation> = match self.config.layout {
            LayoutKind::Square => Box::new(SquareLayout::new(
                self.config.rows,
                self.config.columns,
                self.config.cell_size,
            )?),
            LayoutKind::Hexagonal => Box::new(HexLayout::new(
                self.config.rows,
                self.config.columns,
                self.config.cell_size,
            )?),
        };
        self.layout = Some(layout);
        self.store = CellStore::new(
            self.config.cell_count() as usize,
            self.config.palette.clone(),
            self.config.flags_via_alpha,
        );
        self.flags.insert(GridFlags::CREATED);
        self.center(oracle, position);
        self.set_visible(true);
        debug!("grid {} created", self.instance_id);
        Ok(())
    }

    /// Tear down all cells and return to the not-created state.
    pub fn destroy(&mut self) {
        if !self.is_created() {
            return;
        }
        self.layout = None;
        self.store = CellStore::new(0, Default::default(), false);
        self.connectivity = GridConnectivity::default();
        self.selected.clear();
        self.hovered = None;
        self.visible = false;
        self.flags = GridFlags::empty();
        debug!("grid {} destroyed", self.instance_id);
    }

    /// Whether [`create`](Self::create) has run.
    pub fn is_created(&self) -> bool {
        self.flags.contains(GridFlags::CREATED)
    }

    /// Whether a centering batch has completed since the last
    /// structural change.
    pub fn is_centered(&self) -> bool {
        self.flags.contains(GridFlags::CENTERED)
    }

    /// Whether hover processing is active.
    pub fn is_hover_enabled(&self) -> bool {
        self.flags.contains(GridFlags::HOVER_ENABLED)
    }

    /// Whether the grid is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Unique identifier of this grid instance.
    pub fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }

    /// The construction configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.config.columns
    }

    /// Total number of cells.
    pub fn size(&self) -> u64 {
        self.config.cell_count()
    }

    // ── Centering batch ────────────────────────────────────────

    /// Re-anchor the grid at `position` and rebuild everything.
    ///
    /// Runs the full batch: reset cell state, lay out cells, align
    /// them with the oracle's floor, scan obstacles, scan custom
    /// metadata, rebuild connectivity, and refresh the flag-encoded
    /// alpha channel. Hover is suspended for the duration. The batch
    /// issues at most one oracle query per cell per pass.
    pub fn center(&mut self, oracle: &dyn TerrainOracle, position: WorldPoint) {
        if !self.is_created() {
            warn!("center ignored: grid has not been created");
            return;
        }
        self.flags.remove(GridFlags::CENTERED);
        self.set_hover_enabled(false);
        self.reset_cells_state();
        self.layout_pass(position);
        self.floor_pass(oracle);
        self.obstacle_pass(oracle);
        self.custom_pass(oracle);
        self.rebuild_connectivity();
        self.store.refresh_alpha();
        self.set_hover_enabled(true);
        self.flags.insert(GridFlags::CENTERED);
        debug!("grid {} centered", self.instance_id);
    }

    /// Re-run only the custom-metadata scan and the connectivity
    /// rebuild, leaving layout, floor alignment and obstacles as they
    /// are. For when metadata volumes moved but terrain did not.
    pub fn update_custom_data(&mut self, oracle: &dyn TerrainOracle) {
        if !self.is_created() {
            warn!("update_custom_data ignored: grid has not been created");
            return;
        }
        self.set_hover_enabled(false);
        self.custom_pass(oracle);
        self.rebuild_connectivity();
        self.store.refresh_alpha();
        self.set_hover_enabled(true);
    }

    fn layout_pass(&mut self, position: WorldPoint) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        layout.recenter(position);
        let columns = self.config.columns;
        for row in 0..self.config.rows {
            for column in 0..columns {
                let index = CellIndex::from_row_column(row, column, columns);
                self.store.set_transform(
                    index,
                    CellTransform {
                        position: layout.cell_center(row, column),
                        normal: WorldPoint::UP,
                    },
                );
                self.store.set_visible(index, true);
            }
        }
    }

    fn floor_pass(&mut self, oracle: &dyn TerrainOracle) {
        if self.config.floor_mask == 0 {
            return;
        }
        for index in self.indices() {
            let Some(position) = self.store.position(index) else {
                continue;
            };
            match oracle.floor_hit(position) {
                Some(hit) => {
                    self.store.set_transform(
                        index,
                        CellTransform {
                            position: hit.position,
                            normal: hit.normal,
                        },
                    );
                    self.store.set_walkable(index, true);
                    self.store.set_reachable(index, true);
                    self.store.set_visible(index, true);
                }
                None => {
                    self.store.set_in_void(index, true);
                    self.store.set_walkable(index, false);
                }
            }
        }
    }

    fn obstacle_pass(&mut self, oracle: &dyn TerrainOracle) {
        if self.config.obstacle_mask == 0 {
            return;
        }
        for index in self.indices() {
            let Some(position) = self.store.position(index) else {
                continue;
            };
            if oracle.obstacle_overlap(position, self.config.cell_size, self.config.obstacle_mask)
            {
                self.store.set_walkable(index, false);
            }
        }
    }

    fn custom_pass(&mut self, oracle: &dyn TerrainOracle) {
        for index in self.indices() {
            if self.store.is_in_void(index) {
                continue;
            }
            let Some(position) = self.store.position(index) else {
                continue;
            };
            let layers = oracle.custom_layers(position);
            for descriptor in &self.custom_data {
                if descriptor.collision_layer == 0 || descriptor.layer_mask.is_empty() {
                    continue;
                }
                if descriptor.matches_layers(layers) {
                    self.store.apply_descriptor(index, descriptor);
                }
            }
        }
    }

    fn rebuild_connectivity(&mut self) {
        let store = &self.store;
        self.connectivity = build_connectivity(
            self.config.rows,
            self.config.columns,
            self.config.movement,
            |index| store.is_walkable(index),
        );
    }

    fn indices(&self) -> impl Iterator<Item = CellIndex> {
        (0..self.store.len() as u32).map(CellIndex)
    }

    /// Bounds check with a diagnostic, for index-taking operations.
    fn in_bounds(&self, index: CellIndex) -> bool {
        if index.as_usize() < self.store.len() {
            true
        } else {
            warn!(
                "cell index {index} out of bounds for {} cells; ignoring",
                self.store.len()
            );
            false
        }
    }

    // ── Interaction ────────────────────────────────────────────

    /// Process a pointer position for hover highlighting.
    ///
    /// Ignored while the grid is hidden, mid-batch, or hover is
    /// disabled. Moving off the grid or onto a hidden cell clears the
    /// current hover; only walkable, reachable, unselected cells take
    /// the highlight.
    pub fn hover(&mut self, position: WorldPoint) {
        if !self.visible || !self.is_centered() || !self.is_hover_enabled() {
            return;
        }
        let nearest = self.nearest_cell(position);
        let Some(index) = nearest else {
            self.clear_hover();
            return;
        };
        if !self.store.is_visible(index) {
            self.clear_hover();
            return;
        }
        if self.hovered == Some(index) {
            return;
        }
        self.clear_hover();
        if !self.store.is_walkable(index) {
            return;
        }
        if !self.store.is_reachable(index) {
            return;
        }
        if !self.store.is_selected(index) {
            self.hovered = Some(index);
            self.store.set_hovered(index, true);
        }
    }

    /// Drop the current hover highlight, restoring the cell's custom
    /// or walkable color unless it is selected.
    fn clear_hover(&mut self) {
        let Some(index) = self.hovered.take() else {
            return;
        };
        self.store.set_hovered(index, false);
        if !self.store.is_selected(index) {
            let restore = self
                .store
                .get(index)
                .and_then(|cell| cell.custom_color)
                .unwrap_or(self.store.palette().walkable);
            self.store.set_color(index, restore);
        }
    }

    /// The currently hovered cell.
    pub fn hovered_cell(&self) -> Option<CellIndex> {
        self.hovered
    }

    /// Select a cell, appending it to the selection history.
    ///
    /// Ignored while the grid is hidden, and for hidden, unreachable
    /// or unwalkable cells.
    pub fn select(&mut self, index: CellIndex) {
        if !self.visible {
            return;
        }
        if !self.in_bounds(index) {
            return;
        }
        if !self.store.is_visible(index) {
            return;
        }
        if !self.store.is_reachable(index) {
            return;
        }
        if self.store.is_walkable(index) {
            self.store.set_selected(index, true);
            self.selected.push(index);
        }
    }

    /// Every selected cell, in selection order.
    pub fn selected_cells(&self) -> &[CellIndex] {
        &self.selected
    }

    /// The most recently selected cell.
    pub fn latest_selected(&self) -> Option<CellIndex> {
        self.selected.last().copied()
    }

    /// Mark every cell of `path` as on-path and paint it with the path
    /// color. Previous path marks are not cleared; re-center or reset
    /// to drop them.
    pub fn highlight_path(&mut self, path: &[CellIndex]) {
        for &index in path {
            self.store.set_on_path(index, true);
        }
    }

    /// Reset every cell to its freshly-created state and clear all
    /// interaction bookkeeping: custom data bits, flags, hover,
    /// selection history, and the sticky hidden markers.
    pub fn reset_cells_state(&mut self) {
        if !self.is_created() {
            warn!("reset_cells_state ignored: grid has not been created");
            return;
        }
        for index in self.indices() {
            self.store.reset_state(index);
        }
        self.flags
            .remove(GridFlags::UNREACHABLE_HIDDEN | GridFlags::DISTANT_HIDDEN);
        self.hovered = None;
        self.selected.clear();
    }

    /// Enable or disable hover processing. Ignored until created.
    pub fn set_hover_enabled(&mut self, enabled: bool) {
        if !self.is_created() {
            warn!("set_hover_enabled ignored: grid has not been created");
            return;
        }
        self.flags.set(GridFlags::HOVER_ENABLED, enabled);
    }

    /// Show or hide the whole grid, fanning out to every cell.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        for index in self.indices() {
            self.store.set_visible(index, visible);
        }
    }

    // ── Analysis ───────────────────────────────────────────────

    /// Mark every walkable cell not connected to `start` unreachable.
    ///
    /// Rebuilds connectivity first so the flood sees current
    /// walkability. Sticky: once run, further calls are ignored until
    /// the next reset or centering clears the marker.
    pub fn compute_unreachable_cells(&mut self, start: CellIndex) {
        if !self.in_bounds(start) {
            return;
        }
        if !self.visible || self.flags.contains(GridFlags::UNREACHABLE_HIDDEN) {
            return;
        }
        self.rebuild_connectivity();
        let store = &self.store;
        let unreachable = unreachable_cells(
            &self.connectivity.neighbour_lists,
            |index| store.is_walkable(index),
            start,
        );
        for index in unreachable {
            self.store.set_reachable(index, false);
        }
        self.flags.insert(GridFlags::UNREACHABLE_HIDDEN);
    }

    /// Hide every cell farther than `distance` from `start` and strip
    /// its walkability. Sticky like
    /// [`compute_unreachable_cells`](Self::compute_unreachable_cells).
    pub fn hide_distant_cells(&mut self, start: CellIndex, distance: f32) {
        if !self.in_bounds(start) {
            return;
        }
        if !self.visible || self.flags.contains(GridFlags::DISTANT_HIDDEN) {
            return;
        }
        let Some(origin) = self.store.position(start) else {
            return;
        };
        for index in self.indices() {
            let Some(position) = self.store.position(index) else {
                continue;
            };
            if origin.distance_to(position) > distance {
                self.store.set_visible(index, false);
                self.store.remove_flags(index, CellFlags::WALKABLE);
            }
        }
        self.flags.insert(GridFlags::DISTANT_HIDDEN);
    }

    // ── Queries ────────────────────────────────────────────────

    /// The cell under a world position, or `None` when the position is
    /// outside the grid's bounding window or the grid is not created.
    ///
    /// Scans the cells' actual (floor-aligned) positions, not the raw
    /// tessellation centers, so sloped terrain hovers correctly.
    pub fn nearest_cell(&self, position: WorldPoint) -> Option<CellIndex> {
        if !self.is_created() {
            warn!("nearest_cell: grid has not been created");
            return None;
        }
        let layout = self.layout.as_ref()?;
        if !layout.contains(position) {
            return None;
        }
        let mut closest = None;
        let mut closest_distance = f32::MAX;
        for index in self.indices() {
            if let Some(cell_position) = self.store.position(index) {
                let distance = position.distance_to(cell_position);
                if distance < closest_distance {
                    closest_distance = distance;
                    closest = Some(index);
                }
            }
        }
        closest
    }

    /// Shortest path from `start` to `target` over the current
    /// connectivity snapshot, both ends inclusive. Empty when the grid
    /// is not created, either endpoint is unwalkable, or no route
    /// exists.
    pub fn path(&self, start: CellIndex, target: CellIndex) -> Vec<CellIndex> {
        if !self.is_created() {
            warn!("path ignored: grid has not been created");
            return Vec::new();
        }
        shortest_path(&self.connectivity.graph, start, target)
    }

    /// Structural neighbors of a cell for the active movement model,
    /// regardless of walkability. Empty until the first rebuild.
    pub fn neighbours(&self, index: CellIndex) -> &[CellIndex] {
        self.connectivity
            .neighbour_lists
            .get(index.as_usize())
            .map_or(&[], |list| list.as_slice())
    }

    /// World placement of a cell.
    pub fn cell_transform(&self, index: CellIndex) -> Option<CellTransform> {
        self.store.transform(index)
    }

    /// World position of a cell.
    pub fn cell_position(&self, index: CellIndex) -> Option<WorldPoint> {
        self.store.position(index)
    }

    /// The color a renderer should draw a cell with.
    pub fn cell_color(&self, index: CellIndex) -> Option<Rgba> {
        self.store.render_color(index)
    }

    /// The anchor position of the last centering.
    pub fn center_position(&self) -> Option<WorldPoint> {
        self.layout.as_ref().map(|layout| layout.center())
    }

    /// Direct read access to the cell store.
    pub fn cells(&self) -> &CellStore {
        &self.store
    }

    // ── Custom cell data ───────────────────────────────────────

    /// Replace the descriptor table.
    pub fn set_custom_data(&mut self, descriptors: Vec<CustomCellData>) {
        self.custom_data = descriptors;
    }

    /// The descriptor table.
    pub fn custom_data(&self) -> &[CustomCellData] {
        &self.custom_data
    }

    /// Apply every descriptor named `name` to a cell by hand, outside
    /// any oracle scan.
    pub fn apply_custom_data(&mut self, index: CellIndex, name: &str) {
        if !self.in_bounds(index) {
            return;
        }
        for descriptor in &self.custom_data {
            if descriptor.name == name {
                self.store.apply_descriptor(index, descriptor);
            }
        }
    }

    /// Whether the cell carries all the bits of a descriptor named
    /// `name`.
    pub fn has_custom_data(&self, index: CellIndex, name: &str) -> bool {
        self.in_bounds(index)
            && self
                .custom_data
                .iter()
                .any(|d| d.name == name && self.store.has_descriptor(index, d))
    }

    /// Remove the bits of every descriptor named `name` from a cell.
    /// With `clear_color`, the override color is dropped and the
    /// walkable color restored.
    pub fn clear_custom_data(&mut self, index: CellIndex, name: &str, clear_color: bool) {
        if !self.in_bounds(index) {
            return;
        }
        for descriptor in &self.custom_data {
            if descriptor.name == name {
                self.store.clear_descriptor(index, descriptor, clear_color);
            }
        }
    }

    /// Remove every applied descriptor bit from a cell.
    pub fn clear_all_custom_data(&mut self, index: CellIndex) {
        if !self.in_bounds(index) {
            return;
        }
        self.store.clear_all_custom(index);
    }

    // ── Configuration setters ──────────────────────────────────

    /// Change the row count. Destroys the grid; re-create to apply.
    pub fn set_rows(&mut self, rows: u32) {
        self.config.rows = rows;
        self.destroy();
    }

    /// Change the column count. Destroys the grid.
    pub fn set_columns(&mut self, columns: u32) {
        self.config.columns = columns;
        self.destroy();
    }

    /// Change the cell footprint. Destroys the grid.
    pub fn set_cell_size(&mut self, cell_size: CellExtent) {
        self.config.cell_size = cell_size;
        self.destroy();
    }

    /// Switch between square and hexagonal tessellation. Destroys the
    /// grid.
    pub fn set_layout(&mut self, layout: LayoutKind) {
        self.config.layout = layout;
        self.destroy();
    }

    /// Switch the movement model. Takes effect at the next rebuild; no
    /// destroy needed.
    pub fn set_movement(&mut self, movement: MovementModel) {
        self.config.movement = movement;
    }

    /// Change the walkable base color. Destroys the grid: this color
    /// is baked into every cell at creation.
    pub fn set_walkable_color(&mut self, color: Rgba) {
        self.config.palette.walkable = color;
        self.destroy();
    }

    /// Change the unwalkable color. Destroys the grid.
    pub fn set_unwalkable_color(&mut self, color: Rgba) {
        self.config.palette.unwalkable = color;
        self.destroy();
    }

    /// Change the unreachable highlight color.
    pub fn set_unreachable_color(&mut self, color: Rgba) {
        self.config.palette.unreachable = color;
        self.store.set_palette(self.config.palette.clone());
    }

    /// Change the selection highlight color.
    pub fn set_selected_color(&mut self, color: Rgba) {
        self.config.palette.selected = color;
        self.store.set_palette(self.config.palette.clone());
    }

    /// Change the path highlight color.
    pub fn set_path_color(&mut self, color: Rgba) {
        self.config.palette.path = color;
        self.store.set_palette(self.config.palette.clone());
    }

    /// Change the hover highlight color.
    pub fn set_hovered_color(&mut self, color: Rgba) {
        self.config.palette.hovered = color;
        self.store.set_palette(self.config.palette.clone());
    }

    /// Change the obstacle scan mask. Zero disables the scan.
    pub fn set_obstacle_mask(&mut self, mask: u32) {
        self.config.obstacle_mask = mask;
    }

    /// Change the floor probe mask. Zero disables the pass.
    pub fn set_floor_mask(&mut self, mask: u32) {
        self.config.floor_mask = mask;
    }
}
