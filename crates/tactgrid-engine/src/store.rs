//! Bounds-checked storage for per-cell state.

use crate::cell::{Cell, CellTransform};
use log::warn;
use tactgrid_core::{CellFlags, CellIndex, GridPalette, Rgba, WorldPoint};

use crate::custom::CustomCellData;

/// Owns every [`Cell`] of a grid and enforces the recolor rules.
///
/// All mutation goes through bounds-checked methods: an out-of-range
/// index is logged with `warn!` and ignored rather than surfaced as an
/// error, so a stray index from an interaction event cannot corrupt or
/// abort a batch. Flag getters return `false` for out-of-range indices.
///
/// When `flags_via_alpha` is set, every recolor writes the cell's flag
/// bits into the stored alpha channel; flag-only mutations leave the
/// alpha stale until the next recolor or [`refresh_alpha`] pass, which
/// is how the centering batch uses it.
///
/// [`refresh_alpha`]: CellStore::refresh_alpha
#[derive(Clone, Debug)]
pub struct CellStore {
    cells: Vec<Cell>,
    palette: GridPalette,
    flags_via_alpha: bool,
}

impl CellStore {
    /// A store of `cell_count` cells, all flags clear, painted with the
    /// palette's walkable color.
    pub fn new(cell_count: usize, palette: GridPalette, flags_via_alpha: bool) -> Self {
        let cells = vec![Cell::new(palette.walkable); cell_count];
        Self {
            cells,
            palette,
            flags_via_alpha,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the store holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The active palette.
    pub fn palette(&self) -> &GridPalette {
        &self.palette
    }

    /// Replace the palette. Existing cell colors are not repainted.
    pub fn set_palette(&mut self, palette: GridPalette) {
        self.palette = palette;
    }

    /// Read access to a cell.
    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index.as_usize())
    }

    /// Bounds check with a diagnostic on failure.
    fn checked(&self, index: CellIndex) -> Option<usize> {
        let i = index.as_usize();
        if i < self.cells.len() {
            Some(i)
        } else {
            warn!(
                "cell index {index} out of bounds for {} cells; ignoring",
                self.cells.len()
            );
            None
        }
    }

    fn has_flag(&self, index: CellIndex, flag: CellFlags) -> bool {
        self.get(index).is_some_and(|c| c.flags.contains(flag))
    }

    /// Whether the cell can be traversed.
    pub fn is_walkable(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::WALKABLE)
    }

    /// Whether the cell is connected to the last reachability origin.
    pub fn is_reachable(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::REACHABLE)
    }

    /// Whether the cell hangs over the void.
    pub fn is_in_void(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::IN_VOID)
    }

    /// Whether the cell is the current hover target.
    pub fn is_hovered(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::HOVERED)
    }

    /// Whether the cell is selected.
    pub fn is_selected(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::SELECTED)
    }

    /// Whether the cell is on the highlighted path.
    pub fn is_on_path(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::ON_PATH)
    }

    /// Whether the cell is shown.
    pub fn is_visible(&self, index: CellIndex) -> bool {
        self.has_flag(index, CellFlags::VISIBLE)
    }

    /// Set the cell's display color.
    ///
    /// With flag encoding on, the stored alpha becomes the cell's flag
    /// bits rather than the color's own alpha.
    pub fn set_color(&mut self, index: CellIndex, color: Rgba) {
        let Some(i) = self.checked(index) else {
            return;
        };
        let cell = &mut self.cells[i];
        cell.color = if self.flags_via_alpha {
            color.with_alpha(cell.flags.bits() as f32)
        } else {
            color
        };
    }

    /// Set or clear walkability, repainting with the walkable or
    /// unwalkable palette color.
    pub fn set_walkable(&mut self, index: CellIndex, walkable: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if walkable {
            self.cells[i].flags.insert(CellFlags::WALKABLE);
            self.set_color(index, self.palette.walkable);
        } else {
            self.cells[i].flags.remove(CellFlags::WALKABLE);
            self.set_color(index, self.palette.unwalkable);
        }
    }

    /// Set or clear reachability. Clearing repaints with the
    /// unreachable color; setting leaves the color alone.
    pub fn set_reachable(&mut self, index: CellIndex, reachable: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if reachable {
            self.cells[i].flags.insert(CellFlags::REACHABLE);
        } else {
            self.cells[i].flags.remove(CellFlags::REACHABLE);
            self.set_color(index, self.palette.unreachable);
        }
    }

    /// Show or hide the cell. Showing re-applies the current color so
    /// the encoded alpha picks up any flag changes; hiding only clears
    /// the flag and [`render_color`](Self::render_color) zeroes the
    /// alpha.
    ///
    /// In-void cells refuse to show: the void mark forces them hidden
    /// until it is cleared.
    pub fn set_visible(&mut self, index: CellIndex, visible: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if visible {
            if self.cells[i].flags.contains(CellFlags::IN_VOID) {
                return;
            }
            self.cells[i].flags.insert(CellFlags::VISIBLE);
            let current = self.cells[i].color;
            self.set_color(index, current);
        } else {
            self.cells[i].flags.remove(CellFlags::VISIBLE);
        }
    }

    /// Mark or unmark the cell as hanging over the void. Marking also
    /// hides the cell.
    pub fn set_in_void(&mut self, index: CellIndex, in_void: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if in_void {
            self.cells[i].flags.insert(CellFlags::IN_VOID);
            self.set_visible(index, false);
        } else {
            self.cells[i].flags.remove(CellFlags::IN_VOID);
        }
    }

    /// Set or clear the hover mark; setting paints the hovered color.
    pub fn set_hovered(&mut self, index: CellIndex, hovered: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if hovered {
            self.cells[i].flags.insert(CellFlags::HOVERED);
            self.set_color(index, self.palette.hovered);
        } else {
            self.cells[i].flags.remove(CellFlags::HOVERED);
        }
    }

    /// Set or clear selection; setting paints the selected color.
    pub fn set_selected(&mut self, index: CellIndex, selected: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if selected {
            self.cells[i].flags.insert(CellFlags::SELECTED);
            self.set_color(index, self.palette.selected);
        } else {
            self.cells[i].flags.remove(CellFlags::SELECTED);
        }
    }

    /// Set or clear the path mark; setting paints the path color.
    pub fn set_on_path(&mut self, index: CellIndex, on_path: bool) {
        let Some(i) = self.checked(index) else {
            return;
        };
        if on_path {
            self.cells[i].flags.insert(CellFlags::ON_PATH);
            self.set_color(index, self.palette.path);
        } else {
            self.cells[i].flags.remove(CellFlags::ON_PATH);
        }
    }

    /// Apply a custom descriptor to the cell: OR its mask into the flag
    /// accumulators and paint its override color if it has one.
    pub fn apply_descriptor(&mut self, index: CellIndex, descriptor: &CustomCellData) {
        let Some(i) = self.checked(index) else {
            return;
        };
        self.cells[i].custom_flags.insert(descriptor.layer_mask);
        self.cells[i].flags.insert(descriptor.layer_mask);
        if let Some(color) = descriptor.color {
            self.cells[i].custom_color = Some(color);
            self.set_color(index, color);
        }
    }

    /// Whether the cell carries every bit of the descriptor's mask.
    pub fn has_descriptor(&self, index: CellIndex, descriptor: &CustomCellData) -> bool {
        !descriptor.layer_mask.is_empty()
            && self
                .get(index)
                .is_some_and(|c| c.flags.contains(descriptor.layer_mask))
    }

    /// Remove a descriptor's bits from the cell. With `clear_color`,
    /// the override color is dropped and the walkable color restored.
    pub fn clear_descriptor(
        &mut self,
        index: CellIndex,
        descriptor: &CustomCellData,
        clear_color: bool,
    ) {
        let Some(i) = self.checked(index) else {
            return;
        };
        self.cells[i].flags.remove(descriptor.layer_mask);
        self.cells[i].custom_flags.remove(descriptor.layer_mask);
        if clear_color {
            self.cells[i].custom_color = None;
            self.set_color(index, self.palette.walkable);
        }
    }

    /// Remove every applied custom descriptor bit, drop the override
    /// color, and restore the walkable color.
    pub fn clear_all_custom(&mut self, index: CellIndex) {
        let Some(i) = self.checked(index) else {
            return;
        };
        let custom = self.cells[i].flags.custom_bits();
        self.cells[i].flags.remove(custom);
        self.cells[i].custom_flags = CellFlags::empty();
        self.cells[i].custom_color = None;
        self.set_color(index, self.palette.walkable);
    }

    /// Reset a cell to its freshly-created state: no custom data, no
    /// flags, walkable.
    pub fn reset_state(&mut self, index: CellIndex) {
        let Some(i) = self.checked(index) else {
            return;
        };
        self.clear_all_custom(index);
        self.cells[i].flags = CellFlags::empty();
        self.set_walkable(index, true);
    }

    /// Rewrite every cell's stored alpha from its current flag bits.
    ///
    /// No-op when flag encoding is off. Run at the end of a batch so
    /// flag-only mutations since the last recolor become visible.
    pub fn refresh_alpha(&mut self) {
        if !self.flags_via_alpha {
            return;
        }
        for cell in &mut self.cells {
            cell.color.a = cell.flags.bits() as f32;
        }
    }

    /// The color a renderer should draw the cell with: the stored
    /// color, fully transparent when the cell is hidden.
    pub fn render_color(&self, index: CellIndex) -> Option<Rgba> {
        self.get(index).map(|c| {
            if c.flags.contains(CellFlags::VISIBLE) {
                c.color
            } else {
                c.color.with_alpha(0.0)
            }
        })
    }

    /// The cell's world placement.
    pub fn transform(&self, index: CellIndex) -> Option<CellTransform> {
        self.get(index).map(|c| c.transform)
    }

    /// The cell's world position.
    pub fn position(&self, index: CellIndex) -> Option<WorldPoint> {
        self.get(index).map(|c| c.transform.position)
    }

    /// Replace the cell's world placement.
    pub fn set_transform(&mut self, index: CellIndex, transform: CellTransform) {
        let Some(i) = self.checked(index) else {
            return;
        };
        self.cells[i].transform = transform;
    }

    /// Clear flag bits without any repaint.
    ///
    /// Used when a cell is being hidden wholesale and the usual
    /// unwalkable recolor would be wasted on an invisible cell.
    pub fn remove_flags(&mut self, index: CellIndex, flags: CellFlags) {
        let Some(i) = self.checked(index) else {
            return;
        };
        self.cells[i].flags.remove(flags);
    }
}
