//! Integration test: hover, selection and path highlighting.
//!
//! Drives the interaction surface the way an input layer would: pointer
//! positions into [`GridState::hover`], click targets into
//! [`GridState::select`], and checks the gates, the highlight colors
//! and the restore rules on the way out.

use tactgrid_core::{CellFlags, CellIndex, Rgba, WorldPoint};
use tactgrid_engine::config::DEFAULT_OBSTACLE_MASK;
use tactgrid_engine::{CustomCellData, GridConfig, GridState};
use tactgrid_space::MovementModel;
use tactgrid_test_utils::{FlatTerrain, ScriptedTerrain};

fn created_3x3() -> GridState {
    let mut grid = GridState::new(GridConfig {
        rows: 3,
        columns: 3,
        ..GridConfig::default()
    });
    grid.create(&FlatTerrain::default(), WorldPoint::ZERO)
        .unwrap();
    grid
}

fn cell_pos(row: i32, column: i32) -> WorldPoint {
    WorldPoint::new(column as f32 - 1.0, 0.0, row as f32 - 1.0)
}

// ── Hover ────────────────────────────────────────────────────────────

#[test]
fn hover_highlights_the_nearest_cell() {
    let mut grid = created_3x3();
    grid.hover(WorldPoint::new(0.1, 0.0, -0.1));
    assert_eq!(grid.hovered_cell(), Some(CellIndex(4)));
    assert!(grid.cells().is_hovered(CellIndex(4)));

    let hovered = grid.config().palette.hovered;
    let color = grid.cell_color(CellIndex(4)).unwrap();
    assert_eq!((color.r, color.g, color.b), (hovered.r, hovered.g, hovered.b));
}

#[test]
fn hover_moving_between_cells_restores_the_old_one() {
    let mut grid = created_3x3();
    grid.hover(cell_pos(1, 1));
    grid.hover(cell_pos(1, 2));

    assert_eq!(grid.hovered_cell(), Some(CellIndex(5)));
    assert!(!grid.cells().is_hovered(CellIndex(4)));
    let walkable = grid.config().palette.walkable;
    let color = grid.cell_color(CellIndex(4)).unwrap();
    assert_eq!(
        (color.r, color.g, color.b),
        (walkable.r, walkable.g, walkable.b)
    );
}

#[test]
fn hover_off_the_grid_clears_the_highlight() {
    let mut grid = created_3x3();
    grid.hover(cell_pos(1, 1));
    grid.hover(WorldPoint::new(100.0, 0.0, 100.0));
    assert_eq!(grid.hovered_cell(), None);
    assert!(!grid.cells().is_hovered(CellIndex(4)));
}

#[test]
fn hover_ignores_unwalkable_cells() {
    let terrain =
        ScriptedTerrain::at_height(0.0).with_obstacle(cell_pos(1, 1), 0.1, DEFAULT_OBSTACLE_MASK);
    let mut grid = GridState::new(GridConfig {
        rows: 3,
        columns: 3,
        ..GridConfig::default()
    });
    grid.create(&terrain, WorldPoint::ZERO).unwrap();

    grid.hover(cell_pos(1, 0));
    assert_eq!(grid.hovered_cell(), Some(CellIndex(3)));
    // Moving onto the obstacle clears the old hover and takes nothing.
    grid.hover(cell_pos(1, 1));
    assert_eq!(grid.hovered_cell(), None);
    assert!(!grid.cells().is_hovered(CellIndex(3)));
}

#[test]
fn hover_skips_selected_cells() {
    let mut grid = created_3x3();
    grid.select(CellIndex(4));
    grid.hover(cell_pos(1, 1));
    assert_eq!(grid.hovered_cell(), None);
    // The selection highlight stays put.
    assert!(grid.cells().is_selected(CellIndex(4)));
}

#[test]
fn hover_is_gated_on_visibility_and_enablement() {
    let mut grid = created_3x3();
    grid.set_hover_enabled(false);
    grid.hover(cell_pos(1, 1));
    assert_eq!(grid.hovered_cell(), None);

    grid.set_hover_enabled(true);
    grid.set_visible(false);
    grid.hover(cell_pos(1, 1));
    assert_eq!(grid.hovered_cell(), None);
}

#[test]
fn hover_restore_prefers_the_custom_color() {
    let mud = CustomCellData::new("mud", CellFlags::from_bits_retain(1 << 9))
        .with_collision_layer(0b1)
        .with_color(Rgba::new(0.4, 0.3, 0.2, 1.0));
    let mut grid = created_3x3();
    grid.set_custom_data(vec![mud]);
    grid.apply_custom_data(CellIndex(4), "mud");

    grid.hover(cell_pos(1, 1));
    grid.hover(cell_pos(1, 2));

    let color = grid.cell_color(CellIndex(4)).unwrap();
    assert_eq!((color.r, color.g, color.b), (0.4, 0.3, 0.2));
}

// ── Selection ────────────────────────────────────────────────────────

#[test]
fn selection_history_keeps_order_and_repeats() {
    let mut grid = created_3x3();
    grid.select(CellIndex(0));
    grid.select(CellIndex(8));
    grid.select(CellIndex(0));

    assert_eq!(
        grid.selected_cells(),
        &[CellIndex(0), CellIndex(8), CellIndex(0)]
    );
    assert_eq!(grid.latest_selected(), Some(CellIndex(0)));
    let selected = grid.config().palette.selected;
    let color = grid.cell_color(CellIndex(8)).unwrap();
    assert_eq!(
        (color.r, color.g, color.b),
        (selected.r, selected.g, selected.b)
    );
}

#[test]
fn selecting_unwalkable_or_out_of_range_cells_is_ignored() {
    let terrain =
        ScriptedTerrain::at_height(0.0).with_obstacle(cell_pos(1, 1), 0.1, DEFAULT_OBSTACLE_MASK);
    let mut grid = GridState::new(GridConfig {
        rows: 3,
        columns: 3,
        ..GridConfig::default()
    });
    grid.create(&terrain, WorldPoint::ZERO).unwrap();

    grid.select(CellIndex(4));
    grid.select(CellIndex(99));
    assert!(grid.selected_cells().is_empty());
    assert_eq!(grid.latest_selected(), None);
}

#[test]
fn selecting_on_a_hidden_grid_is_ignored() {
    let mut grid = created_3x3();
    grid.set_visible(false);
    grid.select(CellIndex(4));
    assert!(grid.selected_cells().is_empty());
}

#[test]
fn selecting_a_hovered_cell_shows_the_selection_color() {
    let mut grid = created_3x3();
    grid.hover(cell_pos(1, 1));
    grid.select(CellIndex(4));

    let selected = grid.config().palette.selected;
    let color = grid.cell_color(CellIndex(4)).unwrap();
    assert_eq!(
        (color.r, color.g, color.b),
        (selected.r, selected.g, selected.b)
    );
}

// ── Path highlighting ────────────────────────────────────────────────

#[test]
fn highlight_path_paints_every_cell_on_it() {
    let mut grid = created_3x3();
    let path = grid.path(CellIndex(0), CellIndex(2));
    assert_eq!(path, vec![CellIndex(0), CellIndex(1), CellIndex(2)]);

    grid.highlight_path(&path);
    let palette_path = grid.config().palette.path;
    for &index in &path {
        assert!(grid.cells().is_on_path(index));
        let color = grid.cell_color(index).unwrap();
        assert_eq!(
            (color.r, color.g, color.b),
            (palette_path.r, palette_path.g, palette_path.b)
        );
    }
}

#[test]
fn highlight_path_does_not_clear_earlier_marks() {
    let mut grid = created_3x3();
    grid.highlight_path(&[CellIndex(0)]);
    grid.highlight_path(&[CellIndex(8)]);
    assert!(grid.cells().is_on_path(CellIndex(0)));
    assert!(grid.cells().is_on_path(CellIndex(8)));
}

// ── Reset ────────────────────────────────────────────────────────────

#[test]
fn reset_clears_interaction_state() {
    let mut grid = created_3x3();
    grid.select(CellIndex(0));
    grid.hover(cell_pos(1, 1));
    grid.highlight_path(&[CellIndex(8)]);

    grid.reset_cells_state();

    assert!(grid.selected_cells().is_empty());
    assert_eq!(grid.hovered_cell(), None);
    assert!(!grid.cells().is_on_path(CellIndex(8)));
    assert!(!grid.cells().is_selected(CellIndex(0)));
    assert!(grid.cells().is_walkable(CellIndex(4)));
}

#[test]
fn reset_is_idempotent() {
    let mut grid = created_3x3();
    grid.select(CellIndex(0));
    grid.highlight_path(&[CellIndex(8)]);

    grid.reset_cells_state();
    let after_one: Vec<_> = (0..9)
        .map(|i| grid.cells().get(CellIndex(i)).unwrap().flags)
        .collect();
    grid.reset_cells_state();
    let after_two: Vec<_> = (0..9)
        .map(|i| grid.cells().get(CellIndex(i)).unwrap().flags)
        .collect();
    assert_eq!(after_one, after_two);
}

// ── Configuration setters ────────────────────────────────────────────

#[test]
fn structural_setters_destroy_the_grid() {
    let mut grid = created_3x3();
    grid.set_rows(5);
    assert!(!grid.is_created());

    grid.create(&FlatTerrain::default(), WorldPoint::ZERO)
        .unwrap();
    grid.set_cell_size(tactgrid_core::CellExtent { x: 2.0, y: 2.0 });
    assert!(!grid.is_created());
}

#[test]
fn movement_and_highlight_color_setters_do_not_destroy() {
    let mut grid = created_3x3();
    grid.set_movement(MovementModel::EightDirection);
    grid.set_hovered_color(Rgba::new(1.0, 0.0, 1.0, 1.0));
    assert!(grid.is_created());
    assert!(grid.is_centered());

    // The new hover color is live immediately.
    grid.hover(cell_pos(1, 1));
    let color = grid.cell_color(CellIndex(4)).unwrap();
    assert_eq!((color.r, color.g, color.b), (1.0, 0.0, 1.0));
}
