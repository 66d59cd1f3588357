//! Colors and the default grid palette.

/// An RGBA color with `f32` channels in `[0, 1]`.
///
/// The alpha channel is special-cased by the engine: when flag encoding
/// is enabled, the rendered alpha carries the cell's raw flag bits so a
/// shader can branch on cell state without a separate data channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Build a color from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// This color with a replaced alpha channel.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// The colors used for each visual cell state.
///
/// The defaults match a blue-walkable / red-blocked / gold-hover scheme;
/// every entry can be overridden before the grid is centered.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPalette {
    /// Cells that can be traversed.
    pub walkable: Rgba,
    /// Cells blocked by terrain or obstacles.
    pub unwalkable: Rgba,
    /// Walkable cells disconnected from the reachability origin.
    pub unreachable: Rgba,
    /// The currently selected cells.
    pub selected: Rgba,
    /// Cells on the highlighted path.
    pub path: Rgba,
    /// The cell under the cursor.
    pub hovered: Rgba,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            walkable: Rgba::new(0.5, 0.65, 1.0, 1.0),
            unwalkable: Rgba::new(0.803_921_6, 0.360_784_32, 0.360_784_32, 1.0),
            unreachable: Rgba::new(1.0, 1.0, 1.0, 1.0),
            selected: Rgba::new(0.878_431_4, 1.0, 1.0, 1.0),
            path: Rgba::new(0.564_705_9, 0.933_333_34, 0.564_705_9, 1.0),
            hovered: Rgba::new(1.0, 0.843_137_26, 0.0, 1.0),
        }
    }
}
