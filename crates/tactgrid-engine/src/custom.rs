//! Custom cell-data descriptors.

use tactgrid_core::{CellFlags, Rgba};

/// A named metadata layer cells can carry.
///
/// `layer_mask` is the bit pattern ORed into a matching cell's flags;
/// it must stay within [`CellFlags::CUSTOM_MASK`] or the built-in flags
/// would be corrupted. Masks of different descriptors are treated as
/// disjoint by contract; a bit shared between two descriptors makes
/// containment queries and per-descriptor clearing ambiguous, and that
/// is the caller's responsibility to avoid.
///
/// `collision_layer` selects which oracle-reported layer bits activate
/// the descriptor during the custom-metadata scan. Descriptors with a
/// zero `collision_layer` or zero `layer_mask` never match a scan, but
/// can still be applied by name.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomCellData {
    /// Name used to address the descriptor in the grid API.
    pub name: String,
    /// Flag bits contributed to matching cells.
    pub layer_mask: CellFlags,
    /// Collision-layer bits that activate this descriptor.
    pub collision_layer: u32,
    /// Override color painted on matching cells, if any.
    pub color: Option<Rgba>,
}

impl CustomCellData {
    /// A descriptor with no collision matching and no override color.
    pub fn new(name: impl Into<String>, layer_mask: CellFlags) -> Self {
        Self {
            name: name.into(),
            layer_mask,
            collision_layer: 0,
            color: None,
        }
    }

    /// Set the collision-layer match bits.
    pub fn with_collision_layer(mut self, collision_layer: u32) -> Self {
        self.collision_layer = collision_layer;
        self
    }

    /// Set the override color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Whether any of `layers` matches this descriptor's collision
    /// layer.
    pub fn matches_layers(&self, layers: u32) -> bool {
        self.collision_layer & layers != 0
    }
}
