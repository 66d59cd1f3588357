//! Bitflag state for cells and grids.

use bitflags::bitflags;

bitflags! {
    /// Per-cell state flags.
    ///
    /// The low byte holds the built-in flags. Bits 8..32 are reserved for
    /// custom cell-data layer masks and are never touched by the built-in
    /// operations; see [`CellFlags::CUSTOM_MASK`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellFlags: u32 {
        /// Cell can be traversed and used as a path endpoint.
        const WALKABLE = 1 << 0;
        /// Cell is connected to the latest reachability origin.
        const REACHABLE = 1 << 1;
        /// No floor exists under the cell; it hangs over the void.
        const IN_VOID = 1 << 2;
        /// Cell is the current hover target.
        const HOVERED = 1 << 3;
        /// Cell has been selected.
        const SELECTED = 1 << 4;
        /// Cell lies on the most recently highlighted path.
        const ON_PATH = 1 << 5;
        /// Cell is shown at all.
        const VISIBLE = 1 << 6;

        /// All bits available to custom cell-data descriptors.
        const CUSTOM_MASK = !0xFF;
    }
}

impl CellFlags {
    /// The custom-descriptor bits of this flag set, with the built-in
    /// byte stripped.
    pub fn custom_bits(self) -> CellFlags {
        self & Self::CUSTOM_MASK
    }
}

bitflags! {
    /// Whole-grid lifecycle and mode flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GridFlags: u32 {
        /// Cell storage and layout exist.
        const CREATED = 1 << 0;
        /// A centering pass has completed since the last structural change.
        const CENTERED = 1 << 1;
        /// Unreachable cells have been hidden; sticky until reset.
        const UNREACHABLE_HIDDEN = 1 << 2;
        /// Distant cells have been hidden; sticky until reset.
        const DISTANT_HIDDEN = 1 << 3;
        /// Hover processing is active.
        const HOVER_ENABLED = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_mask_excludes_builtins() {
        let builtin = CellFlags::WALKABLE
            | CellFlags::REACHABLE
            | CellFlags::IN_VOID
            | CellFlags::HOVERED
            | CellFlags::SELECTED
            | CellFlags::ON_PATH
            | CellFlags::VISIBLE;
        assert!((builtin & CellFlags::CUSTOM_MASK).is_empty());
    }

    #[test]
    fn custom_bits_strip_low_byte() {
        let layer = CellFlags::from_bits_retain(1 << 12);
        let flags = CellFlags::WALKABLE | CellFlags::VISIBLE | layer;
        assert_eq!(flags.custom_bits(), layer);
    }
}
