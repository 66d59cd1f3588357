//! Terrain oracle stand-ins.

use tactgrid_core::{CellExtent, WorldPoint};
use tactgrid_engine::{FloorHit, TerrainOracle};

/// An infinite flat floor at a fixed height. No obstacles, no
/// metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatTerrain {
    /// Height of the floor plane.
    pub height: f32,
}

impl FlatTerrain {
    /// A flat floor at `height`.
    pub fn at_height(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainOracle for FlatTerrain {
    fn floor_hit(&self, point: WorldPoint) -> Option<FloorHit> {
        Some(FloorHit {
            position: WorldPoint::new(point.x, self.height, point.z),
            normal: WorldPoint::UP,
        })
    }

    fn obstacle_overlap(&self, _point: WorldPoint, _extent: CellExtent, _mask: u32) -> bool {
        false
    }

    fn custom_layers(&self, _point: WorldPoint) -> u32 {
        0
    }
}

/// A disk-shaped region on the XZ plane.
#[derive(Clone, Copy, Debug)]
struct Region {
    center: WorldPoint,
    radius: f32,
}

impl Region {
    fn contains(&self, point: WorldPoint) -> bool {
        let dx = point.x - self.center.x;
        let dz = point.z - self.center.z;
        (dx * dx + dz * dz).sqrt() <= self.radius
    }
}

/// A flat floor with scripted holes, obstacles and metadata layers.
///
/// Regions are disks on the XZ plane so a test can target single
/// cells (small radius at a cell center) or whole areas.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTerrain {
    height: f32,
    voids: Vec<Region>,
    obstacles: Vec<(Region, u32)>,
    layers: Vec<(Region, u32)>,
}

impl ScriptedTerrain {
    /// A flat floor at `height` with nothing scripted yet.
    pub fn at_height(height: f32) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    /// Floor probes within `radius` of `center` miss.
    pub fn with_void(mut self, center: WorldPoint, radius: f32) -> Self {
        self.voids.push(Region { center, radius });
        self
    }

    /// Obstacle overlaps within `radius` of `center` report `mask`.
    pub fn with_obstacle(mut self, center: WorldPoint, radius: f32, mask: u32) -> Self {
        self.obstacles.push((Region { center, radius }, mask));
        self
    }

    /// Layer queries within `radius` of `center` report `bits`.
    pub fn with_layers(mut self, center: WorldPoint, radius: f32, bits: u32) -> Self {
        self.layers.push((Region { center, radius }, bits));
        self
    }
}

impl TerrainOracle for ScriptedTerrain {
    fn floor_hit(&self, point: WorldPoint) -> Option<FloorHit> {
        if self.voids.iter().any(|region| region.contains(point)) {
            return None;
        }
        Some(FloorHit {
            position: WorldPoint::new(point.x, self.height, point.z),
            normal: WorldPoint::UP,
        })
    }

    fn obstacle_overlap(&self, point: WorldPoint, _extent: CellExtent, mask: u32) -> bool {
        self.obstacles
            .iter()
            .any(|(region, bits)| bits & mask != 0 && region.contains(point))
    }

    fn custom_layers(&self, point: WorldPoint) -> u32 {
        self.layers
            .iter()
            .filter(|(region, _)| region.contains(point))
            .fold(0, |acc, (_, bits)| acc | bits)
    }
}
