use tracing::debug;

use super::block::BlockType;
use super::grid::VoxelGrid;

/// Tunables for the island generator.
///
/// Usage:
///   // defaults
///   let gen = IslandGenerator::new();
///
///   // or customize:
///   let mut config = TerrainConfig::default();
///   config.max_trees = 0; // bare island
///   let gen = IslandGenerator::with_config(config);
#[derive(Clone, Copy, Debug)]
pub struct TerrainConfig {
    /// Island radius as a fraction of the smaller horizontal grid dimension.
    pub radius_scale: f32,
    /// Column height at the island rim (mask 0).
    pub base_height: i32,
    /// Extra column height at the island center (mask 1).
    pub hill_amplitude: i32,
    /// How many layers below the grass cap stay dirt before stone takes over.
    pub dirt_depth: i32,

    // Tree scatter
    pub max_trees: usize,
    pub trunk_height: i32,
    /// Keep-out border so canopies stay inside the grid.
    pub tree_margin: i32,
    /// Column sampling stride along x and z.
    pub tree_stride: (i32, i32),
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            radius_scale: 0.45,
            base_height: 8,
            hill_amplitude: 8,
            dirt_depth: 4,

            max_trees: 8,
            trunk_height: 4,
            tree_margin: 4,
            tree_stride: (7, 9),
        }
    }
}

/// Fills a grid with a radial floating-island hill and a handful of trees.
///
/// Fully deterministic for a given grid size and config: the mask is a
/// linear falloff from the center and trees are sampled on a fixed stride,
/// so repeated runs produce identical worlds.
pub struct IslandGenerator {
    pub config: TerrainConfig,
}

impl IslandGenerator {
    pub fn new() -> Self {
        Self {
            config: TerrainConfig::default(),
        }
    }

    pub fn with_config(config: TerrainConfig) -> Self {
        Self { config }
    }

    /// Height of the (x, z) column before trees, 0 outside the island.
    pub fn column_height(&self, size: [i32; 3], x: i32, z: i32) -> i32 {
        let center_x = size[0] as f32 / 2.0;
        let center_z = size[2] as f32 / 2.0;
        let radius = size[0].min(size[2]) as f32 * self.config.radius_scale;

        let dx = x as f32 - center_x;
        let dz = z as f32 - center_z;
        let dist = (dx * dx + dz * dz).sqrt();
        let mask = 1.0 - (dist / radius).min(1.0);
        if mask <= 0.0 {
            return 0;
        }
        (mask * self.config.hill_amplitude as f32) as i32 + self.config.base_height
    }

    pub fn populate(&self, grid: &mut VoxelGrid) {
        let size = grid.size();

        for x in 0..size[0] {
            for z in 0..size[2] {
                let height = self.column_height(size, x, z);
                if height == 0 {
                    continue;
                }
                for y in 0..height.min(size[1]) {
                    let kind = if y == height - 1 {
                        BlockType::Grass
                    } else if y > height - self.config.dirt_depth {
                        BlockType::Dirt
                    } else {
                        BlockType::Stone
                    };
                    grid.set(x, y, z, kind);
                }
            }
        }

        let planted = self.scatter_trees(grid);
        debug!(trees = planted, ?size, "island terrain generated");
    }

    /// Samples flat grass columns on a fixed stride and plants trees on
    /// them until the cap is reached. Earlier trees shadow later sample
    /// points: a column whose top became leaves no longer qualifies.
    fn scatter_trees(&self, grid: &mut VoxelGrid) -> usize {
        let size = grid.size();
        let margin = self.config.tree_margin;
        let (stride_x, stride_z) = self.config.tree_stride;

        let mut planted = 0;
        let mut x = margin;
        while x < size[0] - margin && planted < self.config.max_trees {
            let mut z = margin;
            while z < size[2] - margin && planted < self.config.max_trees {
                if let Some(y) = grid.top_y(x, z) {
                    if y > 0 && grid.get(x, y, z) == BlockType::Grass {
                        self.plant_tree(grid, x, y + 1, z);
                        planted += 1;
                    }
                }
                z += stride_z;
            }
            x += stride_x;
        }
        planted
    }

    /// Vertical trunk topped by a diamond canopy that shrinks with height.
    /// Canopy cells overwrite the upper trunk cells where they overlap.
    fn plant_tree(&self, grid: &mut VoxelGrid, x: i32, y: i32, z: i32) {
        for i in 0..self.config.trunk_height {
            grid.set(x, y + i, z, BlockType::Wood);
        }
        let canopy_y = y + self.config.trunk_height;
        for dy in -2..=1 {
            let r: i32 = if dy == 1 { 1 } else { 2 };
            for dx in -r..=r {
                for dz in -r..=r {
                    if dx.abs() + dz.abs() <= r + 1 {
                        grid.set(x + dx, canopy_y + dy, z + dz, BlockType::Leaves);
                    }
                }
            }
        }
    }
}

impl Default for IslandGenerator {
    fn default() -> Self {
        Self::new()
    }
}
