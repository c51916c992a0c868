pub mod block;
pub mod grid;
pub mod mesh;
pub mod raycast;
pub mod terrain;

pub use block::BlockType;
pub use grid::{VoxelGrid, DEFAULT_GRID_SIZE};
pub use mesh::{build_mesh, Face, Mesh};
pub use raycast::RayHit;
pub use terrain::{IslandGenerator, TerrainConfig};

use glam::Vec3;
use tracing::debug;

/// The world: the block grid plus the draw buffer derived from it.
///
/// The grid is the single source of truth; the mesh is disposable state
/// that `rebuild_mesh` regenerates wholesale. Block writes deliberately do
/// not rebuild on their own, so a burst of edits pays for one rebuild.
pub struct World {
    grid: VoxelGrid,
    mesh: Mesh,
}

impl World {
    /// Generates the default island world and meshes it.
    pub fn new() -> Self {
        Self::generate(DEFAULT_GRID_SIZE, TerrainConfig::default())
    }

    pub fn generate(size: [i32; 3], config: TerrainConfig) -> Self {
        let mut grid = VoxelGrid::new(size);
        IslandGenerator::with_config(config).populate(&mut grid);
        let mesh = mesh::build_mesh(&grid);
        Self { grid, mesh }
    }

    /// Wraps a hand-built grid (tests, scripted scenes).
    pub fn from_grid(grid: VoxelGrid) -> Self {
        let mesh = mesh::build_mesh(&grid);
        Self { grid, mesh }
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn size(&self) -> [i32; 3] {
        self.grid.size()
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.grid.get(x, y, z)
    }

    pub fn set_block(&mut self, x: i32, y: i32, z: i32, kind: BlockType) {
        self.grid.set(x, y, z, kind);
    }

    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.grid.is_solid(x, y, z)
    }

    /// The current draw buffer, valid until the next `rebuild_mesh`.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Regenerates the draw buffer from the grid.
    pub fn rebuild_mesh(&mut self) {
        self.mesh = mesh::build_mesh(&self.grid);
        debug!(vertices = self.mesh.vertex_count(), "mesh rebuilt");
    }

    /// Raycast against this world's solid cells.
    pub fn raycast(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        raycast::cast(origin, dir, max_distance, |x, y, z| {
            self.grid.is_solid(x, y, z)
        })
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
