// MODEL: world data and camera state
pub mod camera;
pub mod world;

pub use camera::Camera;
pub use world::{BlockType, Mesh, RayHit, VoxelGrid, World};
