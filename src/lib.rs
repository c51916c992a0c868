// Re-export all public modules so they can be used from main.rs
pub mod logging;

// MVC Architecture (renderer/view intentionally absent: the embedder
// draws the mesh buffers and camera matrices this crate hands out)
pub mod controller;
pub mod frame_loop;
pub mod model;

pub use controller::{
    CameraController, InputEvent, InputProcessor, InputState, KeyBindings, MouseButton,
    MoveIntent, PhysicsSystem, PlayerState,
};
pub use frame_loop::FrameLoop;
pub use model::{BlockType, Camera, Mesh, RayHit, VoxelGrid, World};
