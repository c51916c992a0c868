// CONTROLLER: input, physics, and camera steering
pub mod camera_controller;
pub mod input;
pub mod physics;

pub use camera_controller::{CameraController, PlayerState};
pub use input::{InputEvent, InputProcessor, InputState, KeyBindings, MouseButton};
pub use physics::{MoveIntent, PhysicsSystem, EYE_HEIGHT, PLAYER_HEIGHT, PLAYER_WIDTH};
