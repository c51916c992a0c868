use glam::Vec3;
use tracing::debug;

use crate::controller::{
    CameraController, InputEvent, InputProcessor, InputState, PhysicsSystem, PlayerState,
};
use crate::model::world::RayHit;
use crate::model::{BlockType, Camera, Mesh, World};

/// Longest simulation step one tick will integrate; longer frame gaps are
/// truncated instead of integrated in one jump.
const MAX_TICK_DT: f32 = 0.05;

/// How far the player can mine or place.
const REACH: f32 = 6.0;

/// One world-plus-player session, advanced tick by tick: input sampling,
/// physics, block edits, mesh rebuild. Rendering stays outside; after a
/// tick the embedder reads `mesh()`, the camera matrices and
/// `raycast_target` and draws them however it likes.
pub struct FrameLoop {
    pub world: World,
    pub camera: Camera,
    pub player: PlayerState,
    pub input_state: InputState,
    input_processor: InputProcessor,
    camera_controller: CameraController,
    physics: PhysicsSystem,
    /// Block under the crosshair, refreshed every tick for the outline.
    pub raycast_target: Option<RayHit>,
    lmb_was_down: bool,
    rmb_was_down: bool,
}

impl FrameLoop {
    /// Island world with the player spawned falling over its center.
    pub fn new(width: u32, height: u32) -> Self {
        let world = World::new();
        let size = world.size();
        let spawn = Vec3::new(size[0] as f32 / 2.0, 20.0, size[2] as f32 / 2.0);
        Self::with_world(world, spawn, width, height)
    }

    pub fn with_world(world: World, spawn_eye: Vec3, width: u32, height: u32) -> Self {
        let player = PlayerState::new(spawn_eye);
        let mut camera = Camera::new(width, height);
        camera.eye = player.pos;
        Self {
            world,
            camera,
            player,
            input_state: InputState::new(),
            input_processor: InputProcessor::default(),
            camera_controller: CameraController::new(),
            physics: PhysicsSystem::new(),
            raycast_target: None,
            lmb_was_down: false,
            rmb_was_down: false,
        }
    }

    /// Feed one event from the embedding window layer.
    pub fn process_event(&mut self, event: &InputEvent) {
        if let InputEvent::KeyDown(key) = event {
            if let Some(block) = self.input_processor.block_from_key(key) {
                self.input_state.set_selected_block(block);
            }
        }
        self.input_state.process_event(event);
    }

    /// The current draw buffer.
    pub fn mesh(&self) -> &Mesh {
        self.world.mesh()
    }

    /// Advance the session by one frame.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_TICK_DT);

        // mouse look
        let (dx, dy) = self.input_state.consume_look();
        self.camera_controller.apply_look(&mut self.camera, dx, dy);

        // physics against the grid, then glue the camera to the result
        let intent = self.input_processor.intent(&self.input_state);
        self.physics
            .update(&self.world, &mut self.player, &intent, self.camera.yaw, dt);
        self.camera_controller
            .sync_camera_from_player(&mut self.camera, &self.player);

        // edge-triggered edits; each casts fresh so a mine-then-place in
        // one tick sees its own effect
        let origin = self.camera.eye;
        let dir = self.camera.forward();
        let lmb = self.input_state.left_click;
        let rmb = self.input_state.right_click;

        if lmb && !self.lmb_was_down {
            if let Some(hit) = self.world.raycast(origin, dir, REACH) {
                let v = hit.voxel;
                debug!(voxel = ?v, "mined block");
                self.world.set_block(v.x, v.y, v.z, BlockType::Air);
                self.world.rebuild_mesh();
            }
        }
        if rmb && !self.rmb_was_down {
            if let Some(hit) = self.world.raycast(origin, dir, REACH) {
                let p = hit.voxel + hit.normal;
                let kind = self.input_state.selected_block;
                debug!(voxel = ?p, ?kind, "placed block");
                self.world.set_block(p.x, p.y, p.z, kind);
                self.world.rebuild_mesh();
            }
        }
        self.lmb_was_down = lmb;
        self.rmb_was_down = rmb;

        // crosshair target for the renderer's block outline
        self.raycast_target = self.world.raycast(origin, dir, REACH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::MouseButton;
    use crate::model::world::VoxelGrid;

    const DT: f32 = 1.0 / 60.0;

    /// Flat 16^3 floor world with the player standing on it, looking +x.
    fn standing_session() -> FrameLoop {
        let mut grid = VoxelGrid::new([16, 16, 16]);
        for x in 0..16 {
            for z in 0..16 {
                grid.set(x, 0, z, BlockType::Stone);
            }
        }
        let world = World::from_grid(grid);
        let mut session = FrameLoop::with_world(world, Vec3::new(8.5, 4.0, 8.5), 1280, 720);
        session.camera.yaw = 90.0;
        for _ in 0..120 {
            session.tick(DT);
        }
        assert!(session.player.on_ground);
        session
    }

    #[test]
    fn player_settles_on_the_island_spawn() {
        let mut session = FrameLoop::new(1280, 720);
        for _ in 0..600 {
            session.tick(DT);
        }
        assert!(session.player.on_ground);
        // island cap at the center column is y = 15, so feet rest on 16
        let feet = session.player.feet().y;
        assert!((feet - 16.0).abs() < 0.01, "feet at {feet}");
        // camera follows the player eye
        assert_eq!(session.camera.eye, session.player.pos);
    }

    #[test]
    fn mining_is_edge_triggered() {
        let mut session = standing_session();
        session.world.set_block(11, 2, 8, BlockType::Stone);
        session.world.set_block(12, 2, 8, BlockType::Stone);
        session.world.rebuild_mesh();

        session.process_event(&InputEvent::MouseClick {
            button: MouseButton::Left,
            is_down: true,
        });
        session.tick(DT);
        assert_eq!(session.world.get_block(11, 2, 8), BlockType::Air);
        assert_eq!(session.world.get_block(12, 2, 8), BlockType::Stone);

        // holding the button must not keep mining
        session.tick(DT);
        session.tick(DT);
        assert_eq!(session.world.get_block(12, 2, 8), BlockType::Stone);

        // release and press again takes the next block
        session.process_event(&InputEvent::MouseClick {
            button: MouseButton::Left,
            is_down: false,
        });
        session.tick(DT);
        session.process_event(&InputEvent::MouseClick {
            button: MouseButton::Left,
            is_down: true,
        });
        session.tick(DT);
        assert_eq!(session.world.get_block(12, 2, 8), BlockType::Air);
    }

    #[test]
    fn placing_uses_the_struck_face_and_selected_block() {
        let mut session = standing_session();
        session.world.set_block(11, 2, 8, BlockType::Stone);
        session.world.rebuild_mesh();
        let vertices_before = session.mesh().vertex_count();

        session.process_event(&InputEvent::KeyDown("2".into()));
        assert_eq!(session.input_state.selected_block, BlockType::Stone);
        session.process_event(&InputEvent::KeyDown("1".into()));
        assert_eq!(session.input_state.selected_block, BlockType::Dirt);

        session.process_event(&InputEvent::MouseClick {
            button: MouseButton::Right,
            is_down: true,
        });
        session.tick(DT);

        // ray came in along +x, so the block lands one cell nearer
        assert_eq!(session.world.get_block(10, 2, 8), BlockType::Dirt);
        assert!(session.mesh().vertex_count() > vertices_before);
        // outline now tracks the freshly placed block
        let target = session.raycast_target.expect("target in reach");
        assert_eq!(target.voxel, glam::IVec3::new(10, 2, 8));
    }

    #[test]
    fn mining_restores_the_previous_vertex_count() {
        let mut session = standing_session();
        let vertices_before = session.mesh().vertex_count();
        session.world.set_block(11, 2, 8, BlockType::Stone);
        session.world.rebuild_mesh();
        assert!(session.mesh().vertex_count() > vertices_before);

        session.process_event(&InputEvent::MouseClick {
            button: MouseButton::Left,
            is_down: true,
        });
        session.tick(DT);
        assert_eq!(session.mesh().vertex_count(), vertices_before);
    }

    #[test]
    fn look_delta_steers_the_camera_once() {
        let mut session = standing_session();
        let yaw_before = session.camera.yaw;
        session.process_event(&InputEvent::MouseMove { dx: 40.0, dy: 10.0 });
        session.tick(DT);
        assert!((session.camera.yaw - (yaw_before + 4.0)).abs() < 1e-4);
        assert!((session.camera.pitch - 1.0).abs() < 1e-4);
        // consumed: a second tick adds nothing
        session.tick(DT);
        assert!((session.camera.yaw - (yaw_before + 4.0)).abs() < 1e-4);
    }
}
