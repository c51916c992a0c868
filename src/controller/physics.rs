use glam::Vec3;

use super::camera_controller::PlayerState;
use crate::model::World;

/// Player collision box, derived from the eye position every pass.
pub const PLAYER_WIDTH: f32 = 0.6;
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const EYE_HEIGHT: f32 = 1.6;

/// Gap kept between a resolved position and the voxel face it was pushed
/// out of, so the next pass does not immediately re-collide.
const CONTACT_EPS: f32 = 0.001;

/// Per-tick movement requests, already decoded from raw input.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Handles player physics: gravity, jumping, and axis-separated AABB
/// collision against the block grid.
///
/// The scheme is discrete, not swept: each axis is displaced in one step
/// and pushed back out on overlap. At extreme speeds or very low frame
/// rates the box can tunnel through one-voxel-thin walls; that is a known
/// limitation of this integrator, not a bug in the callers.
pub struct PhysicsSystem {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
}

impl PhysicsSystem {
    pub fn new() -> Self {
        Self {
            gravity: 16.0,
            move_speed: 6.0,
            jump_speed: 5.5,
        }
    }

    /// Advance the player by one tick: build the horizontal wish velocity
    /// from yaw and intent, apply gravity and jumping, then collide.
    pub fn update(
        &self,
        world: &World,
        player: &mut PlayerState,
        intent: &MoveIntent,
        yaw_deg: f32,
        dt: f32,
    ) {
        // horizontal velocity snaps straight to the wish direction,
        // normalized so diagonals are no faster than a single axis
        let yaw = yaw_deg.to_radians();
        let fwd = Vec3::new(yaw.sin(), 0.0, -yaw.cos());
        let right = Vec3::new(-fwd.z, 0.0, fwd.x);
        let mut wish = Vec3::ZERO;
        if intent.forward {
            wish += fwd;
        }
        if intent.back {
            wish -= fwd;
        }
        if intent.left {
            wish -= right;
        }
        if intent.right {
            wish += right;
        }
        if wish.length_squared() > 0.0 {
            wish = wish.normalize() * self.move_speed;
        }
        player.vel.x = wish.x;
        player.vel.z = wish.z;

        player.vel.y -= self.gravity * dt;
        if intent.jump && player.on_ground {
            player.vel.y = self.jump_speed;
            player.on_ground = false;
        }

        let (pos, vel, on_ground) =
            self.resolve(world, player.pos, player.vel, player.on_ground, dt);
        player.pos = pos;
        player.vel = vel;
        player.on_ground = on_ground;
    }

    /// Integrate and collide one axis at a time (X, then Y, then Z) so
    /// hitting a wall on one axis still slides along the others.
    pub fn resolve(
        &self,
        world: &World,
        pos: Vec3,
        vel: Vec3,
        on_ground: bool,
        dt: f32,
    ) -> (Vec3, Vec3, bool) {
        let mut pos = pos;
        let mut vel = vel;
        let mut on_ground = on_ground;

        let dx = vel.x * dt;
        self.move_axis(world, &mut pos, &mut vel, &mut on_ground, Vec3::new(dx, 0.0, 0.0));
        let dy = vel.y * dt;
        self.move_axis(world, &mut pos, &mut vel, &mut on_ground, Vec3::new(0.0, dy, 0.0));
        let dz = vel.z * dt;
        self.move_axis(world, &mut pos, &mut vel, &mut on_ground, Vec3::new(0.0, 0.0, dz));

        // ground contact absorbs any leftover downward velocity
        if on_ground && vel.y < 0.0 {
            vel.y = 0.0;
        }
        (pos, vel, on_ground)
    }

    /// Displace along a single axis, then push back out of every solid
    /// voxel the player box overlaps. Only the moved axis is corrected.
    fn move_axis(
        &self,
        world: &World,
        pos: &mut Vec3,
        vel: &mut Vec3,
        on_ground: &mut bool,
        delta: Vec3,
    ) {
        if delta == Vec3::ZERO {
            return;
        }
        *pos += delta;

        let half_w = PLAYER_WIDTH * 0.5;
        let feet_y = pos.y - EYE_HEIGHT;
        let min_x = pos.x - half_w;
        let max_x = pos.x + half_w;
        let min_y = feet_y;
        let max_y = feet_y + PLAYER_HEIGHT;
        let min_z = pos.z - half_w;
        let max_z = pos.z + half_w;

        let x0 = min_x.floor() as i32;
        let x1 = max_x.floor() as i32;
        let y0 = min_y.floor() as i32;
        let y1 = max_y.floor() as i32;
        let z0 = min_z.floor() as i32;
        let z1 = max_z.floor() as i32;

        let mut collided = false;
        for x in x0..=x1 {
            for y in y0..=y1 {
                for z in z0..=z1 {
                    if !world.is_solid(x, y, z) {
                        continue;
                    }
                    collided = true;
                    if delta.x > 0.0 {
                        pos.x = x as f32 - half_w - CONTACT_EPS;
                    }
                    if delta.x < 0.0 {
                        pos.x = (x + 1) as f32 + half_w + CONTACT_EPS;
                    }
                    if delta.z > 0.0 {
                        pos.z = z as f32 - half_w - CONTACT_EPS;
                    }
                    if delta.z < 0.0 {
                        pos.z = (z + 1) as f32 + half_w + CONTACT_EPS;
                    }
                    if delta.y > 0.0 {
                        // head against the obstruction's bottom face
                        let new_feet = y as f32 - PLAYER_HEIGHT - CONTACT_EPS;
                        pos.y = new_feet + EYE_HEIGHT;
                        vel.y = 0.0;
                    }
                    if delta.y < 0.0 {
                        // feet land on the obstruction's top face
                        let new_feet = (y + 1) as f32 + CONTACT_EPS;
                        pos.y = new_feet + EYE_HEIGHT;
                        vel.y = 0.0;
                        *on_ground = true;
                    }
                }
            }
        }
        // ground contact is re-earned on every downward pass, never sticky
        if !collided && delta.y < 0.0 {
            *on_ground = false;
        }
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::world::{BlockType, VoxelGrid};

    const DT: f32 = 1.0 / 60.0;

    /// 16^3 world with a solid stone floor at y = 0.
    fn flat_world() -> World {
        let mut grid = VoxelGrid::new([16, 16, 16]);
        for x in 0..16 {
            for z in 0..16 {
                grid.set(x, 0, z, BlockType::Stone);
            }
        }
        World::from_grid(grid)
    }

    fn settle(world: &World, player: &mut PlayerState, ticks: usize) {
        let physics = PhysicsSystem::new();
        for _ in 0..ticks {
            physics.update(world, player, &MoveIntent::default(), 0.0, DT);
        }
    }

    #[test]
    fn falling_player_rests_on_the_floor() {
        let world = flat_world();
        let mut player = PlayerState::new(Vec3::new(8.5, 10.0, 8.5));
        settle(&world, &mut player, 300);

        assert!(player.on_ground);
        assert_eq!(player.vel.y, 0.0);
        // feet end up on the floor top (y = 1) plus the contact gap
        let feet = player.pos.y - EYE_HEIGHT;
        assert!((feet - 1.0).abs() < 0.01, "feet at {feet}");
    }

    #[test]
    fn wall_contact_clamps_only_the_blocked_axis() {
        let mut grid = VoxelGrid::new([16, 16, 16]);
        for y in 0..16 {
            for z in 0..16 {
                grid.set(6, y, z, BlockType::Stone);
            }
        }
        let world = World::from_grid(grid);
        let physics = PhysicsSystem::new();

        let pos = Vec3::new(5.0, 5.0, 4.5);
        let vel = Vec3::new(8.0, 0.0, 2.0);
        let (new_pos, new_vel, on_ground) = physics.resolve(&world, pos, vel, false, 0.1);

        // pushed back to the wall face minus half width and the epsilon
        let half_w = PLAYER_WIDTH * 0.5;
        assert!((new_pos.x - (6.0 - half_w - 0.001)).abs() < 1e-4, "{}", new_pos.x);
        // the perpendicular axis slid the full distance
        assert!((new_pos.z - (4.5 + 2.0 * 0.1)).abs() < 1e-5);
        // velocity is untouched on horizontal contact
        assert_eq!(new_vel, vel);
        assert!(!on_ground);
    }

    #[test]
    fn jump_needs_ground_under_the_feet() {
        let world = flat_world();
        let physics = PhysicsSystem::new();
        let mut player = PlayerState::new(Vec3::new(8.5, 10.0, 8.5));
        settle(&world, &mut player, 300);
        assert!(player.on_ground);

        let jump = MoveIntent {
            jump: true,
            ..MoveIntent::default()
        };
        physics.update(&world, &mut player, &jump, 0.0, DT);
        assert!(!player.on_ground);
        assert!(player.vel.y > 0.0);

        // a second jump request mid-air changes nothing
        let vy = player.vel.y;
        physics.update(&world, &mut player, &jump, 0.0, DT);
        assert!((player.vel.y - (vy - physics.gravity * DT)).abs() < 1e-4);

        // gravity eventually brings the player back down
        settle(&world, &mut player, 300);
        assert!(player.on_ground);
    }

    #[test]
    fn rising_head_stops_under_a_ceiling() {
        let mut grid = VoxelGrid::new([16, 16, 16]);
        for x in 0..16 {
            for z in 0..16 {
                grid.set(x, 0, z, BlockType::Stone);
                grid.set(x, 5, z, BlockType::Stone);
            }
        }
        let world = World::from_grid(grid);
        let physics = PhysicsSystem::new();

        // feet at 1.1, head at 2.9, launched upward into the y=5 slab
        let pos = Vec3::new(8.5, 1.1 + EYE_HEIGHT, 8.5);
        let (new_pos, new_vel, _) =
            physics.resolve(&world, pos, Vec3::new(0.0, 30.0, 0.0), false, 0.1);

        let head = new_pos.y - EYE_HEIGHT + PLAYER_HEIGHT;
        assert!(head <= 5.0, "head at {head}");
        assert!((head - 5.0).abs() < 0.01);
        assert_eq!(new_vel.y, 0.0);
    }

    #[test]
    fn walking_off_a_ledge_clears_ground_contact() {
        let mut grid = VoxelGrid::new([32, 16, 32]);
        // floor only under x < 8
        for x in 0..8 {
            for z in 0..32 {
                grid.set(x, 0, z, BlockType::Stone);
            }
        }
        let world = World::from_grid(grid);
        let physics = PhysicsSystem::new();
        let mut player = PlayerState::new(Vec3::new(4.5, 10.0, 16.5));
        settle(&world, &mut player, 300);
        assert!(player.on_ground);

        // walk +x (yaw 90 looks down +x) until past the ledge
        let run = MoveIntent {
            forward: true,
            ..MoveIntent::default()
        };
        for _ in 0..120 {
            physics.update(&world, &mut player, &run, 90.0, DT);
        }
        assert!(player.pos.x > 8.5);
        assert!(!player.on_ground);
        assert!(player.vel.y < 0.0);
    }

    #[test]
    fn diagonal_input_moves_at_single_axis_speed() {
        let world = flat_world();
        let physics = PhysicsSystem::new();
        let mut player = PlayerState::new(Vec3::new(8.5, 10.0, 8.5));
        let intent = MoveIntent {
            forward: true,
            right: true,
            ..MoveIntent::default()
        };
        physics.update(&world, &mut player, &intent, 0.0, DT);
        let horizontal = (player.vel.x * player.vel.x + player.vel.z * player.vel.z).sqrt();
        assert!((horizontal - physics.move_speed).abs() < 1e-4);
    }

    #[test]
    fn yaw_steers_the_wish_direction() {
        let world = flat_world();
        let physics = PhysicsSystem::new();
        let forward = MoveIntent {
            forward: true,
            ..MoveIntent::default()
        };

        // yaw 0 walks -z
        let mut player = PlayerState::new(Vec3::new(8.5, 10.0, 8.5));
        physics.update(&world, &mut player, &forward, 0.0, DT);
        assert!(player.vel.z < 0.0 && player.vel.x.abs() < 1e-4);

        // yaw 90 walks +x
        let mut player = PlayerState::new(Vec3::new(8.5, 10.0, 8.5));
        physics.update(&world, &mut player, &forward, 90.0, DT);
        assert!(player.vel.x > 0.0 && player.vel.z.abs() < 1e-3);
    }
}
