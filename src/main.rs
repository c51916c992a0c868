use tracing::info;

use voxisle::{FrameLoop, InputEvent, MouseButton};

const DT: f32 = 1.0 / 60.0;

/// Headless demo: generates the island, drops the player onto it, walks
/// around, mines and places a block, and logs what happened. A windowed
/// embedder would replace this loop with its own frame callback and feed
/// real input events, drawing `session.mesh()` with
/// `session.camera.view_proj()` every frame.
fn main() {
    voxisle::logging::init();

    let mut session = FrameLoop::new(1280, 720);
    info!(
        size = ?session.world.size(),
        vertices = session.world.mesh().vertex_count(),
        "island generated"
    );

    // let the player land on the island
    for _ in 0..180 {
        session.tick(DT);
    }
    info!(
        feet = ?session.player.feet(),
        on_ground = session.player.on_ground,
        "spawn settled"
    );

    // look down a bit and walk forward for two seconds, jumping once
    session.process_event(&InputEvent::MouseMove { dx: 0.0, dy: 300.0 });
    session.process_event(&InputEvent::KeyDown("w".into()));
    for i in 0..120 {
        if i == 30 {
            session.process_event(&InputEvent::KeyDown(" ".into()));
        }
        if i == 40 {
            session.process_event(&InputEvent::KeyUp(" ".into()));
        }
        session.tick(DT);
    }
    session.process_event(&InputEvent::KeyUp("w".into()));

    if let Some(hit) = session.raycast_target {
        info!(voxel = ?hit.voxel, normal = ?hit.normal, "crosshair target");
    }

    // mine whatever the crosshair rests on
    let vertices_before = session.mesh().vertex_count();
    session.process_event(&InputEvent::MouseClick {
        button: MouseButton::Left,
        is_down: true,
    });
    session.tick(DT);
    session.process_event(&InputEvent::MouseClick {
        button: MouseButton::Left,
        is_down: false,
    });

    // then place a stone block against the new target face
    session.process_event(&InputEvent::KeyDown("2".into()));
    session.process_event(&InputEvent::MouseClick {
        button: MouseButton::Right,
        is_down: true,
    });
    session.tick(DT);
    session.process_event(&InputEvent::MouseClick {
        button: MouseButton::Right,
        is_down: false,
    });

    info!(
        vertices_before,
        vertices_after = session.mesh().vertex_count(),
        pos = ?session.player.pos,
        "demo finished"
    );
}
