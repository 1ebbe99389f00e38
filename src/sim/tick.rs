//! Per-frame update
//!
//! One call per animation frame, fixed order: collisions, player
//! kinematics, spawn check, obstacle advance/cull, sky rotation. None of
//! these steps can fail; the tick has no error path.

use glam::Vec3;
use rand::Rng;

use super::collision::check_collisions;
use super::state::{GamePhase, GameState, Obstacle};
use crate::consts::*;

/// Input signals for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held while the pointer or space key is down
    pub jump_pressed: bool,
    /// One-shot start action from the overlay; ignored once Running
    pub start: bool,
}

/// Advance the game state by one frame
///
/// `elapsed` is monotonic seconds since the clock started; `delta` is
/// seconds since the previous frame. In Idle, only the start transition is
/// observed; the scene stays static.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed: f32, delta: f32) {
    if state.phase == GamePhase::Idle {
        if input.start {
            state.phase = GamePhase::Running;
            log::info!("run started (seed {})", state.seed);
        }
        return;
    }

    // A hit is observed and surfaced, nothing more; there is no game-over
    // transition. See DESIGN.md.
    state.colliding = check_collisions(&state.player, &state.obstacles);
    if state.colliding {
        log::debug!("hit");
    }

    state.player.apply_jump_input(input.jump_pressed);

    try_spawn(state, elapsed);
    advance_obstacles(state, delta);

    state.sky_angle += SKY_ROTATION_STEP;
}

/// Spawn one obstacle when the elapsed clock passes the spawn threshold
///
/// The new obstacle enters at `x = 40` with a uniform random scale in
/// [1, 2); the threshold is then pushed out by a uniform random delay in
/// [0, 4). Nothing caps the live count - density is self-limiting through
/// the delay distribution and culling.
pub fn try_spawn(state: &mut GameState, elapsed: f32) {
    if elapsed <= state.next_obstacle_time {
        return;
    }
    let id = state.next_entity_id();
    let scale = 1.0 + state.rng.random::<f32>();
    state.obstacles.push(Obstacle {
        id,
        position: Vec3::new(OBSTACLE_SPAWN_X, 0.0, 0.0),
        scale,
    });
    state.next_obstacle_time = elapsed + state.rng.random::<f32>() * SPAWN_DELAY_MAX;
    log::trace!(
        "spawned obstacle {id}, next spawn after {:.2}s",
        state.next_obstacle_time
    );
}

/// Move every live obstacle toward the camera and cull the ones that left
/// the world, in the same pass
pub fn advance_obstacles(state: &mut GameState, delta: f32) {
    for obstacle in &mut state.obstacles {
        obstacle.position.x -= OBSTACLE_SPEED * delta;
    }
    state.obstacles.retain(|o| o.position.x >= OBSTACLE_MIN_X);
}
