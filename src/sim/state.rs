//! Game state and core simulation types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Static scene with the start control visible
    Idle,
    /// Active gameplay; entered once, never left
    Running,
}

/// The player cube
///
/// Height is a pure function of the phase angle: `y = max(sin(angle) + 1.38,
/// 0.4)`. There is no rise/fall state machine; the arc is an artifact of the
/// monotonically increasing angle. Reproduced as-is, not idealized physics.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Jump phase angle (radians), never reset
    pub angle: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, GROUND_Y, 0.0),
            angle: 0.0,
        }
    }
}

impl Player {
    /// Advance the phase angle and recompute height, clamped at ground level
    pub fn jump(&mut self, speed: f32) {
        self.angle += speed;
        self.position.y = (self.angle.sin() + JUMP_ARC_OFFSET).max(GROUND_Y);
    }

    /// True when resting at ground level
    pub fn grounded(&self) -> bool {
        self.position.y <= GROUND_Y
    }

    /// Per-frame jump policy
    ///
    /// Held input advances the phase slowly (the ascent, and the re-descent
    /// once the sine tips over); released input above ground advances it
    /// faster (the fall). Grounded and unpressed, the angle is frozen so the
    /// player does not drift.
    pub fn apply_jump_input(&mut self, pressed: bool) {
        if pressed {
            self.jump(JUMP_SPEED);
        } else if self.position.y > GROUND_Y {
            self.jump(JUMP_GRAVITY);
        }
    }
}

/// An obstacle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub position: Vec3,
    /// Uniform scale in [1, 2), applied to all axes
    pub scale: f32,
}

/// Complete game state, owned by the loop driver
///
/// Everything the per-frame update touches lives here; nothing is
/// free-standing module state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (spawn timing and obstacle scale)
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// The player cube
    pub player: Player,
    /// Live obstacles; unordered, spawn appends and culling retains
    pub obstacles: Vec<Obstacle>,
    /// Elapsed time threshold for the next spawn
    pub next_obstacle_time: f32,
    /// Decorative sky rotation (radians about Y)
    pub sky_angle: f32,
    /// Whether the player box overlapped any obstacle box this frame
    pub colliding: bool,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            player: Player::default(),
            obstacles: Vec::new(),
            next_obstacle_time: 0.0,
            sky_angle: 0.0,
            colliding: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn jump_recomputes_height_from_angle() {
        let mut player = Player::default();
        player.jump(JUMP_SPEED);
        let expected = (player.angle.sin() + JUMP_ARC_OFFSET).max(GROUND_Y);
        assert_eq!(player.position.y, expected);
    }

    #[test]
    fn held_input_advances_slow_phase() {
        let mut player = Player::default();
        player.apply_jump_input(true);
        assert_eq!(player.angle, JUMP_SPEED);
        assert!(player.position.y > GROUND_Y);
    }

    #[test]
    fn gravity_applies_when_airborne_and_released() {
        let mut player = Player::default();
        player.angle = 0.5;
        player.position.y = 1.0;
        player.apply_jump_input(false);
        assert!((player.angle - 0.6).abs() < 1e-6);
    }

    #[test]
    fn grounded_and_released_freezes_angle() {
        let mut player = Player::default();
        // Park the player on the ground partway through the sine cycle
        player.angle = 4.712; // near 3pi/2, sin(angle) + 1.38 < 0.4
        player.position.y = GROUND_Y;
        player.apply_jump_input(false);
        assert_eq!(player.angle, 4.712);
        assert_eq!(player.position.y, GROUND_Y);
    }

    #[test]
    fn sustained_press_cycles_back_to_ground() {
        // Holding jump walks the angle through a full sine wave; the player
        // must come back down and never sink below ground level.
        let mut player = Player::default();
        let mut touched_ground_again = false;
        for _ in 0..200 {
            player.apply_jump_input(true);
            assert!(player.position.y >= GROUND_Y);
            if player.angle > std::f32::consts::PI && player.grounded() {
                touched_ground_again = true;
            }
        }
        assert!(touched_ground_again);
    }

    #[test]
    fn entity_ids_are_unique_and_increasing() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    proptest! {
        #[test]
        fn height_never_below_ground(presses in proptest::collection::vec(any::<bool>(), 1..500)) {
            let mut player = Player::default();
            for pressed in presses {
                player.apply_jump_input(pressed);
                prop_assert!(player.position.y >= GROUND_Y);
            }
        }

        #[test]
        fn height_matches_arc_after_jump(angle in -100.0f32..100.0, speed in 0.0f32..1.0) {
            let mut player = Player::default();
            player.angle = angle;
            player.jump(speed);
            let expected = ((angle + speed).sin() + JUMP_ARC_OFFSET).max(GROUND_Y);
            prop_assert_eq!(player.position.y, expected);
        }
    }
}
