//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Obstacle iteration order never affects correctness

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collisions, obstacle_aabb, player_aabb};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, advance_obstacles, tick, try_spawn};
