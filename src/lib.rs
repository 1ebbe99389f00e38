//! Cube Runner - a minimal 3D runner game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump kinematics, obstacle pool, collisions)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Quality/preference layer

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Ground level - the player's resting height
    pub const GROUND_Y: f32 = 0.4;
    /// Vertical offset of the jump arc: `y = sin(angle) + JUMP_ARC_OFFSET`
    pub const JUMP_ARC_OFFSET: f32 = 1.38;
    /// Phase-angle increment per frame while the jump input is held
    pub const JUMP_SPEED: f32 = 0.05;
    /// Faster phase-angle increment used as the gravity fallback
    pub const JUMP_GRAVITY: f32 = 0.1;

    /// Horizontal obstacle speed (units per second, toward the camera)
    pub const OBSTACLE_SPEED: f32 = 10.0;
    /// Obstacles enter the world here
    pub const OBSTACLE_SPAWN_X: f32 = 40.0;
    /// Obstacles past this point are culled
    pub const OBSTACLE_MIN_X: f32 = -20.0;
    /// Upper bound of the random inter-spawn delay (mean interval is half this)
    pub const SPAWN_DELAY_MAX: f32 = 4.0;
    /// Base icosahedron radius of an obstacle before its random scale
    pub const OBSTACLE_RADIUS: f32 = 0.5;

    /// Edge length of the player cube
    pub const PLAYER_SIZE: f32 = 1.0;

    /// Decorative sky rotation per frame (not delta-scaled)
    pub const SKY_ROTATION_STEP: f32 = 0.002;

    /// Floor plane extent and height
    pub const FLOOR_SIZE: f32 = 1000.0;
    pub const FLOOR_Y: f32 = -0.4;

    /// Sky dome radius and cloud puff radius
    pub const SKY_RADIUS: f32 = 64.0;
    pub const CLOUD_RADIUS: f32 = 0.4;

    /// Camera placement
    pub const CAMERA_FOV_DEG: f32 = 45.0;
    pub const CAMERA_NEAR: f32 = 1.0;
    pub const CAMERA_FAR: f32 = 500.0;
    pub const CAMERA_POS: Vec3 = Vec3::new(-5.0, 4.0, 10.0);
    pub const CAMERA_TARGET: Vec3 = Vec3::new(100.0, 100.0, 0.0);
}
