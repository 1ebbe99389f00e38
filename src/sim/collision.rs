//! Axis-aligned bounding boxes and the per-frame collision scan
//!
//! Boxes are derived from visual extents: the player's unit cube and each
//! obstacle's scaled icosahedron. The scan is a plain O(n) pass over live
//! obstacles, which is fine at the obstacle counts this game sees (tens).

use glam::Vec3;

use super::state::{Obstacle, Player};
use crate::consts::{OBSTACLE_RADIUS, PLAYER_SIZE};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Closed-interval overlap on all three axes; touching boxes intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Bounding box of the player cube at its current position
pub fn player_aabb(player: &Player) -> Aabb {
    Aabb::from_center_half_extents(player.position, Vec3::splat(PLAYER_SIZE / 2.0))
}

/// Bounding box of an obstacle's scaled icosahedron
pub fn obstacle_aabb(obstacle: &Obstacle) -> Aabb {
    Aabb::from_center_half_extents(
        obstacle.position,
        Vec3::splat(OBSTACLE_RADIUS * obstacle.scale),
    )
}

/// True if the player box overlaps any live obstacle box
///
/// Only existence matters, not which obstacle, so the scan stops at the
/// first intersecting pair.
pub fn check_collisions(player: &Player, obstacles: &[Obstacle]) -> bool {
    let player_box = player_aabb(player);
    obstacles
        .iter()
        .any(|o| obstacle_aabb(o).intersects(&player_box))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_Y;

    fn obstacle_at(x: f32, y: f32, z: f32, scale: f32) -> Obstacle {
        Obstacle {
            id: 1,
            position: Vec3::new(x, y, z),
            scale,
        }
    }

    #[test]
    fn overlap_on_all_axes_hits() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_on_one_axis_misses() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        // Overlaps on y and z, clear of a on x only
        let b = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_faces_count_as_intersecting() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn grounded_player_hits_incoming_obstacle() {
        let player = Player::default();
        let obstacles = vec![obstacle_at(0.2, 0.0, 0.0, 1.5)];
        assert!(check_collisions(&player, &obstacles));
    }

    #[test]
    fn airborne_player_clears_small_obstacle() {
        let mut player = Player::default();
        // Apex of the jump arc
        player.angle = std::f32::consts::FRAC_PI_2;
        player.position.y = 2.38;
        let obstacles = vec![obstacle_at(0.0, 0.0, 0.0, 1.0)];
        assert!(!check_collisions(&player, &obstacles));
    }

    #[test]
    fn distant_obstacles_never_hit() {
        let player = Player {
            position: Vec3::new(0.0, GROUND_Y, 0.0),
            angle: 0.0,
        };
        let obstacles = vec![
            obstacle_at(40.0, 0.0, 0.0, 1.9),
            obstacle_at(-19.0, 0.0, 0.0, 1.9),
        ];
        assert!(!check_collisions(&player, &obstacles));
    }

    #[test]
    fn empty_obstacle_set_never_hits() {
        assert!(!check_collisions(&Player::default(), &[]));
    }
}
