//! Scene assembly
//!
//! Builds the static decor (floor, sky dome, clouds) once, then turns a
//! `GameState` into world-space vertices each frame. The simulation is read
//! only; nothing here feeds back into it.

use glam::{Mat3, Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

/// Static meshes plus per-frame assembly
pub struct Scene {
    floor: Vec<Vertex>,
    /// Sky dome and clouds in sky-local space, rotated as one group
    sky: Vec<Vertex>,
    player_mesh: Vec<Vertex>,
    obstacle_mesh: Vec<Vertex>,
    animate_sky: bool,
}

impl Scene {
    /// Assemble the static scene
    ///
    /// Cloud placement uses its own RNG stream, derived from the run seed,
    /// so scene construction never perturbs gameplay draws.
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ 0x5ce9e);

        let mut floor = Vec::new();
        append_transformed(
            &mut floor,
            &shapes::plane(FLOOR_SIZE, FLOOR_SIZE, colors::FLOOR),
            Mat4::from_translation(Vec3::new(0.0, FLOOR_Y, 0.0)),
        );

        let mut sky = shapes::sky_shell(SKY_RADIUS, 32, 40, colors::SKY);
        for _ in 0..settings.quality.cloud_count() {
            let (pos, color) = cloud_placement(&mut rng);
            append_transformed(
                &mut sky,
                &shapes::icosahedron(CLOUD_RADIUS, color),
                Mat4::from_translation(pos),
            );
        }

        Self {
            floor,
            sky,
            player_mesh: shapes::cube(PLAYER_SIZE, colors::PLAYER),
            obstacle_mesh: shapes::icosahedron(OBSTACLE_RADIUS, colors::OBSTACLE),
            animate_sky: !settings.reduced_motion,
        }
    }

    /// Build the world-space vertex list for one frame
    pub fn build_frame(&self, state: &GameState) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(
            self.floor.len()
                + self.sky.len()
                + self.player_mesh.len()
                + self.obstacle_mesh.len() * state.obstacles.len(),
        );

        vertices.extend_from_slice(&self.floor);

        let sky_angle = if self.animate_sky { state.sky_angle } else { 0.0 };
        append_transformed(&mut vertices, &self.sky, Mat4::from_rotation_y(sky_angle));

        append_transformed(
            &mut vertices,
            &self.player_mesh,
            Mat4::from_translation(state.player.position),
        );

        for obstacle in &state.obstacles {
            append_transformed(
                &mut vertices,
                &self.obstacle_mesh,
                Mat4::from_translation(obstacle.position)
                    * Mat4::from_scale(Vec3::splat(obstacle.scale)),
            );
        }

        vertices
    }
}

/// One cloud position and color: a random vector in the unit cube, pushed
/// out toward the dome and mirrored into the upper hemisphere
fn cloud_placement(rng: &mut Pcg32) -> (Vec3, [f32; 4]) {
    let mut v = Vec3::new(rng.random(), rng.random(), rng.random());
    while v.length_squared() < 1e-6 {
        v = Vec3::new(rng.random(), rng.random(), rng.random());
    }
    let n = v.length();
    let pos = Vec3::new(
        (v.x * SKY_RADIUS - 4.0) / n,
        ((v.y * SKY_RADIUS - 4.0) / n).abs(),
        (v.z * SKY_RADIUS - 4.0) / n,
    );
    let color = colors::CLOUDS[rng.random_range(0..colors::CLOUDS.len())];
    (pos, color)
}

/// Append `mesh` transformed into world space
///
/// Normals go through the rotation part only and are renormalized, which
/// is exact for the translation/rotation/uniform-scale transforms used
/// here. Zero (unlit) normals stay zero.
fn append_transformed(out: &mut Vec<Vertex>, mesh: &[Vertex], transform: Mat4) {
    let normal_transform = Mat3::from_mat4(transform);
    for v in mesh {
        let position = transform.transform_point3(Vec3::from_array(v.position));
        let normal = (normal_transform * Vec3::from_array(v.normal)).normalize_or_zero();
        out.push(Vertex::new(position.to_array(), normal.to_array(), v.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Obstacle};

    fn test_scene() -> Scene {
        Scene::new(&Settings::default(), 99)
    }

    #[test]
    fn cloud_count_follows_quality_preset() {
        let scene = test_scene();
        let dome = shapes::sky_shell(SKY_RADIUS, 32, 40, colors::SKY).len();
        let per_cloud = shapes::icosahedron(CLOUD_RADIUS, colors::CLOUDS[0]).len();
        assert_eq!(
            scene.sky.len(),
            dome + Settings::default().quality.cloud_count() * per_cloud
        );
    }

    #[test]
    fn clouds_stay_in_the_upper_hemisphere() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let (pos, _) = cloud_placement(&mut rng);
            assert!(pos.y >= 0.0);
        }
    }

    #[test]
    fn frame_places_player_at_its_position() {
        let scene = test_scene();
        let mut state = GameState::new(1);
        state.player.position = Vec3::new(0.0, 2.0, 0.0);

        let frame = scene.build_frame(&state);
        let start = scene.floor.len() + scene.sky.len();
        let player_verts = &frame[start..start + scene.player_mesh.len()];
        for v in player_verts {
            assert!((v.position[1] - 2.0).abs() <= PLAYER_SIZE / 2.0 + 1e-5);
        }
    }

    #[test]
    fn frame_grows_with_live_obstacles() {
        let scene = test_scene();
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        let empty = scene.build_frame(&state).len();

        state.obstacles.push(Obstacle {
            id: 1,
            position: Vec3::new(10.0, 0.0, 0.0),
            scale: 1.5,
        });
        let with_one = scene.build_frame(&state).len();
        assert_eq!(with_one - empty, scene.obstacle_mesh.len());
    }

    #[test]
    fn reduced_motion_freezes_the_sky() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let scene = Scene::new(&settings, 99);
        let mut state = GameState::new(1);
        let before = scene.build_frame(&state);
        state.sky_angle = 1.0;
        let after = scene.build_frame(&state);
        let sky_range = scene.floor.len()..scene.floor.len() + scene.sky.len();
        for i in sky_range {
            assert_eq!(before[i].position, after[i].position);
        }
    }
}
