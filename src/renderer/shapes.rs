//! Mesh generation for the scene's boxes

use glam::Vec3;

use super::vertex::{Vertex, colors};
use crate::sim::{Body, GameState};

/// Vertices per box: 6 faces, 2 triangles each
pub const BOX_VERTEX_COUNT: usize = 36;

/// Face normals with the two in-plane axes, ordered so (u × v) == normal
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Triangle list for an axis-aligned box (counter-clockwise, outward normals)
pub fn box_mesh(center: Vec3, size: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    let mut vertices = Vec::with_capacity(BOX_VERTEX_COUNT);

    for (normal, u, v) in FACES {
        let face_center = center + normal * half;
        let du = u * half;
        let dv = v * half;

        let corners = [
            face_center - du - dv,
            face_center + du - dv,
            face_center + du + dv,
            face_center - du + dv,
        ];

        for i in [0, 1, 2, 0, 2, 3] {
            vertices.push(Vertex::new(
                corners[i].to_array(),
                normal.to_array(),
                color,
            ));
        }
    }

    vertices
}

/// Color a body is drawn with
pub fn enemy_color(body: &Body) -> [f32; 4] {
    if body.is_bonus() {
        colors::BONUS
    } else {
        colors::ENEMY
    }
}

fn body_mesh(body: &Body, color: [f32; 4]) -> Vec<Vertex> {
    box_mesh(body.position, body.size(), color)
}

/// Every visible box this frame: ground, player, then enemies in spawn order
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.enemies.len() + 2) * BOX_VERTEX_COUNT);
    vertices.extend(body_mesh(&state.ground, colors::GROUND));
    vertices.extend(body_mesh(&state.player, colors::PLAYER));
    for enemy in &state.enemies {
        vertices.extend(body_mesh(enemy, enemy_color(enemy)));
    }
    vertices
}
