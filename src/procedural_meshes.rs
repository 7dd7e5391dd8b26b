// Procedural mesh builders for board tiles, markers, and unit bodies
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use std::f32::consts::FRAC_PI_3;

/// Flat hexagon on the XZ plane, corners at the circumradius `size`.
/// Used for board tiles, the cursor marker, and path-step markers.
pub fn create_hex_tile_mesh(size: f32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0]];
    for corner in 0..6 {
        let angle = corner as f32 * FRAC_PI_3;
        positions.push([size * angle.cos(), 0.0, size * angle.sin()]);
    }

    // Fan around the center, wound for an upward-facing surface
    let mut indices: Vec<u32> = Vec::with_capacity(18);
    for corner in 0..6u32 {
        let current = corner + 1;
        let next = (corner + 1) % 6 + 1;
        indices.extend_from_slice(&[0, next, current]);
    }

    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| [0.5 + p[0] / (2.0 * size), 0.5 + p[2] / (2.0 * size)])
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Append an axis-aligned box between `min` and `max` with per-face normals.
fn add_box(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    min: Vec3,
    max: Vec3,
) {
    // (normal, four corners wound counter-clockwise seen from outside)
    let faces: [([f32; 3], [Vec3; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(min.x, max.y, max.z),
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(max.x, max.y, min.z),
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, max.y, max.z),
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(min.x, min.y, max.z),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = positions.len() as u32;
        for corner in corners {
            positions.push([corner.x, corner.y, corner.z]);
            normals.push(normal);
            uvs.push([0.5, 0.5]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Simple blocky soldier silhouette: torso, two arms, two legs.
/// Feet rest at y = -1.6 so units share the droid-style ground offset.
pub fn create_unit_mesh(meshes: &mut ResMut<Assets<Mesh>>) -> Handle<Mesh> {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    // Torso
    add_box(
        &mut positions,
        &mut normals,
        &mut uvs,
        &mut indices,
        Vec3::new(-0.3, -0.8, -0.15),
        Vec3::new(0.3, 0.4, 0.15),
    );
    // Arms
    add_box(
        &mut positions,
        &mut normals,
        &mut uvs,
        &mut indices,
        Vec3::new(-0.6, -0.4, -0.1),
        Vec3::new(-0.4, 0.2, 0.1),
    );
    add_box(
        &mut positions,
        &mut normals,
        &mut uvs,
        &mut indices,
        Vec3::new(0.4, -0.4, -0.1),
        Vec3::new(0.6, 0.2, 0.1),
    );
    // Legs
    add_box(
        &mut positions,
        &mut normals,
        &mut uvs,
        &mut indices,
        Vec3::new(-0.15, -1.6, -0.1),
        Vec3::new(0.05, -0.8, 0.1),
    );
    add_box(
        &mut positions,
        &mut normals,
        &mut uvs,
        &mut indices,
        Vec3::new(-0.05, -1.6, -0.1),
        Vec3::new(0.15, -0.8, 0.1),
    );

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    meshes.add(mesh)
}
