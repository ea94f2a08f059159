use glam::{Mat4, Vec3};
use crate::types::{InstanceRaw, Vertex};

/// Axis every cube spins around (normalized before use)
pub const ROTATION_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// Degrees of rotation per cube index step
pub const ANGLE_STEP_DEGREES: f32 = 20.0;

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Unit cube centred on the origin, six faces of two triangles each
pub const CUBE_VERTICES: [Vertex; 36] = [
    // back
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0]),
    // front
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    // left
    Vertex::new([-0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [1.0, 0.0]),
    // right
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    // bottom
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    // top
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
];

/// Model transform of cube `index` at `time` seconds.
/// Even cubes spin over time, odd cubes hold a fixed tilt.
pub fn cube_model(index: usize, time: f32) -> Mat4 {
    let position = CUBE_POSITIONS[index % CUBE_POSITIONS.len()];
    let angle = (ANGLE_STEP_DEGREES * (index + 1) as f32).to_radians();
    let angle = if index % 2 == 0 { time * angle } else { angle };

    Mat4::from_translation(position) * Mat4::from_axis_angle(ROTATION_AXIS.normalize(), angle)
}

pub fn cube_instances(time: f32) -> Vec<InstanceRaw> {
    (0..CUBE_POSITIONS.len())
        .map(|i| InstanceRaw::from_matrix(cube_model(i, time)))
        .collect()
}
