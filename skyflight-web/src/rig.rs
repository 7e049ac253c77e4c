use macroquad::prelude::*;
use skyflight_core::Pose;

use crate::{to_quat, to_vec3};

#[derive(Debug, Clone, Copy)]
pub enum PartShape {
    Block(Vec3),
    Ball(f32),
}

/// One piece of the aircraft, placed in the body frame (nose toward -Z).
#[derive(Debug, Clone, Copy)]
pub struct RigPart {
    pub offset: Vec3,
    pub shape: PartShape,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct AircraftRig {
    pub parts: Vec<RigPart>,
    pub propeller_hub: Vec3,
    pub blade_size: Vec3,
    pub blade_color: Color,
}

const HULL: Color = Color::from_rgba(0xe0, 0xe0, 0xe0, 255);
const NOSE: Color = Color::from_rgba(0xff, 0x00, 0x00, 255);
const WING: Color = Color::from_rgba(0xc0, 0xc0, 0xc0, 255);
const CANOPY: Color = Color::from_rgba(0x4a, 0x90, 0xe2, 153);
const BLADE: Color = Color::from_rgba(0x33, 0x33, 0x33, 255);

impl Default for AircraftRig {
    fn default() -> Self {
        let part = |offset: Vec3, shape: PartShape, color: Color| RigPart {
            offset,
            shape,
            color,
        };

        Self {
            parts: vec![
                part(Vec3::ZERO, PartShape::Block(vec3(2.4, 2.4, 8.0)), HULL),
                part(vec3(0.0, 0.0, -4.5), PartShape::Ball(1.1), NOSE),
                part(vec3(0.0, -0.4, 0.5), PartShape::Block(vec3(20.0, 0.3, 3.0)), WING),
                part(vec3(0.0, 0.0, 3.5), PartShape::Block(vec3(6.0, 0.2, 2.0)), WING),
                part(vec3(0.0, 1.8, 3.5), PartShape::Block(vec3(0.2, 4.0, 2.0)), WING),
                part(vec3(0.0, 1.2, -1.5), PartShape::Ball(1.2), CANOPY),
            ],
            propeller_hub: vec3(0.0, 0.0, -5.5),
            blade_size: vec3(0.2, 3.0, 0.2),
            blade_color: BLADE,
        }
    }
}

/// Model matrix placing the body frame at the pose.
pub fn rig_transform(pose: &Pose) -> Mat4 {
    Mat4::from_rotation_translation(
        to_quat(pose.orientation.to_quat()),
        to_vec3(pose.position),
    )
}

fn push_model(matrix: Mat4) {
    // SAFETY: single-threaded render loop; the handle is dropped before any
    // other draw call touches the context.
    unsafe { get_internal_gl() }.quad_gl.push_model_matrix(matrix);
}

fn pop_model() {
    // SAFETY: as in `push_model`.
    unsafe { get_internal_gl() }.quad_gl.pop_model_matrix();
}

pub fn draw_aircraft(pose: &Pose, propeller_angle: f32, rig: &AircraftRig) {
    push_model(rig_transform(pose));

    for part in &rig.parts {
        match part.shape {
            PartShape::Block(size) => draw_cube(part.offset, size, None, part.color),
            PartShape::Ball(radius) => draw_sphere(part.offset, radius, None, part.color),
        }
    }

    // Blade spins about the nose axis.
    push_model(Mat4::from_translation(rig.propeller_hub) * Mat4::from_rotation_z(propeller_angle));
    draw_cube(Vec3::ZERO, rig.blade_size, None, rig.blade_color);
    pop_model();

    pop_model();
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyflight_core::Orientation;
    use skyflight_core::glam::DVec3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn level_rig_sits_at_pose_position() {
        let pose = Pose {
            position: DVec3::new(1.0, 100.0, -3.0),
            orientation: Orientation::default(),
        };
        let nose = rig_transform(&pose).transform_point3(vec3(0.0, 0.0, -4.5));
        assert!((nose - vec3(1.0, 100.0, -7.5)).length() < 1e-4);
    }

    #[test]
    fn yawed_rig_points_nose_along_travel() {
        let pose = Pose {
            position: DVec3::ZERO,
            orientation: Orientation::new(0.0, FRAC_PI_2, 0.0),
        };
        // Travel runs along -forward; a quarter yaw-left turns -Z into -X.
        let nose = rig_transform(&pose).transform_point3(vec3(0.0, 0.0, -1.0));
        assert!((nose - vec3(-1.0, 0.0, 0.0)).length() < 1e-5);

        let travel = -pose.orientation.forward();
        assert!((to_vec3(travel) - nose).length() < 1e-5);
    }
}
