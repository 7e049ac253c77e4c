use macroquad::prelude::*;
use skyflight_core::Scenery;
use skyflight_core::scenery::{
    FOG_FAR, FOG_NEAR, SKY_COLOR, SUN_DIRECTION, TERRAIN_COLOR,
};

use crate::to_vec3;

pub const SKY: Color = rgb(SKY_COLOR);
pub const TERRAIN: Color = rgb(TERRAIN_COLOR);
const SUN: Color = Color::from_rgba(255, 244, 214, 255);
const SUN_DISTANCE: f32 = 900.0;
const STAR_SIZE: f32 = 0.6;

const fn rgb(channels: [u8; 3]) -> Color {
    Color::from_rgba(channels[0], channels[1], channels[2], 255)
}

/// Linear fog: 0 before `FOG_NEAR`, 1 past `FOG_FAR`.
pub fn fog_amount(distance: f32) -> f32 {
    let near = FOG_NEAR as f32;
    let far = FOG_FAR as f32;
    ((distance - near) / (far - near)).clamp(0.0, 1.0)
}

pub fn fogged(color: Color, distance: f32) -> Color {
    let t = fog_amount(distance);
    Color::new(
        color.r + (SKY.r - color.r) * t,
        color.g + (SKY.g - color.g) * t,
        color.b + (SKY.b - color.b) * t,
        color.a,
    )
}

pub fn draw_terrain(scenery: &Scenery) {
    let size = scenery.terrain_size as f32;
    draw_plane(Vec3::ZERO, vec2(size * 0.5, size * 0.5), None, TERRAIN);
}

pub fn draw_sun(camera_position: Vec3) {
    let direction = to_vec3(SUN_DIRECTION).normalize_or_zero();
    draw_sphere(camera_position + direction * SUN_DISTANCE, 30.0, None, SUN);
}

pub fn draw_stars(scenery: &Scenery, camera_position: Vec3) {
    // The shell follows the camera so it reads as infinitely far away.
    for star in &scenery.stars {
        let level = star.brightness as f32;
        let color = Color::new(level, level, level, 0.35 * level);
        draw_cube(
            camera_position + to_vec3(star.position),
            Vec3::splat(STAR_SIZE),
            None,
            color,
        );
    }
}

pub fn draw_clouds(scenery: &Scenery, camera_position: Vec3) {
    for cloud in &scenery.clouds {
        let center = to_vec3(cloud.center);
        let distance = center.distance(camera_position);
        if fog_amount(distance) >= 1.0 {
            continue;
        }

        let color = fogged(Color::new(1.0, 1.0, 1.0, 0.5), distance);
        for (offset, radius) in &cloud.puffs {
            draw_sphere(center + to_vec3(*offset), *radius as f32, None, color);
        }
    }
}
