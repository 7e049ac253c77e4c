use fastrand::Rng;
use glam::DVec3;
use serde::{Deserialize, Serialize};

pub const CLOUD_SPREAD: f64 = 1000.0;
pub const CLOUD_BASE: f64 = 50.0;
pub const CLOUD_BAND: f64 = 100.0;
pub const STAR_RADIUS: f64 = 300.0;
pub const STAR_DEPTH: f64 = 50.0;
pub const TERRAIN_SIZE: f64 = 2000.0;
pub const PROPELLER_SPEED: f64 = 20.0; // rad/s

pub const TERRAIN_COLOR: [u8; 3] = [0x3a, 0x8a, 0x3a];
pub const SKY_COLOR: [u8; 3] = [0x87, 0xce, 0xeb];
pub const FOG_NEAR: f64 = 100.0;
pub const FOG_FAR: f64 = 1000.0;
pub const SUN_DIRECTION: DVec3 = DVec3::new(100.0, 20.0, 100.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub seed: u64,
    pub cloud_count: usize,
    pub star_count: usize,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cloud_count: 20,
            star_count: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub center: DVec3,
    /// Puff offsets relative to `center`, with a radius each.
    pub puffs: Vec<(DVec3, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub position: DVec3,
    pub brightness: f64,
}

/// Static decoration; generated once and never coupled to flight state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenery {
    pub clouds: Vec<Cloud>,
    pub stars: Vec<Star>,
    pub terrain_size: f64,
}

impl Scenery {
    pub fn generate(config: &SceneryConfig) -> Self {
        let mut rng = Rng::with_seed(config.seed);
        let clouds = (0..config.cloud_count)
            .map(|_| random_cloud(&mut rng))
            .collect();
        let stars = (0..config.star_count)
            .map(|_| random_star(&mut rng))
            .collect();

        Self {
            clouds,
            stars,
            terrain_size: TERRAIN_SIZE,
        }
    }
}

fn random_cloud(rng: &mut Rng) -> Cloud {
    let center = DVec3::new(
        (rng.f64() - 0.5) * CLOUD_SPREAD,
        rng.f64() * CLOUD_BAND + CLOUD_BASE,
        (rng.f64() - 0.5) * CLOUD_SPREAD,
    );

    // Puffs stay inside a 10 x 5 x 5 box around the center.
    let puffs = (0..rng.usize(4..8))
        .map(|_| {
            let offset = DVec3::new(
                (rng.f64() - 0.5) * 10.0,
                (rng.f64() - 0.5) * 5.0,
                (rng.f64() - 0.5) * 5.0,
            );
            (offset, 3.0 + rng.f64() * 3.0)
        })
        .collect();

    Cloud { center, puffs }
}

fn random_star(rng: &mut Rng) -> Star {
    // Uniform direction on the sphere.
    let z = rng.f64() * 2.0 - 1.0;
    let theta = rng.f64() * std::f64::consts::TAU;
    let ring = (1.0 - z * z).sqrt();
    let direction = DVec3::new(ring * theta.cos(), ring * theta.sin(), z);
    let distance = STAR_RADIUS + rng.f64() * STAR_DEPTH;

    Star {
        position: direction * distance,
        brightness: 0.4 + rng.f64() * 0.6,
    }
}

/// Spinning propeller, advanced by elapsed time only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Propeller {
    angle: f64,
}

impl Propeller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: f64) {
        if delta.is_finite() && delta > 0.0 {
            self.angle = (self.angle + PROPELLER_SPEED * delta) % std::f64::consts::TAU;
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_same_scenery() {
        let config = SceneryConfig::default();
        assert_eq!(Scenery::generate(&config), Scenery::generate(&config));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Scenery::generate(&SceneryConfig::default());
        let b = Scenery::generate(&SceneryConfig {
            seed: 7,
            ..SceneryConfig::default()
        });
        assert_ne!(a.clouds[0].center, b.clouds[0].center);
    }

    #[test]
    fn clouds_stay_within_their_band() {
        let scenery = Scenery::generate(&SceneryConfig {
            seed: 3,
            cloud_count: 200,
            star_count: 0,
        });

        assert_eq!(scenery.clouds.len(), 200);
        for cloud in &scenery.clouds {
            assert!((-500.0..500.0).contains(&cloud.center.x));
            assert!((-500.0..500.0).contains(&cloud.center.z));
            assert!((50.0..150.0).contains(&cloud.center.y));
            assert!((4..8).contains(&cloud.puffs.len()));
        }
    }

    #[test]
    fn stars_sit_in_the_shell() {
        let scenery = Scenery::generate(&SceneryConfig {
            seed: 9,
            cloud_count: 0,
            star_count: 500,
        });

        assert_eq!(scenery.stars.len(), 500);
        for star in &scenery.stars {
            let distance = star.position.length();
            assert!(distance >= STAR_RADIUS - 1e-9, "{distance}");
            assert!(distance <= STAR_RADIUS + STAR_DEPTH + 1e-9, "{distance}");
        }
    }

    #[test]
    fn propeller_spins_with_elapsed_time() {
        let mut propeller = Propeller::new();
        propeller.advance(0.1);
        assert!((propeller.angle() - 2.0).abs() < 1e-12);

        propeller.advance(0.0);
        propeller.advance(f64::NAN);
        assert!((propeller.angle() - 2.0).abs() < 1e-12);

        propeller.advance(1.0);
        assert!(propeller.angle() < std::f64::consts::TAU);
    }
}
