use crate::controls::ControlBindings;
use crate::error::FlightError;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

pub const ROTATION_SPEED: f64 = 1.5; // rad/s
pub const SPEED_ACCEL: f64 = 100.0; // units/s²
pub const MIN_SPEED: f64 = 20.0;
pub const MAX_SPEED: f64 = 150.0;
pub const MAX_BANK_ANGLE: f64 = FRAC_PI_3;
pub const FLOOR_HEIGHT: f64 = 10.0;
pub const CAMERA_OFFSET: DVec3 = DVec3::new(0.0, 10.0, 30.0);
pub const CAMERA_SMOOTHING: f64 = 0.1; // fraction of remaining distance per frame
pub const INITIAL_POSITION: DVec3 = DVec3::new(0.0, 100.0, 0.0);
pub const INITIAL_SPEED: f64 = 50.0;

/// Tuning for the flight integrator. Every field falls back to its default
/// when omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub rotation_speed: f64,
    pub speed_accel: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub max_bank_angle: f64,
    pub floor_height: f64,
    pub camera_offset: DVec3,
    pub camera_smoothing: f64,
    pub initial_position: DVec3,
    pub initial_speed: f64,
    pub bindings: ControlBindings,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            speed_accel: SPEED_ACCEL,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            max_bank_angle: MAX_BANK_ANGLE,
            floor_height: FLOOR_HEIGHT,
            camera_offset: CAMERA_OFFSET,
            camera_smoothing: CAMERA_SMOOTHING,
            initial_position: INITIAL_POSITION,
            initial_speed: INITIAL_SPEED,
            bindings: ControlBindings::default(),
        }
    }
}

impl FlightConfig {
    pub fn from_json(text: &str) -> Result<Self, FlightError> {
        let config: FlightConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, FlightError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), FlightError> {
        let scalars = [
            ("rotation_speed", self.rotation_speed),
            ("speed_accel", self.speed_accel),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("max_bank_angle", self.max_bank_angle),
            ("floor_height", self.floor_height),
            ("camera_smoothing", self.camera_smoothing),
            ("initial_speed", self.initial_speed),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(FlightError::invalid_config(format!("{name} must be finite")));
            }
        }
        if !self.camera_offset.is_finite() || !self.initial_position.is_finite() {
            return Err(FlightError::invalid_config("vectors must be finite"));
        }

        if self.rotation_speed < 0.0 || self.speed_accel < 0.0 {
            return Err(FlightError::invalid_config(
                "rotation_speed and speed_accel must be non-negative",
            ));
        }
        if self.min_speed <= 0.0 {
            return Err(FlightError::invalid_config("min_speed must be positive"));
        }
        if self.max_speed < self.min_speed {
            return Err(FlightError::invalid_config(format!(
                "max_speed {} is below min_speed {}",
                self.max_speed, self.min_speed
            )));
        }
        if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            return Err(FlightError::invalid_config(format!(
                "initial_speed {} outside {}..={}",
                self.initial_speed, self.min_speed, self.max_speed
            )));
        }
        if self.max_bank_angle <= 0.0 || self.max_bank_angle > FRAC_PI_2 {
            return Err(FlightError::invalid_config(
                "max_bank_angle must be in (0, pi/2]",
            ));
        }
        if self.floor_height < 0.0 {
            return Err(FlightError::invalid_config("floor_height must be non-negative"));
        }
        if self.initial_position.y < self.floor_height {
            return Err(FlightError::invalid_config(format!(
                "initial_position.y {} is below floor_height {}",
                self.initial_position.y, self.floor_height
            )));
        }
        if self.camera_smoothing <= 0.0 || self.camera_smoothing > 1.0 {
            return Err(FlightError::invalid_config(
                "camera_smoothing must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
