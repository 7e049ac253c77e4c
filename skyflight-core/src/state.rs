use crate::config::FlightConfig;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Body forward axis before rotation. Velocity is stored negative, so travel
/// runs along `-FORWARD_AXIS` in the body frame.
pub const FORWARD_AXIS: DVec3 = DVec3::Z;

/// Euler angles in radians: pitch about x, yaw about y, roll about z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Orientation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Intrinsic X, then Y, then Z composition.
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_rotation_x(self.pitch)
            * DQuat::from_rotation_y(self.yaw)
            * DQuat::from_rotation_z(self.roll)
    }

    pub fn rotate(&self, v: DVec3) -> DVec3 {
        self.to_quat() * v
    }

    pub fn forward(&self) -> DVec3 {
        self.rotate(FORWARD_AXIS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
}

impl CameraPose {
    pub fn up(&self) -> DVec3 {
        DVec3::Y
    }
}

/// Simulation state owned by the integrator. Read access is public, writes go
/// through [`crate::FlightIntegrator::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub(crate) position: DVec3,
    pub(crate) orientation: Orientation,
    pub(crate) velocity: f64,
    pub(crate) camera: CameraPose,
}

impl FlightState {
    pub fn new(config: &FlightConfig) -> Self {
        let orientation = Orientation::default();
        let position = config.initial_position;
        Self {
            position,
            orientation,
            velocity: -config.initial_speed,
            camera: CameraPose {
                position: position + orientation.rotate(config.camera_offset),
                look_at: position,
            },
        }
    }

    /// Unchecked; public callers go through [`crate::FlightIntegrator::resume`].
    pub(crate) fn from_parts(pose: Pose, velocity: f64, camera: CameraPose) -> Self {
        Self {
            position: pose.position,
            orientation: pose.orientation,
            velocity,
            camera,
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Signed forward speed; negative values travel forward.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            orientation: self.orientation,
        }
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(&FlightConfig::default())
    }
}
