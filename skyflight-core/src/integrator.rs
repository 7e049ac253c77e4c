use crate::config::FlightConfig;
use crate::controls::{ControlAction, ControlInput};
use crate::error::FlightError;
use crate::state::{CameraPose, FlightState, Pose};

/// Advances [`FlightState`] one frame at a time.
///
/// Each step updates rotation and speed first, then integrates position with
/// the updated values (semi-implicit Euler), clamps, and eases the chase
/// camera toward its new target.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    config: FlightConfig,
}

impl FlightIntegrator {
    pub fn new(config: FlightConfig) -> Result<Self, FlightError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn initial_state(&self) -> FlightState {
        FlightState::new(&self.config)
    }

    /// Rebuilds a state from a saved pose, rejecting anything `step` could
    /// never have produced under this config.
    pub fn resume(
        &self,
        pose: Pose,
        velocity: f64,
        camera: CameraPose,
    ) -> Result<FlightState, FlightError> {
        let orientation = pose.orientation;
        let finite = pose.position.is_finite()
            && orientation.pitch.is_finite()
            && orientation.yaw.is_finite()
            && orientation.roll.is_finite()
            && velocity.is_finite()
            && camera.position.is_finite()
            && camera.look_at.is_finite();
        if !finite {
            return Err(FlightError::InvalidState(
                "values must be finite".to_string(),
            ));
        }

        let config = &self.config;
        if !(-config.max_speed..=-config.min_speed).contains(&velocity) {
            return Err(FlightError::InvalidState(format!(
                "velocity {} outside {}..={}",
                velocity, -config.max_speed, -config.min_speed
            )));
        }
        let bank = config.max_bank_angle;
        if orientation.pitch.abs() > bank || orientation.roll.abs() > bank {
            return Err(FlightError::InvalidState(format!(
                "pitch {} or roll {} exceeds bank limit {}",
                orientation.pitch, orientation.roll, bank
            )));
        }
        if pose.position.y < config.floor_height {
            return Err(FlightError::InvalidState(format!(
                "altitude {} is below floor {}",
                pose.position.y, config.floor_height
            )));
        }

        Ok(FlightState::from_parts(pose, velocity, camera))
    }

    pub fn step(
        &self,
        state: &mut FlightState,
        input: ControlInput,
        delta: f64,
    ) -> Result<(), FlightError> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(FlightError::InvalidDelta(delta));
        }
        if delta == 0.0 {
            return Ok(());
        }

        self.update_rotation(state, input, delta);
        self.update_speed(state, input, delta);

        let bank = self.config.max_bank_angle;
        state.orientation.pitch = state.orientation.pitch.clamp(-bank, bank);
        state.orientation.roll = state.orientation.roll.clamp(-bank, bank);

        let forward = state.orientation.forward();
        state.position += forward * (state.velocity * delta);
        if state.position.y < self.config.floor_height {
            state.position.y = self.config.floor_height;
        }

        self.follow_camera(state);
        Ok(())
    }

    fn update_rotation(&self, state: &mut FlightState, input: ControlInput, delta: f64) {
        let amount = self.config.rotation_speed * delta;
        let orientation = &mut state.orientation;

        if input.is_active(ControlAction::PitchUp) {
            orientation.pitch += amount;
        }
        if input.is_active(ControlAction::PitchDown) {
            orientation.pitch -= amount;
        }
        if input.is_active(ControlAction::RollLeft) {
            orientation.roll += amount;
        }
        if input.is_active(ControlAction::RollRight) {
            orientation.roll -= amount;
        }
        if input.is_active(ControlAction::YawLeft) {
            orientation.yaw += amount;
        }
        if input.is_active(ControlAction::YawRight) {
            orientation.yaw -= amount;
        }
    }

    fn update_speed(&self, state: &mut FlightState, input: ControlInput, delta: f64) {
        let change = self.config.speed_accel * delta;

        if input.is_active(ControlAction::SpeedIncrease) {
            state.velocity = (state.velocity - change).max(-self.config.max_speed);
        }
        if input.is_active(ControlAction::SpeedDecrease) {
            state.velocity = (state.velocity + change).min(-self.config.min_speed);
        }
    }

    fn follow_camera(&self, state: &mut FlightState) {
        let target = state.position + state.orientation.rotate(self.config.camera_offset);
        state.camera = CameraPose {
            position: state
                .camera
                .position
                .lerp(target, self.config.camera_smoothing),
            look_at: state.position,
        };
    }
}

impl Default for FlightIntegrator {
    fn default() -> Self {
        Self {
            config: FlightConfig::default(),
        }
    }
}
