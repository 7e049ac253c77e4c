use crate::config::FlightConfig;
use crate::controls::{ControlBindings, ControlInput};
use crate::error::FlightError;
use crate::input::{KeyHub, KeySubscription};
use crate::integrator::FlightIntegrator;
use crate::state::{CameraPose, FlightState, Pose};
use crate::stats::{FlightStats, derive_stats};
use serde::{Deserialize, Serialize};

/// Everything a frontend needs after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub pose: Pose,
    pub camera: CameraPose,
    pub stats: FlightStats,
}

impl FrameOutput {
    pub fn from_state(state: &FlightState) -> Self {
        Self {
            pose: state.pose(),
            camera: state.camera(),
            stats: derive_stats(state),
        }
    }
}

/// A running flight: keyboard subscription, bindings, integrator and state.
/// Subscribes on [`FlightSession::start`] and unsubscribes on stop or drop.
pub struct FlightSession {
    subscription: KeySubscription,
    bindings: ControlBindings,
    integrator: FlightIntegrator,
    state: FlightState,
}

impl FlightSession {
    pub fn start(hub: &KeyHub, config: FlightConfig) -> Result<Self, FlightError> {
        let bindings = config.bindings.clone();
        let integrator = FlightIntegrator::new(config)?;
        let state = integrator.initial_state();
        let subscription = hub.subscribe();
        log::debug!(
            "flight session started on subscription {} with {} bindings",
            subscription.id(),
            bindings.len()
        );

        Ok(Self {
            subscription,
            bindings,
            integrator,
            state,
        })
    }

    pub fn tick(&mut self, delta: f64) -> Result<FrameOutput, FlightError> {
        let input = self.sample_input();
        self.integrator.step(&mut self.state, input, delta)?;
        Ok(self.output())
    }

    pub fn sample_input(&self) -> ControlInput {
        self.subscription
            .with_latch(|latch| self.bindings.sample(latch))
    }

    pub fn output(&self) -> FrameOutput {
        FrameOutput::from_state(&self.state)
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    pub fn reset(&mut self) {
        self.state = self.integrator.initial_state();
    }

    pub fn stop(self) {
        log::debug!("flight session on subscription {} stopped", self.subscription.id());
    }
}
