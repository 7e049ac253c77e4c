pub use glam;

pub mod config;
pub mod controls;
pub mod error;
pub mod hud;
pub mod input;
pub mod integrator;
pub mod scenery;
pub mod session;
pub mod state;
pub mod stats;

pub use config::FlightConfig;
pub use controls::{ControlAction, ControlBindings, ControlInput};
pub use error::FlightError;
pub use hud::{CONTROLS_TITLE, HudReadout, controls_legend};
pub use input::{InputLatch, KeyEvent, KeyHub, KeySubscription, SharedLatch};
pub use integrator::FlightIntegrator;
pub use scenery::{Cloud, Propeller, Scenery, SceneryConfig, Star};
pub use session::{FlightSession, FrameOutput};
pub use state::{CameraPose, FlightState, Orientation, Pose};
pub use stats::{FlightStats, derive_stats};
