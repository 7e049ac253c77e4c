use crate::state::FlightState;
use serde::{Deserialize, Serialize};

/// Display snapshot derived from [`FlightState`]; never fed back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    pub speed: f64,
    pub altitude: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
}

pub fn derive_stats(state: &FlightState) -> FlightStats {
    let orientation = state.orientation();
    FlightStats {
        speed: state.velocity().abs(),
        altitude: state.position().y.max(0.0),
        pitch_deg: orientation.pitch.to_degrees(),
        roll_deg: orientation.roll.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CameraPose, Orientation, Pose};
    use glam::DVec3;
    use std::f64::consts::FRAC_PI_3;

    #[test]
    fn initial_stats() {
        let stats = derive_stats(&FlightState::default());
        assert_eq!(
            stats,
            FlightStats {
                speed: 50.0,
                altitude: 100.0,
                pitch_deg: 0.0,
                roll_deg: 0.0,
            }
        );
    }

    #[test]
    fn converts_angles_to_degrees() {
        let state = FlightState::from_parts(
            Pose {
                position: DVec3::new(0.0, 42.0, 0.0),
                orientation: Orientation::new(FRAC_PI_3, 3.0, -FRAC_PI_3),
            },
            -120.0,
            CameraPose {
                position: DVec3::ZERO,
                look_at: DVec3::ZERO,
            },
        );

        let stats = derive_stats(&state);
        assert_eq!(stats.speed, 120.0);
        assert_eq!(stats.altitude, 42.0);
        assert!((stats.pitch_deg - 60.0).abs() < 1e-9);
        assert!((stats.roll_deg + 60.0).abs() < 1e-9);
    }

    #[test]
    fn altitude_display_is_never_negative() {
        let state = FlightState::from_parts(
            Pose {
                position: DVec3::new(0.0, -5.0, 0.0),
                orientation: Orientation::default(),
            },
            -50.0,
            CameraPose {
                position: DVec3::ZERO,
                look_at: DVec3::ZERO,
            },
        );
        assert_eq!(derive_stats(&state).altitude, 0.0);
    }

    #[test]
    fn derivation_is_pure() {
        let state = FlightState::default();
        assert_eq!(derive_stats(&state), derive_stats(&state));
    }
}
