use crate::controls::{ControlAction, ControlBindings};
use crate::stats::FlightStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudReadout {
    pub speed: String,
    pub altitude: String,
    pub pitch: String,
    pub roll: String,
}

impl HudReadout {
    pub fn from_stats(stats: &FlightStats) -> Self {
        Self {
            speed: format!("SPEED: {:.1} kt", stats.speed),
            altitude: format!("ALT: {:.0} ft", stats.altitude),
            pitch: format!("PITCH: {:.1}°", stats.pitch_deg),
            roll: format!("ROLL: {:.1}°", stats.roll_deg),
        }
    }

    pub fn lines(&self) -> [&str; 4] {
        [&self.speed, &self.altitude, &self.pitch, &self.roll]
    }
}

pub const CONTROLS_TITLE: &str = "Flight Controls";

const LEGEND_ROWS: [(ControlAction, ControlAction, &str); 4] = [
    (ControlAction::PitchUp, ControlAction::PitchDown, "Pitch Up/Down"),
    (ControlAction::RollLeft, ControlAction::RollRight, "Roll Left/Right"),
    (ControlAction::YawLeft, ControlAction::YawRight, "Yaw Left/Right"),
    (ControlAction::SpeedIncrease, ControlAction::SpeedDecrease, "Speed Up/Down"),
];

/// Help panel rows such as `W/S - Pitch Up/Down`, built from the active bindings.
pub fn controls_legend(bindings: &ControlBindings) -> Vec<String> {
    LEGEND_ROWS
        .iter()
        .map(|(first, second, label)| {
            format!(
                "{}/{} - {}",
                key_label(bindings, *first),
                key_label(bindings, *second),
                label
            )
        })
        .collect()
}

fn key_label(bindings: &ControlBindings, action: ControlAction) -> String {
    match bindings.keys_for(action).next() {
        Some(key) => display_key(key),
        None => "?".to_string(),
    }
}

fn display_key(key: &str) -> String {
    match key {
        "arrowup" => "Up".to_string(),
        "arrowdown" => "Down".to_string(),
        "arrowleft" => "Left".to_string(),
        "arrowright" => "Right".to_string(),
        " " => "Space".to_string(),
        other => other.to_uppercase(),
    }
}
