use crate::error::FlightError;
use crate::input::InputLatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ControlAction {
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    SpeedIncrease,
    SpeedDecrease,
}

impl ControlAction {
    pub const ALL: [ControlAction; 8] = [
        ControlAction::PitchUp,
        ControlAction::PitchDown,
        ControlAction::RollLeft,
        ControlAction::RollRight,
        ControlAction::YawLeft,
        ControlAction::YawRight,
        ControlAction::SpeedIncrease,
        ControlAction::SpeedDecrease,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ControlAction::PitchUp => "pitch-up",
            ControlAction::PitchDown => "pitch-down",
            ControlAction::RollLeft => "roll-left",
            ControlAction::RollRight => "roll-right",
            ControlAction::YawLeft => "yaw-left",
            ControlAction::YawRight => "yaw-right",
            ControlAction::SpeedIncrease => "speed-increase",
            ControlAction::SpeedDecrease => "speed-decrease",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlAction {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ControlAction::ALL
            .into_iter()
            .find(|action| action.name() == normalized)
            .ok_or_else(|| FlightError::UnknownAction(s.to_string()))
    }
}

impl TryFrom<String> for ControlAction {
    type Error = FlightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ControlAction> for String {
    fn from(action: ControlAction) -> Self {
        action.name().to_string()
    }
}

/// Actions held during one tick, sampled from the latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    held: u8,
}

impl ControlInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: ControlAction) -> Self {
        self.press(action);
        self
    }

    pub fn press(&mut self, action: ControlAction) {
        self.held |= action.bit();
    }

    pub fn is_active(&self, action: ControlAction) -> bool {
        self.held & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }
}

impl FromIterator<ControlAction> for ControlInput {
    fn from_iter<I: IntoIterator<Item = ControlAction>>(iter: I) -> Self {
        let mut input = ControlInput::none();
        for action in iter {
            input.press(action);
        }
        input
    }
}

/// Key name to action table. Key names are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, ControlAction>", into = "BTreeMap<String, ControlAction>")]
pub struct ControlBindings {
    keys: BTreeMap<String, ControlAction>,
}

impl ControlBindings {
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, key: &str, action: ControlAction) {
        self.keys.insert(key.to_lowercase(), action);
    }

    pub fn action_for(&self, key: &str) -> Option<ControlAction> {
        self.keys.get(&key.to_lowercase()).copied()
    }

    /// Keys bound to `action`, in sorted order.
    pub fn keys_for(&self, action: ControlAction) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
    }

    pub fn sample(&self, latch: &InputLatch) -> ControlInput {
        self.keys
            .iter()
            .filter(|(key, _)| latch.is_held(key))
            .map(|(_, action)| *action)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for ControlBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("w", ControlAction::PitchUp);
        bindings.bind("s", ControlAction::PitchDown);
        bindings.bind("a", ControlAction::RollLeft);
        bindings.bind("d", ControlAction::RollRight);
        bindings.bind("q", ControlAction::YawLeft);
        bindings.bind("e", ControlAction::YawRight);
        bindings.bind("arrowup", ControlAction::SpeedIncrease);
        bindings.bind("arrowdown", ControlAction::SpeedDecrease);
        bindings
    }
}

impl From<BTreeMap<String, ControlAction>> for ControlBindings {
    fn from(keys: BTreeMap<String, ControlAction>) -> Self {
        let mut bindings = Self::empty();
        for (key, action) in keys {
            bindings.bind(&key, action);
        }
        bindings
    }
}

impl From<ControlBindings> for BTreeMap<String, ControlAction> {
    fn from(bindings: ControlBindings) -> Self {
        bindings.keys
    }
}
