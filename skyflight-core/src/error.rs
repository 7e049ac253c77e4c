use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FlightError {
    /// Frame delta was NaN, infinite or negative.
    InvalidDelta(f64),
    UnknownAction(String),
    InvalidConfig(String),
    /// A resumed flight state breaks the configured limits.
    InvalidState(String),
    Config(String),
}

impl FlightError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl fmt::Display for FlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightError::InvalidDelta(delta) => {
                write!(f, "frame delta must be finite and non-negative, got {}", delta)
            }
            FlightError::UnknownAction(name) => write!(f, "unknown control action '{}'", name),
            FlightError::InvalidConfig(message) => write!(f, "invalid flight config: {}", message),
            FlightError::InvalidState(message) => write!(f, "invalid flight state: {}", message),
            FlightError::Config(message) => write!(f, "failed to read flight config: {}", message),
        }
    }
}

impl Error for FlightError {}

impl From<serde_json::Error> for FlightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
