use thiserror::Error;

/// Top-level error type for the gate simulator core.
#[derive(Debug, Error)]
pub enum GatesimError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by index-based lookups into the gate and wire stores.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("no gate at index {0}")]
    GateNotFound(usize),

    #[error("no wire at index {0}")]
    WireNotFound(usize),

    #[error("gate {gate} has no input slot {slot}")]
    InvalidSlot { gate: usize, slot: usize },

    #[error("gate {0} has no output")]
    NoOutput(usize),
}

/// Errors related to loading or validating a [`SimulatorConfig`](crate::config::SimulatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Convenience type alias for results using [`GatesimError`].
pub type Result<T> = std::result::Result<T, GatesimError>;
