use thiserror::Error;

/// Rejected `GameConfig` values.  Game logic itself never fails; only the
/// configuration handed to it can be malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} ({size}px) does not fit the {axis} of the surface ({surface}px)")]
    DoesNotFit {
        what: &'static str,
        axis: &'static str,
        size: f64,
        surface: f64,
    },

    #[error("enemy speed range is empty: min={min}, max={max}")]
    EmptySpeedRange { min: f64, max: f64 },

    #[error("spawn interval floor ({floor}ms) exceeds the initial interval ({initial}ms)")]
    SpawnFloorAboveInitial { floor: f64, initial: f64 },

    #[error("starting life must be at least 1")]
    NoStartingLife,
}
