//! Timing constraint constants and the optional TOML override file.
//!
//! The six scalar constants describe the storage elements and the clock:
//! clock period, setup/hold windows, minimum/maximum clock-to-Q delay,
//! and worst-case clock skew, all in the same integer time unit as the
//! cell delay library. The set is constructed once at startup, from the
//! built-in defaults or a `tempo.toml` override, and passed read-only
//! into analysis; nothing mutates it afterwards.
//!
//! Hold time and minimum clock-to-Q are carried for completeness but are
//! not evaluated: hold-time checking is out of scope for this analysis.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tempo_netlist::DelayLibrary;

/// Default clock period.
pub const DEFAULT_CLOCK_PERIOD: u64 = 50;
/// Default setup time (input stable before the clock edge).
pub const DEFAULT_SETUP_TIME: u64 = 8;
/// Default hold time (input stable after the clock edge).
pub const DEFAULT_HOLD_TIME: u64 = 4;
/// Default fastest clock-to-Q delay.
pub const DEFAULT_CLK2Q_MIN: u64 = 1;
/// Default slowest clock-to-Q delay.
pub const DEFAULT_CLK2Q_MAX: u64 = 5;
/// Default worst-case clock skew.
pub const DEFAULT_CLOCK_SKEW_MAX: u64 = 3;

/// The scalar timing constants of the clock and storage elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConstraints {
    /// Clock period.
    pub clock_period: u64,
    /// Time a storage input must be stable before the clock edge.
    pub setup_time: u64,
    /// Time a storage input must be stable after the clock edge.
    pub hold_time: u64,
    /// Fastest time from clock edge to storage output change.
    pub clk2q_min: u64,
    /// Slowest time from clock edge to storage output change.
    pub clk2q_max: u64,
    /// Worst-case skew between clock arrivals at two storage elements.
    pub clock_skew_max: u64,
}

impl Default for TimingConstraints {
    fn default() -> Self {
        Self {
            clock_period: DEFAULT_CLOCK_PERIOD,
            setup_time: DEFAULT_SETUP_TIME,
            hold_time: DEFAULT_HOLD_TIME,
            clk2q_min: DEFAULT_CLK2Q_MIN,
            clk2q_max: DEFAULT_CLK2Q_MAX,
            clock_skew_max: DEFAULT_CLOCK_SKEW_MAX,
        }
    }
}

/// The full analysis configuration: timing constants plus cell delays.
///
/// Loaded from a `tempo.toml` file with `[constraints]` and `[delays]`
/// tables; omitted fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Clock and storage-element constants.
    pub constraints: TimingConstraints,
    /// Per-kind combinational cell delays.
    pub delays: DelayLibrary,
}

/// Errors that can occur when loading or validating a timing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConstraintError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read constraints: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse constraints: {0}")]
    Parse(String),

    /// A constraint value failed validation.
    #[error("invalid constraints: {0}")]
    Invalid(String),
}

/// Loads and validates a timing configuration from a TOML file.
pub fn read_config(path: &Path) -> Result<TimingConfig, ConstraintError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates a timing configuration from TOML text.
///
/// Useful for testing without filesystem dependencies.
pub fn parse_config(content: &str) -> Result<TimingConfig, ConstraintError> {
    let config: TimingConfig =
        toml::from_str(content).map_err(|e| ConstraintError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that the constraint values are internally consistent.
fn validate_config(config: &TimingConfig) -> Result<(), ConstraintError> {
    let constraints = &config.constraints;
    if constraints.clock_period == 0 {
        return Err(ConstraintError::Invalid(
            "clock_period must be positive".to_string(),
        ));
    }
    if constraints.clk2q_min > constraints.clk2q_max {
        return Err(ConstraintError::Invalid(format!(
            "clk2q_min ({}) exceeds clk2q_max ({})",
            constraints.clk2q_min, constraints.clk2q_max
        )));
    }
    Ok(())
}
