//! Policy and simulation configuration.
//!
//! Configuration is plain serde data so a run can be described in JSON:
//!
//! ```json
//! { "policy": { "policy": "round_robin", "quantum": 4 }, "max_ticks": 1000 }
//! ```

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::models::Tick;
use crate::policy::{
    HighestResponseRatio, RoundRobin, SchedulingPolicy, ShortestProcessNext,
    ShortestRemainingTime,
};

/// Default tick limit for a simulation run.
pub const DEFAULT_MAX_TICKS: Tick = 100_000;

/// Which policy to run, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Round Robin with a fixed quantum (ticks).
    RoundRobin { quantum: u32 },
    /// Non-preemptive shortest job first.
    ShortestProcessNext,
    /// Preemptive shortest job first.
    ShortestRemainingTime,
    /// Highest Response Ratio Next.
    HighestResponseRatio,
}

impl PolicyConfig {
    /// Creates a fresh policy instance for one run.
    pub fn build(&self) -> Result<Box<dyn SchedulingPolicy>, ConfigError> {
        let policy: Box<dyn SchedulingPolicy> = match *self {
            Self::RoundRobin { quantum } => {
                let quantum = NonZeroU32::new(quantum).ok_or(ConfigError::ZeroQuantum)?;
                Box::new(RoundRobin::new(quantum))
            }
            Self::ShortestProcessNext => Box::new(ShortestProcessNext::new()),
            Self::ShortestRemainingTime => Box::new(ShortestRemainingTime::new()),
            Self::HighestResponseRatio => Box::new(HighestResponseRatio::new()),
        };
        Ok(policy)
    }
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Policy to drive.
    pub policy: PolicyConfig,
    /// Ticks after which the run is abandoned.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: Tick,
}

fn default_max_ticks() -> Tick {
    DEFAULT_MAX_TICKS
}

impl SimulationConfig {
    /// Creates a config with the default tick limit.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    /// Sets the tick limit.
    pub fn with_max_ticks(mut self, max_ticks: Tick) -> Self {
        self.max_ticks = max_ticks;
        self
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Round Robin needs a quantum of at least one tick.
    ZeroQuantum,
    /// The tick limit must be positive.
    NonPositiveTickLimit(Tick),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuantum => write!(f, "round robin quantum must be at least 1"),
            Self::NonPositiveTickLimit(limit) => {
                write!(f, "tick limit must be positive, got {limit}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_each_policy() {
        let names: Vec<&str> = [
            PolicyConfig::RoundRobin { quantum: 3 },
            PolicyConfig::ShortestProcessNext,
            PolicyConfig::ShortestRemainingTime,
            PolicyConfig::HighestResponseRatio,
        ]
        .iter()
        .map(|c| c.build().unwrap().name())
        .collect();
        assert_eq!(names, vec!["RR", "SPN", "SRT", "HRRN"]);
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let err = PolicyConfig::RoundRobin { quantum: 0 }.build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroQuantum);
        assert_eq!(err.to_string(), "round robin quantum must be at least 1");
    }

    #[test]
    fn test_deserialize_simulation_config() {
        let config: SimulationConfig = serde_json::from_str(
            r#"{ "policy": { "policy": "round_robin", "quantum": 4 }, "max_ticks": 50 }"#,
        )
        .unwrap();
        assert_eq!(config.policy, PolicyConfig::RoundRobin { quantum: 4 });
        assert_eq!(config.max_ticks, 50);
    }

    #[test]
    fn test_deserialize_default_max_ticks() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "policy": { "policy": "highest_response_ratio" } }"#)
                .unwrap();
        assert_eq!(config.policy, PolicyConfig::HighestResponseRatio);
        assert_eq!(config.max_ticks, DEFAULT_MAX_TICKS);
    }

    #[test]
    fn test_serialize_round_trip_tag() {
        let json = serde_json::to_string(&PolicyConfig::ShortestRemainingTime).unwrap();
        assert_eq!(json, r#"{"policy":"shortest_remaining_time"}"#);
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new(PolicyConfig::ShortestProcessNext).with_max_ticks(10);
        assert_eq!(config.max_ticks, 10);
    }
}
