//! Reference tick driver.
//!
//! Owns one process table and one policy instance. Each step asks the
//! policy for a decision at the current tick, applies one tick of service
//! to the chosen process, and advances the clock.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SimulationConfig, DEFAULT_MAX_TICKS};
use crate::models::{ProcessRecord, Tick};
use crate::policy::SchedulingPolicy;
use crate::validation::{validate_fresh_processes, ValidationError};

/// Errors raised by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The process table failed validation.
    InvalidInput(Vec<ValidationError>),
    /// The run configuration is invalid.
    Config(ConfigError),
    /// Processes were still unfinished when the tick limit was reached.
    TickLimitExceeded { limit: Tick, unfinished: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid process table ({} issues)", errors.len())?;
                for e in errors {
                    write!(f, "; {e}")?;
                }
                Ok(())
            }
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::TickLimitExceeded { limit, unfinished } => write!(
                f,
                "{unfinished} processes unfinished after {limit} ticks"
            ),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Policy name.
    pub policy: String,
    /// Decision for each tick, starting at tick 0.
    pub timeline: Vec<Option<usize>>,
    /// Final state of the process table.
    pub processes: Vec<ProcessRecord>,
    /// Tick each process first ran, by table index.
    pub first_run: Vec<Option<Tick>>,
    /// Tick at which each process finished (end of its last tick).
    pub completion: Vec<Option<Tick>>,
}

impl RunReport {
    /// Latest completion tick (0 if nothing completed).
    pub fn makespan(&self) -> Tick {
        self.completion.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Ticks in which some process ran.
    pub fn busy_ticks(&self) -> Tick {
        self.timeline.iter().flatten().count() as Tick
    }

    /// Ticks at which `index` ran.
    pub fn ticks_for(&self, index: usize) -> Vec<Tick> {
        self.timeline
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == Some(index))
            .map(|(t, _)| t as Tick)
            .collect()
    }
}

/// A single simulation run.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::config::PolicyConfig;
/// use u_cpu_schedule::models::ProcessRecord;
/// use u_cpu_schedule::sim::Simulation;
///
/// let procs = vec![ProcessRecord::new("A", 0, 2), ProcessRecord::new("B", 0, 1)];
/// let policy = PolicyConfig::ShortestRemainingTime.build().unwrap();
/// let report = Simulation::new(procs, policy).unwrap().run().unwrap();
/// assert_eq!(report.timeline, vec![Some(1), Some(0), Some(0)]);
/// ```
#[derive(Debug)]
pub struct Simulation {
    processes: Vec<ProcessRecord>,
    policy: Box<dyn SchedulingPolicy>,
    now: Tick,
    max_ticks: Tick,
    timeline: Vec<Option<usize>>,
    first_run: Vec<Option<Tick>>,
    completion: Vec<Option<Tick>>,
}

impl Simulation {
    /// Creates a run at tick 0 after validating the table.
    ///
    /// Every process must be unscheduled (`time_scheduled == 0`,
    /// `is_done == false`).
    pub fn new(
        processes: Vec<ProcessRecord>,
        policy: Box<dyn SchedulingPolicy>,
    ) -> Result<Self, SimError> {
        validate_fresh_processes(&processes).map_err(SimError::InvalidInput)?;
        let n = processes.len();
        Ok(Self {
            processes,
            policy,
            now: 0,
            max_ticks: DEFAULT_MAX_TICKS,
            timeline: Vec::new(),
            first_run: vec![None; n],
            completion: vec![None; n],
        })
    }

    /// Creates a run from a configuration.
    pub fn from_config(
        processes: Vec<ProcessRecord>,
        config: &SimulationConfig,
    ) -> Result<Self, SimError> {
        if config.max_ticks <= 0 {
            return Err(ConfigError::NonPositiveTickLimit(config.max_ticks).into());
        }
        let policy = config.policy.build()?;
        Ok(Self::new(processes, policy)?.with_max_ticks(config.max_ticks))
    }

    /// Sets the tick limit for [`run`](Self::run).
    pub fn with_max_ticks(mut self, max_ticks: Tick) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Current tick (the next one to be scheduled).
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn timeline(&self) -> &[Option<usize>] {
        &self.timeline
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Whether every process has finished.
    pub fn all_done(&self) -> bool {
        self.processes.iter().all(|p| p.is_done)
    }

    /// Decision the policy would make now, without advancing anything.
    pub fn peek(&self) -> Option<usize> {
        self.policy.peek(self.now, &self.processes)
    }

    /// Runs one tick and returns its decision.
    pub fn step(&mut self) -> Option<usize> {
        let tick = self.now;
        let decision = self.policy.schedule(tick, &self.processes);

        if let Some(index) = decision {
            let process = &mut self.processes[index];
            process.record_tick();
            self.first_run[index].get_or_insert(tick);
            if process.is_done {
                self.completion[index] = Some(tick + 1);
                log::debug!("t={tick} {} finished", process.id);
            }
        }

        self.timeline.push(decision);
        self.now += 1;
        decision
    }

    /// Steps until every process is done.
    pub fn run(mut self) -> Result<RunReport, SimError> {
        log::debug!(
            "{} run: {} processes, limit {} ticks",
            self.policy.name(),
            self.processes.len(),
            self.max_ticks
        );

        while !self.all_done() {
            if self.now >= self.max_ticks {
                let unfinished = self.processes.iter().filter(|p| !p.is_done).count();
                log::warn!(
                    "{} run stopped at tick limit {} with {unfinished} unfinished",
                    self.policy.name(),
                    self.max_ticks
                );
                return Err(SimError::TickLimitExceeded {
                    limit: self.max_ticks,
                    unfinished,
                });
            }
            self.step();
        }

        log::debug!("{} run finished at t={}", self.policy.name(), self.now);
        Ok(self.into_report())
    }

    /// Converts the current state into a report, finished or not.
    pub fn into_report(self) -> RunReport {
        RunReport {
            policy: self.policy.name().to_string(),
            timeline: self.timeline,
            processes: self.processes,
            first_run: self.first_run,
            completion: self.completion,
        }
    }
}
