//! Shortest Remaining Time (preemptive SJF).
//!
//! Same shape as SPN, keyed on `total_time_needed - time_scheduled`.
//! Preemption falls out of re-evaluating the key every tick: a new
//! arrival with less remaining work wins on the tick it is admitted.

use super::{select_min_by_key, ReadySet, SchedulingPolicy};
use crate::models::{ProcessRecord, Tick};

/// Shortest Remaining Time.
#[derive(Debug, Clone, Default)]
pub struct ShortestRemainingTime {
    ready: ReadySet,
}

impl ShortestRemainingTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ready set.
    pub fn ready(&self) -> &ReadySet {
        &self.ready
    }
}

impl SchedulingPolicy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn schedule(&mut self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.ready.admit_exact_arrivals(current_tick, processes, true);
        self.ready.drop_finished(processes);
        select_min_by_key(&self.ready, processes, ProcessRecord::remaining_time)
    }

    fn peek(&self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.clone().schedule(current_tick, processes)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}
