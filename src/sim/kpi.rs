//! Run quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion tick |
//! | CPU Utilization | Busy ticks / makespan |
//! | Throughput | Completed processes / makespan |
//! | Turnaround | completion - start_time |
//! | Waiting | turnaround - total_time_needed |
//! | Response | first run - start_time |
//! | Context Switches | Changes of running process (idle ticks skipped) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::RunReport;
use crate::models::Tick;

/// Run performance indicators.
///
/// All time values are in ticks. Averages are over completed processes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunKpi {
    /// Latest completion tick.
    pub makespan: Tick,
    /// Ticks in which a process ran.
    pub busy_ticks: Tick,
    /// busy_ticks / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of completed processes.
    pub completed: usize,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    /// Longest single waiting time.
    pub max_waiting: Tick,
    pub avg_response: f64,
    pub context_switches: usize,
}

impl RunKpi {
    /// Computes KPIs from a run report.
    pub fn calculate(report: &RunReport) -> Self {
        let makespan = report.makespan();
        let busy_ticks = report.busy_ticks();

        let mut completed: usize = 0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;
        let mut max_waiting: Tick = 0;
        let mut total_response: f64 = 0.0;

        // A missing completion entry counts as unfinished
        for (i, process) in report.processes.iter().enumerate() {
            let Some(&Some(completion)) = report.completion.get(i) else {
                continue;
            };
            completed += 1;

            let turnaround = completion - process.start_time;
            let waiting = turnaround - process.total_time_needed;
            total_turnaround += turnaround as f64;
            total_waiting += waiting as f64;
            max_waiting = max_waiting.max(waiting);

            if let Some(&Some(first)) = report.first_run.get(i) {
                total_response += (first - process.start_time) as f64;
            }
        }

        let per_tick = |value: f64| {
            if makespan == 0 {
                0.0
            } else {
                value / makespan as f64
            }
        };
        let per_process = |total: f64| {
            if completed == 0 {
                0.0
            } else {
                total / completed as f64
            }
        };

        Self {
            makespan,
            busy_ticks,
            cpu_utilization: per_tick(busy_ticks as f64),
            throughput: per_tick(completed as f64),
            completed,
            avg_turnaround: per_process(total_turnaround),
            avg_waiting: per_process(total_waiting),
            max_waiting,
            avg_response: per_process(total_response),
            context_switches: count_switches(&report.timeline),
        }
    }
}

fn count_switches(timeline: &[Option<usize>]) -> usize {
    let mut switches = 0;
    let mut last: Option<usize> = None;
    for &running in timeline.iter().flatten() {
        if last.is_some_and(|prev| prev != running) {
            switches += 1;
        }
        last = Some(running);
    }
    switches
}
