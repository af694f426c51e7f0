//! Per-tick CPU scheduling policies.
//!
//! Provides four classical disciplines behind one trait:
//!
//! | Policy | Admission | Selection key | Preemptive |
//! |--------|-----------|---------------|------------|
//! | [`RoundRobin`] | exact arrival tick | queue order + quantum | yes (quantum) |
//! | [`ShortestProcessNext`] | exact arrival tick | total service time | no |
//! | [`ShortestRemainingTime`] | exact arrival tick | remaining service time | yes |
//! | [`HighestResponseRatio`] | arrived by now | response ratio | no |
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::models::ProcessRecord;
//! use u_cpu_schedule::policy::{SchedulingPolicy, ShortestProcessNext};
//!
//! let procs = vec![ProcessRecord::new("A", 0, 5), ProcessRecord::new("B", 0, 2)];
//! let mut policy = ShortestProcessNext::new();
//! assert_eq!(policy.schedule(0, &procs), Some(1));
//! ```
//!
//! # Tick protocol
//! The driver calls [`SchedulingPolicy::schedule`] once per tick with a
//! strictly increasing tick. After a decision `Some(i)` it applies
//! [`ProcessRecord::record_tick`] to process `i` before the next call.
//!
//! # References
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod hrrn;
mod ready_set;
mod round_robin;
mod shortest_process;
mod shortest_remaining;

pub use hrrn::{response_ratio, HighestResponseRatio};
pub use ready_set::ReadySet;
pub use round_robin::RoundRobin;
pub use shortest_process::ShortestProcessNext;
pub use shortest_remaining::ShortestRemainingTime;

use std::fmt::Debug;

use crate::models::{ProcessRecord, Tick};

/// A CPU scheduling discipline with persistent per-run state.
///
/// One instance serves exactly one simulation run. Independent runs use
/// independent instances.
pub trait SchedulingPolicy: Send + Debug {
    /// Policy name (e.g., "RR", "SRT").
    fn name(&self) -> &'static str;

    /// Picks the process to run during `current_tick`.
    ///
    /// Updates the policy's ready set and counters. Returns an index into
    /// `processes`, or `None` if nothing should run.
    fn schedule(&mut self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize>;

    /// Returns what [`schedule`](Self::schedule) would return, leaving all
    /// state untouched.
    fn peek(&self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Index of the first ready, unfinished entry with the smallest key.
///
/// Starts from the front (assumed unfinished after lazy eviction) and only
/// moves on a strictly smaller key, so earliest admission wins ties.
fn select_min_by_key<F>(ready: &ReadySet, processes: &[ProcessRecord], key: F) -> Option<usize>
where
    F: Fn(&ProcessRecord) -> Tick,
{
    let mut best = ready.front()?;
    for index in ready.iter() {
        let candidate = &processes[index];
        if !candidate.is_done && key(candidate) < key(&processes[best]) {
            best = index;
        }
    }
    Some(best)
}
