//! Shortest Process Next (non-preemptive SJF).
//!
//! Each tick the ready set is rescanned for the smallest total service
//! time. The chosen process stays in the ready set until it finishes, so
//! it keeps winning as long as nothing shorter is admitted while it runs.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2 (SPN)

use super::{select_min_by_key, ReadySet, SchedulingPolicy};
use crate::models::{ProcessRecord, Tick};

/// Shortest Process Next.
#[derive(Debug, Clone, Default)]
pub struct ShortestProcessNext {
    ready: ReadySet,
}

impl ShortestProcessNext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ready set.
    pub fn ready(&self) -> &ReadySet {
        &self.ready
    }
}

impl SchedulingPolicy for ShortestProcessNext {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn schedule(&mut self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.ready.admit_exact_arrivals(current_tick, processes, true);
        self.ready.drop_finished(processes);
        select_min_by_key(&self.ready, processes, |p| p.total_time_needed)
    }

    fn peek(&self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.clone().schedule(current_tick, processes)
    }

    fn description(&self) -> &'static str {
        "Shortest Process Next"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(procs: &mut [ProcessRecord], ticks: std::ops::Range<Tick>) -> Vec<Option<usize>> {
        let mut policy = ShortestProcessNext::new();
        ticks
            .map(|t| {
                let decision = policy.schedule(t, procs);
                if let Some(i) = decision {
                    procs[i].record_tick();
                }
                decision
            })
            .collect()
    }

    #[test]
    fn test_shorter_total_runs_first() {
        let mut procs = vec![ProcessRecord::new("A", 0, 5), ProcessRecord::new("B", 0, 2)];
        let order = run(&mut procs, 0..8);
        let (a, b) = (Some(0), Some(1));
        assert_eq!(order, vec![b, b, a, a, a, a, a, None]);
    }

    #[test]
    fn test_ties_go_to_earliest_admission() {
        let mut procs = vec![
            ProcessRecord::new("A", 0, 2),
            ProcessRecord::new("B", 0, 2),
            ProcessRecord::new("C", 0, 2),
        ];
        let order = run(&mut procs, 0..6);
        let (a, b, c) = (Some(0), Some(1), Some(2));
        assert_eq!(order, vec![a, a, b, b, c, c]);
    }

    #[test]
    fn test_shorter_arrival_switches_by_total() {
        // Selection is re-evaluated by total time every tick, so a shorter job
        // admitted mid-run takes over.
        let mut procs = vec![ProcessRecord::new("A", 0, 4), ProcessRecord::new("B", 1, 1)];
        let order = run(&mut procs, 0..6);
        let (a, b) = (Some(0), Some(1));
        assert_eq!(order, vec![a, b, a, a, a, None]);
    }

    #[test]
    fn test_longer_arrival_does_not_preempt() {
        let mut procs = vec![ProcessRecord::new("A", 0, 3), ProcessRecord::new("B", 1, 5)];
        let order = run(&mut procs, 0..4);
        assert_eq!(order, vec![Some(0), Some(0), Some(0), Some(1)]);
    }

    #[test]
    fn test_finished_arrival_is_not_admitted() {
        let mut procs = vec![ProcessRecord::new("A", 0, 1)];
        procs[0].is_done = true;
        let mut policy = ShortestProcessNext::new();
        assert_eq!(policy.schedule(0, &procs), None);
        assert!(policy.ready().is_empty());
    }

    #[test]
    fn test_repeated_tick_is_idempotent() {
        let procs = vec![ProcessRecord::new("A", 0, 5), ProcessRecord::new("B", 0, 2)];
        let mut policy = ShortestProcessNext::new();
        assert_eq!(policy.schedule(0, &procs), Some(1));
        assert_eq!(policy.schedule(0, &procs), Some(1));
        assert_eq!(policy.ready().len(), 2);
    }
}
