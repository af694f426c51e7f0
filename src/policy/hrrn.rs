//! Highest Response Ratio Next.
//!
//! Response ratio = (waiting + service) / service, where
//! waiting = now - start_time - time_scheduled. A short job's ratio climbs
//! fastest while it waits, but every waiting job keeps climbing, so long
//! jobs do not starve.
//!
//! Unlike the other policies, admission is level-triggered
//! (`start_time <= now`): an arrival tick the driver skipped is still
//! picked up on the next call.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use super::{ReadySet, SchedulingPolicy};
use crate::models::{ProcessRecord, Tick};

/// Response ratio of `process` at `tick`, or `None` if it is not eligible
/// (no service demand, or already fully served).
///
/// Computed in floating point; integer division would collapse distinct
/// ratios onto the same value.
pub fn response_ratio(process: &ProcessRecord, tick: Tick) -> Option<f64> {
    let service = process.total_time_needed;
    if service <= 0 || process.time_scheduled >= service {
        return None;
    }
    let waiting = tick - process.start_time - process.time_scheduled;
    Some((waiting + service) as f64 / service as f64)
}

/// Highest Response Ratio Next.
#[derive(Debug, Clone, Default)]
pub struct HighestResponseRatio {
    ready: ReadySet,
}

impl HighestResponseRatio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ready set.
    pub fn ready(&self) -> &ReadySet {
        &self.ready
    }
}

impl SchedulingPolicy for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn schedule(&mut self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.ready.admit_arrived(current_tick, processes);
        self.ready.drop_finished(processes);

        let mut best: Option<(usize, f64)> = None;
        for index in self.ready.iter() {
            let Some(ratio) = response_ratio(&processes[index], current_tick) else {
                continue;
            };
            // Strict comparison: first seen wins exact ties
            if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
                best = Some((index, ratio));
            }
        }

        if let Some((index, ratio)) = best {
            log::trace!("t={current_tick} HRRN pick #{index} (ratio {ratio:.3})");
        }
        best.map(|(index, _)| index)
    }

    fn peek(&self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.clone().schedule(current_tick, processes)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(procs: &mut [ProcessRecord], ticks: std::ops::Range<Tick>) -> Vec<Option<usize>> {
        let mut policy = HighestResponseRatio::new();
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
    fn test_response_ratio_values() {
        let p = ProcessRecord::new("A", 2, 4);
        // waiting 0 → 1.0; waiting 2 → 1.5
        assert!((response_ratio(&p, 2).unwrap() - 1.0).abs() < 1e-10);
        assert!((response_ratio(&p, 4).unwrap() - 1.5).abs() < 1e-10);
        // 3 / 4 would be 0 in integer arithmetic
        assert!((response_ratio(&p, 1).unwrap() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_response_ratio_ineligible() {
        let mut done = ProcessRecord::new("A", 0, 1);
        done.record_tick();
        assert_eq!(response_ratio(&done, 3), None);
        assert_eq!(response_ratio(&ProcessRecord::new("Z", 0, 0), 3), None);
    }

    #[test]
    fn test_response_ratio_grows_while_waiting() {
        let mut p = ProcessRecord::new("A", 0, 3);
        p.time_scheduled = 1;
        let ratios: Vec<f64> = (1..20).map(|t| response_ratio(&p, t).unwrap()).collect();
        assert!(ratios.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_short_job_wins_after_shared_wait() {
        let mut procs = vec![ProcessRecord::new("A", 0, 3), ProcessRecord::new("B", 0, 1)];
        let order = run(&mut procs, 0..1);
        // Both 1.0 at t=0; tie → first seen (A)
        assert_eq!(order, vec![Some(0)]);

        let mut procs = vec![ProcessRecord::new("A", 0, 3), ProcessRecord::new("B", 0, 1)];
        let mut policy = HighestResponseRatio::new();
        // Observed first at t=2: A (2+3)/3 = 1.67, B (2+1)/1 = 3.0
        assert_eq!(policy.schedule(2, &procs), Some(1));
        procs[1].record_tick();
        assert_eq!(policy.schedule(3, &procs), Some(0));
    }

    #[test]
    fn test_long_wait_beats_short_service() {
        let mut procs = vec![
            ProcessRecord::new("Run", 0, 4),
            ProcessRecord::new("Long", 0, 4),
            ProcessRecord::new("Short", 3, 2),
        ];
        let order = run(&mut procs, 0..4);
        // t=0 tie → Run; Run's ratio never grows while it runs.
        // t=1: Run 1.0, Long 1.25 → Long
        assert_eq!(order[0], Some(0));
        assert_eq!(order[1], Some(1));
        // t=2: both (1+4)/4 = 1.25 → Run
        assert_eq!(order[2], Some(0));
        // t=3: Run (1+4)/4 = 1.25, Long (2+4)/4 = 1.5, Short (0+2)/2 = 1.0
        assert_eq!(order[3], Some(1));
    }

    #[test]
    fn test_exact_tie_keeps_first_admitted() {
        // Equal ratios at every tick they are compared: (w + 2) / 2
        let procs = vec![
            ProcessRecord::new("A", 0, 2),
            ProcessRecord::new("B", 0, 2),
            ProcessRecord::new("C", 0, 2),
        ];
        let mut policy = HighestResponseRatio::new();
        assert_eq!(policy.schedule(4, &procs), Some(0));
        assert_eq!(policy.peek(4, &procs), Some(0));
    }

    #[test]
    fn test_missed_arrival_tick_still_admitted() {
        let procs = vec![ProcessRecord::new("A", 2, 3)];
        let mut policy = HighestResponseRatio::new();
        assert_eq!(policy.schedule(5, &procs), Some(0));
        assert_eq!(policy.ready().len(), 1);
    }

    #[test]
    fn test_runs_to_completion() {
        let mut procs = vec![ProcessRecord::new("A", 0, 2), ProcessRecord::new("B", 1, 2)];
        let order = run(&mut procs, 0..6);
        assert_eq!(order.iter().filter(|d| **d == Some(0)).count(), 2);
        assert_eq!(order.iter().filter(|d| **d == Some(1)).count(), 2);
        assert_eq!(&order[4..], &[None, None]);
        assert!(procs.iter().all(|p| p.is_done));
    }

    #[test]
    fn test_each_arrival_admitted_once() {
        let mut procs = vec![ProcessRecord::new("A", 0, 5), ProcessRecord::new("B", 0, 5)];
        let mut policy = HighestResponseRatio::new();
        for t in 0..4 {
            if let Some(i) = policy.schedule(t, &procs) {
                procs[i].record_tick();
            }
        }
        assert_eq!(policy.ready().len(), 2);
    }
}
