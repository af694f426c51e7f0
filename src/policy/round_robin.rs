//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit every process whose `start_time` equals the current tick.
//! 2. If the quantum ran out or the front process finished, rotate: a
//!    still-running front goes to the back, a finished one is dropped.
//!    The quantum restarts.
//! 3. Run the front process and count down the quantum. With an empty
//!    queue, return `None` and zero the countdown so the next tick
//!    reschedules immediately.
//!
//! Admission is edge-triggered and does not look at `is_done`: an arrival
//! on a tick the driver never asks about is never admitted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::num::NonZeroU32;

use super::{ReadySet, SchedulingPolicy};
use crate::models::{ProcessRecord, Tick};

/// Round Robin with a fixed quantum.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    ready: ReadySet,
    quantum: NonZeroU32,
    ticks_until_reschedule: u32,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self {
            ready: ReadySet::new(),
            quantum,
            ticks_until_reschedule: quantum.get(),
        }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }

    /// Ticks left before the front process is rotated out.
    pub fn ticks_until_reschedule(&self) -> u32 {
        self.ticks_until_reschedule
    }

    /// Current queue, front first.
    pub fn ready(&self) -> &ReadySet {
        &self.ready
    }

    fn reschedule(&mut self, tick: Tick, processes: &[ProcessRecord]) {
        let Some(front) = self.ready.front() else {
            // Nothing to rotate; fall through to the empty-queue decision.
            return;
        };
        let front_done = processes[front].is_done;
        if self.ticks_until_reschedule != 0 && !front_done {
            return;
        }

        if front_done {
            self.ready.pop_front();
            log::trace!("t={tick} RR drop finished #{front}");
        } else {
            self.ready.rotate_front();
            log::trace!("t={tick} RR quantum expired, #{front} to back");
        }
        self.ticks_until_reschedule = self.quantum.get();
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&mut self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.ready.admit_exact_arrivals(current_tick, processes, false);
        self.reschedule(current_tick, processes);

        match self.ready.front() {
            Some(front) => {
                self.ticks_until_reschedule = self.ticks_until_reschedule.saturating_sub(1);
                Some(front)
            }
            None => {
                self.ticks_until_reschedule = 0;
                None
            }
        }
    }

    fn peek(&self, current_tick: Tick, processes: &[ProcessRecord]) -> Option<usize> {
        self.clone().schedule(current_tick, processes)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
