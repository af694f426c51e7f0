//! Ready-set tracker shared by every policy.
//!
//! Each policy instance owns one `ReadySet`. It holds process indices in
//! admission order and evicts finished processes lazily, only when they
//! reach the front.

use std::collections::{HashSet, VecDeque};

use crate::models::{ProcessRecord, Tick};

/// Ordered set of ready process indices.
///
/// Order is FIFO. Round Robin depends on it; the shortest-job and HRRN
/// policies rescan every entry each tick and only use it for tie-breaks
/// (earliest admission wins).
#[derive(Debug, Clone, Default)]
pub struct ReadySet {
    queue: VecDeque<usize>,
    /// Every index ever admitted, for once-only admission.
    admitted: HashSet<usize>,
    /// Last tick admission ran for.
    last_admission: Option<Tick>,
}

impl ReadySet {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `index` to the back.
    pub fn admit(&mut self, index: usize) {
        self.admitted.insert(index);
        self.queue.push_back(index);
    }

    /// Whether `index` was admitted at some point in this run.
    pub fn was_admitted(&self, index: usize) -> bool {
        self.admitted.contains(&index)
    }

    /// Edge-triggered admission: admits every process whose `start_time`
    /// equals `tick` exactly. With `skip_done`, finished processes are
    /// left out.
    ///
    /// A tick that is never observed loses its arrivals for good.
    pub fn admit_exact_arrivals(
        &mut self,
        tick: Tick,
        processes: &[ProcessRecord],
        skip_done: bool,
    ) {
        if !self.begin_admission(tick) {
            return;
        }
        for (index, process) in processes.iter().enumerate() {
            if process.start_time == tick && !(skip_done && process.is_done) {
                log::trace!("t={tick} admit #{index} ({})", process.id);
                self.admit(index);
            }
        }
    }

    /// Level-triggered admission: admits every unfinished process that has
    /// arrived by `tick` and was never admitted before.
    pub fn admit_arrived(&mut self, tick: Tick, processes: &[ProcessRecord]) {
        if !self.begin_admission(tick) {
            return;
        }
        for (index, process) in processes.iter().enumerate() {
            if process.has_arrived(tick) && !process.is_done && !self.was_admitted(index) {
                log::trace!("t={tick} admit #{index} ({})", process.id);
                self.admit(index);
            }
        }
    }

    /// Pops entries off the front while their process is done.
    pub fn drop_finished(&mut self, processes: &[ProcessRecord]) {
        while let Some(&front) = self.queue.front() {
            if !processes[front].is_done {
                break;
            }
            self.queue.pop_front();
        }
    }

    /// Removes and returns the front entry.
    pub fn pop_front(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Moves the front entry to the back. Returns the moved index.
    pub fn rotate_front(&mut self) -> Option<usize> {
        let front = self.queue.pop_front()?;
        self.queue.push_back(front);
        Some(front)
    }

    pub fn front(&self) -> Option<usize> {
        self.queue.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Iterates entries front to back.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }

    /// Returns false (and records `tick`) only the first time a tick is seen.
    fn begin_admission(&mut self, tick: Tick) -> bool {
        if self.last_admission.is_some_and(|last| tick <= last) {
            return false;
        }
        self.last_admission = Some(tick);
        true
    }
}
