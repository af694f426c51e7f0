//! Process record model.
//!
//! A process record carries the scheduling-relevant facts about one
//! process: when it arrives, how much service it needs, and how much it
//! has received so far.
//!
//! # Ownership
//! Records are owned by the driver. Policies only read them; the driver
//! is the sole writer of `time_scheduled` and `is_done`, via
//! [`ProcessRecord::record_tick`].

use serde::{Deserialize, Serialize};

/// One unit of simulated time.
pub type Tick = i64;

/// A process in the simulated process table.
///
/// # Invariant
/// `0 <= time_scheduled <= total_time_needed`, and `is_done` is true
/// iff `time_scheduled == total_time_needed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier (reporting only; policies address processes by index).
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub start_time: Tick,
    /// Total service time required.
    pub total_time_needed: Tick,
    /// Ticks already run.
    #[serde(default)]
    pub time_scheduled: Tick,
    /// Whether the process has received all of its service.
    #[serde(default)]
    pub is_done: bool,
}

impl ProcessRecord {
    /// Creates a fresh, never-scheduled process.
    pub fn new(id: impl Into<String>, start_time: Tick, total_time_needed: Tick) -> Self {
        Self {
            id: id.into(),
            start_time,
            total_time_needed,
            time_scheduled: 0,
            is_done: false,
        }
    }

    /// Service still owed to the process.
    pub fn remaining_time(&self) -> Tick {
        self.total_time_needed - self.time_scheduled
    }

    /// Whether the process has arrived by `tick` (inclusive).
    pub fn has_arrived(&self, tick: Tick) -> bool {
        self.start_time <= tick
    }

    /// Applies one tick of service.
    ///
    /// This is the driver's half of the per-tick protocol: after a policy
    /// selects this process, the driver calls this before asking for the
    /// next tick's decision. Calling it on a finished process does nothing.
    pub fn record_tick(&mut self) {
        if self.is_done {
            return;
        }
        self.time_scheduled += 1;
        if self.time_scheduled >= self.total_time_needed {
            self.is_done = true;
        }
    }

    /// Resets accumulated service so the record can start a new run.
    pub fn reset(&mut self) {
        self.time_scheduled = 0;
        self.is_done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process() {
        let p = ProcessRecord::new("P1", 3, 5);
        assert_eq!(p.id, "P1");
        assert_eq!(p.start_time, 3);
        assert_eq!(p.total_time_needed, 5);
        assert_eq!(p.time_scheduled, 0);
        assert!(!p.is_done);
        assert_eq!(p.remaining_time(), 5);
    }

    #[test]
    fn test_has_arrived() {
        let p = ProcessRecord::new("P1", 3, 5);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_record_tick_until_done() {
        let mut p = ProcessRecord::new("P1", 0, 2);
        p.record_tick();
        assert_eq!(p.time_scheduled, 1);
        assert!(!p.is_done);
        p.record_tick();
        assert_eq!(p.time_scheduled, 2);
        assert!(p.is_done);

        // Finished processes absorb no more service
        p.record_tick();
        assert_eq!(p.time_scheduled, 2);
        assert_eq!(p.remaining_time(), 0);
    }

    #[test]
    fn test_reset() {
        let mut p = ProcessRecord::new("P1", 0, 1);
        p.record_tick();
        assert!(p.is_done);
        p.reset();
        assert_eq!(p.time_scheduled, 0);
        assert!(!p.is_done);
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: ProcessRecord =
            serde_json::from_str(r#"{"id":"A","start_time":0,"total_time_needed":4}"#).unwrap();
        assert_eq!(p, ProcessRecord::new("A", 0, 4));
    }
}
