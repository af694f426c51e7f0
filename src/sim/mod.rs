//! Reference driver, run metrics and synthetic workloads.
//!
//! These sit on top of [`SchedulingPolicy`](crate::policy::SchedulingPolicy):
//! the driver applies the per-tick protocol, the KPI module scores a
//! finished run, and the workload generators produce seeded process tables.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::config::{PolicyConfig, SimulationConfig};
//! use u_cpu_schedule::sim::{workload, RunKpi, Simulation};
//!
//! let procs = workload::uniform(8, 10, 1..=4, 7);
//! let config = SimulationConfig::new(PolicyConfig::RoundRobin { quantum: 2 });
//! let report = Simulation::from_config(procs, &config).unwrap().run().unwrap();
//! let kpi = RunKpi::calculate(&report);
//! assert_eq!(kpi.completed, 8);
//! ```

mod driver;
mod kpi;
pub mod workload;

pub use driver::{RunReport, SimError, Simulation};
pub use kpi::RunKpi;
