//! Discrete-time CPU scheduling policies.
//!
//! Given a process table and the current tick, a policy picks the single
//! process (if any) that occupies the CPU for that tick. Four classical
//! disciplines are provided: Round Robin, Shortest Process Next, Shortest
//! Remaining Time and Highest Response Ratio Next.
//!
//! # Modules
//!
//! - **`models`**: `ProcessRecord` and the `Tick` time unit
//! - **`policy`**: the `SchedulingPolicy` trait, the shared `ReadySet`
//!   tracker and the four policies
//! - **`config`**: serde-driven policy/run configuration
//! - **`validation`**: process table integrity checks
//! - **`sim`**: reference tick driver, run KPIs, seeded workloads
//!
//! # Architecture
//!
//! Policies hold all of their persistent state (ready queue, quantum
//! countdown) in the policy value itself. One value serves one run;
//! independent runs never share state.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod config;
pub mod models;
pub mod policy;
pub mod sim;
pub mod validation;
