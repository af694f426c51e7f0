//! CPU scheduling domain models.
//!
//! The process table is a plain slice of [`ProcessRecord`]s. Policies
//! address processes by their index into that slice; indices stay stable
//! for the whole run.

mod process;

pub use process::{ProcessRecord, Tick};
