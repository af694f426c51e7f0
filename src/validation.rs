//! Input validation for process tables.
//!
//! Policies assume well-formed records. A driver runs these checks once
//! before a simulation. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Processes with no service demand (they would never finish)
//! - Accumulated service outside `0..=total_time_needed`
//! - `is_done` disagreeing with accumulated service
//!
//! [`validate_fresh_processes`] additionally requires that no process
//! has been scheduled yet, which is what a run starting at tick 0 needs.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// `start_time` is negative.
    NegativeStartTime,
    /// `total_time_needed` is zero or negative.
    NoServiceDemand,
    /// `time_scheduled` is negative or exceeds `total_time_needed`.
    ServiceOutOfRange,
    /// `is_done` does not match `time_scheduled == total_time_needed`.
    InconsistentDoneFlag,
    /// The process already received service before the run started.
    AlreadyScheduled,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process table.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.start_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeStartTime,
                format!("Process '{}' starts at negative tick {}", p.id, p.start_time),
            ));
        }

        if p.total_time_needed <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoServiceDemand,
                format!(
                    "Process '{}' needs {} ticks of service",
                    p.id, p.total_time_needed
                ),
            ));
            // The remaining checks are relative to a positive demand
            continue;
        }

        if p.time_scheduled < 0 || p.time_scheduled > p.total_time_needed {
            errors.push(ValidationError::new(
                ValidationErrorKind::ServiceOutOfRange,
                format!(
                    "Process '{}' has {} of {} ticks scheduled",
                    p.id, p.time_scheduled, p.total_time_needed
                ),
            ));
        } else if p.is_done != (p.time_scheduled == p.total_time_needed) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentDoneFlag,
                format!(
                    "Process '{}' is_done={} with {} of {} ticks scheduled",
                    p.id, p.is_done, p.time_scheduled, p.total_time_needed
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process table for a run that starts from scratch.
///
/// Runs [`validate_processes`] and also rejects any process with
/// `time_scheduled > 0` or `is_done` set.
pub fn validate_fresh_processes(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();

    for p in processes {
        if p.time_scheduled != 0 || p.is_done {
            errors.push(ValidationError::new(
                ValidationErrorKind::AlreadyScheduled,
                format!(
                    "Process '{}' already has {} ticks scheduled (is_done={})",
                    p.id, p.time_scheduled, p.is_done
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
