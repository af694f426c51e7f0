//! Seeded synthetic workloads.
//!
//! Generators are deterministic for a given seed, so runs and tests are
//! reproducible.

use std::ops::RangeInclusive;

use rand::prelude::*;

use crate::models::{ProcessRecord, Tick};

/// `count` processes with arrivals uniform in `0..=max_arrival` and
/// service uniform in `service`.
///
/// The table is ordered by arrival; IDs are `P0`, `P1`, ... in that order.
/// Service times are clamped to at least one tick, and an empty `service`
/// range collapses to its start.
pub fn uniform(
    count: usize,
    max_arrival: Tick,
    service: RangeInclusive<Tick>,
    seed: u64,
) -> Vec<ProcessRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let service = clamp_service(service);
    let mut shape: Vec<(Tick, Tick)> = (0..count)
        .map(|_| {
            (
                rng.random_range(0..=max_arrival.max(0)),
                rng.random_range(service.clone()),
            )
        })
        .collect();
    shape.sort_by_key(|&(arrival, _)| arrival);

    shape
        .into_iter()
        .enumerate()
        .map(|(i, (arrival, needed))| ProcessRecord::new(format!("P{i}"), arrival, needed))
        .collect()
}

/// At each tick in `0..ticks`, a process arrives with probability
/// `p_arrival`. It is short (`short_ticks`) with probability `p_short`,
/// otherwise long (`long_ticks`). Both are clamped to at least one tick.
pub fn bernoulli_arrivals(
    ticks: Tick,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Tick,
    long_ticks: Tick,
    seed: u64,
) -> Vec<ProcessRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (short_ticks, long_ticks) = (short_ticks.max(1), long_ticks.max(1));
    let mut processes = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let needed = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };
            processes.push(ProcessRecord::new(
                format!("P{}", processes.len()),
                t,
                needed,
            ));
        }
    }

    processes
}

/// Non-empty range of positive service times.
fn clamp_service(service: RangeInclusive<Tick>) -> RangeInclusive<Tick> {
    let low = (*service.start()).max(1);
    let high = (*service.end()).max(low);
    low..=high
}
