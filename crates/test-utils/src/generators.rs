//! Generators for synthetic forecast-collection coordinate structures.
//!
//! These build predictable, verifiable coordinate data shaped like real
//! operational collections (fixed daily cycles, hourly forecast offsets).

use chrono::{DateTime, Duration, Timelike, Utc};

use fmrc_common::time::parse_run_date;
use fmrc_common::ModelCycle;
use fmrc_coord::{
    CoordinateTime2d, RuntimeCoordinate, TimeAxis, TimeCoordinate, TimeInterval,
    TimeIntervalCoordinate, TimeOffset,
};

/// A fixed day used as the first run date by all generators.
pub fn base_date() -> DateTime<Utc> {
    parse_run_date("2024-01-15T00:00:00Z").expect("base date is well-formed")
}

/// Run dates for `days` consecutive days at the given daily cycles.
///
/// `run_dates(&[Z00, Z12], 2)` yields Jan 15 00Z, Jan 15 12Z, Jan 16 00Z,
/// Jan 16 12Z.
pub fn run_dates(cycles: &[ModelCycle], days: u32) -> Vec<DateTime<Utc>> {
    let mut dates = Vec::with_capacity(cycles.len() * days as usize);
    for day in 0..days {
        for cycle in cycles {
            dates.push(base_date() + Duration::hours((day * 24 + cycle.hour()) as i64));
        }
    }
    dates
}

/// An instant forecast-time axis for one run.
pub fn instant_axis(ref_date: DateTime<Utc>, offsets: &[i32]) -> TimeAxis {
    TimeAxis::Instant(TimeCoordinate::new(
        "time",
        "hours",
        0,
        ref_date,
        offsets.iter().map(|&o| TimeOffset(o)).collect(),
    ))
}

/// An interval forecast-time axis for one run.
pub fn interval_axis(ref_date: DateTime<Utc>, intervals: &[(i32, i32)]) -> TimeAxis {
    TimeAxis::Interval(TimeIntervalCoordinate::new(
        "time_intv",
        "hours",
        11,
        ref_date,
        intervals
            .iter()
            .map(|&(start, end)| TimeInterval::new(start, end))
            .collect(),
    ))
}

/// A 2D structure from explicit (run date, offsets) pairs.
pub fn instant_time2d(name: &str, runs: &[(DateTime<Utc>, Vec<i32>)]) -> CoordinateTime2d {
    let runtime = RuntimeCoordinate::new("reftime", "", runs.iter().map(|(d, _)| *d).collect());
    let axes = runs
        .iter()
        .map(|(d, offs)| instant_axis(*d, offs))
        .collect();
    CoordinateTime2d::new(name, "hours", runtime, axes)
        .expect("generator produced a malformed structure")
}

/// A 2D structure from explicit (run date, intervals) pairs.
pub fn interval_time2d(name: &str, runs: &[(DateTime<Utc>, Vec<(i32, i32)>)]) -> CoordinateTime2d {
    let runtime = RuntimeCoordinate::new("reftime", "", runs.iter().map(|(d, _)| *d).collect());
    let axes = runs
        .iter()
        .map(|(d, intvs)| interval_axis(*d, intvs))
        .collect();
    CoordinateTime2d::new(name, "hours", runtime, axes)
        .expect("generator produced a malformed structure")
}

/// A GFS-like structure: 4x-daily runs, every run with the same offsets.
///
/// Orthogonal and regular by construction.
pub fn uniform_collection(name: &str, days: u32, offsets: &[i32]) -> CoordinateTime2d {
    let runs: Vec<_> = run_dates(ModelCycle::all_4x_daily(), days)
        .into_iter()
        .map(|d| (d, offsets.to_vec()))
        .collect();
    instant_time2d(name, &runs)
}

/// A structure whose 00Z runs carry a different offset axis than its other
/// cycles, the common long-run/short-run pattern.
///
/// Regular by construction (axes match within each hour). Orthogonal only
/// when one of the two axes is a subset of the other.
pub fn long_short_collection(
    name: &str,
    days: u32,
    long_offsets: &[i32],
    short_offsets: &[i32],
) -> CoordinateTime2d {
    let runs: Vec<_> = run_dates(ModelCycle::all_4x_daily(), days)
        .into_iter()
        .map(|d| {
            let offsets = if ModelCycle::from_hour(d.hour()) == Some(ModelCycle::Z00) {
                long_offsets.to_vec()
            } else {
                short_offsets.to_vec()
            };
            (d, offsets)
        })
        .collect();
    instant_time2d(name, &runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_dates_cycle_order() {
        let dates = run_dates(&[ModelCycle::Z00, ModelCycle::Z12], 2);
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], base_date());
        assert_eq!(dates[1], base_date() + Duration::hours(12));
        assert_eq!(dates[2], base_date() + Duration::hours(24));
    }

    #[test]
    fn test_uniform_collection_shape() {
        let coord = uniform_collection("gfs", 2, &[0, 6, 12]);
        assert_eq!(coord.n_runs(), 8);
        assert_eq!(coord.n_times(), 3);
        assert!(!coord.is_time_interval());
    }

    #[test]
    fn test_long_short_collection_shape() {
        let coord = long_short_collection("nam", 1, &[0, 6, 12, 18, 24], &[0, 6]);
        assert_eq!(coord.n_runs(), 4);
        assert_eq!(coord.time_axis(0).unwrap().len(), 5);
        assert_eq!(coord.time_axis(1).unwrap().len(), 2);
    }
}
