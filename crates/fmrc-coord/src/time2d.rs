//! The two-dimensional (runtime × forecast-offset) time coordinate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fmrc_common::{CoordError, CoordResult};

use crate::coordinate::{RuntimeCoordinate, TimeAxis};
use crate::set::CoordinateSet;
use crate::values::OffsetValue;

/// Runtime axis paired with one forecast-time axis per run.
///
/// Immutable after construction. The runtime axis length always equals the
/// number of per-run time axes, and all per-run axes share one kind (all
/// instant or all interval).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTime2d {
    name: String,
    unit: String,
    runtime: RuntimeCoordinate,
    times: Vec<TimeAxis>,
    is_interval: bool,
}

impl CoordinateTime2d {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        runtime: RuntimeCoordinate,
        times: Vec<TimeAxis>,
    ) -> CoordResult<Self> {
        if runtime.len() != times.len() {
            return Err(CoordError::RunCountMismatch {
                runs: runtime.len(),
                axes: times.len(),
            });
        }
        let is_interval = times.first().map(TimeAxis::is_interval).unwrap_or(false);
        if times.iter().any(|t| t.is_interval() != is_interval) {
            return Err(CoordError::MixedAxisKinds);
        }
        Ok(Self {
            name: name.into(),
            unit: unit.into(),
            runtime,
            times,
            is_interval,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn runtime(&self) -> &RuntimeCoordinate {
        &self.runtime
    }

    /// Number of model runs.
    pub fn n_runs(&self) -> usize {
        self.runtime.len()
    }

    /// Maximum per-run axis length.
    pub fn n_times(&self) -> usize {
        self.times.iter().map(TimeAxis::len).max().unwrap_or(0)
    }

    pub fn is_time_interval(&self) -> bool {
        self.is_interval
    }

    pub fn run_date(&self, run_idx: usize) -> Option<DateTime<Utc>> {
        self.runtime.get(run_idx)
    }

    pub fn time_axis(&self, run_idx: usize) -> Option<&TimeAxis> {
        self.times.get(run_idx)
    }

    /// All per-run axes, in run order.
    pub fn axes(&self) -> &[TimeAxis] {
        &self.times
    }

    /// Union of all offset values across runs.
    pub fn coord_set(&self) -> CoordinateSet<OffsetValue> {
        let mut set = CoordinateSet::with_capacity(self.n_times());
        for axis in &self.times {
            set.extend(axis.offset_values());
        }
        set
    }

    /// Sorted, deduplicated list of all offset values across runs.
    pub fn offsets_sorted(&self) -> Vec<OffsetValue> {
        self.coord_set().into_sorted()
    }

    /// Uniform interval-length name, for interval structures.
    ///
    /// Returns `"<length> <unit>"` when every interval across every run has
    /// the same length, `"Mixed_intervals"` otherwise, `None` for instant
    /// structures.
    pub fn interval_name(&self) -> Option<String> {
        if !self.is_interval {
            return None;
        }
        let mut length: Option<i32> = None;
        for axis in &self.times {
            if let TimeAxis::Interval(coord) = axis {
                for intv in coord.values() {
                    match length {
                        None => length = Some(intv.length()),
                        Some(len) if len != intv.length() => {
                            return Some("Mixed_intervals".to_string())
                        }
                        Some(_) => {}
                    }
                }
            }
        }
        length.map(|len| format!("{} {}", len, self.unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{TimeCoordinate, TimeIntervalCoordinate};
    use crate::values::{TimeInterval, TimeOffset};
    use chrono::TimeZone;

    fn run(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, 0, 0).unwrap()
    }

    fn instant_axis(ref_date: DateTime<Utc>, offsets: &[i32]) -> TimeAxis {
        TimeAxis::Instant(TimeCoordinate::new(
            "time",
            "hours",
            0,
            ref_date,
            offsets.iter().map(|&o| TimeOffset(o)).collect(),
        ))
    }

    fn interval_axis(ref_date: DateTime<Utc>, intervals: &[(i32, i32)]) -> TimeAxis {
        TimeAxis::Interval(TimeIntervalCoordinate::new(
            "time_intv",
            "hours",
            11,
            ref_date,
            intervals
                .iter()
                .map(|&(s, e)| TimeInterval::new(s, e))
                .collect(),
        ))
    }

    fn runtime(hours: &[u32]) -> RuntimeCoordinate {
        RuntimeCoordinate::new("reftime", "", hours.iter().map(|&h| run(h)).collect())
    }

    #[test]
    fn test_run_count_mismatch_rejected() {
        let err = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0, 6]),
            vec![instant_axis(run(0), &[0, 6])],
        );
        assert!(matches!(err, Err(CoordError::RunCountMismatch { runs: 2, axes: 1 })));
    }

    #[test]
    fn test_mixed_axis_kinds_rejected() {
        let err = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0, 6]),
            vec![
                instant_axis(run(0), &[0, 6]),
                interval_axis(run(6), &[(0, 6)]),
            ],
        );
        assert!(matches!(err, Err(CoordError::MixedAxisKinds)));
    }

    #[test]
    fn test_accessors() {
        let coord = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0, 6]),
            vec![
                instant_axis(run(0), &[0, 6, 12]),
                instant_axis(run(6), &[0, 6]),
            ],
        )
        .unwrap();
        assert_eq!(coord.n_runs(), 2);
        assert_eq!(coord.n_times(), 3);
        assert!(!coord.is_time_interval());
        assert_eq!(coord.run_date(1), Some(run(6)));
        assert_eq!(coord.time_axis(1).map(TimeAxis::len), Some(2));
        assert_eq!(coord.run_date(2), None);
    }

    #[test]
    fn test_offsets_sorted_unions_runs() {
        let coord = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0, 6]),
            vec![
                instant_axis(run(0), &[0, 12]),
                instant_axis(run(6), &[0, 6]),
            ],
        )
        .unwrap();
        assert_eq!(coord.coord_set().len(), 3);
        assert_eq!(
            coord.offsets_sorted(),
            vec![
                OffsetValue::Instant(TimeOffset(0)),
                OffsetValue::Instant(TimeOffset(6)),
                OffsetValue::Instant(TimeOffset(12)),
            ]
        );
    }

    #[test]
    fn test_interval_name_uniform() {
        let coord = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0, 6]),
            vec![
                interval_axis(run(0), &[(0, 6), (6, 12)]),
                interval_axis(run(6), &[(0, 6)]),
            ],
        )
        .unwrap();
        assert_eq!(coord.interval_name(), Some("6 hours".to_string()));
    }

    #[test]
    fn test_interval_name_mixed() {
        let coord = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0, 6]),
            vec![
                interval_axis(run(0), &[(0, 6)]),
                interval_axis(run(6), &[(0, 12)]),
            ],
        )
        .unwrap();
        assert_eq!(coord.interval_name(), Some("Mixed_intervals".to_string()));
    }

    #[test]
    fn test_interval_name_none_for_instants() {
        let coord = CoordinateTime2d::new(
            "time2D",
            "hours",
            runtime(&[0]),
            vec![instant_axis(run(0), &[0, 6])],
        )
        .unwrap();
        assert_eq!(coord.interval_name(), None);
    }

    #[test]
    fn test_empty_structure_is_valid() {
        let coord =
            CoordinateTime2d::new("time2D", "hours", runtime(&[]), Vec::new()).unwrap();
        assert_eq!(coord.n_runs(), 0);
        assert_eq!(coord.n_times(), 0);
        assert!(coord.offsets_sorted().is_empty());
    }
}
