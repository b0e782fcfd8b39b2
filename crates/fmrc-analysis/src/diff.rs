//! Asymmetric set differences between coordinate axes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

use fmrc_coord::{
    Coordinate, CoordinateKind, CoordinateSet, CoordinateTime2d, CoordValue, TimeAxis,
};

/// One value of the candidate sequence that is absent from the reference
/// set, at its position in the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry<V> {
    pub index: usize,
    pub value: V,
}

/// Values of `candidate` not present in `reference`, in candidate order.
///
/// Duplicate candidate values each produce their own entry; the discrepancy
/// count matters for diagnostics, so there is no candidate-side dedup.
pub fn missing_values<V>(reference: &CoordinateSet<V>, candidate: &[V]) -> Vec<DiffEntry<V>>
where
    V: Eq + Hash + Clone,
{
    candidate
        .iter()
        .enumerate()
        .filter(|(_, value)| !reference.contains(value))
        .map(|(index, value)| DiffEntry {
            index,
            value: value.clone(),
        })
        .collect()
}

/// Bidirectional diff of two 1D coordinate axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateComparison {
    pub left_name: String,
    pub right_name: String,
    /// Set when the two axes are of different kinds; their values are still
    /// diffed below.
    pub kind_mismatch: Option<(CoordinateKind, CoordinateKind)>,
    /// Values of the left axis absent from the right.
    pub missing_in_right: Vec<DiffEntry<CoordValue>>,
    /// Values of the right axis absent from the left.
    pub missing_in_left: Vec<DiffEntry<CoordValue>>,
}

impl CoordinateComparison {
    pub fn is_clean(&self) -> bool {
        self.kind_mismatch.is_none()
            && self.missing_in_right.is_empty()
            && self.missing_in_left.is_empty()
    }
}

fn compare_values(
    left_name: &str,
    right_name: &str,
    kind_mismatch: Option<(CoordinateKind, CoordinateKind)>,
    left: Vec<CoordValue>,
    right: Vec<CoordValue>,
) -> CoordinateComparison {
    let left_set: CoordinateSet<CoordValue> = left.iter().copied().collect();
    let right_set: CoordinateSet<CoordValue> = right.iter().copied().collect();
    CoordinateComparison {
        left_name: left_name.to_string(),
        right_name: right_name.to_string(),
        kind_mismatch,
        missing_in_right: missing_values(&right_set, &left),
        missing_in_left: missing_values(&left_set, &right),
    }
}

/// Compare two 1D coordinate axes by value membership.
pub fn compare_coordinates(left: &Coordinate, right: &Coordinate) -> CoordinateComparison {
    let kind_mismatch = if left.kind() != right.kind() {
        Some((left.kind(), right.kind()))
    } else {
        None
    };
    compare_values(
        left.name(),
        right.name(),
        kind_mismatch,
        left.values(),
        right.values(),
    )
}

/// Compare two per-run forecast-time axes.
pub fn compare_time_axes(left: &TimeAxis, right: &TimeAxis) -> CoordinateComparison {
    let kind_mismatch = if left.is_interval() != right.is_interval() {
        let kind = |axis: &TimeAxis| {
            if axis.is_interval() {
                CoordinateKind::TimeInterval
            } else {
                CoordinateKind::Time
            }
        };
        Some((kind(left), kind(right)))
    } else {
        None
    };
    compare_values(
        left.name(),
        right.name(),
        kind_mismatch,
        left.offset_values().map(CoordValue::from).collect(),
        right.offset_values().map(CoordValue::from).collect(),
    )
}

/// Comparison of one run shared by two 2D structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunComparison {
    pub run_idx: usize,
    /// Set when the two structures disagree on this run's reference time.
    pub runtime_conflict: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub axes: CoordinateComparison,
}

/// Run-by-run comparison of two 2D time coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Time2dComparison {
    pub left_name: String,
    pub right_name: String,
    pub run_counts: (usize, usize),
    /// One entry per run index in the overlapping prefix.
    pub runs: Vec<RunComparison>,
}

impl Time2dComparison {
    pub fn run_count_mismatch(&self) -> bool {
        self.run_counts.0 != self.run_counts.1
    }

    pub fn is_clean(&self) -> bool {
        !self.run_count_mismatch()
            && self
                .runs
                .iter()
                .all(|r| r.runtime_conflict.is_none() && r.axes.is_clean())
    }
}

/// Compare two 2D structures run by run over their overlapping prefix.
///
/// A run-count mismatch is recorded as a finding, not a failure; comparison
/// proceeds over the first `min(n1, n2)` runs.
pub fn compare_time2d(left: &CoordinateTime2d, right: &CoordinateTime2d) -> Time2dComparison {
    let run_counts = (left.n_runs(), right.n_runs());
    let overlap = run_counts.0.min(run_counts.1);

    let mut runs = Vec::with_capacity(overlap);
    for run_idx in 0..overlap {
        // indices < overlap are in range for both sides
        let (left_date, right_date) = match (left.run_date(run_idx), right.run_date(run_idx)) {
            (Some(l), Some(r)) => (l, r),
            _ => break,
        };
        let (left_axis, right_axis) = match (left.time_axis(run_idx), right.time_axis(run_idx)) {
            (Some(l), Some(r)) => (l, r),
            _ => break,
        };
        let runtime_conflict = (left_date != right_date).then_some((left_date, right_date));
        runs.push(RunComparison {
            run_idx,
            runtime_conflict,
            axes: compare_time_axes(left_axis, right_axis),
        });
    }

    Time2dComparison {
        left_name: left.name().to_string(),
        right_name: right.name().to_string(),
        run_counts,
        runs,
    }
}

/// Result of comparing two coordinates of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonReport {
    Axes(CoordinateComparison),
    Time2d(Time2dComparison),
}

/// Compare two coordinates, dispatching on their kind.
///
/// A pair of 2D structures gets the run-by-run comparison; everything else
/// is compared as flat value lists.
pub fn compare(left: &Coordinate, right: &Coordinate) -> ComparisonReport {
    match (left, right) {
        (Coordinate::Time2d(l), Coordinate::Time2d(r)) => {
            ComparisonReport::Time2d(compare_time2d(l, r))
        }
        _ => ComparisonReport::Axes(compare_coordinates(left, right)),
    }
}
