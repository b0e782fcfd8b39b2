//! Orthogonality test: can per-run axes share one time coordinate?

use serde::{Deserialize, Serialize};
use tracing::debug;

use fmrc_coord::{CoordinateSet, CoordinateTime2d, OffsetValue, TimeAxis};

/// Result of an orthogonality check over a group of per-run axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orthogonality {
    pub orthogonal: bool,
    /// Largest element count of any single run's axis.
    pub max_run_size: usize,
    /// Cardinality of the union of all values across runs.
    pub union_size: usize,
}

/// Test whether a group of per-run axes can be represented by one shared
/// axis without loss.
///
/// The axes are orthogonal iff the union of all their values is no larger
/// than the largest single axis, i.e. every run's axis is a subset of the
/// largest one. An empty group is vacuously orthogonal with both sizes zero.
pub fn check_orthogonal<'a, I>(axes: I) -> Orthogonality
where
    I: IntoIterator<Item = &'a TimeAxis>,
{
    let mut max_run_size = 0;
    let mut union: CoordinateSet<OffsetValue> = CoordinateSet::new();
    for axis in axes {
        max_run_size = max_run_size.max(axis.len());
        union.extend(axis.offset_values());
    }

    let union_size = union.len();
    let orthogonal = union_size == max_run_size;
    debug!(orthogonal, union_size, max_run_size, "orthogonality check");
    Orthogonality {
        orthogonal,
        max_run_size,
        union_size,
    }
}

/// Run the orthogonality check over all per-run axes of a 2D coordinate.
pub fn check_time2d(coord: &CoordinateTime2d) -> Orthogonality {
    check_orthogonal(coord.axes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fmrc_coord::{TimeCoordinate, TimeOffset};

    fn axis(offsets: &[i32]) -> TimeAxis {
        TimeAxis::Instant(TimeCoordinate::new(
            "time",
            "hours",
            0,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            offsets.iter().map(|&o| TimeOffset(o)).collect(),
        ))
    }

    #[test]
    fn test_subset_axes_are_orthogonal() {
        let a = axis(&[0, 6, 12]);
        let b = axis(&[0, 6, 12, 18]);
        let result = check_orthogonal([&a, &b]);
        assert!(result.orthogonal);
        assert_eq!(result.union_size, 4);
        assert_eq!(result.max_run_size, 4);
    }

    #[test]
    fn test_diverging_axes_are_not_orthogonal() {
        let a = axis(&[0, 6]);
        let b = axis(&[0, 12]);
        let result = check_orthogonal([&a, &b]);
        assert!(!result.orthogonal);
        assert_eq!(result.union_size, 3);
        assert_eq!(result.max_run_size, 2);
    }

    #[test]
    fn test_empty_group_is_vacuously_orthogonal() {
        let result = check_orthogonal(std::iter::empty::<&TimeAxis>());
        assert!(result.orthogonal);
        assert_eq!(result.union_size, 0);
        assert_eq!(result.max_run_size, 0);
    }

    #[test]
    fn test_single_axis_is_orthogonal() {
        let a = axis(&[0, 3, 6]);
        let result = check_orthogonal([&a]);
        assert!(result.orthogonal);
        assert_eq!(result.max_run_size, 3);
    }
}
