//! Merge feasibility analysis for two 2D time coordinates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fmrc_coord::{CoordinateTime2d, OffsetValue};

use crate::diff::{missing_values, DiffEntry};

/// Two structures disagree on the reference time at one run index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConflict {
    pub run_idx: usize,
    pub left: DateTime<Utc>,
    pub right: DateTime<Utc>,
}

/// Feasibility report for merging two 2D time coordinates.
///
/// No merged coordinate is constructed; the report quantifies what a merge
/// would have to reconcile. Every input mismatch is a finding here, never an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeReport {
    pub left_name: String,
    pub right_name: String,
    /// Set when one side holds intervals and the other instants; nothing
    /// else is compared in that case.
    pub interval_mismatch: Option<(bool, bool)>,
    pub run_counts: (usize, usize),
    /// Runtime disagreements over the overlapping run prefix.
    pub runtime_conflicts: Vec<RuntimeConflict>,
    /// Left side's sorted, deduplicated offsets across all runs.
    pub left_offsets: Vec<OffsetValue>,
    /// Right side's sorted, deduplicated offsets across all runs.
    pub right_offsets: Vec<OffsetValue>,
    /// Left offsets absent from the right side, in sorted-list order.
    pub missing_in_right: Vec<DiffEntry<OffsetValue>>,
    /// Right offsets absent from the left side, in sorted-list order.
    pub missing_in_left: Vec<DiffEntry<OffsetValue>>,
}

impl MergeReport {
    pub fn run_count_mismatch(&self) -> bool {
        self.run_counts.0 != self.run_counts.1
    }

    /// True iff the two structures merge with nothing to reconcile.
    pub fn is_clean(&self) -> bool {
        self.interval_mismatch.is_none()
            && !self.run_count_mismatch()
            && self.runtime_conflicts.is_empty()
            && self.missing_in_right.is_empty()
            && self.missing_in_left.is_empty()
    }

    /// Total count of offsets that a merge would need to reconcile.
    pub fn total_missing(&self) -> usize {
        self.missing_in_right.len() + self.missing_in_left.len()
    }
}

/// Determine whether two 2D structures can be merged, and at what cost.
///
/// Interval and point-time structures cannot be unified: that mismatch stops
/// the analysis immediately. A run-count mismatch is only a finding; runtime
/// comparison proceeds over the overlapping `min(n1, n2)` prefix. Offset
/// axes are then unioned per side and diffed in both directions.
pub fn try_merge(left: &CoordinateTime2d, right: &CoordinateTime2d) -> MergeReport {
    let run_counts = (left.n_runs(), right.n_runs());
    let mut report = MergeReport {
        left_name: left.name().to_string(),
        right_name: right.name().to_string(),
        interval_mismatch: None,
        run_counts,
        runtime_conflicts: Vec::new(),
        left_offsets: Vec::new(),
        right_offsets: Vec::new(),
        missing_in_right: Vec::new(),
        missing_in_left: Vec::new(),
    };

    if left.is_time_interval() != right.is_time_interval() {
        report.interval_mismatch = Some((left.is_time_interval(), right.is_time_interval()));
        debug!(
            left = %report.left_name,
            right = %report.right_name,
            "merge rejected: interval/point mismatch"
        );
        return report;
    }

    let overlap = run_counts.0.min(run_counts.1);
    for run_idx in 0..overlap {
        if let (Some(l), Some(r)) = (left.run_date(run_idx), right.run_date(run_idx)) {
            if l != r {
                report.runtime_conflicts.push(RuntimeConflict {
                    run_idx,
                    left: l,
                    right: r,
                });
            }
        }
    }

    let left_set = left.coord_set();
    let right_set = right.coord_set();
    report.left_offsets = left.offsets_sorted();
    report.right_offsets = right.offsets_sorted();
    report.missing_in_right = missing_values(&right_set, &report.left_offsets);
    report.missing_in_left = missing_values(&left_set, &report.right_offsets);

    debug!(
        left = %report.left_name,
        right = %report.right_name,
        runtime_conflicts = report.runtime_conflicts.len(),
        total_missing = report.total_missing(),
        "merge analysis"
    );
    report
}
