//! Textual rendering of analysis reports.
//!
//! Every report renders as ordered diagnostic lines for display; the same
//! structures serialize for harnesses that want assertions instead of text.

use serde::{Deserialize, Serialize};
use std::fmt;

use fmrc_coord::{CoordinateTime2d, OffsetValue};

use crate::diff::{ComparisonReport, CoordinateComparison, Time2dComparison};
use crate::merge::MergeReport;
use crate::orthogonal::{check_time2d, Orthogonality};
use crate::regular::{check_regular, Regularity};

impl fmt::Display for Orthogonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "isOrthogonal {} : union={} max={}",
            self.orthogonal, self.union_size, self.max_run_size
        )
    }
}

impl fmt::Display for Regularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test isRegular by run hour")?;
        for (hour, bucket) in &self.by_hour {
            write!(f, "Hour {}: ", hour)?;
            for date in &bucket.run_dates {
                write!(f, "{},", date.format("%Y-%m-%dT%H:%M:%SZ"))?;
            }
            writeln!(f)?;
            writeln!(f, " {}", bucket.orthogonality)?;
        }
        writeln!(f, "All orthogonal: {}", self.regular)
    }
}

impl fmt::Display for CoordinateComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coordinate {} vs {}", self.left_name, self.right_name)?;
        if let Some((left_kind, right_kind)) = self.kind_mismatch {
            writeln!(f, " kind {} != kind {}", left_kind, right_kind)?;
        }
        for entry in &self.missing_in_right {
            writeln!(f, " {} MISSING IN {}", entry.value, self.right_name)?;
        }
        for entry in &self.missing_in_left {
            writeln!(f, " {} MISSING IN {}", entry.value, self.left_name)?;
        }
        if self.is_clean() {
            writeln!(f, " no differences")?;
        }
        Ok(())
    }
}

impl fmt::Display for Time2dComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compare {} with {}", self.left_name, self.right_name)?;
        if self.run_count_mismatch() {
            writeln!(
                f,
                "{} has {} runtimes, {} has {} runtimes",
                self.left_name, self.run_counts.0, self.right_name, self.run_counts.1
            )?;
        }
        for run in &self.runs {
            writeln!(f, "Run {}", run.run_idx)?;
            if let Some((left, right)) = run.runtime_conflict {
                writeln!(
                    f,
                    " Runtime {} != {}",
                    left.format("%Y-%m-%dT%H:%M:%SZ"),
                    right.format("%Y-%m-%dT%H:%M:%SZ")
                )?;
            }
            write!(f, "{}", run.axes)?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonReport::Axes(cmp) => cmp.fmt(f),
            ComparisonReport::Time2d(cmp) => cmp.fmt(f),
        }
    }
}

fn write_offset_list(f: &mut fmt::Formatter<'_>, name: &str, offsets: &[OffsetValue]) -> fmt::Result {
    writeln!(f, "Coordinate {}", name)?;
    write!(f, " ")?;
    for val in offsets {
        write!(f, "{},", val)?;
    }
    writeln!(f, " (n={})", offsets.len())
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Merge {} with {}", self.left_name, self.right_name)?;
        if let Some((left, right)) = self.interval_mismatch {
            return writeln!(
                f,
                "{} isTimeInterval {} != {} isTimeInterval {}",
                self.left_name, left, self.right_name, right
            );
        }
        if self.run_count_mismatch() {
            writeln!(
                f,
                "{} has {} runtimes, {} has {} runtimes",
                self.left_name, self.run_counts.0, self.right_name, self.run_counts.1
            )?;
        }
        for conflict in &self.runtime_conflicts {
            writeln!(
                f,
                "Run {}: runtime {} != {}",
                conflict.run_idx,
                conflict.left.format("%Y-%m-%dT%H:%M:%SZ"),
                conflict.right.format("%Y-%m-%dT%H:%M:%SZ")
            )?;
        }

        write_offset_list(f, &self.left_name, &self.left_offsets)?;
        for (count, entry) in self.missing_in_right.iter().enumerate() {
            writeln!(f, " {}: {} MISSING", count, entry.value)?;
        }
        writeln!(f, "TOTAL MISSING {}", self.missing_in_right.len())?;

        write_offset_list(f, &self.right_name, &self.right_offsets)?;
        for (count, entry) in self.missing_in_left.iter().enumerate() {
            writeln!(f, " {}: {} MISSING", count, entry.value)?;
        }
        writeln!(f, "TOTAL MISSING {}", self.missing_in_left.len())
    }
}

/// One-stop structural summary of a 2D time coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Time2dSummary {
    pub name: String,
    pub n_runs: usize,
    pub n_times: usize,
    pub is_time_interval: bool,
    pub orthogonality: Orthogonality,
    pub regularity: Regularity,
    /// Sorted, deduplicated offsets across all runs.
    pub offsets: Vec<OffsetValue>,
    /// Uniform interval-length name, for interval structures.
    pub interval_name: Option<String>,
}

/// Summarize a 2D coordinate: verdicts, offset union, interval naming.
pub fn summarize(coord: &CoordinateTime2d) -> Time2dSummary {
    Time2dSummary {
        name: coord.name().to_string(),
        n_runs: coord.n_runs(),
        n_times: coord.n_times(),
        is_time_interval: coord.is_time_interval(),
        orthogonality: check_time2d(coord),
        regularity: check_regular(coord),
        offsets: coord.offsets_sorted(),
        interval_name: coord.interval_name(),
    }
}

impl fmt::Display for Time2dSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} nruns={} ntimes={} isOrthogonal={} isRegular={}",
            self.name,
            self.n_runs,
            self.n_times,
            self.orthogonality.orthogonal,
            self.regularity.regular
        )?;
        write!(f, "All time values=")?;
        for val in &self.offsets {
            write!(f, " {},", val)?;
        }
        writeln!(f, " (n={})", self.offsets.len())?;
        if let Some(name) = &self.interval_name {
            writeln!(f, "Interval name: {}", name)?;
        }
        write!(f, "{}", self.regularity)
    }
}
