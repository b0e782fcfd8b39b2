//! Multi-run time-coordinate analysis for FMRC indexes.
//!
//! Given the per-run forecast-time axes of a collection of model runs, these
//! analyzers decide whether the axes compact into one shared axis
//! (orthogonal), whether they repeat by hour-of-day of issuance (regular),
//! how two axes differ, and whether two 2D (runtime × offset) structures can
//! be merged. All functions are pure and synchronous over borrowed,
//! immutable coordinates; every output is a newly allocated report.

pub mod diff;
pub mod merge;
pub mod orthogonal;
pub mod regular;
pub mod report;

pub use diff::{
    compare, compare_coordinates, compare_time2d, compare_time_axes, missing_values,
    ComparisonReport, CoordinateComparison, DiffEntry, RunComparison, Time2dComparison,
};
pub use merge::{try_merge, MergeReport, RuntimeConflict};
pub use orthogonal::{check_orthogonal, check_time2d, Orthogonality};
pub use regular::{check_regular, HourBucket, Regularity};
pub use report::{summarize, Time2dSummary};
