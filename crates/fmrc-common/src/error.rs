//! Error types for coordinate construction.

use thiserror::Error;

/// Result type alias using CoordError.
pub type CoordResult<T> = Result<T, CoordError>;

/// Errors raised when a coordinate structure violates its construction
/// invariants.
///
/// Analysis itself never fails: mismatches found while analyzing well-formed
/// coordinates (run-count differences, interval/point differences) are
/// diagnostic findings in the report, not errors.
#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Runtime axis has {runs} runs but {axes} per-run time axes were supplied")]
    RunCountMismatch { runs: usize, axes: usize },

    #[error("Per-run time axes mix instant and interval kinds")]
    MixedAxisKinds,

    #[error("Vertical level value must not be NaN")]
    NanLevel,
}
