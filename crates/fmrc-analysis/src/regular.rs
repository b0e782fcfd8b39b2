//! Regularity test: orthogonality within hour-of-day buckets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use fmrc_coord::{CoordinateTime2d, TimeAxis};

use crate::orthogonal::{check_orthogonal, Orthogonality};

/// One hour-of-day group of runs and its orthogonality verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    /// Reference times of the runs issued at this hour.
    pub run_dates: Vec<DateTime<Utc>>,
    pub orthogonality: Orthogonality,
}

/// Result of the regularity check over a 2D coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regularity {
    pub regular: bool,
    /// Per-hour verdicts, keyed by UTC hour-of-day of the run.
    pub by_hour: BTreeMap<u32, HourBucket>,
}

/// Test whether per-run axes repeat by hour-of-day of issuance.
///
/// Operational models issue runs at a few fixed hours (00Z/06Z/12Z/18Z); if
/// the offsets are identical for all runs sharing an hour-of-day, the 2D
/// grid can store one offset axis per hour instead of per run. The structure
/// is regular iff every hour bucket is orthogonal on its own. A bucket with
/// a single run is trivially orthogonal.
pub fn check_regular(coord: &CoordinateTime2d) -> Regularity {
    let mut groups: BTreeMap<u32, Vec<&TimeAxis>> = BTreeMap::new();
    for axis in coord.axes() {
        groups.entry(axis.hour_of_day()).or_default().push(axis);
    }

    let mut regular = true;
    let mut by_hour = BTreeMap::new();
    for (hour, axes) in groups {
        let orthogonality = check_orthogonal(axes.iter().copied());
        regular &= orthogonality.orthogonal;
        by_hour.insert(
            hour,
            HourBucket {
                run_dates: axes.iter().map(|a| a.ref_date()).collect(),
                orthogonality,
            },
        );
    }

    debug!(
        name = coord.name(),
        regular,
        hours = by_hour.len(),
        "regularity check"
    );
    Regularity { regular, by_hour }
}
