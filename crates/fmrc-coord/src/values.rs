//! Canonical value keys for each coordinate kind.
//!
//! Set algebra over coordinate axes (union, diff) needs a well-defined
//! identity per value. Each kind gets an explicit comparable key type rather
//! than relying on generic equality over heterogeneous objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use fmrc_common::{CoordError, CoordResult};

/// Forecast offset from a run's reference time, in the axis unit
/// (typically hours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOffset(pub i32);

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An accumulation/statistical interval, as offsets from the reference time.
///
/// Equal iff both bounds match; ordered by end point, then start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: i32,
    pub end: i32,
}

impl TimeInterval {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Interval length in axis units.
    pub fn length(&self) -> i32 {
        self.end - self.start
    }
}

impl Ord for TimeInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.end
            .cmp(&other.end)
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl PartialOrd for TimeInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

/// Unified key for values of a per-run forecast-time axis.
///
/// One 2D structure only ever holds one of the two variants, but union and
/// diff operations are written over this enum so instant and interval axes
/// share one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OffsetValue {
    Instant(TimeOffset),
    Interval(TimeInterval),
}

impl fmt::Display for OffsetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetValue::Instant(v) => v.fmt(f),
            OffsetValue::Interval(v) => v.fmt(f),
        }
    }
}

/// A vertical level value (e.g. pressure in hPa, height in m).
///
/// Carries a total order and hash over the underlying f64 so levels can be
/// members of coordinate sets. Construction rejects NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelValue(f64);

impl LevelValue {
    pub fn new(value: f64) -> CoordResult<Self> {
        if value.is_nan() {
            return Err(CoordError::NanLevel);
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl PartialEq for LevelValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for LevelValue {}

impl Ord for LevelValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for LevelValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for LevelValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind-erased coordinate value, used when two axes of arbitrary kind are
/// diffed against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoordValue {
    Run(DateTime<Utc>),
    Offset(TimeOffset),
    Interval(TimeInterval),
    Level(LevelValue),
}

impl From<OffsetValue> for CoordValue {
    fn from(v: OffsetValue) -> Self {
        match v {
            OffsetValue::Instant(o) => CoordValue::Offset(o),
            OffsetValue::Interval(i) => CoordValue::Interval(i),
        }
    }
}

impl fmt::Display for CoordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordValue::Run(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%SZ")),
            CoordValue::Offset(v) => v.fmt(f),
            CoordValue::Interval(v) => v.fmt(f),
            CoordValue::Level(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_order_by_end_then_start() {
        let a = TimeInterval::new(0, 6);
        let b = TimeInterval::new(3, 6);
        let c = TimeInterval::new(0, 12);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(TimeInterval::new(0, 6), TimeInterval::new(0, 6));
        assert_ne!(TimeInterval::new(0, 6), TimeInterval::new(6, 6));
    }

    #[test]
    fn test_interval_length() {
        assert_eq!(TimeInterval::new(6, 12).length(), 6);
    }

    #[test]
    fn test_level_nan_rejected() {
        assert!(LevelValue::new(f64::NAN).is_err());
        assert!(LevelValue::new(500.0).is_ok());
    }

    #[test]
    fn test_level_total_order() {
        let lo = LevelValue::new(250.0).unwrap();
        let hi = LevelValue::new(1000.0).unwrap();
        assert!(lo < hi);
        assert_eq!(lo, LevelValue::new(250.0).unwrap());
    }

    #[test]
    fn test_offset_value_display() {
        assert_eq!(OffsetValue::Instant(TimeOffset(6)).to_string(), "6");
        assert_eq!(
            OffsetValue::Interval(TimeInterval::new(0, 6)).to_string(),
            "(0,6)"
        );
    }
}
