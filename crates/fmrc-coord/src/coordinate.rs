//! Coordinate axes and the closed Coordinate variant.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::set::CoordinateSet;
use crate::time2d::CoordinateTime2d;
use crate::values::{CoordValue, LevelValue, OffsetValue, TimeInterval, TimeOffset};

/// The semantic kind of a coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateKind {
    Runtime,
    Time,
    TimeInterval,
    Vertical,
    Time2d,
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoordinateKind::Runtime => "runtime",
            CoordinateKind::Time => "time",
            CoordinateKind::TimeInterval => "timeIntv",
            CoordinateKind::Vertical => "vertical",
            CoordinateKind::Time2d => "time2D",
        };
        write!(f, "{}", s)
    }
}

/// Model run reference times, in date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeCoordinate {
    pub name: String,
    pub unit: String,
    values: Vec<DateTime<Utc>>,
}

impl RuntimeCoordinate {
    /// Build from run dates; duplicates are dropped and the result is
    /// date-ordered.
    pub fn new(name: impl Into<String>, unit: impl Into<String>, dates: Vec<DateTime<Utc>>) -> Self {
        let values = dates.into_iter().collect::<CoordinateSet<_>>().into_sorted();
        Self {
            name: name.into(),
            unit: unit.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[DateTime<Utc>] {
        &self.values
    }

    pub fn get(&self, idx: usize) -> Option<DateTime<Utc>> {
        self.values.get(idx).copied()
    }
}

/// Forecast offsets from one run's reference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeCoordinate {
    pub name: String,
    pub unit: String,
    /// GRIB code identifying the semantic role of this axis.
    pub code: u32,
    pub ref_date: DateTime<Utc>,
    values: Vec<TimeOffset>,
}

impl TimeCoordinate {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        code: u32,
        ref_date: DateTime<Utc>,
        offsets: Vec<TimeOffset>,
    ) -> Self {
        let values = offsets.into_iter().collect::<CoordinateSet<_>>().into_sorted();
        Self {
            name: name.into(),
            unit: unit.into(),
            code,
            ref_date,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[TimeOffset] {
        &self.values
    }
}

/// Accumulation/statistical intervals from one run's reference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeIntervalCoordinate {
    pub name: String,
    pub unit: String,
    pub code: u32,
    pub ref_date: DateTime<Utc>,
    values: Vec<TimeInterval>,
}

impl TimeIntervalCoordinate {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        code: u32,
        ref_date: DateTime<Utc>,
        intervals: Vec<TimeInterval>,
    ) -> Self {
        let values = intervals.into_iter().collect::<CoordinateSet<_>>().into_sorted();
        Self {
            name: name.into(),
            unit: unit.into(),
            code,
            ref_date,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[TimeInterval] {
        &self.values
    }
}

/// Vertical levels, in numeric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalCoordinate {
    pub name: String,
    pub unit: String,
    pub code: u32,
    values: Vec<LevelValue>,
}

impl VerticalCoordinate {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        code: u32,
        levels: Vec<LevelValue>,
    ) -> Self {
        let values = levels.into_iter().collect::<CoordinateSet<_>>().into_sorted();
        Self {
            name: name.into(),
            unit: unit.into(),
            code,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[LevelValue] {
        &self.values
    }
}

/// One run's forecast-time axis: instant offsets or intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimeAxis {
    Instant(TimeCoordinate),
    Interval(TimeIntervalCoordinate),
}

impl TimeAxis {
    pub fn name(&self) -> &str {
        match self {
            TimeAxis::Instant(c) => &c.name,
            TimeAxis::Interval(c) => &c.name,
        }
    }

    pub fn unit(&self) -> &str {
        match self {
            TimeAxis::Instant(c) => &c.unit,
            TimeAxis::Interval(c) => &c.unit,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TimeAxis::Instant(c) => c.len(),
            TimeAxis::Interval(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, TimeAxis::Interval(_))
    }

    /// The run's reference (issuance) time.
    pub fn ref_date(&self) -> DateTime<Utc> {
        match self {
            TimeAxis::Instant(c) => c.ref_date,
            TimeAxis::Interval(c) => c.ref_date,
        }
    }

    /// UTC hour-of-day of the reference time.
    pub fn hour_of_day(&self) -> u32 {
        self.ref_date().hour()
    }

    /// The axis values under the unified offset key.
    pub fn offset_values(&self) -> impl Iterator<Item = OffsetValue> + '_ {
        let (instants, intervals) = match self {
            TimeAxis::Instant(c) => (Some(c.values()), None),
            TimeAxis::Interval(c) => (None, Some(c.values())),
        };
        instants
            .into_iter()
            .flatten()
            .map(|&o| OffsetValue::Instant(o))
            .chain(
                intervals
                    .into_iter()
                    .flatten()
                    .map(|&i| OffsetValue::Interval(i)),
            )
    }
}

/// A named coordinate axis of any kind.
///
/// Closed variant: consumers match exhaustively instead of downcasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Coordinate {
    Runtime(RuntimeCoordinate),
    Time(TimeCoordinate),
    TimeInterval(TimeIntervalCoordinate),
    Vertical(VerticalCoordinate),
    Time2d(CoordinateTime2d),
}

impl Coordinate {
    pub fn kind(&self) -> CoordinateKind {
        match self {
            Coordinate::Runtime(_) => CoordinateKind::Runtime,
            Coordinate::Time(_) => CoordinateKind::Time,
            Coordinate::TimeInterval(_) => CoordinateKind::TimeInterval,
            Coordinate::Vertical(_) => CoordinateKind::Vertical,
            Coordinate::Time2d(_) => CoordinateKind::Time2d,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Coordinate::Runtime(c) => &c.name,
            Coordinate::Time(c) => &c.name,
            Coordinate::TimeInterval(c) => &c.name,
            Coordinate::Vertical(c) => &c.name,
            Coordinate::Time2d(c) => c.name(),
        }
    }

    pub fn unit(&self) -> &str {
        match self {
            Coordinate::Runtime(c) => &c.unit,
            Coordinate::Time(c) => &c.unit,
            Coordinate::TimeInterval(c) => &c.unit,
            Coordinate::Vertical(c) => &c.unit,
            Coordinate::Time2d(c) => c.unit(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Coordinate::Runtime(c) => c.len(),
            Coordinate::Time(c) => c.len(),
            Coordinate::TimeInterval(c) => c.len(),
            Coordinate::Vertical(c) => c.len(),
            Coordinate::Time2d(c) => c.n_runs(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind-erased value enumeration, in axis order.
    ///
    /// A 2D coordinate enumerates its runtime values; its per-run axes are
    /// compared through the dedicated 2D comparison instead.
    pub fn values(&self) -> Vec<CoordValue> {
        match self {
            Coordinate::Runtime(c) => c.values().iter().map(|&d| CoordValue::Run(d)).collect(),
            Coordinate::Time(c) => c.values().iter().map(|&o| CoordValue::Offset(o)).collect(),
            Coordinate::TimeInterval(c) => {
                c.values().iter().map(|&i| CoordValue::Interval(i)).collect()
            }
            Coordinate::Vertical(c) => c.values().iter().map(|&l| CoordValue::Level(l)).collect(),
            Coordinate::Time2d(c) => c
                .runtime()
                .values()
                .iter()
                .map(|&d| CoordValue::Run(d))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn run(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, 0, 0).unwrap()
    }

    #[test]
    fn test_runtime_coordinate_sorted_dedup() {
        let coord = RuntimeCoordinate::new(
            "reftime",
            "hours since 2024-01-15T00:00:00Z",
            vec![run(12), run(0), run(12), run(6)],
        );
        assert_eq!(coord.len(), 3);
        assert_eq!(coord.values(), &[run(0), run(6), run(12)]);
        assert_eq!(coord.get(1), Some(run(6)));
    }

    #[test]
    fn test_time_coordinate_sorted_dedup() {
        let coord = TimeCoordinate::new(
            "time",
            "hours",
            0,
            run(0),
            vec![TimeOffset(12), TimeOffset(0), TimeOffset(6), TimeOffset(12)],
        );
        assert_eq!(
            coord.values(),
            &[TimeOffset(0), TimeOffset(6), TimeOffset(12)]
        );
    }

    #[test]
    fn test_time_axis_offset_values() {
        let axis = TimeAxis::Instant(TimeCoordinate::new(
            "time",
            "hours",
            0,
            run(6),
            vec![TimeOffset(0), TimeOffset(6)],
        ));
        assert!(!axis.is_interval());
        assert_eq!(axis.hour_of_day(), 6);
        let vals: Vec<_> = axis.offset_values().collect();
        assert_eq!(
            vals,
            vec![
                OffsetValue::Instant(TimeOffset(0)),
                OffsetValue::Instant(TimeOffset(6))
            ]
        );
    }

    #[test]
    fn test_interval_axis_offset_values() {
        let axis = TimeAxis::Interval(TimeIntervalCoordinate::new(
            "time_intv",
            "hours",
            11,
            run(0),
            vec![TimeInterval::new(6, 12), TimeInterval::new(0, 6)],
        ));
        assert!(axis.is_interval());
        let vals: Vec<_> = axis.offset_values().collect();
        // sorted by end then start
        assert_eq!(
            vals,
            vec![
                OffsetValue::Interval(TimeInterval::new(0, 6)),
                OffsetValue::Interval(TimeInterval::new(6, 12))
            ]
        );
    }

    #[test]
    fn test_coordinate_kind_and_values() {
        let coord = Coordinate::Vertical(VerticalCoordinate::new(
            "isobaric",
            "hPa",
            100,
            vec![
                LevelValue::new(1000.0).unwrap(),
                LevelValue::new(500.0).unwrap(),
            ],
        ));
        assert_eq!(coord.kind(), CoordinateKind::Vertical);
        assert_eq!(coord.len(), 2);
        assert_eq!(
            coord.values()[0],
            CoordValue::Level(LevelValue::new(500.0).unwrap())
        );
    }
}
