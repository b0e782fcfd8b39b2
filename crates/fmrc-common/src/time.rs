//! Time handling utilities for model-run coordinates.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse a model run date from an ISO 8601 string.
///
/// Accepts a full RFC 3339 datetime, a datetime without timezone (assumed
/// UTC), or a bare date (midnight UTC).
pub fn parse_run_date(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(&format!("{}T00:00:00", s), "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    Err(TimeParseError::InvalidFormat(s.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

/// Model run cycles (common for NWP models).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCycle {
    /// 00Z run
    Z00,
    /// 06Z run
    Z06,
    /// 12Z run
    Z12,
    /// 18Z run
    Z18,
}

impl ModelCycle {
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0 => Some(ModelCycle::Z00),
            6 => Some(ModelCycle::Z06),
            12 => Some(ModelCycle::Z12),
            18 => Some(ModelCycle::Z18),
            _ => None,
        }
    }

    pub fn hour(&self) -> u32 {
        match self {
            ModelCycle::Z00 => 0,
            ModelCycle::Z06 => 6,
            ModelCycle::Z12 => 12,
            ModelCycle::Z18 => 18,
        }
    }

    /// Get all cycles for models that run 4x daily
    pub fn all_4x_daily() -> &'static [ModelCycle] {
        &[ModelCycle::Z00, ModelCycle::Z06, ModelCycle::Z12, ModelCycle::Z18]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_run_date() {
        let dt = parse_run_date("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_run_date_no_timezone() {
        let dt = parse_run_date("2024-01-15T06:00:00").unwrap();
        assert_eq!(dt.hour(), 6);
    }

    #[test]
    fn test_parse_run_date_date_only() {
        let dt = parse_run_date("2024-01-15").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_cycle_from_run_date() {
        let dt = parse_run_date("2024-01-15T18:00:00Z").unwrap();
        assert_eq!(ModelCycle::from_hour(dt.hour()), Some(ModelCycle::Z18));
    }

    #[test]
    fn test_model_cycle_roundtrip() {
        for cycle in ModelCycle::all_4x_daily() {
            assert_eq!(ModelCycle::from_hour(cycle.hour()), Some(*cycle));
        }
        assert_eq!(ModelCycle::from_hour(3), None);
    }
}
