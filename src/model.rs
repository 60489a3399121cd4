use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Health verdict attached to a reading by the remote classifier.
///
/// The dashboard displays this verdict but never computes or second-guesses
/// it. Wire strings: `"Healthy"` and `"Needs Attention"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Healthy,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Healthy => "Healthy",
            Classification::NeedsAttention => "Needs Attention",
        };
        f.write_str(s)
    }
}

/// One set of probe values from a hydroponic unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorValues {
    pub ph: f64,
    /// °C
    pub temperature: f64,
    /// Electrical conductivity in mS/cm.
    pub conductivity: f64,
}

impl SensorValues {
    /// Generate plausible probe values for a test submission.
    ///
    /// Ranges and rounding are a fixed test-data contract, not physically
    /// meaningful: pH in [5.0, 8.0) at 2 decimals, temperature in
    /// [20.0, 25.0) °C at 1 decimal, conductivity in [1.0, 2.0) mS/cm at
    /// 2 decimals.
    pub fn synthetic() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            ph: round_to(rng.gen_range(5.0..8.0), 2),
            temperature: round_to(rng.gen_range(20.0..25.0), 1),
            conductivity: round_to(rng.gen_range(1.0..2.0), 2),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A single sensor sample as displayed on the dashboard.
///
/// Immutable once received: the client never edits fields after storage,
/// only replaces whole collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub values: SensorValues,
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_deserializes_wire_strings() {
        let c: Classification = serde_json::from_str(r#""Healthy""#).unwrap();
        assert_eq!(c, Classification::Healthy);

        let c: Classification = serde_json::from_str(r#""Needs Attention""#).unwrap();
        assert_eq!(c, Classification::NeedsAttention);
    }

    #[test]
    fn classification_rejects_unknown_strings() {
        assert!(serde_json::from_str::<Classification>(r#""Critical""#).is_err());
        assert!(serde_json::from_str::<Classification>(r#""needs attention""#).is_err());
    }

    #[test]
    fn classification_display_matches_wire_strings() {
        assert_eq!(Classification::Healthy.to_string(), "Healthy");
        assert_eq!(Classification::NeedsAttention.to_string(), "Needs Attention");
    }

    #[test]
    fn synthetic_values_stay_inside_contract_ranges() {
        for _ in 0..200 {
            let v = SensorValues::synthetic();
            assert!((5.0..8.0).contains(&v.ph), "pH out of range: {}", v.ph);
            assert!(
                (20.0..25.0).contains(&v.temperature),
                "temperature out of range: {}",
                v.temperature
            );
            assert!(
                (1.0..2.0).contains(&v.conductivity),
                "conductivity out of range: {}",
                v.conductivity
            );
        }
    }

    #[test]
    fn synthetic_values_are_rounded() {
        for _ in 0..200 {
            let v = SensorValues::synthetic();
            assert_eq!(round_to(v.ph, 2), v.ph);
            assert_eq!(round_to(v.temperature, 1), v.temperature);
            assert_eq!(round_to(v.conductivity, 2), v.conductivity);
        }
    }

    #[test]
    fn round_to_truncates_extra_decimals() {
        assert_eq!(round_to(6.128, 2), 6.13);
        assert_eq!(round_to(22.35, 1), 22.4);
        assert_eq!(round_to(7.0, 2), 7.0);
    }
}
