use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Classification, Reading, SensorValues};

// ---------------------------------------------------------------------------
// List envelope
//
// Both list endpoints wrap their payload in the same outer object:
//
//   GET /api/readings/{unitId}  →  { "alerts": [ ... ] }
//   GET /api/alerts/{unitId}    →  { "alerts": [ ... ] }
//
// The readings endpoint reuses the `alerts` field name for the full list.
// That is the live contract; do not normalise it here.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ReadingsPage {
    pub alerts: Vec<WireReading>,
}

/// One sensor sample as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct WireReading {
    /// ISO-8601 instant assigned by the submitter.
    pub timestamp: DateTime<Utc>,
    pub readings: WireValues,
    pub classification: Classification,
}

/// Probe values under the abbreviated field names the API uses.
#[derive(Debug, Serialize, Deserialize)]
pub struct WireValues {
    #[serde(rename = "pH")]
    pub ph: f64,
    pub temp: f64,
    pub ec: f64,
}

impl From<WireReading> for Reading {
    fn from(w: WireReading) -> Self {
        Self {
            timestamp: w.timestamp,
            values: SensorValues {
                ph: w.readings.ph,
                temperature: w.readings.temp,
                conductivity: w.readings.ec,
            },
            classification: w.classification,
        }
    }
}

impl From<SensorValues> for WireValues {
    fn from(v: SensorValues) -> Self {
        Self {
            ph: v.ph,
            temp: v.temperature,
            ec: v.conductivity,
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor ingest  --  POST /api/sensor
// ---------------------------------------------------------------------------

/// Request body for the ingest endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReadingRequest {
    pub unit_id: String,
    pub timestamp: DateTime<Utc>,
    pub readings: WireValues,
}

/// Response from the ingest endpoint.
#[derive(Debug, Deserialize)]
pub struct SubmitReadingResponse {
    /// `"OK"` on success. Informational only: errors arrive as HTTP
    /// statuses, not in this field.
    pub status: String,
    pub classification: Classification,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn readings_page_deserializes_observed_payload() {
        let page: ReadingsPage = serde_json::from_str(
            r#"{
                "alerts": [{
                    "timestamp": "2025-05-24T12:34:56Z",
                    "readings": { "pH": 6.5, "temp": 22.1, "ec": 1.2 },
                    "classification": "Healthy"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(page.alerts.len(), 1);
        let r = &page.alerts[0];
        assert_eq!(r.readings.ph, 6.5);
        assert_eq!(r.readings.temp, 22.1);
        assert_eq!(r.readings.ec, 1.2);
        assert_eq!(r.classification, Classification::Healthy);
    }

    #[test]
    fn readings_page_accepts_needs_attention_rows() {
        let page: ReadingsPage = serde_json::from_str(
            r#"{
                "alerts": [{
                    "timestamp": "2025-05-24T12:34:56+00:00",
                    "readings": { "pH": 4.5, "temp": 22.1, "ec": 1.2 },
                    "classification": "Needs Attention"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(page.alerts[0].classification, Classification::NeedsAttention);
    }

    #[test]
    fn readings_page_without_alerts_field_fails() {
        let err = serde_json::from_str::<ReadingsPage>(r#"{ "readings": [] }"#);
        assert!(err.is_err());
    }

    #[test]
    fn reading_row_with_missing_value_fails() {
        let err = serde_json::from_str::<ReadingsPage>(
            r#"{
                "alerts": [{
                    "timestamp": "2025-05-24T12:34:56Z",
                    "readings": { "pH": 6.5, "temp": 22.1 },
                    "classification": "Healthy"
                }]
            }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn wire_reading_maps_into_domain() {
        let w: WireReading = serde_json::from_str(
            r#"{
                "timestamp": "2025-05-24T12:34:56Z",
                "readings": { "pH": 6.5, "temp": 22.1, "ec": 1.2 },
                "classification": "Needs Attention"
            }"#,
        )
        .unwrap();

        let r = Reading::from(w);
        assert_eq!(
            r.timestamp,
            Utc.with_ymd_and_hms(2025, 5, 24, 12, 34, 56).unwrap()
        );
        assert_eq!(r.values.ph, 6.5);
        assert_eq!(r.values.temperature, 22.1);
        assert_eq!(r.values.conductivity, 1.2);
        assert_eq!(r.classification, Classification::NeedsAttention);
    }

    #[test]
    fn submit_request_serializes_wire_field_names() {
        let req = SubmitReadingRequest {
            unit_id: "unit-123".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2025, 5, 24, 12, 34, 56).unwrap(),
            readings: WireValues::from(SensorValues {
                ph: 6.5,
                temperature: 22.1,
                conductivity: 1.2,
            }),
        };

        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["unitId"], "unit-123");
        assert_eq!(json["readings"]["pH"], 6.5);
        assert_eq!(json["readings"]["temp"], 22.1);
        assert_eq!(json["readings"]["ec"], 1.2);
        assert!(json["timestamp"].as_str().unwrap().starts_with("2025-05-24T12:34:56"));
    }

    #[test]
    fn submit_response_deserializes() {
        let resp: SubmitReadingResponse = serde_json::from_str(
            r#"{ "status": "OK", "classification": "Healthy" }"#,
        )
        .unwrap();
        assert_eq!(resp.status, "OK");
        assert_eq!(resp.classification, Classification::Healthy);
    }

    #[test]
    fn submit_response_with_unknown_classification_fails() {
        let err = serde_json::from_str::<SubmitReadingResponse>(
            r#"{ "status": "OK", "classification": "Unknown" }"#,
        );
        assert!(err.is_err());
    }
}
