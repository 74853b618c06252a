//! Loosely-typed consultation records.
//!
//! Payloads arrive from a frontend that mixes Firestore exports with
//! hand-built objects, so every field tolerates the wrong JSON type: string
//! fields absorb non-strings as empty, and date fields absorb unrecognized
//! shapes as "no date". Nothing here rejects a request.

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// A date as the frontend sends it: either an ISO-8601 string or a
/// Firestore-style `{"seconds": …}` wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    /// Epoch-seconds wrapper, e.g. `{"seconds": 1700000000}`.
    Epoch { seconds: i64 },
    /// Anything textual, expected to be ISO-8601.
    Text(String),
    /// Unrecognized shape, treated as absent.
    Other(JsonValue),
}

/// One clinical encounter as submitted by the frontend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultationRecord {
    pub date: Option<DateField>,
    pub created_at: Option<DateField>,
    #[serde(deserialize_with = "string_or_empty")]
    pub symptoms: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub current_history: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub tongue: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub pulse: String,
    /// Free text, one medicine reference per line.
    #[serde(deserialize_with = "string_or_empty")]
    pub prescription: String,
    /// Free-text HTML carrying `data-acupoint-name` tags.
    #[serde(deserialize_with = "string_or_empty")]
    pub acupuncture_notes: String,
}

/// Serde helper: accept any JSON value, keeping strings and collapsing
/// everything else to the empty string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::String(text) => text,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_wrapper_deserializes() {
        let record: ConsultationRecord =
            serde_json::from_value(serde_json::json!({"date": {"seconds": 1700000000}})).unwrap();
        assert!(matches!(
            record.date,
            Some(DateField::Epoch { seconds: 1700000000 })
        ));
    }

    #[test]
    fn iso_string_deserializes_as_text() {
        let record: ConsultationRecord =
            serde_json::from_value(serde_json::json!({"createdAt": "2024-03-05"})).unwrap();
        assert!(matches!(record.created_at, Some(DateField::Text(_))));
    }

    #[test]
    fn unrecognized_date_shape_is_absorbed() {
        let record: ConsultationRecord =
            serde_json::from_value(serde_json::json!({"date": true})).unwrap();
        assert!(matches!(record.date, Some(DateField::Other(_))));
    }

    #[test]
    fn wrong_typed_text_fields_become_empty() {
        let record: ConsultationRecord = serde_json::from_value(serde_json::json!({
            "symptoms": 42,
            "pulse": null,
            "prescription": ["not", "text"],
        }))
        .unwrap();
        assert_eq!(record.symptoms, "");
        assert_eq!(record.pulse, "");
        assert_eq!(record.prescription, "");
    }

    #[test]
    fn missing_fields_default() {
        let record: ConsultationRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(record.date.is_none());
        assert!(record.created_at.is_none());
        assert_eq!(record.symptoms, "");
    }
}
