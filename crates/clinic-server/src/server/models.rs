//! Request and response models for the clinic backend API
//!
//! Request types all implement `Default` and absorb absent or wrong-typed
//! fields instead of rejecting them; see `extract::LenientJson` for the
//! body-level half of that contract.

use clinic_core::ConsultationRecord;
use clinic_core::consultation::string_or_empty;
use clinic_core::usage::UsageCounts;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request model for UI section resolution
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SectionsRequest {
    /// Role label, e.g. `醫師`
    #[serde(deserialize_with = "string_or_empty")]
    pub position: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub email: String,
}

/// Response model for UI section resolution
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsResponse {
    pub allowed_sections: Vec<String>,
}

/// Query parameters for the herb search stub
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HerbSearchParams {
    pub query: String,
}

/// Response model for the herb search stub
#[derive(Debug, Serialize)]
pub struct HerbSearchResponse {
    pub query: String,
    /// Empty until the herb library is served from the backend.
    pub results: Vec<JsonValue>,
}

/// Request model for the global usage tally
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GlobalUsageRequest {
    pub consultations: Vec<ConsultationRecord>,
}

/// Response model for the global usage tally
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalUsageResponse {
    pub usage_counts: UsageCounts,
    pub acupoint_counts: UsageCounts,
}

/// Request model for record line formatting
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FormatLinesRequest {
    pub records: Vec<ConsultationRecord>,
}

/// Response model for record line formatting
#[derive(Debug, Serialize)]
pub struct FormatLinesResponse {
    pub lines: Vec<String>,
}
