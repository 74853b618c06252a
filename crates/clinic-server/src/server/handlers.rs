//! HTTP handlers for the clinic backend API
//!
//! Handlers are infallible by design: lenient extraction upstream means the
//! worst possible input degrades to an empty request, and every core
//! operation is total over its inputs.

use axum::{extract::Query, response::Json};
use serde_json::Value as JsonValue;

use clinic_core::{derive_allowed_sections, format_record_lines, tally_usage};

use crate::server::extract::LenientJson;
use crate::server::models::{
    FormatLinesRequest, FormatLinesResponse, GlobalUsageRequest, GlobalUsageResponse,
    HerbSearchParams, HerbSearchResponse, SectionsRequest, SectionsResponse,
};

/// POST /api/access/sections
pub async fn sections_handler(
    LenientJson(request): LenientJson<SectionsRequest>,
) -> Json<SectionsResponse> {
    let allowed_sections = derive_allowed_sections(&request.position, &request.email);
    Json(SectionsResponse { allowed_sections })
}

/// GET /api/search/herbs
pub async fn search_herbs_handler(
    Query(params): Query<HerbSearchParams>,
) -> Json<HerbSearchResponse> {
    Json(HerbSearchResponse {
        query: params.query.trim().to_string(),
        results: Vec::new(),
    })
}

/// POST /api/compute/global-usage
pub async fn global_usage_handler(
    LenientJson(request): LenientJson<GlobalUsageRequest>,
) -> Json<GlobalUsageResponse> {
    let tally = tally_usage(&request.consultations);
    Json(GlobalUsageResponse {
        usage_counts: tally.medicines,
        acupoint_counts: tally.acupoints,
    })
}

/// POST /api/records/format-lines
pub async fn format_lines_handler(
    LenientJson(request): LenientJson<FormatLinesRequest>,
) -> Json<FormatLinesResponse> {
    Json(FormatLinesResponse {
        lines: format_record_lines(&request.records),
    })
}

/// GET /health
pub async fn health_handler() -> Json<JsonValue> {
    Json(serde_json::json!({"ok": true}))
}

/// GET /version
pub async fn version_handler() -> Json<JsonValue> {
    Json(serde_json::json!({
        "service": "clinic-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
