//! Record summarization: date normalization plus one display line per record.
//!
//! Date resolution order is part of the frontend contract and must not be
//! reinterpreted: `date` wins over `createdAt`, and within a field an epoch
//! wrapper wins over a string by construction. Parse failures degrade to
//! "no date" and fall through to the next candidate.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::consultation::{ConsultationRecord, DateField};

/// Resolve a record's display date: `date` first, then `createdAt`.
pub fn resolve_record_date(record: &ConsultationRecord) -> Option<NaiveDate> {
    record
        .date
        .as_ref()
        .and_then(resolve_date_value)
        .or_else(|| record.created_at.as_ref().and_then(resolve_date_value))
}

/// Resolve a single date value to a calendar date in local time.
fn resolve_date_value(value: &DateField) -> Option<NaiveDate> {
    match value {
        DateField::Epoch { seconds } => DateTime::from_timestamp(*seconds, 0)
            .map(|utc| utc.with_timezone(&Local).date_naive()),
        DateField::Text(text) => parse_iso_date(text),
        DateField::Other(_) => None,
    }
}

/// ISO-8601 parse ladder: RFC 3339, then a bare datetime, then a bare date.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Local).date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Collapse runs of embedded newlines to single spaces and trim.
fn flatten(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_break = false;
    for c in text.chars() {
        if c == '\n' || c == '\r' {
            pending_break = true;
        } else {
            if pending_break {
                out.push(' ');
                pending_break = false;
            }
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// Format one record as a display line.
///
/// Layout: `YYYY-MM-DD symptoms currentHistory (tongue，pulse)`, every piece
/// optional. A record with no resolvable date and no clinical content
/// formats as an empty string, never an error.
pub fn format_record_line(record: &ConsultationRecord) -> String {
    let mut segments: Vec<String> = Vec::new();

    let symptoms = flatten(&record.symptoms);
    if !symptoms.is_empty() {
        segments.push(symptoms);
    }
    let history = flatten(&record.current_history);
    if !history.is_empty() {
        segments.push(history);
    }

    let tongue = flatten(&record.tongue);
    let pulse = flatten(&record.pulse);
    let exam: Vec<&str> = [tongue.as_str(), pulse.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !exam.is_empty() {
        segments.push(format!("({})", exam.join("，")));
    }

    let date = resolve_record_date(record)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    format!("{} {}", date, segments.join(" ")).trim().to_string()
}

/// Format every record, preserving input order.
pub fn format_record_lines(records: &[ConsultationRecord]) -> Vec<String> {
    records.iter().map(format_record_line).collect()
}
