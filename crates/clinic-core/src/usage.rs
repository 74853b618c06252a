//! Prescription and acupuncture usage tallies.
//!
//! Medicine-name extraction is a deliberate heuristic kept compatible with
//! the frontend it serves: take the leading run of characters up to the
//! first ASCII digit, whitespace, `(`, `)` or `.`; when that run is empty,
//! fall back to the chunk before the first digit or whitespace. Names that
//! contain meaningful digits or parentheses will mis-tokenize, and that is
//! the contract — do not "fix" it here.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::consultation::ConsultationRecord;

/// Occurrence counts keyed by extracted name, in first-seen order.
pub type UsageCounts = IndexMap<String, u64>;

/// Medicine and acupoint counts accumulated over a batch of records.
#[derive(Debug, Default)]
pub struct UsageTally {
    pub medicines: UsageCounts,
    pub acupoints: UsageCounts,
}

static ACUPOINT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-acupoint-name="(.*?)""#).expect("acupoint tag pattern"));

fn is_name_delimiter(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '(' | ')' | '.')
}

/// Extract the medicine name from one prescription line, if any.
pub fn extract_medicine_name(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let end = line.find(is_name_delimiter).unwrap_or(line.len());
    let name = if end > 0 {
        &line[..end]
    } else {
        // Leading delimiter: fall back to the first chunk not containing a
        // digit or whitespace, which may itself carry parentheses.
        line.split(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .next()
            .unwrap_or("")
    };
    (!name.is_empty()).then_some(name)
}

/// Count medicine and acupoint usage across all records.
///
/// Prescriptions contribute one count per non-blank line; acupuncture notes
/// contribute one count per embedded `data-acupoint-name` tag. The maps are
/// built fresh per call and preserve first-seen order.
pub fn tally_usage(records: &[ConsultationRecord]) -> UsageTally {
    let mut tally = UsageTally::default();
    for record in records {
        for line in record.prescription.lines() {
            if let Some(name) = extract_medicine_name(line) {
                *tally.medicines.entry(name.to_string()).or_insert(0) += 1;
            }
        }
        for capture in ACUPOINT_TAG.captures_iter(&record.acupuncture_notes) {
            let name = &capture[1];
            if !name.is_empty() {
                *tally.acupoints.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_prescription(text: &str) -> ConsultationRecord {
        serde_json::from_value(serde_json::json!({"prescription": text})).unwrap()
    }

    #[test]
    fn extracts_name_before_dose() {
        assert_eq!(extract_medicine_name("甘草 3g"), Some("甘草"));
        assert_eq!(extract_medicine_name("當歸(酒制) 2g"), Some("當歸"));
        assert_eq!(extract_medicine_name("  白芍5g  "), Some("白芍"));
    }

    #[test]
    fn leading_delimiter_falls_back_to_first_chunk() {
        // The fallback splits on digits and whitespace only, so the
        // parenthesized prefix stays attached.
        assert_eq!(extract_medicine_name("(酒制)當歸 2g"), Some("(酒制)當歸"));
        assert_eq!(extract_medicine_name("3g甘草"), None);
    }

    #[test]
    fn blank_lines_yield_nothing() {
        assert_eq!(extract_medicine_name(""), None);
        assert_eq!(extract_medicine_name("   "), None);
    }

    #[test]
    fn counts_match_prescription_lines() {
        let records = vec![with_prescription("甘草 3g\n當歸(酒制) 2g")];
        let tally = tally_usage(&records);
        assert_eq!(tally.medicines.get("甘草"), Some(&1));
        assert_eq!(tally.medicines.get("當歸"), Some(&1));
        assert_eq!(tally.medicines.len(), 2);
    }

    #[test]
    fn counts_are_additive_across_records() {
        let records = vec![with_prescription("白芍 5g"), with_prescription("白芍 5g")];
        let tally = tally_usage(&records);
        assert_eq!(tally.medicines.get("白芍"), Some(&2));
    }

    #[test]
    fn blank_and_unextractable_lines_are_skipped() {
        let records = vec![with_prescription("甘草 3g\n\n   \n3g\n甘草 6g")];
        let tally = tally_usage(&records);
        assert_eq!(tally.medicines.get("甘草"), Some(&2));
        assert_eq!(tally.medicines.len(), 1);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let records = vec![with_prescription("當歸 2g\n甘草 3g\n當歸 1g")];
        let tally = tally_usage(&records);
        let names: Vec<&str> = tally.medicines.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["當歸", "甘草"]);
    }

    #[test]
    fn acupoint_tags_are_counted() {
        let records: Vec<ConsultationRecord> = vec![
            serde_json::from_value(serde_json::json!({
                "acupunctureNotes": "<span data-acupoint-name=\"合谷\"></span>\
                                     <span data-acupoint-name=\"足三里\"></span>",
            }))
            .unwrap(),
            serde_json::from_value(serde_json::json!({
                "acupunctureNotes": "<span data-acupoint-name=\"合谷\"></span>\
                                     <span data-acupoint-name=\"\"></span>",
            }))
            .unwrap(),
        ];
        let tally = tally_usage(&records);
        assert_eq!(tally.acupoints.get("合谷"), Some(&2));
        assert_eq!(tally.acupoints.get("足三里"), Some(&1));
        assert_eq!(tally.acupoints.len(), 2);
    }
}
