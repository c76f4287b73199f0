//! Parse completion replies into per-chunk outcomes

use serde_json::Value;
use std::collections::BTreeMap;
use termsheet_domain::{ChunkOutcome, FieldSpec};
use tracing::{debug, warn};

/// Parse one chunk's raw reply.
///
/// The service is asked for a flat JSON object, but replies arrive in two
/// shapes in practice: the JSON object (sometimes wrapped in a markdown code
/// fence), or prose with `label: value` lines decorated with bullet and bold
/// markers. Both are accepted; a reply yielding neither is a parse failure.
pub fn parse_reply(reply: &str) -> ChunkOutcome {
    if let Some(fields) = parse_json_object(reply) {
        return ChunkOutcome::Fields(fields);
    }

    let fields = parse_labeled_lines(reply);
    if fields.is_empty() {
        ChunkOutcome::ParseFailure {
            reason: "reply is neither a JSON object nor label: value lines".to_string(),
        }
    } else {
        ChunkOutcome::Fields(fields)
    }
}

/// Try the reply as a flat JSON object of scalar values.
fn parse_json_object(reply: &str) -> Option<BTreeMap<String, String>> {
    let json_str = strip_code_fence(reply);
    let json: Value = serde_json::from_str(&json_str).ok()?;
    let object = json.as_object()?;

    let mut fields = BTreeMap::new();
    for (key, value) in object {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                warn!("skipping non-scalar value for '{}'", key);
                continue;
            }
        };
        if let Some((key, value)) = normalize_pair(key, &raw) {
            fields.insert(key, value);
        }
    }
    Some(fields)
}

/// Extract content from a markdown code block, if the reply is wrapped in
/// one. LLMs often fence JSON despite instructions.
fn strip_code_fence(reply: &str) -> String {
    let trimmed = reply.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() < 2 {
        return trimmed.to_string();
    }

    // Skip the opening fence line (``` or ```json) and the closing fence.
    lines[1..lines.len().saturating_sub(1)].join("\n")
}

/// Fallback: treat the reply as prose containing `label: value` lines.
fn parse_labeled_lines(reply: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    for line in reply.lines() {
        if !line.contains(':') {
            continue;
        }
        // Strip bullet and bold decoration before splitting.
        let cleaned = line.replace("- ", "").replace("* ", "").replace("**", "");
        let cleaned = cleaned.trim();

        if let Some((key, value)) = cleaned.split_once(':') {
            if let Some((key, value)) = normalize_pair(key, value) {
                fields.insert(key, value);
            }
        }
    }

    fields
}

/// Shared cleanup for both reply shapes.
///
/// Collapses "Recoveries Lag (months)"-style keys to the canonical name with
/// any percent sign stripped from the value, and drops empty or literal
/// `N/A` values so absence never masquerades as data.
fn normalize_pair(key: &str, value: &str) -> Option<(String, String)> {
    let mut key = key.trim().to_string();
    let mut value = value.trim().to_string();

    if key.contains("Recoveries Lag") {
        key = "Recoveries Lag".to_string();
        value = value.replace('%', "").trim().to_string();
    }

    if key.is_empty() || value.is_empty() || value.eq_ignore_ascii_case("n/a") {
        return None;
    }

    // Unexpected keys are kept (the fold decides what to do with them),
    // just made visible.
    if !FieldSpec::contains(&key) {
        debug!("reply carried non-canonical field '{}'", key);
    }

    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_fields(outcome: ChunkOutcome) -> BTreeMap<String, String> {
        match outcome {
            ChunkOutcome::Fields(map) => map,
            other => panic!("expected Fields, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_plain_json_object() {
        let fields = expect_fields(parse_reply(
            r#"{"Closing Date": "January 1, 2020", "WALA": "24"}"#,
        ));
        assert_eq!(fields.get("Closing Date").unwrap(), "January 1, 2020");
        assert_eq!(fields.get("WALA").unwrap(), "24");
    }

    #[test]
    fn test_parse_json_with_markdown_fence() {
        let reply = "```json\n{\"WA Fixed Rate\": \"4.25%\"}\n```";
        let fields = expect_fields(parse_reply(reply));
        assert_eq!(fields.get("WA Fixed Rate").unwrap(), "4.25%");
    }

    #[test]
    fn test_parse_json_stringifies_numbers() {
        let fields = expect_fields(parse_reply(r#"{"WALA": 24}"#));
        assert_eq!(fields.get("WALA").unwrap(), "24");
    }

    #[test]
    fn test_parse_json_skips_nested_values() {
        let fields = expect_fields(parse_reply(
            r#"{"WALA": "24", "Detail": {"nested": true}}"#,
        ));
        assert_eq!(fields.len(), 1);
        assert!(!fields.contains_key("Detail"));
    }

    #[test]
    fn test_empty_json_object_is_not_a_failure() {
        // A chunk legitimately containing none of the fields.
        let fields = expect_fields(parse_reply("{}"));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_bulleted_prose_fallback() {
        let reply = "Here are the details I found:\n\
                     - **Closing Date**: January 1, 2020\n\
                     * Payment Frequency: Monthly\n\
                     Some trailing commentary without structure.";
        let fields = expect_fields(parse_reply(reply));
        assert_eq!(fields.get("Closing Date").unwrap(), "January 1, 2020");
        assert_eq!(fields.get("Payment Frequency").unwrap(), "Monthly");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_recoveries_lag_key_collapses_and_percent_strips() {
        let reply = "- Recoveries Lag (months): 12%";
        let fields = expect_fields(parse_reply(reply));
        assert_eq!(fields.get("Recoveries Lag").unwrap(), "12");
    }

    #[test]
    fn test_non_canonical_keys_are_kept() {
        // Keys outside the canonical field list pass through unchanged;
        // they are logged, not filtered.
        let fields = expect_fields(parse_reply(
            r#"{"WALA": "24", "Servicer Name": "Acme Corp"}"#,
        ));
        assert_eq!(fields.get("Servicer Name").unwrap(), "Acme Corp");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_na_values_are_dropped() {
        let reply = "Closing Date: N/A\nWALA: 24";
        let fields = expect_fields(parse_reply(reply));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("WALA").unwrap(), "24");
    }

    #[test]
    fn test_unstructured_reply_is_parse_failure() {
        let outcome = parse_reply("I could not find any of the requested details.");
        assert!(matches!(outcome, ChunkOutcome::ParseFailure { .. }));
    }

    #[test]
    fn test_json_array_falls_back_then_fails() {
        let outcome = parse_reply(r#"["Closing Date", "WALA"]"#);
        assert!(matches!(outcome, ChunkOutcome::ParseFailure { .. }));
    }
}
