//! Extraction of structured payloads embedded in free-form model text
//!
//! Analysis and checklist tasks ask the model for a JSON object, but the
//! reply usually arrives wrapped in prose. The scanner below tries every
//! `{` candidate in order and parses one complete JSON value from it; the
//! first structurally valid top-level object wins. This stays correct when
//! the surrounding prose itself contains stray brace characters, which a
//! first-to-last-brace span would not.

use serde::de::DeserializeOwned;

use crate::error::ParseError;

/// Locate the first valid top-level JSON object in `raw` and decode it
/// into `T`.
///
/// There is no partial recovery: either the whole payload decodes into `T`
/// or the operation fails with the raw text attached.
pub fn extract_payload<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let value = first_json_object(raw).ok_or_else(|| ParseError {
        reason: "no JSON object found".to_string(),
        raw: raw.to_string(),
    })?;

    serde_json::from_value(value).map_err(|e| ParseError {
        reason: e.to_string(),
        raw: raw.to_string(),
    })
}

fn first_json_object(raw: &str) -> Option<serde_json::Value> {
    for (idx, ch) in raw.char_indices() {
        if ch != '{' {
            continue;
        }
        let mut stream =
            serde_json::Deserializer::from_str(&raw[idx..]).into_iter::<serde_json::Value>();
        if let Some(Ok(value)) = stream.next() {
            if value.is_object() {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisResult;

    const PAYLOAD: &str = r#"{"sintaLevel":"SINTA 2","publishabilityScore":87,"completeness":92,"weaknesses":[],"suggestions":[],"detailedAnalysis":{"title":"ok","abstract":"ok","methodology":"ok","results":"ok","references":"ok"}}"#;

    #[test]
    fn decodes_payload_wrapped_in_prose() {
        let wrapped = format!("Sure! Here is the result: {PAYLOAD} Hope this helps.");
        let from_prose: AnalysisResult = extract_payload(&wrapped).unwrap();
        let bare: AnalysisResult = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(from_prose, bare);
    }

    #[test]
    fn skips_stray_braces_in_leading_prose() {
        let wrapped = format!("I set {{temperature}} low as asked. {PAYLOAD}");
        let result: AnalysisResult = extract_payload(&wrapped).unwrap();
        assert_eq!(result.publishability_score, 87);
    }

    #[test]
    fn empty_weakness_and_suggestion_lists_are_legal() {
        let result: AnalysisResult = extract_payload(PAYLOAD).unwrap();
        assert!(result.weaknesses.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_payload_error_carries_raw_text() {
        let raw = "I could not produce the requested analysis.";
        let err = extract_payload::<AnalysisResult>(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn undecodable_payload_error_carries_raw_text() {
        let raw = r#"{"unexpected":"shape"}"#;
        let err = extract_payload::<AnalysisResult>(raw).unwrap_err();
        assert_eq!(err.raw, raw);
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn first_valid_object_wins_over_later_ones() {
        let raw = r#"{"a":1} and then {"b":2}"#;
        let value: serde_json::Value = extract_payload(raw).unwrap();
        assert_eq!(value, serde_json::json!({"a":1}));
    }
}
