//! Correction request and result models
//!
//! Wire shapes exchanged with the remote correction endpoint. Field names on
//! the wire are camelCase; the Rust side keeps snake_case.

use serde::{Deserialize, Deserializer, Serialize};

/// Payload sent to the correction endpoint for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionRequest {
    #[serde(rename = "textToCorrect")]
    pub text: String,
    #[serde(rename = "styleGuide")]
    pub reference_document: String,
}

impl CorrectionRequest {
    pub fn new(text: impl Into<String>, reference_document: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference_document: reference_document.into(),
        }
    }

    /// True when there is nothing to correct once whitespace is ignored
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Validated reply of the correction service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub notes: Vec<String>,
    /// Absent and `null` both decode to an empty list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alternatives: Vec<String>,
}

impl CorrectionResult {
    /// Result returned for blank input without contacting the service
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn has_alternatives(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_should_serialize_with_wire_field_names() {
        let request = CorrectionRequest::new("Jane Doe", "guide");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "textToCorrect": "Jane Doe", "styleGuide": "guide" })
        );
    }

    #[test]
    fn request_blank_check_should_ignore_whitespace() {
        assert!(CorrectionRequest::new("  \n\t", "guide").is_blank());
        assert!(!CorrectionRequest::new(" x ", "guide").is_blank());
    }

    #[test]
    fn result_should_default_missing_alternatives_to_empty() {
        let result: CorrectionResult =
            serde_json::from_value(json!({ "correctedText": "X", "notes": ["n1"] })).unwrap();
        assert_eq!(result.corrected_text, "X");
        assert_eq!(result.notes, vec!["n1".to_string()]);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn result_should_treat_null_alternatives_as_empty() {
        let result: CorrectionResult = serde_json::from_value(
            json!({ "correctedText": "", "notes": [], "alternatives": null }),
        )
        .unwrap();
        assert!(!result.has_alternatives());
    }

    #[test]
    fn result_should_reject_wrong_shapes() {
        let bad = [
            json!({ "correctedText": 5, "notes": [] }),
            json!({ "correctedText": "x" }),
            json!({ "correctedText": "x", "notes": "not a list" }),
            json!({ "correctedText": "x", "notes": null }),
            json!({ "correctedText": "x", "notes": [], "alternatives": "alt" }),
        ];
        for value in bad {
            assert!(
                serde_json::from_value::<CorrectionResult>(value.clone()).is_err(),
                "{value} should not decode"
            );
        }
    }

    #[test]
    fn empty_result_should_have_no_content() {
        let result = CorrectionResult::empty();
        assert_eq!(result.corrected_text, "");
        assert!(!result.has_notes());
        assert!(!result.has_alternatives());
    }
}
