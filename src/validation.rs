use serde_json::Value;

use crate::error::ApiError;

/// Validated create/update payload for an idea.
///
/// One normalization rule serves both creation and update: a comma-separated
/// tag string is split, trimmed, and stripped of empty entries; an array
/// keeps its string elements untouched and in order. Duplicates survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl IdeaDraft {
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            title: required_text("title", body.get("title").and_then(Value::as_str))?,
            description: required_text(
                "description",
                body.get("description").and_then(Value::as_str),
            )?,
            summary: required_text("summary", body.get("summary").and_then(Value::as_str))?,
            tags: normalize_tags(body.get("tags")),
        })
    }
}

/// Reject absent, non-string, or blank-after-trim fields
pub fn required_text(field: &str, value: Option<&str>) -> Result<String, ApiError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ApiError::validation(format!(
            "Please provide a non-empty {}",
            field
        ))),
    }
}

/// Coerce a tags value into an ordered list of tag strings
pub fn normalize_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(raw)) => raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
