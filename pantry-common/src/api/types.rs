//! Request/response types of the recipe generation endpoint
//!
//! The endpoint is an external service. These types describe only the
//! contract the client depends on:
//!
//! - Request: `POST` with `{"ingredients": ["egg", "flour"]}`
//! - Success: `{"recipes": [{"title", "ingredients", "instructions"}]}`
//! - Failure: `{"error": "...", "details": "..."}` (any HTTP status)

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ========================================
// Request Types
// ========================================

/// Body of the generate request
///
/// # Examples
///
/// ```
/// use pantry_common::api::GenerateRequest;
///
/// let request = GenerateRequest {
///     ingredients: vec!["egg".to_string(), "flour".to_string()],
/// };
/// let body = serde_json::to_string(&request).unwrap();
/// assert_eq!(body, r#"{"ingredients":["egg","flour"]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateRequest {
    /// Normalized ingredient names, in selection order
    pub ingredients: Vec<String>,
}

// ========================================
// Response Types
// ========================================

/// A recipe produced by the generation service
///
/// Read-only on the client side; only `instructions` line breaks are
/// interpreted when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recipe {
    pub title: String,
    /// Pre-formatted ingredient list (e.g. "egg, flour")
    pub ingredients: String,
    /// Free text, may contain `\n` line breaks
    pub instructions: String,
}

impl Recipe {
    /// Instruction text split on every `\n`
    ///
    /// Each break yields a line, so blank and trailing empty lines are kept.
    /// Other characters (including `\r`) pass through untouched.
    pub fn instruction_lines(&self) -> impl Iterator<Item = &str> {
        self.instructions.split('\n')
    }
}

/// Response body of the generate endpoint
///
/// Both fields are optional on the wire. `error` is kept as a raw JSON value
/// because only its truthiness decides between success and failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,

    /// Extra diagnostic text sent along with `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<Recipe>>,
}

impl GenerateResponse {
    /// Service error message, if the `error` field is truthy
    ///
    /// `null`, `false`, `0` and `""` count as absent. Strings are returned
    /// verbatim, any other value in its JSON form.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }

    /// Consume the response into its recipe list (missing or null is empty)
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_recipes_response() {
        let response = parse(json!({
            "recipes": [{"title": "Pancakes", "ingredients": "egg, flour", "instructions": "Mix.\nCook."}]
        }));

        assert_eq!(response.error_message(), None);
        let recipes = response.into_recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Pancakes");
        assert_eq!(
            recipes[0].instruction_lines().collect::<Vec<_>>(),
            vec!["Mix.", "Cook."]
        );
    }

    #[test]
    fn test_instruction_lines_keep_every_break() {
        let recipe = Recipe {
            title: "Toast".to_string(),
            ingredients: "bread".to_string(),
            instructions: "Slice.\n\nToast.\n".to_string(),
        };

        assert_eq!(
            recipe.instruction_lines().collect::<Vec<_>>(),
            vec!["Slice.", "", "Toast.", ""]
        );
    }

    #[test]
    fn test_error_response() {
        let response = parse(json!({"error": "No ingredients provided"}));
        assert_eq!(
            response.error_message().as_deref(),
            Some("No ingredients provided")
        );
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        for falsy in [json!(null), json!(false), json!(""), json!(0)] {
            let response = parse(json!({"error": falsy, "recipes": []}));
            assert_eq!(response.error_message(), None);
        }
    }

    #[test]
    fn test_non_string_error_is_reported() {
        let response = parse(json!({"error": {"code": 500}}));
        assert_eq!(response.error_message().as_deref(), Some(r#"{"code":500}"#));
    }

    #[test]
    fn test_missing_or_null_recipes_are_empty() {
        assert!(parse(json!({})).into_recipes().is_empty());
        assert!(parse(json!({"recipes": null})).into_recipes().is_empty());
    }

    #[test]
    fn test_details_are_parsed() {
        let response = parse(json!({"error": "Groq API error 401", "details": "bad key"}));
        assert_eq!(response.details.as_deref(), Some("bad key"));
    }
}
