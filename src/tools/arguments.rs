// ABOUTME: Typed extraction of tool arguments from the JSON arguments object
// ABOUTME: Reports missing or malformed arguments as ToolError for -32602 responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

use crate::errors::ToolError;

/// Required non-blank string argument
///
/// # Errors
///
/// Returns [`ToolError::MissingParameter`] when absent and
/// [`ToolError::InvalidParameter`] when not a non-blank string.
pub fn required_str<'a>(args: &'a Value, tool: &str, field: &str) -> Result<&'a str, ToolError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, field)),
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim()),
        Some(_) => Err(ToolError::invalid_parameter(
            tool,
            field,
            "expected a non-empty string",
        )),
    }
}

/// List of strings, given either as a JSON array or one comma-separated string.
/// Blank items are dropped; the result is never empty.
///
/// # Errors
///
/// Returns [`ToolError::MissingParameter`] when absent and
/// [`ToolError::InvalidParameter`] when no usable item remains.
pub fn string_list(args: &Value, tool: &str, field: &str) -> Result<Vec<String>, ToolError> {
    let items: Vec<String> = match args.get(field) {
        None | Some(Value::Null) => return Err(ToolError::missing_parameter(tool, field)),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| {
                value.as_str().map(str::to_owned).ok_or_else(|| {
                    ToolError::invalid_parameter(tool, field, "every item must be a string")
                })
            })
            .collect::<Result<_, _>>()?,
        Some(Value::String(text)) => text.split(',').map(str::to_owned).collect(),
        Some(_) => {
            return Err(ToolError::invalid_parameter(
                tool,
                field,
                "expected an array of strings",
            ))
        }
    };

    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return Err(ToolError::invalid_parameter(
            tool,
            field,
            "at least one non-empty item is required",
        ));
    }
    Ok(items)
}

/// 1-based recipe number, given as `"2"` or `2`.
///
/// Numbers outside the cached range are not rejected here; the cache
/// reports them so the user gets the "invalid recipe number" message.
///
/// # Errors
///
/// Returns [`ToolError`] when absent or not a non-negative integer.
pub fn recipe_index(args: &Value, tool: &str, field: &str) -> Result<usize, ToolError> {
    let invalid =
        || ToolError::invalid_parameter(tool, field, "expected a recipe number such as \"1\"");
    match args.get(field) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, field)),
        Some(Value::String(text)) => text.trim().parse::<usize>().map_err(|_| invalid()),
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_str() {
        let args = json!({"lang": " en ", "blank": " ", "num": 3});
        assert_eq!(required_str(&args, "t", "lang").ok(), Some("en"));
        assert!(matches!(
            required_str(&args, "t", "missing"),
            Err(ToolError::MissingParameter { .. })
        ));
        assert!(matches!(
            required_str(&args, "t", "blank"),
            Err(ToolError::InvalidParameter { .. })
        ));
        assert!(required_str(&args, "t", "num").is_err());
    }

    #[test]
    fn test_string_list_shapes() {
        let array = json!({"items": ["egg", " rice ", ""]});
        assert_eq!(
            string_list(&array, "t", "items").ok(),
            Some(vec!["egg".into(), "rice".into()])
        );

        let csv = json!({"items": "kimchi, tofu,"});
        assert_eq!(
            string_list(&csv, "t", "items").ok(),
            Some(vec!["kimchi".into(), "tofu".into()])
        );

        assert!(string_list(&json!({"items": []}), "t", "items").is_err());
        assert!(string_list(&json!({"items": [1]}), "t", "items").is_err());
    }

    #[test]
    fn test_recipe_index_shapes() {
        assert_eq!(recipe_index(&json!({"index": "2"}), "t", "index").ok(), Some(2));
        assert_eq!(recipe_index(&json!({"index": 3}), "t", "index").ok(), Some(3));
        assert_eq!(recipe_index(&json!({"index": "0"}), "t", "index").ok(), Some(0));
        assert!(recipe_index(&json!({"index": "two"}), "t", "index").is_err());
        assert!(recipe_index(&json!({"index": -1}), "t", "index").is_err());
    }
}
