// ABOUTME: Extracts completion text from the response shapes hosted backends return
// ABOUTME: Handles flat text, generations lists and Gemini candidate structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

/// First non-blank text found in a completion response.
///
/// Checked in order: `text`, `generations[0].text`,
/// `candidates[0].content.parts[0].text`.
#[must_use]
pub fn extract_completion_text(payload: &Value) -> Option<&str> {
    let flat = payload.get("text");
    let generation = payload.pointer("/generations/0/text");
    let candidate = payload.pointer("/candidates/0/content/parts/0/text");

    [flat, generation, candidate]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|text| !text.trim().is_empty())
}

/// Error description carried in a response body, if any.
///
/// Cohere reports `{"message": ...}`; Gemini reports `{"error": {"message": ...}}`.
#[must_use]
pub fn error_message(payload: &Value) -> Option<String> {
    payload
        .pointer("/error/message")
        .or_else(|| payload.get("error").filter(|e| e.is_string()))
        .or_else(|| payload.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_owned)
}
