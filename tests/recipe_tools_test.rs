// ABOUTME: Integration tests for the recipe tools driven through the tool registry
// ABOUTME: Covers generation, failure preservation, expansion, export and argument validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{context, resources_with, ScriptedClient, BIBIMBAP_REPLY, KIMCHI_REPLY};
use recipe_mcp_server::errors::ErrorCode;
use recipe_mcp_server::llm::CompletionError;
use recipe_mcp_server::mcp::schema::Content;
use recipe_mcp_server::tools::ToolResult;
use serde_json::json;

fn texts(result: &ToolResult) -> Vec<&str> {
    result
        .content
        .iter()
        .map(|Content::Text { text }| text.as_str())
        .collect()
}

#[tokio::test]
async fn test_input_ingredients_returns_json_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let resources = resources_with(ScriptedClient::replying(&[KIMCHI_REPLY]), dir.path());
    let ctx = context(&resources, "s1");

    let result = resources
        .tools
        .execute("input_ingredients", json!({"ingredients": ["kimchi", "rice"]}), &ctx)
        .await
        .unwrap();

    assert!(!result.is_error);
    let blocks = texts(&result);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("Here are the 3 full recipes (in JSON format):\n\n["));
    assert!(blocks[0].contains("\"name\": \"Kimchi Fried Rice\""));
    assert!(blocks[1].starts_with("🍲 레시피 1: Kimchi Fried Rice\n🛒 재료: Rice, Kimchi\n"));
    assert!(blocks[1].contains("🍲 레시피 3: Kimchi Pancake"));
    assert!(blocks[1].contains("⏱️ 시간: 30분 / 난이도: 3"));
    assert!(blocks[1].ends_with("(Use `expand_recipe` or `save_recipe` tool for more!)"));

    assert_eq!(resources.recipe_cache.all("s1").unwrap().len(), 3);
    assert_eq!(
        resources.sessions.ingredients("s1").unwrap().to_vec(),
        vec!["kimchi".to_owned(), "rice".to_owned()]
    );
}

#[tokio::test]
async fn test_prompt_reflects_session_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::replying(&[KIMCHI_REPLY, KIMCHI_REPLY]);
    let resources = resources_with(client.clone(), dir.path());
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    tools
        .execute("input_ingredients", json!({"ingredients": "egg, rice"}), &ctx)
        .await
        .unwrap();
    tools
        .execute("set_language", json!({"lang": "en"}), &ctx)
        .await
        .unwrap();
    tools
        .execute("food_allergies", json!({"allergies": ["peanut", "shrimp"]}), &ctx)
        .await
        .unwrap();
    tools
        .execute("type_food", json!({"cuisine": "일식"}), &ctx)
        .await
        .unwrap();
    tools.execute("recipe_rec", json!({}), &ctx).await.unwrap();

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Based on these ingredients: egg, rice"));
    assert!(!prompts[0].contains("allergic"));
    assert!(prompts[0].contains("Respond in Korean."));

    assert!(prompts[1].contains("Based on these ingredients: egg, rice"));
    assert!(prompts[1].contains("The user is allergic to: peanut, shrimp."));
    assert!(prompts[1].contains("Japanese"));
    assert!(prompts[1].contains("Respond in English."));
}

#[tokio::test]
async fn test_parse_failure_keeps_previous_recipes() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::replying(&[KIMCHI_REPLY, "[\"not valid json\""]);
    let resources = resources_with(client, dir.path());
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    tools
        .execute("input_ingredients", json!({"ingredients": ["kimchi"]}), &ctx)
        .await
        .unwrap();
    let failed = tools.execute("recipe_rec", json!({}), &ctx).await.unwrap();

    assert!(failed.is_error);
    assert_eq!(failed.joined_text(), "❌ 생성된 응답이 JSON 형식이 아닙니다.");

    let expanded = tools
        .execute("expand_recipe", json!({"index": "1"}), &ctx)
        .await
        .unwrap();
    assert!(!expanded.is_error);
    assert!(expanded.joined_text().contains("Kimchi Fried Rice"));
}

#[tokio::test]
async fn test_completion_failure_is_reported_per_kind() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::new([Err(CompletionError::NetworkFailure {
        provider: "scripted",
        message: "connection refused".into(),
    })]);
    let resources = resources_with(client, dir.path());
    let ctx = context(&resources, "s1");
    resources
        .tools
        .execute("set_language", json!({"lang": "en"}), &ctx)
        .await
        .unwrap();

    let result = resources
        .tools
        .execute("input_ingredients", json!({"ingredients": ["tofu"]}), &ctx)
        .await
        .unwrap();

    assert!(result.is_error);
    assert_eq!(
        result.joined_text(),
        "❌ scripted request failed. Please try again later."
    );
    assert!(resources.recipe_cache.all("s1").is_none());
}

#[tokio::test]
async fn test_expand_recipe_english_view() {
    let dir = tempfile::tempdir().unwrap();
    let resources = resources_with(ScriptedClient::replying(&[KIMCHI_REPLY]), dir.path());
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    tools
        .execute("set_language", json!({"lang": "en"}), &ctx)
        .await
        .unwrap();
    tools
        .execute("input_ingredients", json!({"ingredients": ["kimchi", "rice"]}), &ctx)
        .await
        .unwrap();

    let result = tools
        .execute("expand_recipe", json!({"index": 1}), &ctx)
        .await
        .unwrap();
    assert_eq!(
        result.joined_text(),
        "📋 Recipe: \"Kimchi Fried Rice\"\n💰 Estimated Cost: 3000\n⏱️ Time: 20 minutes / Difficulty: 2\n\n🧑‍🍳 Steps:\n  1. Cook rice\n  2. Fry with kimchi"
    );

    let stew = tools
        .execute("expand_recipe", json!({"index": "2"}), &ctx)
        .await
        .unwrap();
    assert!(stew.joined_text().contains("💰 Estimated Cost: Unknown"));
}

#[tokio::test]
async fn test_expand_recipe_misses() {
    let dir = tempfile::tempdir().unwrap();
    let resources = resources_with(ScriptedClient::replying(&[BIBIMBAP_REPLY]), dir.path());
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    tools
        .execute("set_language", json!({"lang": "en"}), &ctx)
        .await
        .unwrap();
    let empty = tools
        .execute("expand_recipe", json!({"index": "1"}), &ctx)
        .await
        .unwrap();
    assert!(empty.is_error);
    assert_eq!(
        empty.joined_text(),
        "❌ No recipe data available. Please input ingredients first."
    );

    tools
        .execute("input_ingredients", json!({"ingredients": ["rice"]}), &ctx)
        .await
        .unwrap();
    for index in ["0", "2"] {
        let miss = tools
            .execute("expand_recipe", json!({"index": index}), &ctx)
            .await
            .unwrap();
        assert!(miss.is_error);
        assert_eq!(miss.joined_text(), "❌ Invalid recipe number.");
    }
}

#[tokio::test]
async fn test_save_recipe_writes_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Generated Recipes");
    let resources = resources_with(ScriptedClient::replying(&[KIMCHI_REPLY]), &output);
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    tools
        .execute("input_ingredients", json!({"ingredients": ["kimchi", "rice"]}), &ctx)
        .await
        .unwrap();
    let result = tools
        .execute("save_recipe", json!({"index": "1"}), &ctx)
        .await
        .unwrap();

    assert!(!result.is_error);
    assert!(result.joined_text().contains("Kimchi_Fried_Rice.txt"));

    let contents = fs::read_to_string(output.join("Kimchi_Fried_Rice.txt")).unwrap();
    assert!(contents.starts_with("Recipe: Kimchi Fried Rice\nTime: 20 minutes\nDifficulty: 2/5\n"));
    assert!(contents.contains("- Rice (3000₩)"));
    assert!(contents.contains("Total Cost: 3000₩"));
    assert!(contents.contains("\n1. Cook rice\n2. Fry with kimchi\n"));
}

#[tokio::test]
async fn test_save_recipe_failures() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("not-a-directory");
    fs::write(&blocked, "occupied").unwrap();
    let resources = resources_with(ScriptedClient::replying(&[KIMCHI_REPLY]), &blocked);
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    tools
        .execute("set_language", json!({"lang": "en"}), &ctx)
        .await
        .unwrap();
    let nothing = tools
        .execute("save_recipe", json!({"index": "1"}), &ctx)
        .await
        .unwrap();
    assert_eq!(
        nothing.joined_text(),
        "❌ No recipe data to save. Please input ingredients first."
    );

    tools
        .execute("input_ingredients", json!({"ingredients": ["kimchi"]}), &ctx)
        .await
        .unwrap();
    let failed = tools
        .execute("save_recipe", json!({"index": "1"}), &ctx)
        .await
        .unwrap();
    assert!(failed.is_error);
    assert_eq!(failed.joined_text(), "❌ Failed to save file.");
    assert_eq!(resources.recipe_cache.all("s1").unwrap().len(), 3);
}

#[tokio::test]
async fn test_recipe_rec_without_ingredients() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::replying(&[KIMCHI_REPLY]);
    let resources = resources_with(client.clone(), dir.path());
    let ctx = context(&resources, "s1");

    let result = resources
        .tools
        .execute("recipe_rec", json!({}), &ctx)
        .await
        .unwrap();

    assert!(result.is_error);
    assert_eq!(
        result.joined_text(),
        "❌ 재료가 입력되지 않았습니다. 먼저 재료를 입력해주세요."
    );
    assert!(client.prompts().is_empty());
}

#[tokio::test]
async fn test_argument_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let resources = resources_with(ScriptedClient::replying(&[]), dir.path());
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    let bad_lang = tools
        .execute("set_language", json!({"lang": "fr"}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(bad_lang.code, ErrorCode::InvalidInput);
    assert_eq!(bad_lang.jsonrpc_code(), -32602);

    let missing = tools
        .execute("input_ingredients", json!({}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);

    let bad_cuisine = tools
        .execute("type_food", json!({"cuisine": "thai"}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(bad_cuisine.code, ErrorCode::InvalidInput);

    let bad_index = tools
        .execute("expand_recipe", json!({"index": "first"}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(bad_index.jsonrpc_code(), -32602);
}

#[tokio::test]
async fn test_preference_tools_replies() {
    let dir = tempfile::tempdir().unwrap();
    let resources = resources_with(ScriptedClient::replying(&[]), dir.path());
    let ctx = context(&resources, "s1");
    let tools = &resources.tools;

    let ko = tools
        .execute("set_language", json!({"lang": "ko"}), &ctx)
        .await
        .unwrap();
    assert_eq!(ko.joined_text(), "✅ 언어가 한국어로 설정되었습니다.");
    let en = tools
        .execute("set_language", json!({"lang": "en"}), &ctx)
        .await
        .unwrap();
    assert_eq!(en.joined_text(), "✅ Language has been set to English.");

    let added = tools
        .execute("input_allergy", json!({"allergy": "peanut"}), &ctx)
        .await
        .unwrap();
    assert_eq!(added.joined_text(), "✅ Allergy \"peanut\" has been added.");
    let duplicate = tools
        .execute("input_allergy", json!({"allergy": "peanut"}), &ctx)
        .await
        .unwrap();
    assert!(!duplicate.is_error);
    assert!(duplicate.joined_text().contains("already"));

    let overview = tools
        .execute("get_preferences", json!({}), &ctx)
        .await
        .unwrap();
    assert_eq!(
        overview.structured_content,
        Some(json!({"language": "en", "allergies": ["peanut"], "cuisine": "korean"}))
    );

    tools
        .execute("clear_allergies", json!({}), &ctx)
        .await
        .unwrap();
    assert!(resources.sessions.get_preferences("s1").allergies.is_empty());
}
