// ABOUTME: Integration tests for the Cohere and Gemini completion clients against a mock HTTP server
// ABOUTME: Covers request shape, response extraction and the three failure kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::time::Duration;

use anyhow::Result;
use recipe_mcp_server::config::{CompletionConfig, CompletionProviderType};
use recipe_mcp_server::llm::{
    CohereClient, CompletionClient, CompletionError, CompletionErrorKind, CompletionProvider,
    GeminiClient,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn config_for(provider: CompletionProviderType, server: &MockServer) -> CompletionConfig {
    common::init_test_logging();
    let mut config = CompletionConfig::new(provider, "test-key");
    config.base_url = server.uri();
    config
}

// ============================================================================
// Cohere
// ============================================================================

#[tokio::test]
async fn test_cohere_sends_chat_request_and_reads_flat_text() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "command-r-plus",
            "message": "Suggest recipes with eggs",
            "max_tokens": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response_id": "abc",
            "text": "[{\"name\": \"Omelette\"}]",
            "finish_reason": "COMPLETE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CohereClient::new(&config_for(CompletionProviderType::Cohere, &server))?;
    assert_eq!(client.endpoint(), format!("{}/v1/chat", server.uri()));

    let text = client.complete("Suggest recipes with eggs").await?;
    assert_eq!(text, "[{\"name\": \"Omelette\"}]");

    Ok(())
}

#[tokio::test]
async fn test_cohere_reads_generations_shape() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generations": [{"id": "g1", "text": "[]"}]
        })))
        .mount(&server)
        .await;

    let client = CohereClient::new(&config_for(CompletionProviderType::Cohere, &server))?;
    assert_eq!(client.complete("prompt").await?, "[]");

    Ok(())
}

#[tokio::test]
async fn test_cohere_unauthorized_is_backend_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid api token"
        })))
        .mount(&server)
        .await;

    let client = CohereClient::new(&config_for(CompletionProviderType::Cohere, &server))?;
    let error = client.complete("prompt").await.unwrap_err();

    assert_eq!(error.kind(), CompletionErrorKind::BackendError);
    assert_eq!(error.provider(), "cohere");
    match error {
        CompletionError::BackendError {
            status, message, ..
        } => {
            assert_eq!(status, Some(401));
            assert_eq!(message, "invalid api token");
        }
        other => panic!("expected backend error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_cohere_blank_text_is_empty_response() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "   "})))
        .mount(&server)
        .await;

    let client = CohereClient::new(&config_for(CompletionProviderType::Cohere, &server))?;
    let error = client.complete("prompt").await.unwrap_err();
    assert_eq!(error.kind(), CompletionErrorKind::EmptyResponse);

    Ok(())
}

#[tokio::test]
async fn test_non_json_success_body_is_backend_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = CohereClient::new(&config_for(CompletionProviderType::Cohere, &server))?;
    let error = client.complete("prompt").await.unwrap_err();
    assert_eq!(error.kind(), CompletionErrorKind::BackendError);

    Ok(())
}

#[tokio::test]
async fn test_slow_backend_is_network_failure() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"text": "[]"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(CompletionProviderType::Cohere, &server);
    config.timeout = Duration::from_millis(200);
    let client = CohereClient::new(&config)?;

    let error = client.complete("prompt").await.unwrap_err();
    assert_eq!(error.kind(), CompletionErrorKind::NetworkFailure);
    assert!(error.to_string().contains("timed out"));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() -> Result<()> {
    common::init_test_logging();
    let mut config = CompletionConfig::new(CompletionProviderType::Cohere, "test-key");
    // Port 9 (discard) is closed on test hosts
    config.base_url = "http://127.0.0.1:9".to_owned();
    config.timeout = Duration::from_secs(5);
    let client = CohereClient::new(&config)?;

    let error = client.complete("prompt").await.unwrap_err();
    assert_eq!(error.kind(), CompletionErrorKind::NetworkFailure);

    Ok(())
}

// ============================================================================
// Gemini
// ============================================================================

#[tokio::test]
async fn test_gemini_sends_key_as_query_and_reads_candidates() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "재료: 김치"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "[{\"name\": \"김치볶음밥\"}]"}], "role": "model"},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(CompletionProviderType::Gemini, &server))?;
    assert_eq!(client.endpoint(), format!("{}{GEMINI_PATH}", server.uri()));
    assert!(!client.endpoint().contains("test-key"));

    let text = client.complete("재료: 김치").await?;
    assert_eq!(text, "[{\"name\": \"김치볶음밥\"}]");

    Ok(())
}

#[tokio::test]
async fn test_gemini_error_payload_is_backend_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(CompletionProviderType::Gemini, &server))?;
    let error = client.complete("prompt").await.unwrap_err();

    assert_eq!(error.kind(), CompletionErrorKind::BackendError);
    assert!(error.to_string().contains("API key not valid"));
    assert!(error.to_string().contains("HTTP 400"));

    Ok(())
}

#[tokio::test]
async fn test_gemini_without_candidates_is_empty_response() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(CompletionProviderType::Gemini, &server))?;
    let error = client.complete("prompt").await.unwrap_err();
    assert_eq!(error.kind(), CompletionErrorKind::EmptyResponse);
    assert_eq!(error.provider(), "gemini");

    Ok(())
}

// ============================================================================
// Provider selection
// ============================================================================

#[tokio::test]
async fn test_provider_dispatches_to_configured_backend() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(CompletionProviderType::Gemini, &server);
    config.model = "gemini-2.5-flash".to_owned();
    let provider = CompletionProvider::from_config(&config)?;

    assert_eq!(provider.name(), "gemini");
    assert_eq!(provider.model(), "gemini-2.5-flash");
    assert_eq!(provider.complete("prompt").await?, "ok");

    Ok(())
}
