use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use drona::config::LlmConfig;
use drona::error::DronaError;
use drona::llm::{LlmBackend, LlmProvider};

fn llm_config(model: &str) -> LlmConfig {
    LlmConfig {
        model: model.to_string(),
        api_key: Some("test-key".to_string()),
        base_url: None,
        timeout_secs: 30,
        max_retries: 0,
        temperature: 0.2,
        max_tokens: 1000,
        top_p: 0.9,
    }
}

fn llm_config_with_base_url(model: &str, base_url: String, max_retries: u32) -> LlmConfig {
    LlmConfig {
        base_url: Some(base_url),
        max_retries,
        timeout_secs: 5,
        ..llm_config(model)
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "gpt-4o",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2 }
    })
}

fn api_error_body(message: &str, error_type: &str, code: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": serde_json::Value::Null,
            "code": code
        }
    })
}

#[test]
fn test_openai_provider_detection() {
    let config = llm_config("openai/gpt-4o");
    let provider = LlmProvider::new(Some(&config));
    assert!(matches!(provider.backend(), LlmBackend::OpenAI));
}

#[test]
fn test_openrouter_provider_detection() {
    let config = llm_config("openrouter/openai/gpt-4o");
    let provider = LlmProvider::new(Some(&config));
    assert!(matches!(provider.backend(), LlmBackend::OpenRouter));
}

#[test]
fn test_custom_base_url_provider_detection() {
    let mut config = llm_config("my-fine-tune");
    config.base_url = Some("http://inference.internal/v1".to_string());
    let provider = LlmProvider::new(Some(&config));
    assert!(matches!(
        provider.backend(),
        LlmBackend::OpenAICompatible { .. }
    ));
}

#[test]
fn test_unavailable_provider() {
    let provider = LlmProvider::new(None);
    assert!(matches!(provider.backend(), LlmBackend::Unavailable { .. }));
    assert!(!provider.is_available());
}

#[tokio::test]
async fn test_unavailable_provider_fails_completion() {
    let provider = LlmProvider::new(None);
    let result = provider.complete("question", Some("system"), None).await;
    assert!(matches!(result, Err(DronaError::LlmUnavailable(_))));
}

#[tokio::test]
async fn test_complete_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("The answer is 42.")))
        .expect(1)
        .mount(&server)
        .await;

    let config = llm_config_with_base_url("openai/gpt-4o", server.uri(), 0);
    let provider = LlmProvider::new(Some(&config));
    let result = provider
        .complete("What is 6 * 7?", Some("You are a tutor."), None)
        .await
        .unwrap();

    assert_eq!(result, "The answer is 42.");
}

#[tokio::test]
async fn test_empty_content_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   ")))
        .mount(&server)
        .await;

    let config = llm_config_with_base_url("openai/gpt-4o", server.uri(), 0);
    let provider = LlmProvider::new(Some(&config));
    let result = provider.complete("question", None, None).await;

    assert!(matches!(result, Err(DronaError::Llm(_))));
}

#[tokio::test]
async fn test_blank_prompt_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = llm_config_with_base_url("openai/gpt-4o", server.uri(), 0);
    let provider = LlmProvider::new(Some(&config));
    let result = provider.complete("   ", None, None).await;

    assert!(matches!(result, Err(DronaError::Validation(_))));
}

#[tokio::test]
async fn test_rate_limit_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(api_error_body(
            "Rate limit reached",
            "rate_limit_error",
            "rate_limit_exceeded",
        )))
        .mount(&server)
        .await;

    let config = llm_config_with_base_url("openai/gpt-4o", server.uri(), 0);
    let provider = LlmProvider::new(Some(&config));
    let result = provider.complete("question", None, None).await;

    assert!(matches!(result, Err(DronaError::LlmRateLimit { .. })));
}

#[tokio::test]
async fn test_auth_failure_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(api_error_body(
            "Incorrect API key provided",
            "authentication_error",
            "invalid_api_key",
        )))
        .mount(&server)
        .await;

    let config = llm_config_with_base_url("openai/gpt-4o", server.uri(), 3);
    let provider = LlmProvider::new(Some(&config));
    let result = provider.complete("question", None, None).await;

    // Auth errors must not be retried.
    match result {
        Err(DronaError::Llm(message)) => assert!(message.contains("authentication")),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_without_retries_surfaces_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error_body(
            "The model does not exist",
            "invalid_request_error",
            "model_not_found",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let config = llm_config_with_base_url("openai/gpt-4o", server.uri(), 0);
    let provider = LlmProvider::new(Some(&config));
    let result = provider.complete("question", None, None).await;

    assert!(matches!(result, Err(DronaError::Llm(_))));
}
