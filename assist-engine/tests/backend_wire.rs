//! Wire-level backend tests against mock HTTP servers.
//!
//! These verify the request envelopes each backend emits and the reply
//! extraction, including the failure shapes the pipeline relies on for
//! fallback: transport errors, timeouts and malformed envelopes.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use assist_engine::{
    build_http_client, AssistMode, BackendError, ChatMessage, GenerativeBackend, HostedBackend,
    HostedConfig, LocalBackend, LocalConfig,
};

fn messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("instruction"),
        ChatMessage::user("CanvasState:\n{}"),
    ]
}

#[tokio::test]
async fn hosted_backend_sends_profile_and_extracts_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.1,
            "max_tokens": 5000,
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": "instruction"},
                {"role": "user", "content": "CanvasState:\n{}"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "{\"objects\":[]}"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = HostedConfig {
        base_url: server.uri(),
        api_key: Some("sk-test".to_string()),
    };
    let client = build_http_client(Duration::from_secs(5)).expect("client");
    let backend = HostedBackend::new(&config, client).expect("backend");

    let reply = backend
        .generate(AssistMode::Synthesize, &messages())
        .await
        .expect("reply");
    assert_eq!(reply, "{\"objects\":[]}");
}

#[tokio::test]
async fn hosted_backend_maps_error_status_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = HostedConfig {
        base_url: server.uri(),
        api_key: Some("sk-test".to_string()),
    };
    let client = build_http_client(Duration::from_secs(5)).expect("client");
    let backend = HostedBackend::new(&config, client).expect("backend");

    let result = backend.generate(AssistMode::Beautify, &messages()).await;
    assert!(matches!(result, Err(BackendError::Http(_))));
}

#[tokio::test]
async fn hosted_backend_rejects_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let config = HostedConfig {
        base_url: server.uri(),
        api_key: Some("sk-test".to_string()),
    };
    let client = build_http_client(Duration::from_secs(5)).expect("client");
    let backend = HostedBackend::new(&config, client).expect("backend");

    let result = backend.generate(AssistMode::Recognize, &messages()).await;
    assert!(matches!(result, Err(BackendError::UnexpectedResponse(_))));
}

#[tokio::test]
async fn hosted_backend_times_out_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = HostedConfig {
        base_url: server.uri(),
        api_key: Some("sk-test".to_string()),
    };
    let client = build_http_client(Duration::from_millis(200)).expect("client");
    let backend = HostedBackend::new(&config, client).expect("backend");

    let result = backend.generate(AssistMode::Style, &messages()).await;
    assert!(matches!(result, Err(BackendError::Http(_))));
}

#[tokio::test]
async fn local_backend_sends_model_and_extracts_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "llama3:8b",
            "stream": false,
            "messages": [
                {"role": "system", "content": "instruction"},
                {"role": "user", "content": "CanvasState:\n{}"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"role": "assistant", "content": "{\"label\":\"tree\",\"confidence\":0.88}"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = LocalConfig {
        base_url: server.uri(),
        model: "llama3:8b".to_string(),
    };
    let client = build_http_client(Duration::from_secs(5)).expect("client");
    let backend = LocalBackend::new(&config, client).expect("backend");

    let reply = backend
        .generate(AssistMode::Recognize, &messages())
        .await
        .expect("reply");
    assert!(reply.contains("tree"));
}

#[tokio::test]
async fn local_backend_rejects_malformed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let config = LocalConfig {
        base_url: server.uri(),
        model: "llama3:8b".to_string(),
    };
    let client = build_http_client(Duration::from_secs(5)).expect("client");
    let backend = LocalBackend::new(&config, client).expect("backend");

    let result = backend.generate(AssistMode::Complete, &messages()).await;
    assert!(matches!(result, Err(BackendError::Http(_))));
}
