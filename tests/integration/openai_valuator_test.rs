// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use appraisal::config::settings::ValuatorSettings;
use appraisal::domain::models::valuation::UpstreamPayload;
use appraisal::domain::services::valuator::{Valuator, ValuatorError};
use appraisal::infrastructure::valuators::openai_valuator::OpenAiValuator;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(base_url: &str, api_key: Option<&str>) -> ValuatorSettings {
    ValuatorSettings {
        api_key: api_key.map(str::to_string),
        model: "gpt-4.1-mini".to_string(),
        api_base_url: base_url.to_string(),
        language: "Polish".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_valuate_returns_output_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": "gpt-4.1-mini" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": [{
                "type": "message",
                "content": [{
                    "type": "output_text",
                    "text": "```json\n{\"description\":\"Zegar\",\"min_value\":100,\"max_value\":500}\n```"
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let valuator = OpenAiValuator::new(&settings(&server.uri(), Some("test-key"))).unwrap();
    let payload = valuator
        .valuate("https://example.com/clock.jpg")
        .await
        .unwrap();

    assert_eq!(
        payload,
        Some(UpstreamPayload::Text(
            r#"{"description":"Zegar","min_value":100,"max_value":500}"#.to_string()
        ))
    );
}

#[tokio::test]
async fn test_valuate_without_output_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": [] })))
        .mount(&server)
        .await;

    let valuator = OpenAiValuator::new(&settings(&server.uri(), Some("test-key"))).unwrap();
    let payload = valuator
        .valuate("https://example.com/clock.jpg")
        .await
        .unwrap();

    assert_eq!(payload, None);
}

#[tokio::test]
async fn test_valuate_surfaces_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let valuator = OpenAiValuator::new(&settings(&server.uri(), Some("test-key"))).unwrap();
    let err = valuator
        .valuate("https://example.com/clock.jpg")
        .await
        .unwrap_err();

    match err {
        ValuatorError::Status { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_valuate_without_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let valuator = OpenAiValuator::new(&settings(&server.uri(), None)).unwrap();
    let err = valuator
        .valuate("https://example.com/clock.jpg")
        .await
        .unwrap_err();

    assert!(matches!(err, ValuatorError::NotConfigured(_)));
}
