use std::sync::Arc;

use actix_web::{test, web};
use chat_relay::routes;
use chat_relay::service::{OpenRouterClient, RelayService};
use chat_relay::utils::config::UpstreamConfig;
use secrecy::SecretString;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn relay_for(server: &MockServer) -> RelayService {
    let config =
        UpstreamConfig { base_url: format!("{}/api/v1", server.uri()), ..UpstreamConfig::default() };
    let client = OpenRouterClient::new(&config).unwrap();
    RelayService::new(
        Arc::new(client),
        config.model.clone(),
        Some(SecretString::from("sk-or-test".to_string())),
    )
}

#[actix_web::test]
async fn test_transcript_round_trip_through_upstream() {
    let completion = json!({
        "choices": [{
            "message": {
                "content": "{\"transactions\":[{\"name\":\"Ravi\",\"amount\":50}]}"
            }
        }]
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let app = test::init_service(routes::app(web::Data::new(relay_for(&server)))).await;

    let req = test::TestRequest::post()
        .uri("/api/process-chat")
        .set_json(json!({ "chatText": "Ravi paid 50" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, completion);

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["messages"][1], json!({ "role": "user", "content": "Ravi paid 50" }));
}

#[actix_web::test]
async fn test_upstream_error_body_is_not_leaked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("provider stack trace"))
        .expect(1)
        .mount(&server)
        .await;

    let app = test::init_service(routes::app(web::Data::new(relay_for(&server)))).await;

    let req = test::TestRequest::post()
        .uri("/api/process-chat")
        .set_json(json!({ "chatText": "paid 100" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "OpenRouter API error: Bad Gateway" }));
}

#[actix_web::test]
async fn test_validation_failure_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let app = test::init_service(routes::app(web::Data::new(relay_for(&server)))).await;

    let req = test::TestRequest::post().uri("/api/process-chat").set_json(json!({})).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    assert!(server.received_requests().await.unwrap().is_empty());
}
