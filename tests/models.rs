//! Model listing against a mock `/v1/models`.

mod common;

use oai_speech::{Error, ModelDescriptor, ModelsClient};

fn status_line(out: &[u8]) -> String {
    String::from_utf8(out.to_vec()).unwrap()
}

#[tokio::test]
async fn test_single_model_is_returned() {
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/v1/models")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"id":"m1","object":"model","created":1,"owned_by":"openai"}]}"#)
        .create_async()
        .await;

    let client = ModelsClient::new(common::config_for(&server)).unwrap();
    let mut out = Vec::<u8>::new();
    let models = client.list_models(&mut out).await.unwrap();

    assert_eq!(
        models,
        vec![ModelDescriptor {
            id: "m1".into(),
            kind: "model".into(),
            created: 1,
            owned_by: "openai".into(),
        }]
    );
    assert_eq!(status_line(&out), "Response Status Code: 200\n");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_order_is_preserved() {
    let mut server = common::server().await;
    let _mock = server
        .mock("GET", "/v1/models")
        .with_status(200)
        .with_body(
            r#"{"object":"list","data":[
                {"id":"whisper-1","object":"model","created":3,"owned_by":"openai-internal"},
                {"id":"tts-1","object":"model","created":1,"owned_by":"system"},
                {"id":"gpt-4o","object":"model","created":2,"owned_by":"system"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = ModelsClient::new(common::config_for(&server)).unwrap();
    let models = client.list_models(&mut Vec::<u8>::new()).await.unwrap();
    let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["whisper-1", "tts-1", "gpt-4o"]);
}

#[tokio::test]
async fn test_malformed_json_is_deserialization_error() {
    let mut server = common::server().await;
    let _mock = server
        .mock("GET", "/v1/models")
        .with_status(200)
        .with_body(r#"{"data":[{"id":"m1""#)
        .create_async()
        .await;

    let client = ModelsClient::new(common::config_for(&server)).unwrap();
    let mut out = Vec::<u8>::new();
    let err = client.list_models(&mut out).await.unwrap_err();

    assert!(matches!(err, Error::Deserialization(_)), "got {err:?}");
    assert_eq!(status_line(&out), "Response Status Code: 200\n");
}

#[tokio::test]
async fn test_unauthorized_body_is_still_parsed() {
    let mut server = common::server().await;
    let _mock = server
        .mock("GET", "/v1/models")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#)
        .create_async()
        .await;

    let client = ModelsClient::new(common::config_for(&server)).unwrap();
    let mut out = Vec::<u8>::new();
    let err = client.list_models(&mut out).await.unwrap_err();

    // Parsed, not short-circuited on status: the failure is the missing `data`.
    assert!(matches!(err, Error::Deserialization(_)), "got {err:?}");
    assert_eq!(status_line(&out), "Response Status Code: 401\n");
}

#[tokio::test]
async fn test_unauthorized_with_valid_shape_succeeds() {
    let mut server = common::server().await;
    let _mock = server
        .mock("GET", "/v1/models")
        .with_status(401)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = ModelsClient::new(common::config_for(&server)).unwrap();
    let mut out = Vec::<u8>::new();
    let models = client.list_models(&mut out).await.unwrap();

    assert!(models.is_empty());
    assert_eq!(status_line(&out), "Response Status Code: 401\n");
}

#[tokio::test]
async fn test_truncated_body_is_body_read_error() {
    let url = common::raw_server("HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"data\":[");

    let client = ModelsClient::new(common::config_for_url(url)).unwrap();
    let mut out = Vec::<u8>::new();
    let err = client.list_models(&mut out).await.unwrap_err();

    assert!(matches!(err, Error::BodyRead(_)), "got {err:?}");
    assert_eq!(status_line(&out), "Response Status Code: 200\n");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = oai_speech::ClientConfig::builder()
        .api_key(common::TEST_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let client = ModelsClient::new(config).unwrap();
    let mut out = Vec::<u8>::new();
    let err = client.list_models(&mut out).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_invalid_key_fails_before_sending() {
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/v1/models")
        .expect(0)
        .create_async()
        .await;

    let config = oai_speech::ClientConfig::builder()
        .api_key("bad\nkey")
        .base_url(server.url())
        .build()
        .unwrap();
    let client = ModelsClient::new(config).unwrap();
    let err = client.list_models(&mut Vec::<u8>::new()).await.unwrap_err();

    assert!(matches!(err, Error::RequestBuild(_)), "got {err:?}");
    mock.assert_async().await;
}
