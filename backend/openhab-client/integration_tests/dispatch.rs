use crate::helpers::{TEST_TOKEN, dispatcher, local_credentials};

use openhab_client::dispatch::RequestDescriptor;
use openhab_client::error::DispatchError;

use models::{AuthMode, Credentials, ResponseBody, ResponsePayload};

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the real reqwest transport sends both token headers and the REST root.
///
/// **WHY THIS MATTERS**: Unit tests use a fake transport; this proves the headers built
/// by the dispatcher actually reach the wire.
///
/// **BUG THIS CATCHES**: Headers dropped when converting to a reqwest request.
#[tokio::test]
async fn given_local_credentials_when_get_then_both_token_headers_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/systeminfo"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("x-openhab-token", TEST_TOKEN))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "systemInfo": {"configFolder": "/etc/openhab", "osName": "Linux"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = dispatcher()
        .dispatch(&local_credentials(&server), &RequestDescriptor::get("/systeminfo"))
        .await
        .expect("dispatch should succeed");

    assert_eq!(
        payload,
        ResponsePayload::Body(ResponseBody::Json(json!({
            "systemInfo": {"configFolder": "/etc/openhab", "osName": "Linux"}
        })))
    );
}

#[tokio::test]
async fn given_get_with_body_when_sent_then_server_receives_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    dispatcher()
        .dispatch(
            &local_credentials(&server),
            &RequestDescriptor::get("/items").with_text_body("should not be sent"),
        )
        .await
        .expect("dispatch should succeed");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
    assert!(!received[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn given_post_text_body_when_sent_then_content_type_is_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/items/Kitchen_Light"))
        .and(header("content-type", "text/plain"))
        .and(body_string("ON"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payload = dispatcher()
        .dispatch(
            &local_credentials(&server),
            &RequestDescriptor::post("/items/Kitchen_Light")
                .with_text_body("ON")
                .plain_text()
                .full_response(),
        )
        .await
        .expect("dispatch should succeed");

    assert_eq!(payload.status_code(), Some(200));
}

#[tokio::test]
async fn given_query_when_sent_then_server_sees_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/items/Kitchen_Light"))
        .and(query_param("metadata", ".*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Kitchen_Light"})))
        .expect(1)
        .mount(&server)
        .await;

    dispatcher()
        .dispatch(
            &local_credentials(&server),
            &RequestDescriptor::get("/items/Kitchen_Light").with_query("metadata", ".*"),
        )
        .await
        .expect("dispatch should succeed");
}

#[tokio::test]
async fn given_full_response_when_2xx_then_envelope_has_status_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/items/Kitchen_Light/state"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ON")
                .insert_header("x-trace", "t-1"),
        )
        .mount(&server)
        .await;

    let payload = dispatcher()
        .dispatch(
            &local_credentials(&server),
            &RequestDescriptor::get("/items/Kitchen_Light/state")
                .plain_text()
                .full_response(),
        )
        .await
        .expect("dispatch should succeed");

    match payload {
        ResponsePayload::Full(envelope) => {
            assert_eq!(envelope.status_code, 200);
            assert_eq!(envelope.status_message, "OK");
            assert_eq!(envelope.headers.get("x-trace").map(String::as_str), Some("t-1"));
            assert_eq!(envelope.body, ResponseBody::Text("ON".to_string()));
        }
        other => panic!("Expected full envelope, got {other:?}"),
    }
}

/// **VALUE**: Verifies non-2xx responses surface the status and a truncated body.
///
/// **WHY THIS MATTERS**: This message is the only thing the workflow user sees when a
/// call fails; it must identify the failure without flooding the output.
///
/// **BUG THIS CATCHES**: Returning the raw body untruncated, or losing the status code.
#[tokio::test]
async fn given_500_with_long_body_when_sent_then_error_truncated() {
    let server = MockServer::start().await;
    let long_body = "x".repeat(1000);
    Mock::given(method("GET"))
        .and(path("/rest/rules"))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body.as_str()))
        .mount(&server)
        .await;

    let err = dispatcher()
        .dispatch(&local_credentials(&server), &RequestDescriptor::get("/rules"))
        .await
        .unwrap_err();

    let message = err.message();
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(
        message,
        format!(
            "GET request failed with status 500 Internal Server Error - {}...",
            "x".repeat(300)
        )
    );
}

#[tokio::test]
async fn given_local_401_when_sent_then_no_cloud_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/things"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = dispatcher()
        .dispatch(&local_credentials(&server), &RequestDescriptor::get("/things"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "GET request failed with status 401 Unauthorized");
}

#[tokio::test]
async fn given_unreachable_server_when_sent_then_transport_error() {
    let credentials = Credentials::builder()
        .with_auth_mode(AuthMode::Local)
        .with_base_url("http://127.0.0.1:1")
        .with_local_token(TEST_TOKEN)
        .build()
        .unwrap();

    let err = dispatcher()
        .dispatch(&credentials, &RequestDescriptor::get("/items").debug(true))
        .await
        .unwrap_err();

    assert!(
        matches!(err, DispatchError::Transport { .. }),
        "Expected transport error, got {err:?}"
    );
    assert!(!err.message().is_empty());
}
