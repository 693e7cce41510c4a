//! End-to-end operation scenarios through the executor and a mock server.

use crate::helpers::{TEST_TOKEN, dispatcher, local_credentials, row};

use openhab_client::executor::{ExecutorOptions, RowExecutor};
use openhab_client::operations::HubOperation;

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_item_command_when_executed_then_reports_item_command_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/items/Kitchen_Light"))
        .and(header("x-openhab-token", TEST_TOKEN))
        .and(header("accept", "text/plain"))
        .and(body_string("ON"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let executor = RowExecutor::new(&dispatcher, &credentials, ExecutorOptions::default());

    let output = executor
        .execute(
            HubOperation::ItemCommand,
            &[row(json!({"itemName": "Kitchen_Light", "command": "ON"}))],
        )
        .await
        .expect("command should succeed");

    assert_eq!(output.len(), 1);
    assert_eq!(
        output[0].clone().into_value(),
        json!({"item": "Kitchen_Light", "command": "ON", "statusCode": 200})
    );
}

#[tokio::test]
async fn given_rule_toggle_disable_when_executed_then_reports_rule_enabled_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/rules/lighting_evening/enable"))
        .and(body_string("false"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let executor = RowExecutor::new(&dispatcher, &credentials, ExecutorOptions::default());

    let output = executor
        .execute(
            HubOperation::RuleToggle,
            &[row(json!({"ruleUid": "lighting_evening", "enable": false}))],
        )
        .await
        .expect("toggle should succeed");

    assert_eq!(
        output[0].clone().into_value(),
        json!({"rule": "lighting_evening", "enabled": false, "statusCode": 200})
    );
}

/// **VALUE**: Verifies an empty tag filter sends no `tags` key at all.
///
/// **WHY THIS MATTERS**: openHAB treats `?tags=` as "items with an empty tag", which
/// returns nothing instead of the full item list.
///
/// **BUG THIS CATCHES**: Always appending the `tags` parameter.
#[tokio::test]
async fn given_item_list_with_empty_tags_when_executed_then_no_tags_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/items"))
        .and(query_param_is_missing("tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Kitchen_Light", "type": "Switch"},
            {"name": "Hall_Dimmer", "type": "Dimmer"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let executor = RowExecutor::new(&dispatcher, &credentials, ExecutorOptions::default());

    let output = executor
        .execute(HubOperation::ItemList, &[row(json!({"tags": ""}))])
        .await
        .expect("list should succeed");

    assert_eq!(output.len(), 2);
    assert_eq!(output[1].get("name"), Some(&json!("Hall_Dimmer")));
}

#[tokio::test]
async fn given_item_list_with_tags_when_executed_then_tags_query_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/items"))
        .and(query_param("tags", "Lighting,Kitchen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let executor = RowExecutor::new(&dispatcher, &credentials, ExecutorOptions::default());

    let output = executor
        .execute(HubOperation::ItemList, &[row(json!({"tags": "Lighting, Kitchen"}))])
        .await
        .expect("list should succeed");

    assert!(output.is_empty());
}

#[tokio::test]
async fn given_item_state_when_executed_then_wraps_plain_text_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/items/Living_Temp/state"))
        .respond_with(ResponseTemplate::new(200).set_body_string("21.5 °C"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let executor = RowExecutor::new(&dispatcher, &credentials, ExecutorOptions::default());

    let output = executor
        .execute(HubOperation::ItemState, &[row(json!({"itemName": "Living_Temp"}))])
        .await
        .expect("state should succeed");

    assert_eq!(
        output[0].clone().into_value(),
        json!({"item": "Living_Temp", "state": "21.5 °C"})
    );
}

#[tokio::test]
async fn given_thing_uid_with_colons_when_executed_then_path_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/things/hue%3Abridge%3A001788/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ONLINE", "statusDetail": "NONE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let executor = RowExecutor::new(&dispatcher, &credentials, ExecutorOptions::default());

    let output = executor
        .execute(
            HubOperation::ThingStatus,
            &[row(json!({"thingUid": "hue:bridge:001788"}))],
        )
        .await
        .expect("status should succeed");

    assert_eq!(output[0].get("status"), Some(&json!("ONLINE")));

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received[0].url.path(), "/rest/things/hue%3Abridge%3A001788/status");
}

#[tokio::test]
async fn given_mixed_batch_with_continue_when_executed_then_errors_become_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/rules/morning/runnow"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/rules/ghost/runnow"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Rule not found"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher();
    let credentials = local_credentials(&server);
    let options = ExecutorOptions {
        continue_on_fail: true,
        debug: true,
    };
    let executor = RowExecutor::new(&dispatcher, &credentials, options);

    let output = executor
        .execute(
            HubOperation::RuleRun,
            &[
                row(json!({"ruleUid": "ghost"})),
                row(json!({"ruleUid": "morning"})),
            ],
        )
        .await
        .expect("continue-on-fail never aborts");

    assert_eq!(
        output[0].clone().into_value(),
        json!({"error": "POST request failed with status 404 Not Found - Rule not found"})
    );
    assert_eq!(
        output[1].clone().into_value(),
        json!({"rule": "morning", "statusCode": 200})
    );
}
