use crate::cli::Cli;
use crate::error::OhctlError;
use crate::logger::level_for;
use crate::run::{debug_enabled, execute, load_config, render};

use openhab_client::config::ClientConfig;

use models::{AuthMode, Credentials, OutputRow};

use std::fs;

use clap::Parser;
use log::LevelFilter;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "oh.ohctl.test";

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        credentials: Credentials::builder()
            .with_auth_mode(AuthMode::Local)
            .with_base_url(server.uri())
            .with_local_token(TOKEN)
            .build()
            .unwrap(),
        ..ClientConfig::default()
    }
}

/// **VALUE**: Verifies the command line flows through to a real REST call.
///
/// **WHY THIS MATTERS**: This is the path every `ohctl` invocation takes: parse
/// arguments, build rows, dispatch, shape.
///
/// **BUG THIS CATCHES**: Params not reaching the row, or the wrong operation chosen.
#[tokio::test]
async fn given_item_command_params_when_executed_then_command_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/items/Kitchen_Light"))
        .and(header("x-openhab-token", TOKEN))
        .and(body_string("ON"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from([
        "ohctl",
        "item",
        "command",
        "-p",
        "itemName=Kitchen_Light",
        "-p",
        "command=ON",
    ])
    .unwrap();

    let rows = execute(&cli, &config_for(&server)).await.unwrap();

    assert_eq!(
        rows[0].clone().into_value(),
        json!({"item": "Kitchen_Light", "command": "ON", "statusCode": 200})
    );
}

#[tokio::test]
async fn given_failing_row_without_continue_when_executed_then_operation_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/things/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["ohctl", "thing", "get", "-p", "thingUid=missing"]).unwrap();

    let err = execute(&cli, &config_for(&server)).await.unwrap_err();

    assert!(matches!(err, OhctlError::Operation { .. }));
    assert_eq!(err.message(), "GET request failed with status 404 Not Found");
}

#[tokio::test]
async fn given_unknown_operation_when_executed_then_no_request_made() {
    let server = MockServer::start().await;
    let cli = Cli::try_parse_from(["ohctl", "item", "delete"]).unwrap();

    let err = execute(&cli, &config_for(&server)).await.unwrap_err();

    assert_eq!(err.message(), "Unknown operation 'item.delete'");
    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[test]
fn given_invalid_config_file_when_loaded_then_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("openhab.toml");
    fs::write(&config_path, "timeoutSecs = 0\n").unwrap();

    let cli = Cli::try_parse_from([
        "ohctl",
        "--config",
        config_path.to_str().unwrap(),
        "system",
        "info",
    ])
    .unwrap();

    let err = load_config(&cli).unwrap_err();

    assert!(matches!(err, OhctlError::Config { .. }));
}

#[test]
fn given_rows_when_rendered_then_json_array() {
    let rows = vec![
        OutputRow::new().with("rule", "morning").with("statusCode", 200),
        OutputRow::error("boom"),
    ];

    let rendered = render(rows).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(
        parsed,
        json!([{"rule": "morning", "statusCode": 200}, {"error": "boom"}])
    );
}

/// **VALUE**: Verifies `debug = true` in the config file turns on debug logging without
/// the `--debug` flag.
///
/// **WHY THIS MATTERS**: The dispatcher only emits its request/response diagnostics at
/// debug level; if the logger stays at warn, the config toggle silently does nothing.
///
/// **BUG THIS CATCHES**: Choosing the log level from the command-line flag alone.
#[test]
fn given_debug_in_config_file_when_loaded_then_logger_level_is_debug() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("openhab.toml");
    fs::write(&config_path, "debug = true\n").unwrap();

    let cli = Cli::try_parse_from([
        "ohctl",
        "--config",
        config_path.to_str().unwrap(),
        "system",
        "info",
    ])
    .unwrap();

    let config = load_config(&cli).unwrap();

    assert!(!cli.debug);
    assert!(debug_enabled(&cli, &config));
    assert_eq!(level_for(debug_enabled(&cli, &config)), LevelFilter::Debug);
}

#[test]
fn given_neither_flag_nor_config_debug_when_checked_then_disabled() {
    let cli = Cli::try_parse_from(["ohctl", "system", "info"]).unwrap();
    let config = ClientConfig::default();

    assert!(!debug_enabled(&cli, &config));

    let cli = Cli::try_parse_from(["ohctl", "--debug", "system", "info"]).unwrap();
    assert!(debug_enabled(&cli, &config));
}
