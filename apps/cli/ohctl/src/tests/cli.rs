use crate::cli::Cli;

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_params_when_parsed_then_collected_in_order() {
    let cli = Cli::try_parse_from([
        "ohctl",
        "item",
        "command",
        "-p",
        "itemName=Kitchen_Light",
        "--param",
        "command=ON",
    ])
    .unwrap();

    assert_eq!(cli.resource, "item");
    assert_eq!(cli.operation, "command");
    assert_eq!(cli.params, vec!["itemName=Kitchen_Light", "command=ON"]);
    assert!(!cli.debug);
    assert!(!cli.continue_on_fail);
}

#[test]
fn given_global_flags_when_parsed_then_set() {
    let cli = Cli::try_parse_from([
        "ohctl",
        "--config",
        "/tmp/openhab.toml",
        "--debug",
        "--continue-on-fail",
        "rule",
        "run",
        "--input",
        "rows.json",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("/tmp/openhab.toml")));
    assert!(cli.debug);
    assert!(cli.continue_on_fail);
    assert_eq!(cli.input, Some(PathBuf::from("rows.json")));
}

/// **VALUE**: Verifies `--input` and `--param` cannot be combined.
///
/// **WHY THIS MATTERS**: Mixing both would silently drop one source of rows.
///
/// **BUG THIS CATCHES**: Losing the `conflicts_with` on the input argument.
#[test]
fn given_input_and_params_when_parsed_then_rejected() {
    let result = Cli::try_parse_from([
        "ohctl",
        "item",
        "get",
        "--input",
        "rows.json",
        "--param",
        "itemName=Kitchen_Light",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_missing_operation_when_parsed_then_rejected() {
    assert!(Cli::try_parse_from(["ohctl", "item"]).is_err());
}
