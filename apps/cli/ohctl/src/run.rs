use crate::cli::Cli;
use crate::error::OhctlError;
use crate::input::read_rows;

use openhab_client::config::{CONFIG_FILE_NAME, ClientConfig};
use openhab_client::dispatch::Dispatcher;
use openhab_client::executor::{ExecutorOptions, RowExecutor};
use openhab_client::operations::HubOperation;
use openhab_client::transport::ReqwestTransport;

use models::OutputRow;

use std::path::PathBuf;

use log::info;
use serde_json::Value;

const CONFIG_DIR_NAME: &str = "ohctl";

/// `<config dir>/ohctl/openhab.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the config file then overlay `.env` and `OPENHAB_*` variables.
pub fn load_config(cli: &Cli) -> Result<ClientConfig, OhctlError> {
    let path = cli
        .config
        .clone()
        .or_else(default_config_path)
        .ok_or_else(|| OhctlError::ohctl("No config path given and no config directory found"))?;

    let mut config = ClientConfig::load(&path)?;
    config.apply_env()?;
    Ok(config)
}

/// Debug diagnostics are on when either `--debug` or the config file asks for them.
pub fn debug_enabled(cli: &Cli, config: &ClientConfig) -> bool {
    cli.debug || config.debug
}

/// Run the operation named on the command line over its input rows.
pub async fn execute(cli: &Cli, config: &ClientConfig) -> Result<Vec<OutputRow>, OhctlError> {
    let operation = HubOperation::from_names(&cli.resource, &cli.operation)?;
    let rows = read_rows(cli.input.as_deref(), &cli.params)?;

    info!(
        "Running {operation} over {} row(s) in {} mode",
        rows.len(),
        config.credentials.auth_mode
    );

    let dispatcher = Dispatcher::new(ReqwestTransport::with_timeout(config.timeout())?);
    let options = ExecutorOptions {
        continue_on_fail: cli.continue_on_fail,
        debug: debug_enabled(cli, config),
    };

    let output = RowExecutor::new(&dispatcher, &config.credentials, options)
        .execute(operation, &rows)
        .await?;

    Ok(output)
}

pub fn render(rows: Vec<OutputRow>) -> Result<String, OhctlError> {
    let rows: Vec<Value> = rows.into_iter().map(OutputRow::into_value).collect();

    serde_json::to_string_pretty(&rows)
        .map_err(|e| OhctlError::ohctl(format!("Failed to render output: {e}")))
}
