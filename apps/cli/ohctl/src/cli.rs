use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ohctl")]
#[command(about = "Run openHAB REST operations over batches of input rows")]
#[command(version)]
pub struct Cli {
    /// Credentials file (defaults to <config dir>/ohctl/openhab.toml)
    #[arg(short, long, env = "OHCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every request and response (secrets redacted)
    #[arg(short, long)]
    pub debug: bool,

    /// Record failing rows as {"error": ...} instead of aborting
    #[arg(long)]
    pub continue_on_fail: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Resource: item, thing, rule or system
    pub resource: String,

    /// Operation on the resource (e.g. list, get, command)
    pub operation: String,

    /// JSON file with one object or an array of objects; "-" reads stdin
    #[arg(short, long, conflicts_with = "params")]
    pub input: Option<PathBuf>,

    /// Single-row parameters as key=value pairs (e.g. itemName=Kitchen_Light)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}
