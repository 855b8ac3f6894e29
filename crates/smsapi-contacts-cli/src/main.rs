/*
[INPUT]:  CLI arguments, environment, optional YAML configuration file
[OUTPUT]: Command result as pretty-printed JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use smsapi_contacts::SmsapiClient;
use smsapi_contacts_cli::{Cli, CliConfig, Command, commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    config.apply(args.overrides());
    debug!(server = ?config.server, "configuration loaded");

    let client = SmsapiClient::with_config(config.client_config()?).context("create client")?;
    let credentials = config.credentials()?;
    let login = commands::login(&client, &credentials).await?;
    info!("authenticated");

    let output = match &args.command {
        Command::Login => login,
        command => commands::run(&client, command).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
