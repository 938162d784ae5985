use anyhow::anyhow;
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use param_config::cli::{Cli, check_unresolved, render};
use param_config::configs::{Configs, SsmStoreConfig};
use param_config::domain::ConfigMap;
use param_config::store::{ParameterStore, SsmParameterStore};

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .with_thread_ids(true)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    setup_logging();

    let cli = Cli::parse();

    let config = SsmStoreConfig::load().await.map_err(|e| anyhow!(e))?;
    debug!("CONFIGS: {:?}", &config);

    let store = SsmParameterStore::new(config).await?;
    let outcome = store.fetch(&cli.names, !cli.no_decrypt).await?;

    check_unresolved(&outcome.invalid_parameters, cli.strict)?;

    let config_map = ConfigMap::from_parameters(outcome.parameters);
    println!("{}", render(&config_map, cli.format)?);

    Ok(())
}
