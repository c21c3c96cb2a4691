use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use countries_catalog::config::{Config, ConfigStore};
use countries_catalog::web::{init_tracing, CatalogServer};

/// Server-rendered catalog of the world's countries.
#[derive(Debug, Parser)]
#[command(name = "countries-catalog", version, about)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Bind address, overrides `server.bind_addr`.
    #[arg(long)]
    bind: Option<String>,

    /// Country API base URL, overrides `source.base_url`.
    #[arg(long)]
    source_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = load_config(&cli, &path)?;
    tracing::info!(
        config = %path.display(),
        source = %config.source.base_url,
        "Configuration loaded"
    );

    let store = ConfigStore::new(config, path);
    let mut server = CatalogServer::new(store).context("Failed to create catalog server")?;
    let addr = server.try_bind().await.context("Failed to bind")?;
    println!("Countries catalog listening on http://{}", addr);

    server.run().await.context("Server error")?;
    Ok(())
}

/// File values first, then CLI overrides, validated together.
fn load_config(cli: &Cli, path: &std::path::Path) -> anyhow::Result<Config> {
    let mut config = Config::load_from(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(bind) = &cli.bind {
        config.server.bind_addr = bind.clone();
    }
    if let Some(url) = &cli.source_url {
        config.source.base_url = url.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
