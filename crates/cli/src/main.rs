use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use zkns_api::AppState;
use zkns_domain::CliOverrides;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "zkns")]
#[command(version)]
#[command(about = "PowerDNS remote backend serving ZooKeeper serversets")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// IP address to listen for HTTP connections
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// ZooKeeper ensemble (comma-delimited, optionally followed by /chroot path)
    #[arg(long)]
    zk: Option<String>,

    /// Serve records for this DNS domain
    #[arg(short = 'd', long)]
    domain: Option<String>,

    /// TTL for A records
    #[arg(long)]
    ttl: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.listen.clone(),
        zookeeper_ensemble: cli.zk.clone(),
        domain: cli.domain.clone(),
        ttl: cli.ttl,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting zkns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        zone = %config.zone.domain,
        ttl = config.zone.ttl,
        ensemble = %config.zookeeper.ensemble,
        "Configuration loaded"
    );

    let store = di::connect_store(&config.zookeeper).await?;
    let use_cases = di::UseCases::new(&config, store);

    let app_state = AppState {
        lookup: use_cases.lookup,
        get_domain_metadata: use_cases.get_domain_metadata,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
