use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quarry", about = "Quarry — HTTP query surface for a search engine")]
struct Cli {
    /// Extra config file, layered over ~/.config/quarry/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides `server.bind`).
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Directory served for unmatched paths (overrides `assets.root`).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the route table and exit.
    #[arg(long)]
    print_routes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = quarry_core::config::Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(assets) = cli.assets {
        config.assets.root = assets;
    }

    if cli.print_routes {
        println!(
            "{}",
            quarry::api::routes::format_route_table(config.diagnostics.enabled)
        );
        return Ok(());
    }

    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    quarry::server::run(config).await
}
