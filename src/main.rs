use anyhow::Result;
use clap::Parser;
use shortly::config::{self, Config, LaunchOptions};
use shortly::server;
use tracing_subscriber::EnvFilter;

/// Run the Shortly URL shortener.
///
/// Every option can be overridden by its environment variable.
#[derive(Parser)]
#[command(name = "shortly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host to bind (overridden by APP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overridden by APP_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging (overridden by APP_DEBUG)
    #[arg(short, long)]
    debug: bool,
}

impl From<Cli> for LaunchOptions {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            debug: cli.debug,
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let launch: LaunchOptions = Cli::parse().into();
    let config = config::load_from_env(&launch)?;

    init_tracing(&config);
    if config.debug {
        tracing::debug!("Debug logging enabled");
    }
    config.print_summary();

    server::run(config).await
}
