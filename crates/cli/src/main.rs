use clap::Parser;
use rootwalk_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Rootwalk - resolve a name by walking DNS referrals down from a root server")]
struct Cli {
    /// Domain name to resolve
    #[arg(default_value = "twitter.com")]
    domain: String,

    /// Record type to ask for (A, NS, CNAME, SOA, PTR, MX, TXT, AAAA, SRV, ANY)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// IPv4 address of the root nameserver to start from
    #[arg(long)]
    root: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Maximum queries for one resolution
    #[arg(long)]
    max_queries: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root.clone(),
        query_timeout_ms: cli.timeout_ms,
        max_queries: cli.max_queries,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    match services
        .resolve_domain
        .execute(&cli.domain, &cli.record_type)
        .await
    {
        Ok(resolution) => {
            println!("{}", resolution.address);
            Ok(())
        }
        Err(e) => {
            error!(domain = %cli.domain, error = %e, "Resolution failed");
            Err(e.into())
        }
    }
}
