use clap::{Args, Parser, Subcommand};
use dns_lookup_api::AppState;
use dns_lookup_domain::presets::DEFAULT_NAMESERVER;
use dns_lookup_domain::{CliOverrides, Transport};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod client;
mod di;
mod server;

/// Extra time the HTTP client waits beyond the server's own lookup budget.
const CLIENT_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "dns-lookup")]
#[command(version)]
#[command(about = "DNS lookup web service and command-line client")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory holding the web page assets
    #[arg(long, value_name = "DIR")]
    static_dir: Option<String>,

    /// Serve the API only
    #[arg(long, conflicts_with = "static_dir")]
    no_assets: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web service (default)
    Serve,
    /// Ask a running server for a lookup and print the records
    Query(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Domain to look up
    domain: String,

    /// Resolver IP or hostname, or "authoritative" to walk from the roots
    #[arg(short = 'n', long, default_value = DEFAULT_NAMESERVER)]
    nameserver: String,

    /// Record type; repeat for several. Defaults to the popular set.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    record_types: Vec<String>,

    /// Request DNSSEC records
    #[arg(long)]
    dnssec: bool,

    /// Transport (tcp, doh)
    #[arg(long, default_value = "tcp")]
    transport: Transport,

    /// Base URL of the lookup service
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Also print the per-type answers as JSON
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let is_query = matches!(cli.command, Some(Command::Query(_)));
    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        static_dir: cli.static_dir.clone(),
        no_assets: cli.no_assets,
        // Keep client output clean unless asked otherwise.
        log_level: cli
            .log_level
            .clone()
            .or_else(|| is_query.then(|| "warn".to_string())),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    match cli.command {
        Some(Command::Query(args)) => {
            client::run_query(client::QueryOptions {
                domain: args.domain,
                nameserver: args.nameserver,
                record_types: args.record_types,
                dnssec: args.dnssec,
                transport: args.transport,
                server: args.server,
                raw: args.raw,
                timeout: config.lookup.timeout() + CLIENT_TIMEOUT_SLACK,
            })
            .await
        }
        Some(Command::Serve) | None => serve(config).await,
    }
}

async fn serve(config: dns_lookup_domain::Config) -> anyhow::Result<()> {
    info!("Starting DNS Lookup v{}", env!("CARGO_PKG_VERSION"));

    let services = di::LookupServices::new(&config);
    let state = AppState {
        perform_lookup: services.perform_lookup,
        doh_endpoints: services.doh_endpoints,
    };

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
    let static_dir = config.assets.static_dir.map(PathBuf::from);

    server::start_web_server(bind_addr, state, static_dir).await
}
