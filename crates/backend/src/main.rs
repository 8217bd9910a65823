//! Backend - HTTP REST API serving health and user data.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend_lib::config::BackendConfig;

#[derive(Parser)]
#[command(name = "backend")]
#[command(about = "REST backend exposing health and user endpoints")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "BACKEND_HOST")]
        host: Option<String>,
        #[arg(long, env = "BACKEND_PORT")]
        port: Option<u16>,
        /// Origin allowed by CORS
        #[arg(long, env = "FRONTEND_ORIGIN")]
        frontend_origin: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = BackendConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Serve {
            host,
            port,
            frontend_origin,
        } => {
            config = config.with_addr(host, port);
            if let Some(origin) = frontend_origin {
                config = config.with_frontend_origin(origin);
            }
            backend_lib::run_server(config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tower_http=debug".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
