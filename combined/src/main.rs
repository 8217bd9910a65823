//! Combined binary for development - runs backend and status page in one process.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend_lib::config::BackendConfig;
use backend_lib::state::AppState;
use common::AppError;
use frontend_lib::{load_page, BackendClient, ClientConfig, RenderFormat};

#[derive(Parser)]
#[command(name = "my-app")]
#[command(about = "Backend and status page in a single process for development")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the backend and print the status page once it is up
    Serve {
        #[arg(long, env = "BACKEND_HOST")]
        host: Option<String>,
        #[arg(long, env = "BACKEND_PORT")]
        port: Option<u16>,
        /// Status page output format: text or html
        #[arg(long, default_value = "text")]
        format: RenderFormat,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port, format } => {
            let config = BackendConfig::from_env().with_addr(host, port);
            let addr = config.bind_addr();
            let listener = TcpListener::bind(&addr)
                .await
                .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
            let local = listener.local_addr()?;

            info!("Starting backend and status page in development mode");
            let backend_handle = tokio::spawn(backend_lib::serve(
                listener,
                AppState::seeded(config),
                backend_lib::shutdown_signal(),
            ));

            let client_config = ClientConfig::from_env().with_base_url(format!("http://{}", local));
            let client = BackendClient::new(&client_config)?;
            let state = load_page(Arc::new(client)).await;
            print!("{}", format.render(&state));

            match backend_handle.await {
                Ok(Ok(())) => info!("Backend exited"),
                Ok(Err(e)) => error!("Backend failed: {}", e),
                Err(e) => error!("Backend task panicked: {}", e),
            }
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
