//! Frontend - renders the backend status page in the terminal.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontend_lib::{load_page, BackendApi, BackendClient, ClientConfig, RenderFormat};

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Status page client for the backend API")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL
    #[arg(long, global = true, env = "API_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the status page and print it
    Status {
        /// Output format: text or html
        #[arg(long, default_value = "text")]
        format: RenderFormat,
    },
    /// Fetch a single user by ID
    User {
        /// User ID
        id: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = BackendClient::new(&config)?;
    tracing::debug!("Using backend at {}", client.base_url());

    match cli.command {
        Commands::Status { format } => {
            let state = load_page(Arc::new(client)).await;
            print!("{}", format.render(&state));
        }
        Commands::User { id } => {
            let user = client.fetch_user(id).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
