use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};

use address_validator::config::Config;
use address_validator::infra::GoogleGeocodingProvider;
use address_validator::observability::{self, metrics};
use address_validator::server::{self, AppState};
use address_validator::AddressValidationService;

#[derive(Parser)]
#[command(name = "address_validator")]
#[command(about = "Validate and standardize US postal addresses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP validation service
    Serve {
        /// Port to listen on (overrides PORT and config.toml)
        #[arg(long)]
        port: Option<u16>,
        /// Directory for rolling JSON log files
        #[arg(long, default_value = "logs")]
        log_dir: String,
    },
    /// Validate a single address and print the result as JSON
    Validate {
        /// Free-form address, e.g. "1600 Amphitheatre Pkwy, Mountain View, CA"
        address: String,
    },
}

fn build_service(config: &Config) -> anyhow::Result<Arc<AddressValidationService>> {
    config.validate()?;
    let provider = GoogleGeocodingProvider::from_config(&config.geocoding)
        .context("Failed to build geocoding provider")?;
    Ok(Arc::new(AddressValidationService::new(Arc::new(provider))))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { port, log_dir } => {
            let _guard = observability::init_logging(&log_dir)
                .with_context(|| format!("Failed to initialize logging in '{}'", log_dir))?;
            if let Some(port) = port {
                config.server.port = port;
            }

            let service = build_service(&config)?;
            let mut state = AppState::new(service);
            match metrics::init() {
                Ok(handle) => state = state.with_metrics(handle),
                Err(e) => warn!("Metrics disabled: {}", e),
            }

            let addr = config.bind_address()?;
            info!(provider = %state.service.provider_name(), "Starting address validation service");
            server::serve(addr, state).await?;
        }
        Commands::Validate { address } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let service = build_service(&config)?;
            let result = service.validate(&address).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
