//! PromoPress — newsletter promotion platform backend.
//!
//! Main entry point that wires configuration, the generation client, and
//! the API server.

use clap::Parser;
use promo_adcopy::client::{CompletionClient, OpenAiClient};
use promo_adcopy::AdCopyGenerator;
use promo_api::ApiServer;
use promo_core::config::AppConfig;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "promopress")]
#[command(about = "Newsletter promotion platform backend")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "PROMOPRESS__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "PROMOPRESS__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Force demo mode even when a generation credential is configured
    #[arg(long, default_value_t = false)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promopress=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("PromoPress starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        "Configuration loaded"
    );

    // Resolve the generation mode once, here, and thread it into the
    // generator. Demo mode means no outbound calls at all.
    let client: Option<Arc<dyn CompletionClient>> = if cli.demo {
        info!("Demo mode forced via --demo flag");
        None
    } else if config.generation.is_configured() {
        info!(model = %config.generation.model, "Generation credential configured, live mode");
        Some(Arc::new(OpenAiClient::new(config.generation.clone())?))
    } else {
        info!("No generation credential configured, running in demo mode");
        None
    };

    let generator = Arc::new(AdCopyGenerator::new(client));

    // Start API server
    let api_server = ApiServer::new(config.clone(), generator);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("PromoPress is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
