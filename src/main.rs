use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use beamcast::routes::{self, AppState};
use beamcast_contact::{Coordinator, FormsClient};
use clap::{Parser, Subcommand};

/// beamcast - marketing and documentation site server
#[derive(Parser)]
#[command(name = "beamcast")]
#[command(about = "Serves the Beamcast marketing, docs and contact pages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = beamcast::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    beamcast::observability::init_observability("beamcast", &config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: beamcast::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let forms_client = FormsClient::new(
        &config.forms.endpoint,
        &config.forms.form_name,
        Duration::from_secs(config.forms.timeout_secs),
    )?;

    tracing::info!(endpoint = %forms_client.endpoint(), "contact submissions forward to form backend");

    let state = AppState {
        contact: Arc::new(Coordinator::new(forms_client)),
        config,
    };

    let app = routes::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
