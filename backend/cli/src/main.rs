use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use relayforge_agent::{CompletionInvoker, Dispatcher};
use relayforge_channels::TelegramClient;
use relayforge_config::RelayConfig;
use relayforge_gateway::GatewayState;
use relayforge_llm::GroqProvider;

#[derive(Parser)]
#[command(name = "relayforge")]
#[command(about = "RelayForge — Telegram → LLM message relay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current relay status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RelayConfig::from_env()?;
    logging::init_logger(&config.log_dir, &config.log_level);

    match cli.command {
        Commands::Serve { port } => {
            let config = RelayConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("RelayForge is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: RelayConfig) -> Result<()> {
    info!(summary = %config.redacted_summary(), "Starting RelayForge");

    let telegram = Arc::new(TelegramClient::new(config.telegram_token.clone()));
    let provider = Arc::new(GroqProvider::new(config.groq_api_key.clone()));
    let invoker = CompletionInvoker::new(provider, config.model_id.clone());
    let dispatcher = Arc::new(Dispatcher::new(config.history_capacity, invoker, telegram));

    let state = GatewayState::new(
        dispatcher,
        config.telegram_token.clone(),
        config.webhook_secret.clone(),
    );

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;

    relayforge_gateway::start_server(addr, state).await
}
