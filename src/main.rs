mod client;
mod config;
mod gemini;
mod logging;
mod printer;
mod prompt;
mod sse;

use clap::Parser;
use client::{ChunkSource, VertexClient};
use config::VertexConfig;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(name = "adcopy")]
#[command(about = "Streams ad-copy drafts for a product image from Gemini on Vertex AI")]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Google Cloud project id
    #[arg(short, long)]
    project: Option<String>,

    /// Vertex AI region, example: us-central1
    #[arg(short, long)]
    location: Option<String>,

    /// OAuth access token for the Vertex AI API
    #[arg(short, long)]
    token: Option<String>,

    /// Model to call
    #[arg(short, long)]
    model: Option<String>,

    /// trace, debug, info, warn, error
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append logs to this file
    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using WARN level.", args.log_level);
        Level::WARN
    });
    logging::init_logging(log_level, args.log_file.as_deref());

    // Deployment settings must be fully resolved before any network activity
    let config = VertexConfig::resolve(
        args.config.as_deref(),
        config::Overrides {
            project: args.project,
            location: args.location,
            access_token: args.token,
            model: args.model,
            endpoint: None,
        },
    )?;
    info!(
        "Using model {} in {} (project {})",
        config.model, config.location, config.project
    );

    let client_builder = reqwest::Client::builder();
    let client_builder = if let Some(proxy) = &args.proxy {
        client_builder.proxy(reqwest::Proxy::all(proxy)?)
    } else {
        client_builder
    };
    let http_client = Arc::new(client_builder.build()?);

    let client = VertexClient::new(http_client, config);

    let request = prompt::scripted_request();
    let chunks = client.stream_generate(&request).await?;

    let mut stdout = std::io::stdout();
    printer::emit_text(chunks, &mut stdout).await?;
    Ok(())
}
