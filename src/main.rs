use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use voiceloop::pipeline::{HttpResponder, HttpTranscriber, PipelineService};
use voiceloop::storage::ArtifactStore;
use voiceloop::{create_router, AppState, Config};

#[derive(Debug, Parser)]
#[command(
    name = "voiceloop",
    about = "Voice round-trip server: transcribe uploads and reply with generated text"
)]
struct Args {
    /// Path to the configuration file (extension optional)
    #[arg(long, default_value = "config/voiceloop")]
    config: String,

    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;
    let port = args.port.unwrap_or(cfg.service.http.port);

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Transcription endpoint: {}", cfg.transcription.api_url);
    info!("Generation endpoint: {}", cfg.generation.api_url);

    let transcriber = Arc::new(HttpTranscriber::new(
        &cfg.transcription.api_url,
        &cfg.transcription.api_key,
        &cfg.transcription.model,
    ));
    let responder = Arc::new(HttpResponder::new(
        &cfg.generation.api_url,
        &cfg.generation.api_key,
        &cfg.generation.model,
    ));
    let pipeline = Arc::new(PipelineService::new(transcriber, responder));
    let store = ArtifactStore::new(&cfg.storage.uploads_path)?;

    let app = create_router(AppState::new(pipeline, store));

    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
