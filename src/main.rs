use std::sync::Arc;

use tokio::net::TcpListener;

use transcribe_relay::application::services::TranscriptionService;
use transcribe_relay::infrastructure::audio::OpenAiWhisperEngine;
use transcribe_relay::infrastructure::authorization::AllowAllAuthorizer;
use transcribe_relay::infrastructure::credentials::StaticCredentialSource;
use transcribe_relay::infrastructure::observability::{TracingConfig, init_tracing};
use transcribe_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
        settings.logging.level.clone(),
    ));

    let credentials = Arc::new(StaticCredentialSource::new(
        settings.upstream.api_key.clone(),
    ));
    if !credentials.is_configured() {
        tracing::warn!("Transcription API key not configured; requests will be refused");
    }

    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.upstream.base_url.clone(),
        settings.upstream.timeout(),
    ));
    tracing::info!(
        endpoint = %engine.endpoint(),
        timeout_secs = settings.upstream.timeout_secs,
        "Transcription engine ready"
    );

    let state = AppState {
        transcription_service: Arc::new(TranscriptionService::new(engine, credentials)),
        authorizer: Arc::new(AllowAllAuthorizer),
        max_upload_bytes: settings.upload.max_bytes,
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
