//! Kokoro Compass server binary.
//!
//! Loads configuration, resolves the text-generation credential, wires the
//! consultation generator and serves the coaching page.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use kokoro_compass::adapters::ai::{OpenAiConfig, OpenAiProvider};
use kokoro_compass::adapters::http::{coaching_router, CoachingAppState};
use kokoro_compass::application::handlers::coaching::GenerateConsultationHandler;
use kokoro_compass::config::{resolve_credential, AppConfig};
use kokoro_compass::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    // Credential resolved once per process; absence selects demo mode
    let provider: Option<Arc<dyn AIProvider>> = match resolve_credential() {
        Some(credential) => {
            let provider_config = OpenAiConfig::new(credential)
                .with_model(&config.ai.model)
                .with_base_url(&config.ai.base_url)
                .with_timeout(config.ai.timeout());
            let provider = OpenAiProvider::new(provider_config);
            tracing::info!(
                model = %provider.provider_info().model,
                "live mode: text-generation credential configured"
            );
            Some(Arc::new(provider))
        }
        None => {
            tracing::info!("demo mode: no text-generation credential found");
            None
        }
    };

    let generator = GenerateConsultationHandler::new(provider, config.ai.demo_delay());
    let state = CoachingAppState {
        generator: Arc::new(generator),
    };

    let mut app = coaching_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Kokoro Compass listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
