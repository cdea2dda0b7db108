mod capabilities;
mod config;
mod errors;
mod intake;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::capabilities::sentiment::{
    HeuristicSentimentScorer, LlmSentimentScorer, SentimentScorer,
};
use crate::capabilities::translation::{LlmTranslator, NoopTranslator, Translator};
use crate::config::Config;
use crate::intake::model_caller::ModelCaller;
use crate::intake::orchestrator::Orchestrator;
use crate::llm_client::{ChatModel, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; nothing in it is required
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentScout v{}", env!("CARGO_PKG_VERSION"));
    if !config.has_api_key() {
        warn!("OPENAI_API_KEY is not set; model replies will use the fallback message");
    }

    // Initialize LLM client
    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    let model: Arc<dyn ChatModel> = Arc::new(llm);

    // Soft capabilities: model-backed or stand-in, chosen once here
    let translator: Arc<dyn Translator> = if config.enable_translation {
        Arc::new(LlmTranslator::new(model.clone()))
    } else {
        Arc::new(NoopTranslator)
    };
    let sentiment: Arc<dyn SentimentScorer> = if config.enable_llm_sentiment {
        Arc::new(LlmSentimentScorer::new(model.clone()))
    } else {
        Arc::new(HeuristicSentimentScorer)
    };
    info!(
        "Capabilities: translation={}, llm_sentiment={}",
        config.enable_translation, config.enable_llm_sentiment
    );

    let orchestrator = Orchestrator::new(
        ModelCaller::new(model, config.llm_temperature),
        translator,
        sentiment,
    );

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
