use std::sync::Arc;

use dsg_api_rest::{router, AppState};
use dsg_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use dsg_core::{CoreConfig, DischargeService, DischargeStore, OpenAiChatModel, ProviderConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the discharge summary generator.
///
/// Resolves configuration from the environment once, opens the store, seeds
/// it on first run, and serves the REST API.
///
/// # Environment Variables
/// - `DSG_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `DSG_DATA_DIR`: Directory for the sled database (default: "data")
/// - `AI_INTEGRATIONS_OPENAI_API_KEY`: Completion provider API key
/// - `AI_INTEGRATIONS_OPENAI_BASE_URL`: Provider base URL (default: OpenAI)
/// - `AI_INTEGRATIONS_OPENAI_MODEL`: Model name (default: "gpt-5.1")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("dsg=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DSG_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_dir = std::env::var("DSG_DATA_DIR").unwrap_or_else(|_| "data".into());

    let api_key = std::env::var("AI_INTEGRATIONS_OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!(
            "AI_INTEGRATIONS_OPENAI_API_KEY is not set; summary generation will fail until it is"
        );
    }
    let base_url = std::env::var("AI_INTEGRATIONS_OPENAI_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let model_name =
        std::env::var("AI_INTEGRATIONS_OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

    let cfg = CoreConfig::new(
        data_dir.into(),
        ProviderConfig::new(api_key, base_url, model_name),
    );

    let store = DischargeStore::open(cfg.data_dir())?;
    if dsg_core::seed::ensure_seed(&store)? {
        tracing::info!("seeding complete");
    }

    let model = OpenAiChatModel::new(cfg.provider().clone());
    let service = DischargeService::new(
        store,
        Arc::new(model),
        cfg.provider().max_completion_tokens,
    );

    tracing::info!("++ Starting dsg REST on {}", addr);
    let app = router(AppState {
        service: Arc::new(service),
    });
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
