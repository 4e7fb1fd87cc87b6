//! Tooth Tutor Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toothtutor_engine::api;
use toothtutor_engine::infrastructure::{
    config::{EngineConfig, LlmProvider},
    gemini::GeminiClient,
    ollama::OllamaClient,
    ports::LlmPort,
};
use toothtutor_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toothtutor_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tooth Tutor Engine");

    // Load configuration
    let config = EngineConfig::from_env()?;

    // Create LLM client
    let llm: Arc<dyn LlmPort> = match config.llm_provider {
        LlmProvider::Gemini => {
            let api_key = config.gemini_api_key.clone().unwrap_or_else(|| {
                tracing::warn!(
                    "GEMINI_API_KEY is not set; every reaction will use the fallback answer"
                );
                String::new()
            });
            tracing::info!(
                model = %config.gemini_model,
                base_url = %config.gemini_base_url,
                "Using Gemini for tooth reactions"
            );
            Arc::new(GeminiClient::new(
                &config.gemini_base_url,
                &config.gemini_model,
                &api_key,
                config.llm_timeout,
            ))
        }
        LlmProvider::Ollama => {
            tracing::info!(
                model = %config.ollama_model,
                base_url = %config.ollama_base_url,
                "Using Ollama for tooth reactions"
            );
            Arc::new(OllamaClient::new(
                &config.ollama_base_url,
                &config.ollama_model,
                config.llm_timeout,
            ))
        }
    };

    // Create application
    let app = Arc::new(App::new(llm, config.temperature));

    // Start from the untreated state, as the UI does on first load
    let select = app.use_cases.reaction.select.clone();
    let ticket = select.begin_reset().await;
    select.complete(ticket).await;

    // Build router
    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // JSON bodies trigger CORS preflights.
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
