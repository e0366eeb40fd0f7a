use std::sync::Arc;

use anyhow::Context;

use viewsmith_ai::OpenAiCompatModel;
use viewsmith_api::{AppState, ComponentStore, Config, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    viewsmith_api::observability::init();

    let config = Config::from_env().context("loading configuration")?;

    let model = Arc::new(OpenAiCompatModel::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    ));
    let state = AppState {
        model,
        store: Arc::new(ComponentStore::new(&config.storage_root)),
    };

    let app = build_app(state, config.service_token.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
