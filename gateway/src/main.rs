use axum::{extract::DefaultBodyLimit, Router};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wishtree_ai::AiCfg;
use wishtree_core::{open_store, AppState, WishCfg};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(3000);

    let wish_cfg = WishCfg::from_env()?;
    let ai_cfg = AiCfg::from_env();

    let polisher = ai_cfg.polisher()?;
    if polisher.is_enabled() {
        info!(model = %ai_cfg.model, "wish polishing enabled");
    } else {
        warn!("GEMINI_API_KEY not set, wish polishing disabled");
    }

    let store = open_store(&wish_cfg).await?;
    let state = AppState::new(store, polisher.clone(), wish_cfg.policy);

    let app = Router::new()
        .merge(wishtree_core::urls::router(state))
        .merge(wishtree_ai::urls::router(polisher))
        .layer(DefaultBodyLimit::max(64 * 1024));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
