use dotenv::dotenv;
use risk_api::state::AppState;
use risk_core::RiskTable;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let addr: SocketAddr = std::env::var("RISK_API_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8001".to_string())
        .parse()?;
    let frontend_dir =
        PathBuf::from(std::env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string()));

    // Create AppState
    let app_state = AppState {
        table: Arc::new(RiskTable::builtin()),
        frontend_dir,
    };

    let app = risk_api::app(app_state);

    // Start Server
    tracing::info!("Risk API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
