use tracing::info;
use tracing_subscriber::EnvFilter;

use shoplist_server::{app, config::Config, repository::init_db, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    let conn = init_db(&config.database_path).await?;
    let state = AppState::new(conn);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
