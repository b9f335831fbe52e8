//! Server: reads settings from the environment, opens the database handle, mounts all routes.

use censo_api::{connect_with, router, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("censo_api=info,tower_http=info")),
        )
        .init();

    let pool = match connect_with(&settings).await {
        Ok(pool) => {
            tracing::info!("connected to the database");
            pool
        }
        Err(e) => {
            tracing::error!(error = %e, "could not connect to the database");
            return Err(e.into());
        }
    };

    let app = router(AppState::new(pool));

    let listener = TcpListener::bind(&settings.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
