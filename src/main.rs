use std::sync::Arc;

use scouting::{router, AppState, InMemoryDatastore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scouting=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scouting server");

    // Swap in a persistent Datastore implementation here when one exists;
    // everything behind the trait is backend-agnostic.
    let datastore = Arc::new(InMemoryDatastore::new());
    let app_state = AppState::new(datastore);

    let app = router(app_state);

    let addr = std::env::var("SCOUTING_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}
