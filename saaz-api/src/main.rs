use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use saaz_api::{AppState, config::Config, routes};
use saaz_mongodb::MongoDbStore;
use saaz_store::store::DocumentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // A missing or broken database never stops the process: the API keeps
    // serving, storage endpoints fail individually, and /test reports why.
    let (store, init_error) = match (&config.database_url, &config.database_name) {
        (Some(url), Some(name)) => match MongoDbStore::builder(url, name).build().await {
            Ok(backend) => {
                info!("document store configured for database {name}");
                (Some(DocumentStore::new(backend)), None)
            }
            Err(err) => {
                warn!("failed to initialize document store: {err}");
                (None, Some(err.to_string()))
            }
        },
        _ => {
            warn!("DATABASE_URL or DATABASE_NAME not set; running without storage");
            (None, None)
        }
    };

    let port = config.port;
    let state = Arc::new(AppState::new(config, store, init_error));
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("{} listening on {addr}", saaz_api::APP_NAME);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
