use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use roundtrip::config::Config;
use roundtrip::db;
use roundtrip::engine::Engine;
use roundtrip::error::Error;
use roundtrip::external::google_maps::GoogleMaps;
use roundtrip::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = Arc::new(GoogleMaps::new(&config.google_maps)?);
    let store = db::connect(&config.storage).await?;

    let engine = Engine::new(provider, store);

    serve(engine, config.listen_addr).await
}
