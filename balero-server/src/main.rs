use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use balero_server::advisor::ScoreWeights;
use balero_server::bart::{BartClient, BartConfig, MockBartClient};
use balero_server::cache::{CacheConfig, CachedBartClient};
use balero_server::contact::{ContactStore, FileContactStore};
use balero_server::dispatch::{Dispatcher, EtdProvider};
use balero_server::network::bart_network;
use balero_server::web::{AppState, create_router};

/// Default webhook bind address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default path for the contact file.
const DEFAULT_CONTACTS_PATH: &str = "contacts.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Contact storage
    let contacts_path =
        std::env::var("CONTACTS_PATH").unwrap_or_else(|_| DEFAULT_CONTACTS_PATH.to_string());
    let store = FileContactStore::open(&contacts_path).expect("Failed to open contact store");
    info!(path = %contacts_path, contacts = store.len().await, "contact store loaded");
    let store: Arc<dyn ContactStore> = Arc::new(store);

    // Departure board source: the live API behind a cache, or canned
    // boards for offline development
    let provider: Arc<dyn EtdProvider> = if std::env::var("USE_MOCK_BART").is_ok() {
        let boards_dir =
            std::env::var("MOCK_BOARDS_DIR").expect("USE_MOCK_BART is set but MOCK_BOARDS_DIR is not");
        let mock = MockBartClient::new(&boards_dir).expect("Failed to load mock boards");
        info!(dir = %boards_dir, "serving mock departure boards");
        Arc::new(mock)
    } else {
        let mut config = match std::env::var("BART_API_KEY") {
            Ok(key) => BartConfig::new(key),
            Err(_) => BartConfig::default(),
        };
        if let Ok(base_url) = std::env::var("BART_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        let client = BartClient::new(config).expect("Failed to create BART client");
        Arc::new(CachedBartClient::new(client, &CacheConfig::default()))
    };

    let dispatcher = Dispatcher::new(store, provider, bart_network(), ScoreWeights::default());
    let state = AppState::new(dispatcher);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR is not a valid socket address");

    info!(%addr, "balero listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
