use docstore_gateway::{app, presets, resolve, AppState, MemoryStore};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestServer {
    pub base: String,
    pub store: Arc<MemoryStore>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Serve `preset` over a fresh in-memory store on a random local port.
pub async fn spawn(preset: &str) -> TestServer {
    spawn_with(preset, false, None).await
}

pub async fn spawn_with(preset: &str, strict_ids: bool, static_dir: Option<&Path>) -> TestServer {
    let model = resolve(&presets::preset(preset).unwrap()).unwrap();
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), model).with_strict_ids(strict_ids);
    let router = app(state, static_dir);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base: format!("http://{}", addr),
        store,
        client: reqwest::Client::new(),
    }
}
