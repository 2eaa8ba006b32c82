//! Shared helpers for the HTTP integration tests.

use sonarr_client::Sonarr;
use wiremock::MockServer;

pub const API_KEY: &str = "0123456789abcdef";

/// Routes `log` output through the test harness; set `RUST_LOG=debug` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a client for the `/api` root of the mock server.
///
/// The blocking client must be created and dropped off the async runtime,
/// so call this from inside [`blocking`].
pub fn sonarr_for(server_uri: &str) -> Sonarr {
    Sonarr::new(&format!("{}/api", server_uri), API_KEY).unwrap()
}

/// Starts a mock server with logging enabled.
pub async fn start_server() -> MockServer {
    init_logging();
    MockServer::start().await
}

/// Runs blocking client code on tokio's blocking thread pool.
pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
