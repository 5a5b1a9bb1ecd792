// Shared test helpers: local axum servers with canned redirect behavior.

use axum::Router;
use tokio::net::TcpListener;

/// Binds an ephemeral local port, serves `app` on it, and returns the base
/// URL (no trailing slash).
#[allow(dead_code)] // Used by other test files
pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{addr}")
}

/// A client configured the way the resolver expects: redirects disabled,
/// short per-hop timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to build client")
}
