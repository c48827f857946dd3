//! In-process stand-in for the Authon API.

use axum::Router;

/// Serve `router` on an ephemeral loopback port and return its base URL.
///
/// Point `TestAppStateBuilder::with_authon_api` at the result so proxy
/// routes talk to it instead of the real API.
pub async fn spawn_authon_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
