//! Local HTTP stand-ins for the upstream platforms.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;

/// Query parameters captured by a test handler.
pub(crate) type CapturedQuery = Arc<Mutex<Option<HashMap<String, String>>>>;

/// Serves `app` on an ephemeral localhost port and returns its base URL
/// (with trailing slash).
pub(crate) async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Base URL of a port nothing listens on.
pub(crate) async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
