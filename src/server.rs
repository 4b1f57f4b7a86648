use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Extension, Router, routing::get};
use tokio::{sync::Mutex, task::JoinHandle, time::Instant};

use crate::{api, error::Result};

/// State shared between the callback handler and the waiting login flow.
#[derive(Debug, Clone)]
pub struct CallbackState {
    pub redirect_uri: String,
    pub redirect: Option<String>,
}

pub type SharedCallback = Arc<Mutex<CallbackState>>;

pub fn shared_callback(redirect_uri: &str) -> SharedCallback {
    Arc::new(Mutex::new(CallbackState {
        redirect_uri: redirect_uri.to_string(),
        redirect: None,
    }))
}

pub fn router(callback_path: &str, state: SharedCallback) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(callback_path, get(api::callback))
        .layer(Extension(state))
}

/// Binds the callback listener and serves it on a background task.
///
/// Returns the bound address, which differs from `addr` when port 0 was
/// requested. The caller aborts the returned handle once the redirect was
/// captured.
pub async fn start_api_server(
    addr: SocketAddr,
    callback_path: &str,
    state: SharedCallback,
) -> Result<(SocketAddr, JoinHandle<()>)> {
    let app = router(callback_path, state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            crate::warning!("Callback server stopped: {}", e);
        }
    });

    Ok((local_addr, handle))
}

/// Polls the shared state until the redirect arrives or `max_wait` passes.
pub async fn wait_for_redirect(state: SharedCallback, max_wait: Duration) -> Option<String> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(redirect) = state.lock().await.redirect.clone() {
            return Some(redirect);
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    None
}
