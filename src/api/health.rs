use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::server::SharedCallback;

/// Reports whether the listener is up and if the redirect already arrived.
pub async fn health(Extension(shared_state): Extension<SharedCallback>) -> Json<Value> {
    let received = shared_state.lock().await.redirect.is_some();
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "redirect_received": received
    }))
}
