use axum::{Extension, extract::RawQuery, response::Html};

use crate::server::SharedCallback;

/// Captures the query of the OAuth redirect.
///
/// The handler only records the redirect URL; the code exchange runs in the
/// login flow that waits on the shared state.
pub async fn callback(
    RawQuery(query): RawQuery,
    Extension(shared_state): Extension<SharedCallback>,
) -> Html<&'static str> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    if state.redirect.is_some() {
        return Html("<h4>Login already received.</h4>");
    }

    state.redirect = Some(format!("{}?{}", state.redirect_uri, query));
    Html("<h2>Redirect received.</h2><p>You can close this browser window.</p>")
}
