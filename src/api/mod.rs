//! # API Module
//!
//! HTTP endpoints served by the optional local callback server used during
//! login (`--callback`).
//!
//! - [`callback`] - records the OAuth redirect so the login flow can exchange
//!   the authorization code.
//! - [`health`] - status and version, handy to check the listener is up.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use genremix::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
