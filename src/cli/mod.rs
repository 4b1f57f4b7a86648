//! # CLI Module
//!
//! The command-line layer of genremix. Each command wires configuration, the
//! session and the catalog client together and reports progress with the
//! crate's status macros.
//!
//! ## Commands
//!
//! - [`auth`] - log in and show the account the credential belongs to
//! - [`generate`] - log in, sample the chosen genres and create a playlist
//! - [`genres`] - list the genres that can be selected
//!
//! [`login`] is shared by `auth` and `generate`: it hands out the authorize
//! URL, receives the redirect (pasted or via the local callback listener) and
//! exchanges the code.
//!
//! ```text
//! CLI Layer (commands, tables, prompts)
//!     ↓
//! Management Layer (session, assembler)
//!     ↓
//! Spotify Layer (OAuth, catalog calls)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! genremix genres
//! genremix auth --callback
//! genremix generate --genre rock --genre jazz --tracks 40 --name "Rock & Jazz"
//! ```
//!
//! Commands return [`crate::Error`]; `main` turns them into a red message and
//! a non-zero exit code.

mod auth;
mod genres;
mod playlist;

pub use auth::auth;
pub use auth::login;
pub use genres::genres;
pub use playlist::generate;
