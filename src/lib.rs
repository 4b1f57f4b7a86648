//! Genre Mix CLI Library
//!
//! This library builds Spotify playlists sampled from public playlists of the
//! selected genres. It covers the OAuth authorization-code flow with token
//! refresh, the catalog calls needed to search, read and write playlists, and
//! the sampling logic that spreads a track budget over the chosen genres.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the optional local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all layers
//! - `management` - Session lifecycle and playlist assembly
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Sampling, batching and parsing helpers
//!
//! # Example
//!
//! ```
//! use genremix::{
//!     config::{self, Config},
//!     management::SessionManager,
//!     spotify::auth::OAuthClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> genremix::Result<()> {
//!     config::load_env().await?;
//!     let config = Config::from_env()?;
//!     let mut session = SessionManager::new(OAuthClient::new(&config));
//!     let url = session.begin_authorization()?;
//!     // send the user to `url`, then feed the redirect back in
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Sampling {} genres", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist created");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used at the command boundary in `main`; library code returns
/// [`Error`] values instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as a genre that produced no tracks.
///
/// # Example
///
/// ```
/// warning!("No playlists found for genre: {}", genre);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
