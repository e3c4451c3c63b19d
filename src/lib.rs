//! Coverflow Player Library
//!
//! This library provides the two small web services behind the coverflow
//! player: an authorization server that runs the Spotify OAuth2 Authorization
//! Code flow and stores one token file per user, and a player backend that
//! serves the browser script, the album library and the playback trigger.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for both servers
//! - `cli` - Command-line entry points that start the servers
//! - `config` - Environment loading and settings
//! - `management` - Token files and the album library on disk
//! - `server` - Router construction and listeners
//! - `spotify` - Spotify accounts and Web API client
//! - `types` - Data structures and wire types
//! - `utils` - State nonces, cookies and redirect helpers
//!
//! # Example
//!
//! ```
//! use coverflow::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> coverflow::Res<()> {
//!     config::load_env();
//!     let settings = config::Settings::from_env()?;
//!     cli::auth(settings, false).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the top-level flows (server start-up, CLI commands) where the
/// concrete error type does not matter to the caller. Module-level operations
/// return their own typed errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Authorization server listening on {}", addr);
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
/// success!("Stored token for {}", user_id);
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
/// Only used for fatal start-up errors; request handlers never call it.
///
/// # Example
///
/// ```
/// error!("Cannot load settings: {}", e);
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
/// # Example
///
/// ```
/// warning!("Failed to open browser, visit {} manually", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
