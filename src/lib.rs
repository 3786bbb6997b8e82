//! Song Library CLI
//!
//! This library provides a thin client for a remote song storage API together
//! with the view state that a front end drives while a user browses the song
//! collection, looks up a song by identifier, edits it, deletes it, or adds a
//! new one.
//!
//! # Modules
//!
//! - `cli` - Command-line front end (one-shot commands and interactive session)
//! - `config` - Configuration management and environment variables
//! - `remote` - HTTP client for the remote song API
//! - `types` - Song data model and wire format
//! - `utils` - Table and formatting helpers
//! - `view` - View state, pure reducer and request tickets
//!
//! # Example
//!
//! ```
//! use songcli::{config, remote::SongClient, view::{Controller, Event}};
//!
//! #[tokio::main]
//! async fn main() -> songcli::Res<()> {
//!     config::load_env().await?;
//!     let mut controller = Controller::new(SongClient::from_env()?);
//!     controller.dispatch(Event::LoadRequested).await;
//!     println!("{} songs", controller.state().songs().len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod remote;
pub mod types;
pub mod utils;
pub mod view;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the front end glue where several error types meet. Library
/// operations return their own typed errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading songs...");
/// info!("Found {} songs", count);
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
/// success!("Song {} updated", id);
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
/// Only for fatal errors in the binary front end. The program terminates
/// with exit code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Cannot reach song API: {}", e);
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
/// Used for recoverable issues such as a song that could not be found.
///
/// # Example
///
/// ```
/// warning!("Song not found");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
