//! Playlens — terminal playlist analyzer for the Spotify Web API.
//!
//! This library provides the building blocks for fetching the tracks of a
//! Spotify playlist, flattening them into tabular records, charting the most
//! frequent artists, and exporting the data as CSV. The interactive terminal
//! front end lives in [`ui`]; everything below it is plain library code.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `error` - The closed error taxonomy surfaced to the user
//! - `export` - CSV serialization of fetched playlist data
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `ui` - Terminal user interface (event loop, views, dialogs)
//! - `utils` - Pure helpers: parsing, flattening, counting, rendering

pub mod config;
pub mod error;
pub mod export;
pub mod spotify;
pub mod types;
pub mod ui;
pub mod utils;

/// A convenient Result type alias for process-level operations that may fail.
///
/// Used for plumbing that sits outside the user-facing error taxonomy
/// (terminal setup, event reading, the run loop itself). Handler-level
/// failures use [`error::Error`] instead so they can be rendered as dialogs.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for status output before the terminal UI takes over the screen and
/// after it has been torn down.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable failures outside the UI session (e.g. the terminal
/// cannot be initialized). Inside the UI, errors are shown as dialogs and are
/// never fatal.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
