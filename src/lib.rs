//! Spotify Top 50 Chart Extraction Library
//!
//! This library fetches "Top 50" track charts from the Spotify Web API for a
//! global chart plus a list of country markets, enriches every track with
//! audio features, audio analysis data and artist follower counts, and
//! flattens the nested results into a uniform column-oriented table.
//!
//! # Modules
//!
//! - `config` - API endpoint configuration
//! - `error` - Typed failure taxonomy for the pipeline
//! - `extract` - Chart location, track joining, aggregation and flattening
//! - `spotify` - Spotify Web API client and the `CatalogApi` boundary
//! - `types` - Data structures and type definitions
//! - `utils` - Pacing and small helpers
//!
//! # Example
//!
//! ```
//! use topcharts::{extract, spotify::SpotifyClient, utils::Pacer};
//!
//! #[tokio::main]
//! async fn main() -> topcharts::Res<()> {
//!     let api = SpotifyClient::authenticate("client-id", "client-secret").await?;
//!     let table = extract::run(&api, "toplists", &["DE", "FR"], &Pacer::default()).await?;
//!     println!("{} chart rows", table.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate returns `Res<T>` with the typed
/// [`Error`] taxonomy, so callers can match on the failure class
/// (authentication, lookup miss, schema mismatch, transport).
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Used to surface progress that operators of a long-running extraction
/// want to see, such as the display name of each resolved chart.
///
/// # Example
///
/// ```
/// info!("Top 50 - Świat");
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
/// success!("Data extracted for {} markets", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or notices that do not abort the run.
///
/// # Example
///
/// ```
/// warning!("chart description matched more than one playlist");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
