//! Pico y Placa - Check whether a vehicle may circulate in Quito.
//!
//! This crate is the command-line shell around `picoplaca-engine`: it
//! collects the plate, date and time, selects where holidays come from, and
//! reports the decision as a sentence.
//!
//! # Example
//!
//! ```
//! use picoplaca_cli::config::LookupConfig;
//!
//! // Local holidays unless configured otherwise
//! let config = LookupConfig::default();
//! assert_eq!(config.mode.as_str(), "local");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and runtime settings from the environment
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for the remote holiday provider
//! - [`remote`]: AbstractAPI holiday source
//! - [`report`]: Sentence and listing rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod remote;
pub mod report;

// Re-export commonly used items
pub use config::LookupConfig;
pub use error::{CliError, Result};
pub use remote::AbstractApiHolidays;
