//! Policy-Scout: a single-site privacy policy surveyor
//!
//! This crate fetches a site's homepage, records the elements that load
//! external resources and every hyperlink, follows the "Privacy Policy" link
//! and counts the words visible on that page up to a terminator string.

pub mod config;
pub mod dom;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for Policy-Scout operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Target link not found: no <a> element with text '{text}'")]
    LinkNotFound { text: String },

    #[error("Matched element has no navigable target: <a> with text '{text}' has no href")]
    MissingHref { text: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Policy-Scout operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use dom::{Document, Element};
pub use scrape::{run, RunReport, WordFrequency};
