//! Configuration module for Policy-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the values
//! that reproduce the reference run against cfcunderwriting.com.
//!
//! # Example
//!
//! ```no_run
//! use policy_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("policy-scout.toml")).unwrap();
//! println!("Following link: {}", config.scrape.search_text);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, OutputConfig, ScrapeConfig, UserAgentConfig, DEFAULT_PAGE_URL,
    DEFAULT_SEARCH_TEXT, DEFAULT_TERMINATOR,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
