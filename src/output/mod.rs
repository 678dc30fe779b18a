//! Output module for writing scrape results
//!
//! This module handles:
//! - Serializing selected elements as JSON-lines records
//! - Writing the word-frequency map as pretty-printed JSON
//! - Printing the end-of-run report

mod frequency;
mod records;
mod report;

pub use frequency::{format_frequency, write_frequency};
pub use records::{tag_record, write_tag_records, PARENT_KEY, TAG_NAME_KEY, TAG_STRING_KEY};
pub use report::{format_report, print_report};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Path of the `<name>.json` file inside `directory`
pub fn json_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{}.json", name))
}
