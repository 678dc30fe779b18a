//! Word-frequency file

use crate::output::{OutputError, OutputResult};
use crate::scrape::WordFrequency;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the map as a JSON object indented by four spaces
pub fn format_frequency(freq: &WordFrequency) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    freq.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the word-frequency map to `path`, replacing any existing file
pub fn write_frequency(freq: &WordFrequency, path: &Path) -> OutputResult<()> {
    let json = format_frequency(freq).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {} words to {}", freq.len(), path.display());
    Ok(())
}
