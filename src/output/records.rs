//! Element records
//!
//! Each selected element is written as one JSON object per line. The object
//! holds the element's attributes plus three derived keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `html-tag-string` | direct text of the element, or `null` |
//! | `html-tag-name` | tag name of the element |
//! | `parent-html-tag-name` | parent's attributes plus its own `html-tag-name`, or `null` at the root |
//!
//! Derived keys replace real attributes of the same name.

use crate::dom::Element;
use crate::output::{OutputError, OutputResult};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const TAG_STRING_KEY: &str = "html-tag-string";
pub const TAG_NAME_KEY: &str = "html-tag-name";
pub const PARENT_KEY: &str = "parent-html-tag-name";

/// Attributes of an element as a JSON object
fn attribute_map(element: &Element<'_>) -> Map<String, Value> {
    element
        .attributes()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect()
}

/// Builds the record for a single element
pub fn tag_record(element: &Element<'_>) -> Map<String, Value> {
    let mut record = attribute_map(element);

    record.insert(
        TAG_STRING_KEY.to_string(),
        element
            .text()
            .map_or(Value::Null, |text| Value::String(text.to_string())),
    );
    record.insert(
        TAG_NAME_KEY.to_string(),
        Value::String(element.tag_name().to_string()),
    );

    let parent = match element.parent() {
        Some(parent) => {
            let mut attrs = attribute_map(&parent);
            attrs.insert(
                TAG_NAME_KEY.to_string(),
                Value::String(parent.tag_name().to_string()),
            );
            Value::Object(attrs)
        }
        None => Value::Null,
    };
    record.insert(PARENT_KEY.to_string(), parent);

    record
}

/// Writes one record per element to `path`, replacing any existing file
///
/// # Returns
///
/// The number of records written
pub fn write_tag_records(elements: &[Element<'_>], path: &Path) -> OutputResult<usize> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for element in elements {
        let record = tag_record(element);
        serde_json::to_writer(&mut writer, &record).map_err(|source| OutputError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {} records to {}", elements.len(), path.display());
    Ok(elements.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_record_for_resource() {
        let doc = Document::parse(
            r#"<html><head><script src="/app.js" defer></script></head><body></body></html>"#,
        );
        let script = doc.find_all_by_tag("script")[0];

        let record = Value::Object(tag_record(&script));
        assert_eq!(
            record,
            json!({
                "src": "/app.js",
                "defer": "",
                "html-tag-string": null,
                "html-tag-name": "script",
                "parent-html-tag-name": { "html-tag-name": "head" }
            })
        );
    }

    #[test]
    fn test_record_for_link_with_parent_attributes() {
        let doc = Document::parse(
            r#"<body><footer id="legal" class="site-footer"><a href="/privacy">Privacy Policy</a></footer></body>"#,
        );
        let link = doc.find_all_by_tag("a")[0];

        let record = tag_record(&link);
        assert_eq!(record["href"], json!("/privacy"));
        assert_eq!(record["html-tag-string"], json!("Privacy Policy"));
        assert_eq!(record["html-tag-name"], json!("a"));
        assert_eq!(
            record["parent-html-tag-name"],
            json!({ "id": "legal", "class": "site-footer", "html-tag-name": "footer" })
        );
    }

    #[test]
    fn test_root_record_has_null_parent() {
        let doc = Document::parse(r#"<html lang="en"><body></body></html>"#);
        let record = tag_record(&doc.root().unwrap());
        assert_eq!(record["lang"], json!("en"));
        assert_eq!(record["parent-html-tag-name"], Value::Null);
    }

    #[test]
    fn test_derived_keys_replace_attributes() {
        let doc = Document::parse(r#"<body><img src="/x.png" html-tag-name="fake"></body>"#);
        let img = doc.find_all_by_tag("img")[0];
        assert_eq!(tag_record(&img)["html-tag-name"], json!("img"));
    }

    #[test]
    fn test_write_one_record_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        let doc = Document::parse(
            r#"<body><a href="/one">One</a><a href="/two">Two</a></body>"#,
        );

        let written = write_tag_records(&doc.find_all_by_tag("a"), &path).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["href"], json!("/two"));
        assert_eq!(second["html-tag-string"], json!("Two"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resources.json");
        std::fs::write(&path, "stale\nstale\nstale\n").unwrap();

        let written = write_tag_records(&[], &path).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("links.json");
        let result = write_tag_records(&[], &path);
        assert!(matches!(result, Err(OutputError::Io { .. })));
    }
}
