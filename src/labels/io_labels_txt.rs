//! Reader and writer for the `labels.txt` class resource.
//!
//! One class per line, formatted as `'<id>': '<name>',`. There is no header,
//! no footer and no schema version. Quoting and the trailing comma are
//! incidental and stripped on read.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::{debug, warn};

use super::LabelMap;
use crate::error::LabelBridgeError;

const SEPARATOR: &str = ": ";

/// Read a labels resource from disk.
///
/// The whole load is aborted on the first malformed line; no partial
/// mapping is ever returned.
pub fn read_label_map(path: &Path) -> Result<LabelMap, LabelBridgeError> {
    let content = fs::read_to_string(path).map_err(|source| LabelBridgeError::LabelsRead {
        path: path.to_path_buf(),
        source,
    })?;

    let labels = parse_labels(&content, path)?;
    debug!(
        "loaded {} class label(s) from {}",
        labels.len(),
        path.display()
    );
    Ok(labels)
}

/// Parse labels resource content from a string.
pub fn from_labels_str(text: &str) -> Result<LabelMap, LabelBridgeError> {
    parse_labels(text, Path::new("<string>"))
}

/// Write a mapping as a labels resource.
pub fn write_label_map(path: &Path, labels: &LabelMap) -> Result<(), LabelBridgeError> {
    fs::write(path, to_labels_string(labels)).map_err(|source| LabelBridgeError::LabelsWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a mapping as a new labels resource, never replacing an existing file.
///
/// Returns `Ok(false)` and leaves the file untouched if `path` already
/// exists. The existence check and the creation are a single atomic open.
pub fn create_label_map(path: &Path, labels: &LabelMap) -> Result<bool, LabelBridgeError> {
    let write_error = |source| LabelBridgeError::LabelsWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(write_error(err)),
    };
    file.write_all(to_labels_string(labels).as_bytes())
        .map_err(write_error)?;
    Ok(true)
}

/// Render a mapping in the labels resource format, one entry per line.
pub fn to_labels_string(labels: &LabelMap) -> String {
    let mut out = String::new();
    for (id, name) in labels.iter() {
        out.push_str(&format!("'{}': '{}',\n", id, name));
    }
    out
}

fn parse_labels(text: &str, path: &Path) -> Result<LabelMap, LabelBridgeError> {
    let mut labels = LabelMap::new();

    for (line_idx, line) in text.lines().enumerate() {
        let (id, name) = parse_label_line(line, path, line_idx + 1)?;
        if let Some(previous) = labels.insert(id, name) {
            warn!(
                "{}:{}: class id '{}' redefined ('{}' replaced by '{}')",
                path.display(),
                line_idx + 1,
                id,
                previous,
                name
            );
        }
    }

    Ok(labels)
}

fn parse_label_line<'a>(
    line: &'a str,
    file_path: &Path,
    line_num: usize,
) -> Result<(&'a str, &'a str), LabelBridgeError> {
    let trimmed = line.trim();

    let Some((raw_id, raw_name)) = trimmed.split_once(SEPARATOR) else {
        return Err(LabelBridgeError::LabelLineParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("expected '<id>{}<name>', found '{}'", SEPARATOR, trimmed),
        });
    };

    let id = raw_id.trim_matches('\'');
    let name = raw_name.trim_matches(|c: char| matches!(c, '\'' | ',' | '\n'));
    Ok((id, name))
}

/// Fuzz-only entrypoint for single-line label parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_label_line(input: &str) -> Result<(), LabelBridgeError> {
    let _ = parse_label_line(input, Path::new("<fuzz>"), 1)?;
    Ok(())
}
