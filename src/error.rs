use std::path::PathBuf;
use thiserror::Error;

/// The main error type for labelbridge operations.
#[derive(Debug, Error)]
pub enum LabelBridgeError {
    #[error("Failed to read labels file {path}: {source}")]
    LabelsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write labels file {path}: {source}")]
    LabelsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed label entry in {path} at line {line}: {message}")]
    LabelLineParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(#[from] serde_json::Error),
}
