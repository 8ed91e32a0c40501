use crate::models::TopicRecord;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid topic record {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid topic record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Load a topic from disk.
///
/// `.toml` and `.json` files hold a full [`TopicRecord`]; any other file is
/// taken as raw topic content with no code example.
pub fn read_topic(path: &Path) -> Result<TopicRecord, IoError> {
    let text = read_file(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let record = match ext.as_deref() {
        Some("toml") => toml::from_str(&text).map_err(|source| IoError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&text).map_err(|source| IoError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => TopicRecord::new(text),
    };
    log::debug!("loaded topic from {}", path.display());
    Ok(record)
}
