//! Errors for the parts of the application that touch the outside world.
//!
//! The calculator and history never fail; these cover config files,
//! terminal I/O, the clipboard and history export.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("failed to export history: {0}")]
    Export(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
