use crate::catalog::ItemId;
use std::path::PathBuf;
use thiserror::Error;

/// Expected, recoverable outcomes of a selection command that did not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no available item or chip matches")]
    NotFound,
    #[error("nothing is selected")]
    EmptySelection,
    #[error("empty input")]
    InvalidInput,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown names: {}", .0.join(", "))]
    UnknownNames(Vec<String>),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("program error: {0}")]
    Program(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
