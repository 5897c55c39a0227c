#![deny(unsafe_code)]

use std::path::PathBuf;

use tabl_model::TableError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV from {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl IngestError {
    pub(crate) fn csv(source_name: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            source_name: source_name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
