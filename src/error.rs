use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a corpus or writing mined patterns.
#[derive(Error, Debug)]
pub enum MineError {
    #[error("cannot read corpus {path}: {source}")]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write results to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MineError>;
