use std::path::PathBuf;
use thiserror::Error;

/// Every failure the tool can report. All of them are terminal; main turns
/// the active one into a single diagnostic line and a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("unknown mode: {0}")]
    UnknownMode(String),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("cannot shift {ch:?} by {key}: not a valid character")]
    ShiftOutOfRange { ch: char, key: i64 },
    #[error("can't read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can't write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
