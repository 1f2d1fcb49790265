//!
//! Contains the Result and Error types for NEXRAD archive volume operations.
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("data file IO error")]
    FileError(#[from] std::io::Error),
    #[error("unexpected end of volume data")]
    UnexpectedEof,
    #[error("error decompressing a bzip2 stream at byte offset {offset}")]
    BzipStreamDecodeError {
        offset: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("error decompressing gzip data")]
    GzipDecodeError(#[source] std::io::Error),
    #[error("no radials were found in this volume")]
    NoRadialsFound,
    #[error("volume coverage pattern was never observed in this volume's messages")]
    MissingVcp,
    #[error("gzip source was closed and cannot be reopened for a ranged read")]
    GzipClosedReopen,
}
