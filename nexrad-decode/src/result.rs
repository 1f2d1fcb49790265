//!
//! Contains the Result and Error types for NEXRAD message decoding.
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("data file IO error")]
    FileError(#[from] std::io::Error),
    #[error("file decoding error: {0}")]
    DecodingError(String),
    #[error("message is missing collection date/time")]
    MessageMissingDateError,
    #[error("unexpected end of file or input data")]
    UnexpectedEof,
    #[error("invalid data block pointer: cannot rewind {bytes} bytes at position {position}")]
    InvalidDataBlockPointer { bytes: usize, position: usize },
    #[error("unknown data block type: {block_type}")]
    UnknownDataBlockType { block_type: String },
    #[error("message type 5 volume coverage pattern was truncated; VCP treated as empty")]
    IncompleteMessage5,
    #[error("moment word size {word_size} is unsupported; treating gate payload as 8-bit")]
    UnsupportedWordSize { word_size: u8 },
    #[error("message type 29 encountered; skipped by its declared size")]
    UnknownMessageType29,
}
