//! Record Store Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the backing file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file could not be opened
    #[error("Cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failed after the file was opened
    #[error("Read error on {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Write failed part way through a save
    #[error("Write error on {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors while decoding one 4-line record block
#[derive(Debug, Error)]
pub enum CodecError {
    /// Roll number line is not a decimal integer
    #[error("invalid roll number {value:?} on line {line}")]
    InvalidRollNo {
        record: usize,
        line: usize,
        value: String,
    },

    /// Marks line is not a decimal number
    #[error("invalid marks {value:?} on line {line}")]
    InvalidMarks {
        record: usize,
        line: usize,
        value: String,
    },

    /// File ended inside a record block
    #[error("unexpected end of file")]
    UnexpectedEof { record: usize },

    /// Underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A record block that could not be decoded; loading stops there
#[derive(Debug, Error)]
#[error("record {record} starting at line {start_line}: {reason}")]
pub struct MalformedRecord {
    /// 1-based index of the block in the file
    pub record: usize,
    /// Line holding the block's roll number
    pub start_line: usize,
    #[source]
    pub reason: CodecError,
}
