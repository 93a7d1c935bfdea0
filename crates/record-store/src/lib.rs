//! Student Record Store
//!
//! Keeps student records in insertion order and persists them to a flat
//! text file, four lines per record.

pub mod codec;
mod error;
mod record;
mod store;

pub use codec::{encode_record, RecordReader};
pub use error::{CodecError, MalformedRecord, StoreError};
pub use record::{BoundedText, StudentRecord, MAX_FIELD_CHARS};
pub use store::{DeleteOutcome, Listing, LoadOutcome, LoadReport, RecordStore, SaveReport};

/// Backing file used when none is configured, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "STUDENT.TXT";
