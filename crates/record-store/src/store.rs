//! Record Store Implementation

use crate::codec::{encode_record, RecordReader};
use crate::error::{CodecError, MalformedRecord, StoreError};
use crate::record::StudentRecord;
use std::alloc::{handle_alloc_error, Layout};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of listing the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    /// Store holds no records
    Empty,
    /// Records in insertion order, never empty
    Records(&'a [StudentRecord]),
}

impl<'a> Listing<'a> {
    /// Records as a slice (empty for [`Listing::Empty`])
    pub fn records(&self) -> &'a [StudentRecord] {
        match self {
            Listing::Empty => &[],
            Listing::Records(records) => *records,
        }
    }
}

/// Result of deleting by roll number
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The first matching record, now removed
    Deleted(StudentRecord),
    /// No record has this roll number
    NotFound,
    /// Store was empty
    NoRecords,
}

/// Summary of a completed save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub written: usize,
}

/// Summary of a load that opened its file
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records appended to the store
    pub loaded: usize,
    /// First block that failed to parse; loading stopped there
    pub malformed: Option<MalformedRecord>,
}

impl LoadReport {
    /// Whether every block in the file was loaded
    pub fn is_complete(&self) -> bool {
        self.malformed.is_none()
    }
}

/// Result of loading from a file
#[derive(Debug)]
pub enum LoadOutcome {
    /// Backing file does not exist; store untouched
    FileNotFound,
    Loaded(LoadReport),
}

/// Ordered in-memory collection of student records.
///
/// Records keep their insertion order; deletion splices without
/// reordering. Roll numbers may repeat, and lookups resolve to the
/// earliest inserted match.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, truncating its text fields.
    ///
    /// Returns the stored record as confirmation.
    pub fn add(&mut self, roll_no: i32, name: &str, course: &str, marks: f64) -> &StudentRecord {
        self.push(StudentRecord::new(roll_no, name, course, marks))
    }

    fn push(&mut self, record: StudentRecord) -> &StudentRecord {
        // Out of memory is fatal; never continue with a half-built record
        if self.records.try_reserve(1).is_err() {
            handle_alloc_error(Layout::new::<StudentRecord>());
        }
        debug!("Adding record roll_no={}", record.roll_no);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// List all records in insertion order
    pub fn list(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(&self.records)
        }
    }

    /// Find the earliest inserted record with this roll number
    pub fn find_by_roll_no(&self, roll_no: i32) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.roll_no == roll_no)
    }

    /// Remove the earliest inserted record with this roll number
    pub fn delete_by_roll_no(&mut self, roll_no: i32) -> DeleteOutcome {
        if self.records.is_empty() {
            return DeleteOutcome::NoRecords;
        }

        match self.records.iter().position(|r| r.roll_no == roll_no) {
            Some(idx) => {
                debug!("Deleting record roll_no={} at position {}", roll_no, idx);
                DeleteOutcome::Deleted(self.records.remove(idx))
            }
            None => DeleteOutcome::NotFound,
        }
    }

    /// Overwrite `path` with every record in order
    pub fn save_to_file(&self, path: &Path) -> Result<SaveReport, StoreError> {
        let file = File::create(path).map_err(|source| StoreError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        let written = self
            .save_to_writer(&mut writer)
            .and_then(|written| writer.flush().map(|_| written))
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Saved {} records to {}", written, path.display());
        Ok(SaveReport { written })
    }

    /// Encode every record to `out`, returning the count written
    pub fn save_to_writer<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        for record in self {
            encode_record(record, out)?;
        }
        Ok(self.len())
    }

    /// Append records decoded from `path`.
    ///
    /// Existing records are kept. A missing file is reported as
    /// [`LoadOutcome::FileNotFound`]. Decoding stops at the first malformed
    /// block and everything before it stays loaded.
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadOutcome, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Data file {} not found", path.display());
                return Ok(LoadOutcome::FileNotFound);
            }
            Err(source) => {
                return Err(StoreError::FileOpen {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let report = self
            .load_from_reader(BufReader::new(file))
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded {} records from {}", report.loaded, path.display());
        Ok(LoadOutcome::Loaded(report))
    }

    /// Append records decoded from `reader`.
    ///
    /// Only read failures are returned as errors; records appended before
    /// one stay in the store.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut decoder = RecordReader::new(reader);

        loop {
            match decoder.read_record() {
                Ok(Some(record)) => {
                    self.push(record);
                    report.loaded += 1;
                }
                Ok(None) => break,
                Err(CodecError::Io(e)) => return Err(e),
                Err(reason) => {
                    let malformed = MalformedRecord {
                        record: report.loaded + 1,
                        start_line: decoder.block_start(),
                        reason,
                    };
                    warn!("Stopped loading at malformed {}", malformed);
                    report.malformed = Some(malformed);
                    break;
                }
            }
        }

        Ok(report)
    }

    /// Release all records
    pub fn destroy(self) {
        debug!("Releasing {} records", self.records.len());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
