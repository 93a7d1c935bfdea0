//! Line-Oriented Record Codec
//!
//! Each record occupies exactly four lines:
//!
//! ```text
//! <roll number>
//! <name>
//! <course>
//! <marks, two decimals>
//! ```
//!
//! There is no header and no separator between records.

use crate::error::CodecError;
use crate::record::StudentRecord;
use std::io::{self, BufRead, Write};

/// Write one record as four lines
pub fn encode_record<W: Write>(record: &StudentRecord, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", record.roll_no)?;
    writeln!(out, "{}", record.name)?;
    writeln!(out, "{}", record.course)?;
    writeln!(out, "{:.2}", record.marks)
}

/// Iterator decoding 4-line record blocks from a reader.
///
/// Blank lines ahead of a roll number are skipped and numeric lines are
/// trimmed before parsing. Text lines lose only their terminator. The
/// iterator ends after the first error.
pub struct RecordReader<R> {
    reader: R,
    buf: Vec<u8>,
    /// Lines consumed so far
    line_no: usize,
    /// Line holding the roll number of the current block
    block_start: usize,
    /// Records decoded so far
    decoded: usize,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(128),
            line_no: 0,
            block_start: 0,
            decoded: 0,
            done: false,
        }
    }

    /// First line (1-based) of the block read most recently
    pub fn block_start(&self) -> usize {
        self.block_start
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn field_line(&mut self, record: usize) -> Result<String, CodecError> {
        self.next_line()?
            .ok_or(CodecError::UnexpectedEof { record })
    }

    /// Decode the next block; `Ok(None)` at a clean end of input
    pub fn read_record(&mut self) -> Result<Option<StudentRecord>, CodecError> {
        let roll_line = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };
        self.block_start = self.line_no;
        let record = self.decoded + 1;

        let roll_no = roll_line
            .trim()
            .parse::<i32>()
            .map_err(|_| CodecError::InvalidRollNo {
                record,
                line: self.line_no,
                value: roll_line.clone(),
            })?;

        let name = self.field_line(record)?;
        let course = self.field_line(record)?;
        let marks_line = self.field_line(record)?;

        let marks = marks_line
            .trim()
            .parse::<f64>()
            .map_err(|_| CodecError::InvalidMarks {
                record,
                line: self.line_no,
                value: marks_line.clone(),
            })?;

        self.decoded = record;
        Ok(Some(StudentRecord::new(roll_no, &name, &course, marks)))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<StudentRecord, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
