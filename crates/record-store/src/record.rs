//! Student Record Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Maximum characters kept in a text field
pub const MAX_FIELD_CHARS: usize = 99;

/// Text field capped at [`MAX_FIELD_CHARS`] characters.
///
/// Construction is lossy: input is cut at its first line break, then
/// truncated to the first `MAX_FIELD_CHARS` characters. Neither step
/// reports an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BoundedText(String);

impl BoundedText {
    /// Create a bounded field from arbitrary text
    pub fn new(input: &str) -> Self {
        // A line break would split the field across lines of the backing file
        let line = input.split(|c: char| c == '\n' || c == '\r').next().unwrap_or("");
        let kept = match line.char_indices().nth(MAX_FIELD_CHARS) {
            Some((cut, _)) => &line[..cut],
            None => line,
        };
        Self(kept.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for BoundedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoundedText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BoundedText {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<BoundedText> for String {
    fn from(value: BoundedText) -> Self {
        value.0
    }
}

/// One student entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Lookup key, not guaranteed unique
    pub roll_no: i32,
    pub name: BoundedText,
    pub course: BoundedText,
    /// Not range checked
    pub marks: f64,
}

impl StudentRecord {
    /// Build a record, truncating the text fields
    pub fn new(roll_no: i32, name: &str, course: &str, marks: f64) -> Self {
        Self {
            roll_no,
            name: BoundedText::new(name),
            course: BoundedText::new(course),
            marks,
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll No: {}, Name: {}, Course: {}, Marks: {:.2}",
            self.roll_no, self.name, self.course, self.marks
        )
    }
}
