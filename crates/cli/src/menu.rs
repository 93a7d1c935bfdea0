//! Interactive Menu Loop

use record_store::{DeleteOutcome, Listing, LoadOutcome, RecordStore, StoreError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Menu entries, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Display,
    Search,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line such as `"3"`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Display),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::Delete),
            5 => Some(MenuChoice::Save),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\nStudent Database Management System\n\
1. Add Student\n\
2. Display All Students\n\
3. Search Student\n\
4. Delete Student\n\
5. Save to File\n\
6. Exit\n";

/// Menu driving a [`RecordStore`] from line input
pub struct Menu<R, W> {
    input: R,
    output: W,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, data_file: PathBuf) -> Self {
        Self {
            input,
            output,
            data_file,
        }
    }

    /// Consume the menu and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Load the data file into the store and report the outcome
    pub fn load_startup(&mut self, store: &mut RecordStore) -> io::Result<()> {
        match store.load_from_file(&self.data_file) {
            Ok(LoadOutcome::FileNotFound) => writeln!(self.output, "File not found."),
            Ok(LoadOutcome::Loaded(report)) => {
                if let Some(err) = &report.malformed {
                    writeln!(
                        self.output,
                        "Warning: loading stopped after {} records: {}",
                        report.loaded, err
                    )?;
                }
                writeln!(self.output, "Data loaded from file successfully.")
            }
            Err(e) => {
                warn!("Startup load failed: {}", e);
                writeln!(self.output, "Error loading file: {}", e)
            }
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self, store: &mut RecordStore) -> io::Result<()> {
        loop {
            self.output.write_all(MENU_TEXT.as_bytes())?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                info!("Input closed, leaving menu");
                writeln!(self.output, "\nExiting program...")?;
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add(store)?,
                Some(MenuChoice::Display) => self.display(store)?,
                Some(MenuChoice::Search) => self.search(store)?,
                Some(MenuChoice::Delete) => self.delete(store)?,
                Some(MenuChoice::Save) => self.save(store)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    /// Print `label` and read one line; `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced, as when loading the data file.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(Some(trimmed.to_string()))
    }

    /// Prompt for a roll number; `None` if input ended or did not parse
    fn prompt_roll_no(&mut self, label: &str) -> io::Result<Option<i32>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        match line.trim().parse::<i32>() {
            Ok(roll_no) => Ok(Some(roll_no)),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }

    fn add(&mut self, store: &mut RecordStore) -> io::Result<()> {
        let Some(roll_no) = self.prompt_roll_no("Enter Roll No: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(course) = self.prompt("Enter Course: ")? else {
            return Ok(());
        };
        let Some(marks) = self.prompt("Enter Marks: ")? else {
            return Ok(());
        };
        let Ok(marks) = marks.trim().parse::<f64>() else {
            return writeln!(self.output, "Invalid input.");
        };

        store.add(roll_no, &name, &course, marks);
        writeln!(self.output, "Student added successfully.")
    }

    fn display(&mut self, store: &RecordStore) -> io::Result<()> {
        match store.list() {
            Listing::Empty => writeln!(self.output, "No records found."),
            Listing::Records(records) => {
                writeln!(self.output, "Student Records:")?;
                for record in records {
                    writeln!(self.output, "{}", record)?;
                }
                Ok(())
            }
        }
    }

    fn search(&mut self, store: &RecordStore) -> io::Result<()> {
        let Some(roll_no) = self.prompt_roll_no("Enter Roll No to search: ")? else {
            return Ok(());
        };
        match store.find_by_roll_no(roll_no) {
            Some(record) => writeln!(self.output, "Student Found: {}", record),
            None => writeln!(self.output, "Student not found."),
        }
    }

    fn delete(&mut self, store: &mut RecordStore) -> io::Result<()> {
        let Some(roll_no) = self.prompt_roll_no("Enter Roll No to delete: ")? else {
            return Ok(());
        };
        match store.delete_by_roll_no(roll_no) {
            DeleteOutcome::Deleted(_) => writeln!(self.output, "Student deleted successfully."),
            DeleteOutcome::NotFound => writeln!(self.output, "Student not found."),
            DeleteOutcome::NoRecords => writeln!(self.output, "No records found to delete."),
        }
    }

    fn save(&mut self, store: &RecordStore) -> io::Result<()> {
        match store.save_to_file(&self.data_file) {
            Ok(_) => writeln!(self.output, "Data saved to file successfully."),
            Err(StoreError::FileOpen { source, .. }) => {
                warn!("Save failed: {}", source);
                writeln!(self.output, "Error opening file for saving!")
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                writeln!(self.output, "Error saving file: {}", e)
            }
        }
    }
}
