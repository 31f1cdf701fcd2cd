//! JSON snapshot storage for the ward book.
//!
//! The whole book is written on every save:
//!
//! ```text
//! {
//!   "persons": [
//!     { "name": "Alex Yeoh", "ic": "S1233567A", "dob": "01/01/1990",
//!       "admissionDate": "01/01/2022", "ward": "WA", "tags": ["Diabetes"],
//!       "remark": "Requires assistance with feeding." }
//!   ]
//! }
//! ```
//!
//! Loading validates every field through the `ward-types` parsers, then re-checks the record
//! invariants (date ordering, no duplicate persons) before handing back a [`RecordBook`].

use crate::error::{StorageError, StorageResult};
use crate::model::{Person, RecordBook};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredRecordBook {
    persons: Vec<Person>,
}

#[derive(Serialize)]
struct StoredRecordBookRef<'a> {
    persons: &'a [Person],
}

/// Reads and writes the ward book as a JSON file.
#[derive(Clone, Debug)]
pub struct JsonRecordStorage {
    path: PathBuf,
}

impl JsonRecordStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record book.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the data file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::FileRead`] if the file exists but cannot be read, and
    /// [`StorageError::DataConversion`] if its content is malformed or breaks a record
    /// invariant.
    pub fn read_record_book(&self) -> StorageResult<Option<RecordBook>> {
        if !self.path.exists() {
            tracing::info!("data file {} not found", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(StorageError::FileRead)?;
        let book = parse_record_book(&contents)?;
        Ok(Some(book))
    }

    /// Writes the record book, creating parent directories as needed.
    pub fn save_record_book(&self, book: &RecordBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StorageError::DirCreation)?;
        }

        let json = serde_json::to_string_pretty(&StoredRecordBookRef {
            persons: book.persons(),
        })
        .map_err(StorageError::Serialization)?;
        fs::write(&self.path, json).map_err(StorageError::FileWrite)?;

        tracing::debug!(
            "saved {} persons to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn parse_record_book(contents: &str) -> StorageResult<RecordBook> {
    let mut deserializer = serde_json::Deserializer::from_str(contents);
    let stored: StoredRecordBook = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| {
            let path = err.path().to_string();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            StorageError::DataConversion(format!(
                "record book schema mismatch at {path}: {}",
                err.into_inner()
            ))
        })?;

    if let Some((i, person)) = stored
        .persons
        .iter()
        .enumerate()
        .find(|(_, p)| p.is_dob_after_admission())
    {
        return Err(StorageError::DataConversion(format!(
            "persons[{i}] ({}) has a date of birth later than the admission date",
            person.ic()
        )));
    }

    RecordBook::from_persons(stored.persons)
        .map_err(|e| StorageError::DataConversion(e.to_string()))
}
