//! Ties the parser, the model and storage together.
//!
//! `LogicManager` is what the front ends drive: one line in, one [`CommandOutput`] out. The
//! record book is written back to disk after a successful command that changed it.

use crate::commands::CommandOutput;
use crate::config::CoreConfig;
use crate::model::{Model, ModelManager, Person, RecordBook};
use crate::parser::parse_command;
use crate::sample_data::sample_record_book;
use crate::storage::JsonRecordStorage;
use crate::WardResult;

#[derive(Debug)]
pub struct LogicManager {
    model: ModelManager,
    storage: JsonRecordStorage,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: JsonRecordStorage) -> Self {
        Self { model, storage }
    }

    /// Loads the record book named by `cfg`.
    ///
    /// A missing data file starts the ward book with the sample persons. A data file that
    /// exists but cannot be read or fails validation is an error; it is never overwritten
    /// silently.
    pub fn load(cfg: &CoreConfig) -> WardResult<Self> {
        let storage = JsonRecordStorage::new(cfg.data_file());
        let book = match storage.read_record_book()? {
            Some(book) => {
                tracing::info!(
                    "loaded {} persons from {}",
                    book.len(),
                    storage.path().display()
                );
                book
            }
            None => {
                tracing::info!("starting with sample ward book");
                sample_record_book()
            }
        };

        Ok(Self::new(ModelManager::new(book), storage))
    }

    /// Parses and executes `input`, then saves the record book if the command changed it.
    ///
    /// Commands that only change the displayed list (`find`, `list`) or the session (`help`,
    /// `exit`) never touch the data file.
    ///
    /// # Errors
    ///
    /// Parse and command errors leave both the model and the data file unchanged. A storage
    /// error means the command ran but its result was not persisted.
    pub fn execute(&mut self, input: &str) -> WardResult<CommandOutput> {
        let command = parse_command(input)?;
        let before = self.model.record_book().clone();
        let output = command.execute(&mut self.model)?;

        if self.model.record_book() != &before {
            self.storage.save_record_book(self.model.record_book())?;
        }
        Ok(output)
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.model.filtered_person_list()
    }

    pub fn record_book(&self) -> &RecordBook {
        self.model.record_book()
    }

    pub fn storage(&self) -> &JsonRecordStorage {
        &self.storage
    }
}
