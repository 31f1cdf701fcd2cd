//! In-memory model: the record book plus the currently displayed (filtered) view of it.
//!
//! Commands only see the model through the [`Model`] trait. The displayed list is what the user
//! last saw, so indices typed by the user are resolved against it rather than against the full
//! book.

mod person;
mod predicate;
mod record_book;

pub use person::Person;
pub use predicate::PersonPredicate;
pub use record_book::RecordBook;

use crate::error::CommandResult;

/// Operations commands may perform on the model.
pub trait Model {
    fn record_book(&self) -> &RecordBook;

    fn set_record_book(&mut self, book: RecordBook);

    /// True if a person who is the same person as `person` is in the book.
    fn has_person(&self, person: &Person) -> bool;

    /// Adds `person` and resets the displayed list to show everyone.
    fn add_person(&mut self, person: Person) -> CommandResult<()>;

    fn delete_person(&mut self, target: &Person) -> CommandResult<()>;

    /// Replaces `target` with `edited`, keeping its position in the book.
    fn set_person(&mut self, target: &Person, edited: Person) -> CommandResult<()>;

    /// The persons currently displayed, in book order.
    fn filtered_person_list(&self) -> Vec<&Person>;

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate);
}

/// Default [`Model`] implementation.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    record_book: RecordBook,
    filter: PersonPredicate,
}

impl ModelManager {
    pub fn new(record_book: RecordBook) -> Self {
        Self {
            record_book,
            filter: PersonPredicate::ShowAll,
        }
    }

    pub fn filter(&self) -> &PersonPredicate {
        &self.filter
    }
}

impl Model for ModelManager {
    fn record_book(&self) -> &RecordBook {
        &self.record_book
    }

    fn set_record_book(&mut self, book: RecordBook) {
        self.record_book = book;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.record_book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> CommandResult<()> {
        self.record_book.add_person(person)?;
        self.filter = PersonPredicate::ShowAll;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> CommandResult<()> {
        self.record_book.remove_person(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> CommandResult<()> {
        self.record_book.set_person(target, edited)
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.record_book
            .persons()
            .iter()
            .filter(|p| self.filter.test(p))
            .collect()
    }

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        tracing::debug!("updating displayed list filter: {:?}", predicate);
        self.filter = predicate;
    }
}
