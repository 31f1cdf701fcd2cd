use super::Person;
use crate::error::{CommandError, CommandResult};

/// Ordered backing store of every person on the ward.
///
/// No two persons in the book may be the same person (see [`Person::is_same_person`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBook {
    persons: Vec<Person>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `persons`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::DuplicatePerson`] if two entries are the same person.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> CommandResult<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> CommandResult<()> {
        if self.has_person(&person) {
            return Err(CommandError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// # Errors
    ///
    /// - [`CommandError::PersonNotFound`] if `target` is not in the book.
    /// - [`CommandError::DuplicatePerson`] if `edited` is a different person who is already in
    ///   the book.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> CommandResult<()> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(CommandError::PersonNotFound)?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> CommandResult<()> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(CommandError::PersonNotFound)?;
        self.persons.remove(position);
        Ok(())
    }
}
