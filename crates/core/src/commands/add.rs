use super::{Command, CommandOutput};
use crate::error::{CommandError, CommandResult};
use crate::model::{Model, Person};

/// Adds a person to the record book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const USAGE: &'static str = "add: Adds a person to the ward book.\n\
        Parameters: n/NAME i/IC d/DATE OF BIRTH w/WARD ad/ADMISSION DATE [t/TAG]... [r/REMARK]\n\
        Example: add n/John Doe i/T1234567Q d/12/08/1999 w/WA ad/01/01/2024 t/FallRisk \
        r/Requires assistance with feeding.";

    pub fn new(to_add: Person) -> Self {
        Self { to_add }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        if self.to_add.is_dob_after_admission() {
            return Err(CommandError::DobLaterThanAdmission);
        }
        if model.has_person(&self.to_add) {
            return Err(CommandError::DuplicatePerson);
        }

        model.add_person(self.to_add.clone())?;
        tracing::info!("added person {}", self.to_add.ic());

        Ok(CommandOutput::new(format!(
            "New person added: {}",
            self.to_add
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::person;
    use crate::model::{ModelManager, RecordBook};

    #[test]
    fn test_add_appends_person() {
        let mut model = ModelManager::new(RecordBook::new());
        let amy = person("Amy Bee", "S1111111A", "01/01/1990", "01/01/2022", "WA");

        let output = AddCommand::new(amy.clone())
            .execute(&mut model)
            .expect("add should succeed");

        assert_eq!(model.record_book().persons(), &[amy.clone()]);
        assert_eq!(output.feedback, format!("New person added: {amy}"));
    }

    #[test]
    fn test_add_rejects_duplicate_ic() {
        let amy = person("Amy Bee", "S1111111A", "01/01/1990", "01/01/2022", "WA");
        let mut model = ModelManager::new(RecordBook::from_persons([amy]).unwrap());
        let twin = person("Amy Sea", "S1111111A", "01/01/1991", "01/01/2022", "WB");

        let err = AddCommand::new(twin)
            .execute(&mut model)
            .expect_err("duplicate IC");
        assert_eq!(err, CommandError::DuplicatePerson);
        assert_eq!(model.record_book().len(), 1);
    }

    #[test]
    fn test_add_rejects_dob_after_admission() {
        let mut model = ModelManager::new(RecordBook::new());
        let bad = person("Amy Bee", "S1111111A", "02/01/2022", "01/01/2022", "WA");

        let err = AddCommand::new(bad)
            .execute(&mut model)
            .expect_err("dob after admission");
        assert_eq!(err, CommandError::DobLaterThanAdmission);
        assert!(model.record_book().is_empty());
    }
}
