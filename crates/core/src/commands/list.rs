use super::{Command, CommandOutput};
use crate::error::CommandResult;
use crate::model::{Model, PersonPredicate};

/// Shows every person in the record book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub const USAGE: &'static str = "list: Lists all persons in the ward book.";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.update_filtered_person_list(PersonPredicate::ShowAll);
        Ok(CommandOutput::new("Listed all persons"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::person;
    use crate::model::{ModelManager, RecordBook};

    #[test]
    fn test_list_clears_filter() {
        let mut model = ModelManager::new(
            RecordBook::from_persons([
                person("Alice Pauline", "S1234567A", "01/01/1990", "01/01/2022", "WA"),
                person("Benson Meier", "T2345678B", "02/02/1985", "03/01/2022", "WB"),
            ])
            .unwrap(),
        );
        model.update_filtered_person_list(PersonPredicate::NameContainsKeywords(Vec::new()));
        assert!(model.filtered_person_list().is_empty());

        let output = ListCommand.execute(&mut model).expect("list should succeed");

        assert_eq!(output.feedback, "Listed all persons");
        assert_eq!(model.filtered_person_list().len(), 2);
    }
}
