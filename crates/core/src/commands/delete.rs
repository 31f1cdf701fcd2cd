use super::{Command, CommandOutput};
use crate::error::{CommandError, CommandResult};
use crate::model::Model;
use crate::Index;

/// Deletes the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const USAGE: &'static str = "delete: Deletes the person identified by the index number \
        used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let person_to_delete = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|p| (*p).clone())
            .ok_or(CommandError::InvalidPersonDisplayedIndex)?;

        model.delete_person(&person_to_delete)?;
        tracing::info!("deleted person at index {}", self.index);

        Ok(CommandOutput::new(format!(
            "Deleted Person: {person_to_delete}"
        )))
    }
}
