use super::{Command, CommandOutput};
use crate::error::CommandResult;
use crate::model::{Model, RecordBook};

/// Removes every person from the record book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";

    pub const USAGE: &'static str = "clear: Clears all entries from the ward book.";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let removed = model.record_book().len();
        model.set_record_book(RecordBook::new());
        tracing::info!("cleared {} persons from the ward book", removed);
        Ok(CommandOutput::new("Ward book has been cleared!"))
    }
}
