use super::{Command, CommandOutput};
use crate::error::CommandResult;
use crate::model::Model;

/// Ends the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";

    pub const USAGE: &'static str = "exit: Exits the program.";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandResult<CommandOutput> {
        Ok(CommandOutput {
            exit: true,
            ..CommandOutput::new("Exiting ward book as requested ...")
        })
    }
}
