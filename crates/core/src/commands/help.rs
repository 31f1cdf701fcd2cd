use super::{
    AddCommand, ClearCommand, Command, CommandOutput, DeleteCommand, EditCommand, ExitCommand,
    FindCommand, ListCommand,
};
use crate::error::CommandResult;
use crate::model::Model;

/// Shows usage for every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";

    pub const USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";

    /// Usage text of every command, one block per command.
    pub fn full_usage() -> String {
        [
            AddCommand::USAGE,
            EditCommand::USAGE,
            DeleteCommand::USAGE,
            FindCommand::USAGE,
            ListCommand::USAGE,
            ClearCommand::USAGE,
            HelpCommand::USAGE,
            ExitCommand::USAGE,
        ]
        .join("\n\n")
    }
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandResult<CommandOutput> {
        Ok(CommandOutput {
            show_help: true,
            ..CommandOutput::new(Self::full_usage())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelManager;

    #[test]
    fn test_help_sets_flag_and_lists_commands() {
        let mut model = ModelManager::default();
        let output = HelpCommand.execute(&mut model).expect("help should succeed");

        assert!(output.show_help);
        assert!(!output.exit);
        for word in ["add:", "edit:", "delete:", "find:", "list:", "clear:", "exit:"] {
            assert!(output.feedback.contains(word), "missing usage for {word}");
        }
    }
}
