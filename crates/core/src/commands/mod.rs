//! Executable commands.
//!
//! Parsers build immutable command values; executing one runs it to completion against the
//! model. A failing command leaves the model untouched.

mod add;
mod clear;
mod delete;
mod edit;
mod exit;
mod find;
mod help;
mod list;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;

use crate::error::CommandResult;
use crate::model::Model;

/// Something that can be executed against the model.
pub trait Command: std::fmt::Debug {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput>;
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Message shown to the user.
    pub feedback: String,
    /// The front end should show the help text.
    pub show_help: bool,
    /// The front end should stop reading commands.
    pub exit: bool,
}

impl CommandOutput {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}
