use super::{Command, CommandOutput};
use crate::error::CommandResult;
use crate::model::{Model, PersonPredicate};

/// Narrows the displayed list to persons matching a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: PersonPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const USAGE: &'static str = "find: Finds all persons whose names contain any of the \
        specified keywords (case-insensitive), or whose IC contains the given keyword, and \
        displays them as a list with index numbers.\n\
        Parameters: n/KEYWORD [MORE_KEYWORDS]... or i/KEYWORD\n\
        Example: find n/alice bob charlie";

    pub fn new(predicate: PersonPredicate) -> Self {
        Self { predicate }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.update_filtered_person_list(self.predicate.clone());
        let shown = model.filtered_person_list().len();
        Ok(CommandOutput::new(format!("{shown} persons listed!")))
    }
}
