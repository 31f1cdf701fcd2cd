use super::parse_index;
use crate::commands::DeleteCommand;
use crate::error::{ParseError, ParseResult};

/// Parses the arguments of `delete`: a single one-based index.
pub fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    match parse_index(args) {
        Ok(index) => Ok(DeleteCommand::new(index)),
        Err(ParseError::InvalidIndex) => Err(ParseError::InvalidCommandFormat {
            usage: DeleteCommand::USAGE,
        }),
        Err(e) => Err(e),
    }
}
