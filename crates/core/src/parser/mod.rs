//! Turns a line of user input into a command.
//!
//! The first word selects the command; the rest of the line is handed to that command's
//! argument parser unchanged (leading whitespace included, which the tokenizer relies on).

mod add;
mod delete;
mod edit;
mod find;
pub mod tokenizer;

pub use add::parse_add;
pub use delete::parse_delete;
pub use edit::parse_edit;
pub use find::parse_find;

use crate::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand, FindCommand,
    HelpCommand, ListCommand,
};
use crate::error::{ParseError, ParseResult};
use crate::Index;
use std::collections::BTreeSet;
use ward_types::Tag;

/// Parses a full input line into an executable command.
///
/// # Errors
///
/// - [`ParseError::InvalidCommandFormat`] for a blank line.
/// - [`ParseError::UnknownCommand`] for an unrecognised command word.
/// - Whatever the selected argument parser returns.
pub fn parse_command(input: &str) -> ParseResult<Box<dyn Command>> {
    let input = input.trim_start();
    let (word, args) = match input.find(char::is_whitespace) {
        Some(split) => input.split_at(split),
        None => (input, ""),
    };

    tracing::debug!("parsing command word {:?} with args {:?}", word, args);

    let command: Box<dyn Command> = match word {
        "" => {
            return Err(ParseError::InvalidCommandFormat {
                usage: HelpCommand::USAGE,
            })
        }
        AddCommand::COMMAND_WORD => Box::new(parse_add(args)?),
        EditCommand::COMMAND_WORD => Box::new(parse_edit(args)?),
        DeleteCommand::COMMAND_WORD => Box::new(parse_delete(args)?),
        FindCommand::COMMAND_WORD => Box::new(parse_find(args)?),
        ListCommand::COMMAND_WORD => Box::new(ListCommand),
        ClearCommand::COMMAND_WORD => Box::new(ClearCommand),
        HelpCommand::COMMAND_WORD => Box::new(HelpCommand),
        ExitCommand::COMMAND_WORD => Box::new(ExitCommand),
        _ => return Err(ParseError::UnknownCommand),
    };

    Ok(command)
}

/// Parses a one-based index.
///
/// # Errors
///
/// - [`ParseError::IndexLessThanOne`] for `0`.
/// - [`ParseError::InvalidIndex`] for anything that is not an unsigned integer.
pub fn parse_index(input: &str) -> ParseResult<Index> {
    let value: usize = input
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidIndex)?;
    Index::from_one_based(value).ok_or(ParseError::IndexLessThanOne)
}

pub(crate) fn parse_tags(values: &[String]) -> ParseResult<BTreeSet<Tag>> {
    values
        .iter()
        .map(|v| Tag::parse(v).map_err(ParseError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 2 ").unwrap(), Index::from_one_based(2).unwrap());
        assert_eq!(
            parse_index("0").expect_err("zero"),
            ParseError::IndexLessThanOne
        );
        assert_eq!(parse_index("-1").expect_err("negative"), ParseError::InvalidIndex);
        assert_eq!(parse_index("two").expect_err("word"), ParseError::InvalidIndex);
    }

    #[test]
    fn test_parse_command_routes_by_first_word() {
        let command = parse_command("find n/Alex").expect("find should parse");
        assert!(format!("{command:?}").starts_with("FindCommand"));

        let command = parse_command("  list extra words").expect("list ignores arguments");
        assert!(format!("{command:?}").starts_with("ListCommand"));

        let command = parse_command("delete 3").expect("delete should parse");
        assert!(format!("{command:?}").starts_with("DeleteCommand"));
    }

    #[test]
    fn test_parse_command_rejects_blank_and_unknown() {
        assert!(matches!(
            parse_command("   ").expect_err("blank"),
            ParseError::InvalidCommandFormat { .. }
        ));
        assert_eq!(
            parse_command("discharge 1").expect_err("unknown"),
            ParseError::UnknownCommand
        );
    }

    #[test]
    fn test_parse_tags_rejects_invalid_tag() {
        let err = parse_tags(&["NPO".into(), "fall risk".into()]).expect_err("space in tag");
        assert_eq!(err, ParseError::Field(ward_types::FieldError::Tag));
    }
}
