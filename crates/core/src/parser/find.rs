use super::tokenizer::{tokenize, ArgumentMultimap, PREFIX_IC, PREFIX_NAME};
use crate::commands::FindCommand;
use crate::error::{ParseError, ParseResult};
use crate::model::PersonPredicate;

fn invalid_format() -> ParseError {
    ParseError::InvalidCommandFormat {
        usage: FindCommand::USAGE,
    }
}

/// Parses the arguments of `find`.
///
/// Exactly one of `n/KEYWORDS` or `i/KEYWORD` must be given. An empty `n/` value yields a
/// name predicate with no keywords, which matches nobody. An empty `i/` value yields an empty
/// IC keyword, which every IC contains.
///
/// # Errors
///
/// Returns [`ParseError::InvalidCommandFormat`] if the input is blank, has a preamble, gives
/// both or neither prefix, or gives an IC keyword containing whitespace. Returns
/// [`ParseError::DuplicatePrefixes`] if either prefix is repeated.
pub fn parse_find(args: &str) -> ParseResult<FindCommand> {
    if args.trim().is_empty() {
        return Err(invalid_format());
    }

    let arg_multimap = tokenize(args, &[PREFIX_NAME, PREFIX_IC]);

    if !arg_multimap.preamble().is_empty() {
        return Err(invalid_format());
    }

    arg_multimap.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_IC])?;

    if !has_one_param_only(&arg_multimap) {
        return Err(invalid_format());
    }

    if let Some(keywords) = arg_multimap.value(PREFIX_NAME) {
        let keywords = keywords.split_whitespace().map(str::to_string).collect();
        return Ok(FindCommand::new(PersonPredicate::NameContainsKeywords(
            keywords,
        )));
    }

    match arg_multimap.value(PREFIX_IC) {
        Some(keyword) if keyword.split_whitespace().count() <= 1 => Ok(FindCommand::new(
            PersonPredicate::IcContainsKeyword(keyword.to_string()),
        )),
        _ => Err(invalid_format()),
    }
}

fn has_one_param_only(arg_multimap: &ArgumentMultimap) -> bool {
    arg_multimap.is_present(PREFIX_NAME) != arg_multimap.is_present(PREFIX_IC)
}
