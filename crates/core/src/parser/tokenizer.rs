//! Prefix-based argument tokenizer.
//!
//! Arguments look like `n/Alex Yeoh w/WA t/NPO t/Dementia`. A prefix is only recognised at the
//! start of the argument text or directly after whitespace, so `ad/` is never mistaken for `d/`
//! and slashes inside dates are left alone.

use crate::error::{ParseError, ParseResult};
use std::collections::HashMap;
use std::fmt;

/// An argument prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_IC: Prefix = Prefix::new("i/");
pub const PREFIX_DOB: Prefix = Prefix::new("d/");
pub const PREFIX_WARD: Prefix = Prefix::new("w/");
pub const PREFIX_ADMISSION_DATE: Prefix = Prefix::new("ad/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");

/// Values found for each prefix, plus the preamble before the first prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(Prefix::as_str)
            .collect();

        if duplicated.is_empty() {
            return Ok(());
        }
        Err(ParseError::DuplicatePrefixes(duplicated.join(" ")))
    }
}

/// Splits `args` on the given prefixes.
///
/// Values are trimmed. Text before the first recognised prefix becomes the preamble.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(move |(pos, _)| starts_token(args, *pos))
                .map(move |(pos, _)| (pos, prefix))
        })
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut multimap = ArgumentMultimap {
        values: HashMap::new(),
        preamble: args[..preamble_end].trim().to_string(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn starts_token(args: &str, pos: usize) -> bool {
    args[..pos]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}
