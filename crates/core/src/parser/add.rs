use super::parse_tags;
use super::tokenizer::{
    tokenize, Prefix, PREFIX_ADMISSION_DATE, PREFIX_DOB, PREFIX_IC, PREFIX_NAME, PREFIX_REMARK,
    PREFIX_TAG, PREFIX_WARD,
};
use crate::commands::AddCommand;
use crate::error::{ParseError, ParseResult};
use crate::model::Person;
use ward_types::{AdmissionDate, Dob, Ic, Name, Remark, Ward};

const REQUIRED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_IC,
    PREFIX_DOB,
    PREFIX_WARD,
    PREFIX_ADMISSION_DATE,
];

/// Parses the arguments of `add`.
pub fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let arg_multimap = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_IC,
            PREFIX_DOB,
            PREFIX_WARD,
            PREFIX_ADMISSION_DATE,
            PREFIX_TAG,
            PREFIX_REMARK,
        ],
    );

    let all_present = REQUIRED.iter().all(|p| arg_multimap.is_present(*p));
    if !all_present || !arg_multimap.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddCommand::USAGE,
        });
    }

    let mut single_valued = REQUIRED.to_vec();
    single_valued.push(PREFIX_REMARK);
    arg_multimap.verify_no_duplicate_prefixes_for(&single_valued)?;

    let required = |prefix: Prefix| arg_multimap.value(prefix).unwrap_or_default();

    let person = Person::new(
        Name::parse(required(PREFIX_NAME))?,
        parse_tags(arg_multimap.all_values(PREFIX_TAG))?,
        Dob::parse(required(PREFIX_DOB))?,
        Ic::parse(required(PREFIX_IC))?,
        AdmissionDate::parse(required(PREFIX_ADMISSION_DATE))?,
        Ward::parse(required(PREFIX_WARD))?,
        arg_multimap
            .value(PREFIX_REMARK)
            .map(Remark::new)
            .unwrap_or_default(),
    );

    Ok(AddCommand::new(person))
}
