use super::tokenizer::{
    tokenize, Prefix, PREFIX_ADMISSION_DATE, PREFIX_DOB, PREFIX_IC, PREFIX_NAME, PREFIX_REMARK,
    PREFIX_TAG, PREFIX_WARD,
};
use super::{parse_index, parse_tags};
use crate::commands::{EditCommand, EditPersonDescriptor};
use crate::error::{ParseError, ParseResult};
use ward_types::{AdmissionDate, Dob, Ic, Name, Remark, Ward};

const SINGLE_VALUED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_IC,
    PREFIX_DOB,
    PREFIX_WARD,
    PREFIX_ADMISSION_DATE,
    PREFIX_REMARK,
];

/// Parses the arguments of `edit`: `INDEX [n/NAME] [i/IC] [d/DOB] [w/WARD] [ad/DATE]
/// [t/TAG]... [r/REMARK]`.
///
/// A single empty `t/` clears every tag.
pub fn parse_edit(args: &str) -> ParseResult<EditCommand> {
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

    let index = match parse_index(arg_multimap.preamble()) {
        Ok(index) => index,
        Err(ParseError::InvalidIndex) => {
            return Err(ParseError::InvalidCommandFormat {
                usage: EditCommand::USAGE,
            })
        }
        Err(e) => return Err(e),
    };

    arg_multimap.verify_no_duplicate_prefixes_for(SINGLE_VALUED)?;

    let mut descriptor = EditPersonDescriptor::new();
    if let Some(name) = arg_multimap.value(PREFIX_NAME) {
        descriptor.set_name(Name::parse(name)?);
    }
    if let Some(ic) = arg_multimap.value(PREFIX_IC) {
        descriptor.set_ic(Ic::parse(ic)?);
    }
    if let Some(dob) = arg_multimap.value(PREFIX_DOB) {
        descriptor.set_dob(Dob::parse(dob)?);
    }
    if let Some(ward) = arg_multimap.value(PREFIX_WARD) {
        descriptor.set_ward(Ward::parse(ward)?);
    }
    if let Some(admission_date) = arg_multimap.value(PREFIX_ADMISSION_DATE) {
        descriptor.set_admission_date(AdmissionDate::parse(admission_date)?);
    }
    if let Some(remark) = arg_multimap.value(PREFIX_REMARK) {
        descriptor.set_remark(Remark::new(remark));
    }

    let tag_values = arg_multimap.all_values(PREFIX_TAG);
    match tag_values {
        [] => {}
        [only] if only.is_empty() => descriptor.set_tags(Default::default()),
        values => descriptor.set_tags(parse_tags(values)?),
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}
