//! Sample records used to seed an empty ward book on first run.

use crate::model::{Person, RecordBook};
use std::collections::BTreeSet;
use ward_types::{AdmissionDate, Dob, Ic, Name, Remark, Tag, Ward};

struct SamplePerson {
    name: &'static str,
    tags: &'static [&'static str],
    dob: &'static str,
    ic: &'static str,
    admission_date: &'static str,
    ward: &'static str,
    remark: &'static str,
}

const SAMPLE_PERSONS: [SamplePerson; 6] = [
    SamplePerson {
        name: "Alex Yeoh",
        tags: &["Diabetes"],
        dob: "01/01/1990",
        ic: "S1233567A",
        admission_date: "01/01/2022",
        ward: "WA",
        remark: "Requires assistance with feeding.",
    },
    SamplePerson {
        name: "Bernice Yu",
        tags: &["FallRisk", "Diabetes"],
        dob: "01/01/1990",
        ic: "S1244567A",
        admission_date: "02/01/2022",
        ward: "WB",
        remark: "Flip every 2 hours to prevent bed sores.",
    },
    SamplePerson {
        name: "Charlotte Oliveiro",
        tags: &["FallRisk"],
        dob: "01/01/1990",
        ic: "S1234577A",
        admission_date: "03/01/2022",
        ward: "WC",
        remark: "",
    },
    SamplePerson {
        name: "David Li",
        tags: &["Dementia"],
        dob: "01/01/1990",
        ic: "S1234566A",
        admission_date: "04/01/2022",
        ward: "WD",
        remark: "",
    },
    SamplePerson {
        name: "Irfan Ibrahim",
        tags: &["NPO"],
        dob: "01/01/1990",
        ic: "S2234567A",
        admission_date: "05/01/2022",
        ward: "WE",
        remark: "",
    },
    SamplePerson {
        name: "Roy Balakrishnan",
        tags: &["Dementia"],
        dob: "01/01/1990",
        ic: "S1234567A",
        admission_date: "06/01/2022",
        ward: "WF",
        remark: "",
    },
];

impl SamplePerson {
    // The literals above are fixed and known to validate.
    fn to_person(&self) -> Person {
        Person::new(
            Name::parse(self.name).expect("sample name is valid"),
            tag_set(self.tags),
            Dob::parse(self.dob).expect("sample dob is valid"),
            Ic::parse(self.ic).expect("sample ic is valid"),
            AdmissionDate::parse(self.admission_date).expect("sample admission date is valid"),
            Ward::parse(self.ward).expect("sample ward is valid"),
            Remark::new(self.remark),
        )
    }
}

fn tag_set(tags: &[&str]) -> BTreeSet<Tag> {
    tags.iter()
        .map(|t| Tag::parse(t).expect("sample tag is valid"))
        .collect()
}

/// The six sample persons, in display order.
pub fn sample_persons() -> Vec<Person> {
    SAMPLE_PERSONS.iter().map(SamplePerson::to_person).collect()
}

/// A fresh record book holding the sample persons.
pub fn sample_record_book() -> RecordBook {
    let mut book = RecordBook::new();
    for person in sample_persons() {
        if let Err(e) = book.add_person(person) {
            tracing::warn!("skipping sample person: {}", e);
        }
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_sample_persons() {
        assert_eq!(sample_persons().len(), 6);
    }

    #[test]
    fn test_sample_persons_have_ordered_dates() {
        for person in sample_persons() {
            assert!(
                !person.is_dob_after_admission(),
                "{} has dob after admission",
                person.name()
            );
        }
    }

    #[test]
    fn test_sample_record_book_keeps_everyone_in_order() {
        let book = sample_record_book();
        assert_eq!(book.persons(), sample_persons().as_slice());
        assert_eq!(book.persons()[1].tags().len(), 2);
        assert_eq!(
            book.persons()[0].remark().as_str(),
            "Requires assistance with feeding."
        );
    }
}
