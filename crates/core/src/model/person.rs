use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ward_types::{AdmissionDate, Dob, Ic, Name, Remark, Tag, Ward};

/// A patient record on the ward.
///
/// Persons are immutable: commands that change a person build a new value and replace the old
/// one in the record book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Person {
    name: Name,
    ic: Ic,
    dob: Dob,
    admission_date: AdmissionDate,
    ward: Ward,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    remark: Remark,
}

impl Person {
    pub fn new(
        name: Name,
        tags: BTreeSet<Tag>,
        dob: Dob,
        ic: Ic,
        admission_date: AdmissionDate,
        ward: Ward,
        remark: Remark,
    ) -> Self {
        Self {
            name,
            ic,
            dob,
            admission_date,
            ward,
            tags,
            remark,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ic(&self) -> &Ic {
        &self.ic
    }

    pub fn dob(&self) -> Dob {
        self.dob
    }

    pub fn admission_date(&self) -> AdmissionDate {
        self.admission_date
    }

    pub fn ward(&self) -> &Ward {
        &self.ward
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// True when both records identify the same patient, i.e. they share an IC.
    ///
    /// This is weaker than `==`, which compares every field.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.ic == other.ic
    }

    /// True when the date of birth falls after the admission date.
    pub fn is_dob_after_admission(&self) -> bool {
        self.dob.date() > self.admission_date.date()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; IC: {}; Date of Birth: {}; Admission Date: {}; Ward: {}; Remark: {}; Tags: ",
            self.name, self.ic, self.dob, self.admission_date, self.ward, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::person;

    #[test]
    fn test_same_person_is_decided_by_ic() {
        let alice = person("Alice Pauline", "S1234567A", "01/01/1990", "01/01/2022", "WA");
        let renamed = person("Alice Tan", "S1234567A", "02/02/1991", "03/01/2022", "WB");
        let other = person("Alice Pauline", "T7654321B", "01/01/1990", "01/01/2022", "WA");

        assert!(alice.is_same_person(&renamed));
        assert_ne!(alice, renamed);
        assert!(!alice.is_same_person(&other));
    }

    #[test]
    fn test_dob_after_admission() {
        let ok = person("Ben", "S1111111B", "01/01/2022", "01/01/2022", "WA");
        let bad = person("Ben", "S1111111B", "02/01/2022", "01/01/2022", "WA");
        assert!(!ok.is_dob_after_admission());
        assert!(bad.is_dob_after_admission());
    }

    #[test]
    fn test_display_lists_every_field() {
        let p = Person::new(
            Name::parse("Bernice Yu").unwrap(),
            ["FallRisk", "Diabetes"]
                .into_iter()
                .map(|t| Tag::parse(t).unwrap())
                .collect(),
            Dob::parse("01/01/1990").unwrap(),
            Ic::parse("S1244567A").unwrap(),
            AdmissionDate::parse("02/01/2022").unwrap(),
            Ward::parse("WB").unwrap(),
            Remark::new("Flip every 2 hours."),
        );
        assert_eq!(
            p.to_string(),
            "Bernice Yu; IC: S1244567A; Date of Birth: 01/01/1990; Admission Date: 02/01/2022; \
             Ward: WB; Remark: Flip every 2 hours.; Tags: [Diabetes][FallRisk]"
        );
    }
}
