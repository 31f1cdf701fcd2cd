use super::{Command, CommandOutput};
use crate::error::{CommandError, CommandResult};
use crate::model::{Model, Person, PersonPredicate};
use crate::Index;
use std::collections::BTreeSet;
use ward_types::{AdmissionDate, Dob, Ic, Name, Remark, Tag, Ward};

/// Edits the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const USAGE: &'static str = "edit: Edits the details of the person identified by the \
        index number used in the displayed person list. Existing values will be overwritten by \
        the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [i/IC] [d/DATE OF BIRTH] \
        [w/WARD] [ad/ADMISSION DATE] [t/TAG]... [r/REMARK]\n\
        Example: edit 2 i/T1234567Q d/12/08/1999";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditPersonDescriptor {
        &self.descriptor
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        // The first displayed row is never editable.
        if self.index.zero_based() == 0 {
            return Err(CommandError::InvalidPersonDisplayedIndex);
        }

        let person_to_edit = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|p| (*p).clone())
            .ok_or(CommandError::InvalidPersonDisplayedIndex)?;

        let edited_person = self.descriptor.apply_to(&person_to_edit);

        if edited_person.is_dob_after_admission() {
            return Err(CommandError::DobLaterThanAdmission);
        }

        if !person_to_edit.is_same_person(&edited_person) && model.has_person(&edited_person) {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(&person_to_edit, edited_person.clone())?;
        model.update_filtered_person_list(PersonPredicate::ShowAll);
        tracing::info!("edited person at index {}", self.index);

        Ok(CommandOutput::new(format!("Edited Person: {edited_person}")))
    }
}

/// Replacement values for some of a person's fields.
///
/// Absent fields keep the person's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    name: Option<Name>,
    tags: Option<BTreeSet<Tag>>,
    ic: Option<Ic>,
    dob: Option<Dob>,
    admission_date: Option<AdmissionDate>,
    ward: Option<Ward>,
    remark: Option<Remark>,
}

impl EditPersonDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.tags.is_some()
            || self.ic.is_some()
            || self.dob.is_some()
            || self.admission_date.is_some()
            || self.ward.is_some()
            || self.remark.is_some()
    }

    /// Builds the edited person: each field comes from the descriptor if set, else from
    /// `person`.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
            self.dob.unwrap_or(person.dob()),
            self.ic.clone().unwrap_or_else(|| person.ic().clone()),
            self.admission_date.unwrap_or(person.admission_date()),
            self.ward.clone().unwrap_or_else(|| person.ward().clone()),
            self.remark.clone().unwrap_or_else(|| person.remark().clone()),
        )
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn set_tags(&mut self, tags: BTreeSet<Tag>) {
        self.tags = Some(tags);
    }

    /// Read-only view of the replacement tags.
    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    pub fn set_ic(&mut self, ic: Ic) {
        self.ic = Some(ic);
    }

    pub fn ic(&self) -> Option<&Ic> {
        self.ic.as_ref()
    }

    pub fn set_dob(&mut self, dob: Dob) {
        self.dob = Some(dob);
    }

    pub fn dob(&self) -> Option<Dob> {
        self.dob
    }

    pub fn set_admission_date(&mut self, admission_date: AdmissionDate) {
        self.admission_date = Some(admission_date);
    }

    pub fn admission_date(&self) -> Option<AdmissionDate> {
        self.admission_date
    }

    pub fn set_ward(&mut self, ward: Ward) {
        self.ward = Some(ward);
    }

    pub fn ward(&self) -> Option<&Ward> {
        self.ward.as_ref()
    }

    pub fn set_remark(&mut self, remark: Remark) {
        self.remark = Some(remark);
    }

    pub fn remark(&self) -> Option<&Remark> {
        self.remark.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::person;
    use crate::model::{ModelManager, RecordBook};

    fn alice() -> Person {
        person("Alice Pauline", "S1234567A", "01/01/1990", "01/01/2022", "WA")
    }

    fn benson() -> Person {
        person("Benson Meier", "T2345678B", "02/02/1985", "03/01/2022", "WB")
    }

    fn carl() -> Person {
        person("Carl Kurz", "S3456789C", "03/03/1970", "04/01/2022", "WA")
    }

    fn typical_model() -> ModelManager {
        ModelManager::new(RecordBook::from_persons([alice(), benson(), carl()]).unwrap())
    }

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).expect("non-zero index")
    }

    fn ward_only(ward: &str) -> EditPersonDescriptor {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_ward(Ward::parse(ward).unwrap());
        descriptor
    }

    fn tags(values: &[&str]) -> BTreeSet<Tag> {
        values.iter().map(|t| Tag::parse(t).unwrap()).collect()
    }

    #[test]
    fn test_empty_descriptor_is_identity() {
        let descriptor = EditPersonDescriptor::new();
        assert!(!descriptor.is_any_field_edited());
        assert_eq!(descriptor.apply_to(&alice()), alice());
    }

    #[test]
    fn test_any_field_counts_as_edited_including_remark() {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_remark(Remark::new("Needs a walking frame."));
        assert!(descriptor.is_any_field_edited());
    }

    #[test]
    fn test_set_fields_override_and_others_are_kept() {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_name(Name::parse("Alice Tan").unwrap());
        descriptor.set_tags(tags(&["NPO"]));
        descriptor.set_admission_date(AdmissionDate::parse("09/09/2023").unwrap());

        let edited = descriptor.apply_to(&alice());

        assert_eq!(edited.name().as_str(), "Alice Tan");
        assert_eq!(edited.tags(), &tags(&["NPO"]));
        assert_eq!(edited.admission_date().to_string(), "09/09/2023");
        assert_eq!(edited.ic(), alice().ic());
        assert_eq!(edited.dob(), alice().dob());
        assert_eq!(edited.ward(), alice().ward());
        assert_eq!(edited.remark(), alice().remark());
    }

    #[test]
    fn test_cloned_descriptor_owns_its_tags() {
        let mut original = EditPersonDescriptor::new();
        original.set_tags(tags(&["Diabetes"]));

        let mut copy = original.clone();
        copy.set_tags(tags(&["Diabetes", "FallRisk"]));

        assert_eq!(original.tags(), Some(&tags(&["Diabetes"])));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_edit_ward_only_keeps_other_fields_and_shows_all() {
        let mut model = typical_model();
        model.update_filtered_person_list(PersonPredicate::IcContainsKeyword("234".into()));
        assert_eq!(model.filtered_person_list().len(), 2);

        let command = EditCommand::new(index(2), ward_only("WZ"));
        let output = command.execute(&mut model).expect("edit should succeed");

        let edited = &model.record_book().persons()[1];
        assert_eq!(edited.ward().as_str(), "WZ");
        assert_eq!(edited.name(), benson().name());
        assert_eq!(edited.tags(), benson().tags());
        assert_eq!(edited.ic(), benson().ic());
        assert_eq!(edited.dob(), benson().dob());
        assert_eq!(edited.admission_date(), benson().admission_date());
        assert_eq!(edited.remark(), benson().remark());

        assert_eq!(model.filter(), &PersonPredicate::ShowAll);
        assert_eq!(model.filtered_person_list().len(), 3);
        assert_eq!(output.feedback, format!("Edited Person: {edited}"));
    }

    #[test]
    fn test_edit_first_displayed_row_fails() {
        let mut model = typical_model();
        let err = EditCommand::new(index(1), ward_only("WC"))
            .execute(&mut model)
            .expect_err("first displayed row is rejected");
        assert_eq!(err, CommandError::InvalidPersonDisplayedIndex);
        assert_eq!(model.record_book().persons(), &[alice(), benson(), carl()]);

        model.update_filtered_person_list(PersonPredicate::IcContainsKeyword("T2".into()));
        let err = EditCommand::new(index(1), ward_only("WC"))
            .execute(&mut model)
            .expect_err("first row of a filtered list is rejected too");
        assert_eq!(err, CommandError::InvalidPersonDisplayedIndex);
        assert_eq!(model.record_book().persons(), &[alice(), benson(), carl()]);
    }

    #[test]
    fn test_edit_index_past_displayed_list_fails() {
        let mut model = typical_model();
        let err = EditCommand::new(index(4), ward_only("WC"))
            .execute(&mut model)
            .expect_err("index 4 of 3 is invalid");
        assert_eq!(err, CommandError::InvalidPersonDisplayedIndex);

        model.update_filtered_person_list(PersonPredicate::IcContainsKeyword("T2".into()));
        let err = EditCommand::new(index(2), ward_only("WC"))
            .execute(&mut model)
            .expect_err("only one person displayed");
        assert_eq!(err, CommandError::InvalidPersonDisplayedIndex);
        assert_eq!(model.record_book().persons(), &[alice(), benson(), carl()]);
    }

    #[test]
    fn test_edit_dob_after_admission_fails() {
        let mut model = typical_model();
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_dob(Dob::parse("04/01/2022").unwrap());

        let err = EditCommand::new(index(2), descriptor)
            .execute(&mut model)
            .expect_err("dob after admission");
        assert_eq!(err, CommandError::DobLaterThanAdmission);
        assert_eq!(model.record_book().persons()[1], benson());
    }

    #[test]
    fn test_edit_rechecks_dates_when_only_other_fields_change() {
        let bad = person("Dora Lim", "F5678901D", "05/05/2023", "01/01/2022", "WA");
        let mut model =
            ModelManager::new(RecordBook::from_persons([alice(), bad.clone()]).unwrap());

        let err = EditCommand::new(index(2), ward_only("WB"))
            .execute(&mut model)
            .expect_err("merged record still has dob after admission");
        assert_eq!(err, CommandError::DobLaterThanAdmission);
        assert_eq!(model.record_book().persons(), &[alice(), bad]);
    }

    #[test]
    fn test_edit_into_existing_person_fails() {
        let mut model = typical_model();
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_ic(benson().ic().clone());

        let err = EditCommand::new(index(3), descriptor)
            .execute(&mut model)
            .expect_err("IC already used by Benson");
        assert_eq!(err, CommandError::DuplicatePerson);
        assert_eq!(model.record_book().persons(), &[alice(), benson(), carl()]);
    }

    #[test]
    fn test_edit_keeping_own_ic_is_not_a_duplicate() {
        let mut model = typical_model();
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_ic(benson().ic().clone());
        descriptor.set_name(Name::parse("Benson M").unwrap());

        EditCommand::new(index(2), descriptor)
            .execute(&mut model)
            .expect("same person may be edited");
        assert_eq!(model.record_book().persons()[1].name().as_str(), "Benson M");
    }
}
