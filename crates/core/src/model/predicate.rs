use super::Person;

/// Filter applied to the record book to produce the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonPredicate {
    /// Every person is shown.
    #[default]
    ShowAll,
    /// Persons whose name contains any of the keywords as a whole word, ignoring case.
    ///
    /// An empty keyword list matches nobody.
    NameContainsKeywords(Vec<String>),
    /// Persons whose IC contains the keyword as a substring.
    ///
    /// An empty keyword matches everyone.
    IcContainsKeyword(String),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::ShowAll => true,
            PersonPredicate::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(person.name().as_str(), keyword)),
            PersonPredicate::IcContainsKeyword(keyword) => {
                person.ic().as_str().contains(keyword.as_str())
            }
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}
