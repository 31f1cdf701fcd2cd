//! Text-valued record fields.

use crate::{FieldError, FieldResult};

/// A person's name.
///
/// Alphanumeric characters and spaces only, must not start with a space. Input is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(input: impl AsRef<str>) -> FieldResult<Self> {
        let trimmed = input.as_ref().trim();
        let mut chars = trimmed.chars();
        let first_ok = chars.next().is_some_and(char::is_alphanumeric);
        if !first_ok || !chars.all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(FieldError::Name);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field!(Name);

/// Identity card number, e.g. `S1234567A`.
///
/// Stored upper-cased: prefix letter (S, T, F, G or M), seven digits, checksum letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ic(String);

impl Ic {
    const LEN: usize = 9;

    pub fn parse(input: impl AsRef<str>) -> FieldResult<Self> {
        let normalised = input.as_ref().trim().to_ascii_uppercase();
        let bytes = normalised.as_bytes();
        if bytes.len() != Self::LEN {
            return Err(FieldError::Ic);
        }

        let ok = matches!(bytes[0], b'S' | b'T' | b'F' | b'G' | b'M')
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_uppercase();
        if !ok {
            return Err(FieldError::Ic);
        }

        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field!(Ic);

/// Ward code, e.g. `WA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ward(String);

impl Ward {
    pub fn parse(input: impl AsRef<str>) -> FieldResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return Err(FieldError::Ward);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field!(Ward);

/// A short label attached to a person, e.g. `FallRisk`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(input: impl AsRef<str>) -> FieldResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return Err(FieldError::Tag);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field!(Tag);

/// Free-text care remark. Any text is accepted, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    pub fn new(input: impl AsRef<str>) -> Self {
        Self(input.as_ref().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for Remark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Remark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Remark::new(s))
    }
}
