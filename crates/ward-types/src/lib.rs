//! Validated field types for ward records.
//!
//! Every type in this crate can only be constructed through a validating `parse`, so once a
//! value exists it is known to satisfy the field rules. Serde support goes through the same
//! `parse` path: a stored value that no longer validates is rejected on load rather than being
//! silently accepted.

/// Errors that can occur when creating validated field types.
///
/// Each variant carries the user-facing constraint message for the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name,
    #[error("IC should start with S, T, F, G or M, followed by 7 digits and end with a letter")]
    Ic,
    #[error("Date of birth should be a valid date in the format dd/MM/yyyy")]
    Dob,
    #[error("Admission date should be a valid date in the format dd/MM/yyyy")]
    AdmissionDate,
    #[error("Ward should be alphanumeric and not blank")]
    Ward,
    #[error("Tag names should be alphanumeric")]
    Tag,
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Implements `Display`, `AsRef<str>` and string-based serde for a validated newtype.
///
/// The type must expose `parse(&str) -> FieldResult<Self>` and `as_str(&self) -> &str`.
macro_rules! string_field {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty>::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

mod date;
mod text;

pub use date::{AdmissionDate, Dob, DATE_FORMAT};
pub use text::{Ic, Name, Remark, Tag, Ward};
