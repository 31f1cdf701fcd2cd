//! Calendar-date record fields.
//!
//! Dates are entered and stored as `dd/MM/yyyy` (for example `12/08/1999`). Only the zero-padded
//! form is accepted so that the stored text always round-trips unchanged.

use crate::{FieldError, FieldResult};
use chrono::NaiveDate;

/// `chrono` format string for the `dd/MM/yyyy` textual form.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

fn parse_day_month_year(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

macro_rules! date_field {
    ($(#[$meta:meta])* $ty:ident, $err:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(NaiveDate);

        impl $ty {
            pub fn parse(input: impl AsRef<str>) -> FieldResult<Self> {
                parse_day_month_year(input.as_ref().trim())
                    .map(Self)
                    .ok_or($err)
            }

            pub fn date(&self) -> NaiveDate {
                self.0
            }
        }

        impl From<NaiveDate> for $ty {
            fn from(date: NaiveDate) -> Self {
                Self(date)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.format(DATE_FORMAT))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
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

date_field!(
    /// Date of birth.
    Dob,
    FieldError::Dob
);

date_field!(
    /// Date the person was admitted to the ward.
    AdmissionDate,
    FieldError::AdmissionDate
);
