use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::Deref, str::FromStr};

use crate::error::{ScheduleError, schedule_error::MissingServiceNameSnafu};

/// UN/LOCODE of a port facility, e.g. `ZADUR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnLocode(String);

/// IMO number of a vessel, kept as the carrier reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Imo(String);

/// Carrier assigned identifier of one sailing of a service rotation, e.g. `533E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoyageNumber(String);

/// Carrier service name. Compared with exact, case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl UnLocode {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_uppercase())
    }
}

impl Imo {
    /// Returns `None` for blank values, the carrier occasionally omits the number.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();
        (!value.is_empty()).then(|| Self(value.to_string()))
    }
}

impl VoyageNumber {
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();
        (!value.is_empty()).then(|| Self(value.to_string()))
    }

    /// The first contiguous run of digits, `MW124` -> `124`.
    pub fn numeric_part(&self) -> Option<u64> {
        let digits: String = self
            .0
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();

        digits.parse().ok()
    }
}

impl ServiceName {
    pub fn new(value: impl Into<String>) -> Result<Self, ScheduleError> {
        let value = value.into();
        if value.trim().is_empty() {
            MissingServiceNameSnafu.fail()
        } else {
            Ok(Self(value))
        }
    }
}

macro_rules! string_newtype {
    ($($ty:ty),*) => {
        $(
            impl Deref for $ty {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl PartialEq<str> for $ty {
                fn eq(&self, other: &str) -> bool {
                    self.0 == other
                }
            }

            impl PartialEq<&str> for $ty {
                fn eq(&self, other: &&str) -> bool {
                    self.0 == *other
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> String {
                    value.0
                }
            }
        )*
    };
}

string_newtype!(UnLocode, Imo, VoyageNumber, ServiceName);

impl From<&str> for UnLocode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ServiceName {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
