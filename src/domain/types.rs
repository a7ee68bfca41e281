//! Strongly-typed value objects shared by the record types.
//!
//! Records keep their raw `i32` identifiers because the API uses `0` for
//! "not saved yet". Every operation that addresses an existing record goes
//! through [`RecordId`], which only admits positive values.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire format used by the API for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided text is not a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Provided text is not a `YYYY-MM-DD` date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Identifier of a record that already exists on the server.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(i32);

impl RecordId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for RecordId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for i32 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl FromStr for RecordId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|_| TypeConstraintError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

/// `skip_serializing_if` predicate: unsaved records travel without an id.
pub(crate) fn is_unsaved(id: &i32) -> bool {
    *id == 0
}

/// Decodes a nullable text column as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parses a `YYYY-MM-DD` date, tolerating a trailing time component.
pub fn parse_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    let trimmed = value.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|_| TypeConstraintError::InvalidDate(value.to_string()))
}

/// Serde adapter for date fields.
///
/// The API answers with `2024-05-01T00:00:00` while accepting `2024-05-01`.
pub mod api_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{DATE_FORMAT, parse_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(D::Error::custom)
    }
}
