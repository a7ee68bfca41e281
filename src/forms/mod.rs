//! Drafts edited in the entity dialogs and the rules guarding them.
//!
//! Each draft derives [`Validate`]; the rule attributes carry the exact text
//! shown to the operator. Only the first violation, in the entity's declared
//! field order, is ever reported.

use std::fmt::Debug;

use chrono::NaiveDate;
use thiserror::Error;
use validator::Validate;

use crate::domain::types::{TypeConstraintError, parse_date};
use crate::schema::FieldSpec;

pub mod categoria;
pub mod cliente;
pub mod factura;
pub mod producto;
pub mod proveedor;
pub mod venta;

#[derive(Debug, Error, PartialEq)]
/// Errors that can occur when editing or submitting a draft.
pub enum FormError {
    /// A declared rule failed; carries the operator-facing message.
    #[error("{0}")]
    Validation(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {0} is assigned by the server")]
    ReadOnlyField(String),

    #[error("invalid value for {field}: {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: TypeConstraintError,
    },
}

/// Draft form backing one entity dialog.
///
/// `Default` is the entity's zero-value, used whenever a create dialog opens.
pub trait EntityForm: Clone + Debug + Default + PartialEq + Validate + Send + Sync + 'static {
    type Record;

    /// Populates a draft from a fetched record.
    fn from_record(record: &Self::Record) -> Self;

    /// Validates the draft and converts it into the request payload.
    fn into_payload(self) -> Result<Self::Record, FormError>;

    /// Applies raw operator input to the field named `name`.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError>;

    /// Current input text of the field named `name`.
    fn field_value(&self, name: &str) -> Option<String>;
}

/// Returns the message of the first failing rule, walking `fields` in order.
pub fn first_violation<F: Validate>(form: &F, fields: &[FieldSpec]) -> Option<String> {
    let errors = form.validate().err()?;
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(field.attr))
        .flat_map(|errors| errors.iter())
        .next()
        .map(|error| {
            error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string)
        })
}

/// Fails with [`FormError::Validation`] on the first violated rule.
pub fn validate_in_order<F: Validate>(form: &F, fields: &[FieldSpec]) -> Result<(), FormError> {
    match first_violation(form, fields) {
        Some(message) => Err(FormError::Validation(message)),
        None => Ok(()),
    }
}

/// Empty input means "not stated", which drafts hold as `0`.
pub(crate) fn parse_integer(field: &str, value: &str) -> Result<i32, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| FormError::InvalidValue {
        field: field.to_string(),
        source: TypeConstraintError::InvalidNumber(value.to_string()),
    })
}

pub(crate) fn parse_decimal(field: &str, value: &str) -> Result<f64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| FormError::InvalidValue {
            field: field.to_string(),
            source: TypeConstraintError::InvalidNumber(value.to_string()),
        })
}

pub(crate) fn parse_optional_date(
    field: &str,
    value: &str,
) -> Result<Option<NaiveDate>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .map_err(|source| FormError::InvalidValue {
            field: field.to_string(),
            source,
        })
}
