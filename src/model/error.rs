//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt;

use crate::internal::prelude::*;

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// # Examples
///
/// Matching an [`Error`] with this variant would look something like the following, for a
/// sticker payload that lacks its `width`:
///
/// ```rust
/// use telegram_model::json::json;
/// use telegram_model::model::{ApiObject, ModelError, Sticker};
/// use telegram_model::Error;
///
/// let payload = json!({
///     "file_id": "a",
///     "file_unique_id": "u1",
///     "height": 512,
///     "is_animated": false,
/// });
///
/// match Sticker::de_json(payload, None) {
///     Err(Error::Model(ModelError::MissingField { kind, field })) => {
///         println!("{kind} payload lacks `{field}`");
///     },
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::Model`]: crate::Error::Model
/// [`model`]: crate::model
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A required key is absent from a payload, or is `null`.
    MissingField { kind: &'static str, field: &'static str },
    /// An integer field holds a value that cannot be coerced to an unsigned integer.
    ///
    /// Integers, non-negative floats and strings of decimal digits are accepted. Negative
    /// values, and values beyond `u32::MAX`, are rejected.
    InvalidInteger { kind: &'static str, field: &'static str, value: Value },
    /// A payload that should describe an object is neither `null` nor a JSON object.
    NotAnObject { kind: &'static str },
    /// A payload that should describe a list of objects is neither `null` nor a JSON array.
    NotAList { kind: &'static str },
    /// The object was not received through a [`Bot`], so it has none to act through.
    ///
    /// [`Bot`]: crate::Bot
    BotNotSet { kind: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField {
                kind,
                field,
            } => write!(f, "{kind} is missing the required field `{field}`"),
            Self::InvalidInteger {
                kind,
                field,
                value,
            } => write!(f, "{kind} field `{field}` is not an unsigned integer: {value}"),
            Self::NotAnObject {
                kind,
            } => write!(f, "Expected a {kind} object"),
            Self::NotAList {
                kind,
            } => write!(f, "Expected a list of {kind} objects"),
            Self::BotNotSet {
                kind,
            } => write!(f, "This {kind} has no bot associated with it"),
        }
    }
}

impl StdError for Error {}
