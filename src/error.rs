use std::error::Error as StdError;
use std::fmt;

use url::ParseError as UrlError;

use crate::internal::prelude::*;
use crate::json::JsonError;
use crate::model::ModelError;
use crate::utils::token::InvalidToken;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than
/// the usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// telegram-model's [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = StdResult<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
///
/// A payload that is `null` or empty is not an error: decoding it yields `Ok(None)`.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error from the `serde_json` crate.
    ///
    /// Returned when a field holds a value of the wrong type that no coercion applies to, such
    /// as a string where a boolean is expected.
    Json(JsonError),
    /// An error from the [`model`] module, such as a missing required field.
    ///
    /// [`model`]: crate::model
    Model(ModelError),
    /// An error from the `url` crate, returned when a configured base URL is invalid.
    Url(UrlError),
    /// The bot token given to a [`Bot`] is malformed.
    ///
    /// [`Bot`]: crate::Bot
    Token(InvalidToken),
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Error {
        Error::Model(e)
    }
}

impl From<UrlError> for Error {
    fn from(e: UrlError) -> Error {
        Error::Url(e)
    }
}

impl From<InvalidToken> for Error {
    fn from(e: InvalidToken) -> Error {
        Error::Token(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(inner) => fmt::Display::fmt(&inner, f),
            Self::Model(inner) => fmt::Display::fmt(&inner, f),
            Self::Url(inner) => fmt::Display::fmt(&inner, f),
            Self::Token(inner) => fmt::Display::fmt(&inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Json(inner) => Some(inner),
            Self::Model(inner) => Some(inner),
            Self::Url(inner) => Some(inner),
            Self::Token(inner) => Some(inner),
        }
    }
}
