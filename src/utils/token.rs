//! Utilities to parse and validate Telegram bot tokens.

use std::fmt;

/// Validates that a token is likely in a valid format.
///
/// This performs the following checks on a given token:
///
/// - Is not empty and contains no whitespace;
/// - Contains 2 parts (split by the colon char `':'`);
/// - The first part is the numeric ID of the bot;
/// - The second part is a non-empty run of ASCII letters, digits, `'-'` and `'_'`.
///
/// # Examples
///
/// Validate that a token is valid and that a number of malformed tokens are actually invalid:
///
/// ```
/// use telegram_model::utils::token::validate;
///
/// // ensure a valid token is in fact a valid format:
/// assert!(validate("110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw").is_ok());
///
/// assert!(validate("110201543").is_err());
/// assert!(validate("bot:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw").is_err());
/// assert!(validate("").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`InvalidToken`] when one of the above checks fail.
/// The type of failure is not specified.
pub fn validate(token: impl AsRef<str>) -> Result<(), InvalidToken> {
    parse(token).map(|_| ()).ok_or(InvalidToken)
}

/// Error that can be return by [`validate`].
#[derive(Debug)]
pub struct InvalidToken;

impl std::error::Error for InvalidToken {}

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The provided token was invalid")
    }
}

/// Verifies that the token adheres to the Telegram token format and extracts the bot user ID.
#[must_use]
pub fn parse(token: impl AsRef<str>) -> Option<u64> {
    let token = token.as_ref();
    if token.chars().any(char::is_whitespace) {
        return None;
    }

    // The token is the bot's user ID and a secret, joined by a colon
    let (id, secret) = token.split_once(':')?;

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if secret.is_empty()
        || !secret.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return None;
    }

    id.parse().ok()
}
