//! The bot session handle models keep a reference to.
//!
//! A [`Bot`] holds the token and endpoints of one bot account. It performs no requests by
//! itself; it is what the models received through that bot point back to, so helpers built on
//! top of this crate know which account to act as.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::constants;
use crate::internal::prelude::*;
use crate::utils::token;

/// A builder for the [`Bot`] session handle.
///
/// # Examples
///
/// Point the handle at a self-hosted Bot API server:
///
/// ```rust
/// use telegram_model::Bot;
///
/// # fn main() -> telegram_model::Result<()> {
/// let bot = Bot::builder("110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw")
///     .base_url("http://localhost:8081/bot")
///     .base_file_url("http://localhost:8081/file/bot")
///     .build()?;
///
/// assert_eq!(bot.id(), 110201543);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct BotBuilder {
    token: SecretString,
    base_url: String,
    base_file_url: String,
}

impl BotBuilder {
    /// Construct a new builder for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            base_url: constants::API_BASE.to_string(),
            base_file_url: constants::FILE_BASE.to_string(),
        }
    }

    /// Sets the base URL for API calls. The token is appended directly after it.
    ///
    /// Defaults to [`constants::API_BASE`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the base URL for file downloads. The token is appended directly after it.
    ///
    /// Defaults to [`constants::FILE_BASE`].
    pub fn base_file_url(mut self, base_file_url: impl Into<String>) -> Self {
        self.base_file_url = base_file_url.into();
        self
    }

    /// Use the given configuration to build the [`Bot`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Token`] if the token is malformed, and [`Error::Url`] if either base URL
    /// cannot be parsed.
    pub fn build(self) -> Result<Bot> {
        let id = token::parse(self.token.expose_secret()).ok_or(token::InvalidToken)?;

        Url::parse(&self.base_url)?;
        Url::parse(&self.base_file_url)?;

        debug!(bot_id = id, base_url = %self.base_url, "Built bot handle");

        Ok(Bot {
            id,
            token: self.token,
            base_url: self.base_url,
            base_file_url: self.base_file_url,
        })
    }
}

/// A bot session.
///
/// Models decoded through [`ApiObject::de_json`] with a bot keep an `Arc` of it.
///
/// The token is never shown by the [`Debug`] implementation.
///
/// [`ApiObject::de_json`]: crate::model::ApiObject::de_json
pub struct Bot {
    id: u64,
    token: SecretString,
    base_url: String,
    base_file_url: String,
}

impl Bot {
    /// Creates a handle for the given token, using the public Bot API endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Token`] if the token is malformed.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Returns a [`BotBuilder`] to configure the handle.
    pub fn builder(token: impl Into<String>) -> BotBuilder {
        BotBuilder::new(token)
    }

    /// The user ID of the bot, as encoded in its token.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The token of the bot.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// The URL of the given API method for this bot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the method name does not form a valid URL.
    pub fn api_url(&self, method: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}/{method}", self.base_url, self.token()))?)
    }

    /// The download URL of a file, given the `file_path` the API returned for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the path does not form a valid URL.
    pub fn file_url(&self, file_path: &str) -> Result<Url> {
        let file_path = file_path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}{}/{file_path}", self.base_file_url, self.token()))?)
    }
}

impl fmt::Debug for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("id", &self.id)
            .field("token", &"<secret>")
            .field("base_url", &self.base_url)
            .field("base_file_url", &self.base_file_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw";

    #[test]
    fn builds_default_endpoints() {
        let bot = Bot::new(TOKEN).unwrap();

        assert_eq!(bot.id(), 110_201_543);
        assert_eq!(
            bot.api_url("getStickerSet").unwrap().as_str(),
            "https://api.telegram.org/bot110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw/getStickerSet"
        );
        assert_eq!(
            bot.file_url("/stickers/file_0.webp").unwrap().as_str(),
            "https://api.telegram.org/file/bot110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw/stickers/file_0.webp"
        );
    }

    #[test]
    fn debug_hides_token() {
        let bot = Bot::new(TOKEN).unwrap();
        let debug = format!("{bot:?}");

        assert!(!debug.contains("AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw"));
        assert!(debug.contains("110201543"));
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(Bot::new("not a token"), Err(Error::Token(_))));
        assert!(matches!(Bot::builder(TOKEN).base_url("nowhere").build(), Err(Error::Url(_))));
    }

    #[test]
    fn accepts_exactly_the_valid_tokens() {
        let tokens = [
            TOKEN,
            "1:a",
            "110201543:AAHd-qTc_v",
            "110201543",
            ":AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw",
            "110201543:",
            "bot:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw",
            "110201543:AAHd qTcv",
            "110201543:AAHd:qTcv",
            "",
        ];

        for token in tokens {
            assert_eq!(Bot::new(token).is_ok(), token::validate(token).is_ok(), "{token:?}");
        }
    }
}
