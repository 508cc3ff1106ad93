use super::utils::coerced_int;
use super::{utils, ApiObject, ModelError};
use crate::bot::Bot;
use crate::internal::prelude::*;

/// One size of a photo, or a file or sticker thumbnail.
///
/// Two photo sizes are equal if their `file_unique_id`s are equal.
///
/// [Telegram docs](https://core.telegram.org/bots/api#photosize).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct PhotoSize {
    /// Identifier for this file, which can be used to download or reuse the file.
    pub file_id: FixedString,
    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots. Can't be used to download or reuse the file.
    pub file_unique_id: FixedString,
    /// Photo width.
    #[serde(deserialize_with = "coerced_int::deserialize")]
    pub width: u32,
    /// Photo height.
    #[serde(deserialize_with = "coerced_int::deserialize")]
    pub height: u32,
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip)]
    bot: Option<Arc<Bot>>,
}

medium!(PhotoSize);

impl PhotoSize {
    #[must_use]
    pub fn new(file_id: &str, file_unique_id: &str, width: u32, height: u32) -> Self {
        Self {
            file_id: FixedString::from_str_trunc(file_id),
            file_unique_id: FixedString::from_str_trunc(file_unique_id),
            width,
            height,
            file_size: None,
            bot: None,
        }
    }

    /// The bot this photo size was received through.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BotNotSet`] if it was not received through a bot.
    pub fn get_bot(&self) -> Result<&Arc<Bot>> {
        self.bot.as_ref().ok_or_else(|| {
            ModelError::BotNotSet {
                kind: Self::KIND,
            }
            .into()
        })
    }
}

impl ApiObject for PhotoSize {
    const KIND: &'static str = "PhotoSize";
    const FIELDS: &'static [&'static str] =
        &["file_id", "file_unique_id", "width", "height", "file_size"];
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["file_id", "file_unique_id", "width", "height"];

    fn prepare(map: &mut JsonMap) -> Result<()> {
        utils::coerce_field::<Self>(map, "width")?;
        utils::coerce_field::<Self>(map, "height")
    }

    fn set_bot(&mut self, bot: &Arc<Bot>) {
        self.bot = Some(Arc::clone(bot));
    }
}
