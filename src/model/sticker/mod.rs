//! Stickers, sticker sets and the positions of mask stickers.

mod mask_position;
mod sticker_set;

pub use self::mask_position::{MaskPoint, MaskPosition, UnknownMaskPoint};
pub use self::sticker_set::StickerSet;
use super::utils::{self, absent_object, coerced_int};
use super::{take_field, ApiObject, ModelError, PhotoSize};
use crate::bot::Bot;
use crate::internal::prelude::*;
use crate::json;

/// A sticker.
///
/// Two stickers are equal if their `file_unique_id`s are equal, whatever their other fields.
///
/// [Telegram docs](https://core.telegram.org/bots/api#sticker).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Sticker {
    /// Identifier for this file, which can be used to download or reuse the file.
    pub file_id: FixedString,
    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots. Can't be used to download or reuse the file.
    pub file_unique_id: FixedString,
    /// Sticker width.
    #[serde(deserialize_with = "coerced_int::deserialize")]
    pub width: u32,
    /// Sticker height.
    #[serde(deserialize_with = "coerced_int::deserialize")]
    pub height: u32,
    /// Whether the sticker is animated.
    pub is_animated: bool,
    /// Sticker thumbnail in the .WEBP or .JPG format.
    #[serde(
        default,
        deserialize_with = "absent_object::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumb: Option<PhotoSize>,
    /// Emoji associated with the sticker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<FixedString>,
    /// Name of the sticker set to which the sticker belongs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<FixedString>,
    /// For mask stickers, the position where the mask should be placed.
    #[serde(
        default,
        deserialize_with = "absent_object::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub mask_position: Option<MaskPosition>,
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip)]
    bot: Option<Arc<Bot>>,
}

medium!(Sticker, thumbed);

impl Sticker {
    #[must_use]
    pub fn new(
        file_id: &str,
        file_unique_id: &str,
        width: u32,
        height: u32,
        is_animated: bool,
    ) -> Self {
        Self {
            file_id: FixedString::from_str_trunc(file_id),
            file_unique_id: FixedString::from_str_trunc(file_unique_id),
            width,
            height,
            is_animated,
            thumb: None,
            emoji: None,
            set_name: None,
            mask_position: None,
            file_size: None,
            bot: None,
        }
    }

    /// Whether this sticker is a mask, i.e. comes with a [`MaskPosition`].
    #[must_use]
    pub fn is_mask(&self) -> bool {
        self.mask_position.is_some()
    }

    /// The bot this sticker was received through, to perform further actions with.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BotNotSet`] if the sticker was built by hand, or decoded without a
    /// bot.
    pub fn get_bot(&self) -> Result<&Arc<Bot>> {
        self.bot.as_ref().ok_or_else(|| {
            ModelError::BotNotSet {
                kind: Self::KIND,
            }
            .into()
        })
    }
}

impl ApiObject for Sticker {
    const KIND: &'static str = "Sticker";
    const FIELDS: &'static [&'static str] = &[
        "file_id",
        "file_unique_id",
        "width",
        "height",
        "is_animated",
        "thumb",
        "emoji",
        "set_name",
        "mask_position",
        "file_size",
    ];
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["file_id", "file_unique_id", "width", "height", "is_animated"];

    fn prepare(map: &mut JsonMap) -> Result<()> {
        utils::coerce_field::<Self>(map, "width")?;
        utils::coerce_field::<Self>(map, "height")
    }

    fn decode(mut map: JsonMap, bot: Option<&Arc<Bot>>) -> Result<Self> {
        let thumb = take_field(&mut map, "thumb");
        let mask_position = take_field(&mut map, "mask_position");

        let mut sticker: Self = json::from_value(Value::Object(map))?;
        sticker.thumb = PhotoSize::de_json(thumb, bot)?;
        sticker.mask_position = MaskPosition::de_json(mask_position, bot)?;
        sticker.bot = bot.map(Arc::clone);

        Ok(sticker)
    }

    fn set_bot(&mut self, bot: &Arc<Bot>) {
        self.bot = Some(Arc::clone(bot));
        if let Some(thumb) = &mut self.thumb {
            thumb.set_bot(bot);
        }
    }
}
