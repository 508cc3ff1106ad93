//! Mappings of objects received from the API, with helper methods for decoding them from and
//! encoding them back into raw JSON payloads.
//!
//! Every model implements [`ApiObject`]. Its [`ApiObject::de_json`] constructor is what a
//! transport calls with the payload the API returned, and [`ApiObject::to_json`] produces the
//! payload again.
//!
//! # Unknown fields
//!
//! The Bot API regularly grows new fields. Keys a model does not know are ignored when decoding
//! (and reported at `trace` level), so that payloads from newer API versions keep decoding.
//! They are not preserved, and do not reappear in [`ApiObject::to_json`].

mod error;
mod medium;
mod photo_size;
mod utils;

pub mod sticker;

use tracing::trace;
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;

pub use self::error::Error as ModelError;
pub use self::medium::{Medium, ThumbedMedium};
pub use self::photo_size::PhotoSize;
pub use self::sticker::{MaskPoint, MaskPosition, Sticker, StickerSet};
pub use self::utils::{coerce_u32, coerced_int};
use crate::bot::Bot;
use crate::internal::prelude::*;
use crate::json;

/// The contract shared by every model of the Bot API.
///
/// Implementors declare which keys they know and which of those are required; decoding then
/// follows the same steps for every model:
///
/// 1. A payload that is `null` or an empty object is "no object", and decodes to `None`.
/// 2. Every key of [`Self::REQUIRED_FIELDS`] must be present and not `null`, otherwise
///    [`ModelError::MissingField`] is returned.
/// 3. Keys outside of [`Self::FIELDS`] are ignored.
/// 4. [`Self::prepare`] coerces lenient scalars in place.
/// 5. [`Self::decode`] builds the value, decoding nested objects through their own
///    [`ApiObject`] implementation.
///
/// Decoding is all-or-nothing: no partially filled model is ever returned.
pub trait ApiObject: serde::Serialize + serde::de::DeserializeOwned {
    /// The name of the object in the Bot API, used in errors and logs.
    const KIND: &'static str;
    /// Every key of the object known to this library.
    const FIELDS: &'static [&'static str];
    /// The keys which must be present, and not `null`, for the object to decode.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Coerces fields of a payload in place, before it is decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInteger`] if a value cannot be coerced.
    fn prepare(_map: &mut JsonMap) -> Result<()> {
        Ok(())
    }

    /// Builds the value out of a checked and prepared payload, attaching `bot` to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if a field has the wrong type, or any error of a nested object.
    fn decode(map: JsonMap, bot: Option<&Arc<Bot>>) -> Result<Self> {
        let mut object: Self = json::from_value(Value::Object(map))?;
        if let Some(bot) = bot {
            object.set_bot(bot);
        }

        Ok(object)
    }

    /// Attaches the bot session this object was received through.
    ///
    /// Objects that do not keep a reference to the bot ignore this.
    fn set_bot(&mut self, _bot: &Arc<Bot>) {}

    /// Checks the required keys of a payload, then prepares it for decoding.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] for the first required key that is absent or `null`.
    fn check(map: &mut JsonMap) -> Result<()> {
        for &field in Self::REQUIRED_FIELDS {
            if map.get(field).map_or(true, Value::is_null) {
                return Err(ModelError::MissingField {
                    kind: Self::KIND,
                    field,
                }
                .into());
            }
        }

        for key in map.keys().filter(|key| !Self::FIELDS.contains(&key.as_str())) {
            trace!(kind = Self::KIND, key = %key, "Ignoring unknown field");
        }

        Self::prepare(map)
    }

    /// Decodes an object from a raw payload.
    ///
    /// Returns `Ok(None)` if the payload is `null` or an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAnObject`] if the payload is neither `null` nor an object,
    /// [`ModelError::MissingField`] if a required key is missing anywhere in the payload,
    /// [`ModelError::InvalidInteger`] if an integer field cannot be coerced, and [`Error::Json`]
    /// for any other type mismatch.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip_all, fields(kind = Self::KIND)))]
    fn de_json(data: Value, bot: Option<&Arc<Bot>>) -> Result<Option<Self>> {
        if json::is_absent(&data) {
            return Ok(None);
        }

        let Value::Object(mut map) = data else {
            return Err(ModelError::NotAnObject {
                kind: Self::KIND,
            }
            .into());
        };

        Self::check(&mut map)?;
        Self::decode(map, bot).map(Some)
    }

    /// Decodes a list of objects from a raw payload, keeping their order.
    ///
    /// A `null` payload is an empty list. Every element must decode: a single failing element
    /// fails the whole list, and elements are never skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAList`] if the payload is neither `null` nor an array,
    /// [`ModelError::NotAnObject`] if an element is not an object, and any error an element
    /// fails to decode with.
    fn de_list(data: Value, bot: Option<&Arc<Bot>>) -> Result<Vec<Self>> {
        let items = match data {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            _ => {
                return Err(ModelError::NotAList {
                    kind: Self::KIND,
                }
                .into())
            },
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| -> Result<Self> {
                trace!(kind = Self::KIND, index, "Decoding list element");

                let Value::Object(mut map) = item else {
                    return Err(ModelError::NotAnObject {
                        kind: Self::KIND,
                    }
                    .into());
                };

                Self::check(&mut map)?;
                Self::decode(map, bot)
            })
            .collect()
    }

    /// Flattens the object into a raw payload, recursively.
    ///
    /// Optional fields that are not set are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the object cannot be serialized.
    fn to_json(&self) -> Result<JsonMap> {
        match json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(ModelError::NotAnObject {
                kind: Self::KIND,
            }
            .into()),
        }
    }
}

/// Removes a nested payload from its parent, leaving `null` in its place if it was not there.
fn take_field(map: &mut JsonMap, field: &str) -> Value {
    map.remove(field).unwrap_or(json::NULL)
}

/// The model prelude re-exports all types in the model sub-modules.
///
/// This allows for quick and easy access to all of the model types.
///
/// # Examples
///
/// Import all model types into scope:
///
/// ```rust,no_run
/// use telegram_model::model::prelude::*;
/// ```
pub mod prelude {
    pub use super::sticker::*;
    pub use super::{ApiObject, Medium, ModelError, PhotoSize, ThumbedMedium};
}
