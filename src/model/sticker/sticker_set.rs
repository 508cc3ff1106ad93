use super::Sticker;
use crate::bot::Bot;
use crate::internal::prelude::*;
use crate::json;
use crate::model::utils::{absent_object, null_as_empty};
use crate::model::{take_field, ApiObject, PhotoSize};

/// A sticker set.
///
/// Two sticker sets are equal if their `name`s are equal, whatever stickers they hold.
///
/// [Telegram docs](https://core.telegram.org/bots/api#stickerset).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct StickerSet {
    /// Sticker set name, unique across the platform.
    pub name: FixedString,
    /// Sticker set title.
    pub title: FixedString,
    /// Whether the sticker set contains animated stickers.
    pub is_animated: bool,
    /// Whether the sticker set contains masks.
    pub contains_masks: bool,
    /// List of all set stickers, in the order the API returned them.
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub stickers: Vec<Sticker>,
    /// Sticker set thumbnail in the .WEBP or .TGS format.
    #[serde(
        default,
        deserialize_with = "absent_object::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumb: Option<PhotoSize>,
}

identity_eq! {
    StickerSet => name;
}

impl StickerSet {
    #[must_use]
    pub fn new(
        name: &str,
        title: &str,
        is_animated: bool,
        contains_masks: bool,
        stickers: Vec<Sticker>,
    ) -> Self {
        Self {
            name: FixedString::from_str_trunc(name),
            title: FixedString::from_str_trunc(title),
            is_animated,
            contains_masks,
            stickers,
            thumb: None,
        }
    }

    /// Returns the sticker of the set with the given unique file ID, if any.
    #[must_use]
    pub fn sticker(&self, file_unique_id: &str) -> Option<&Sticker> {
        self.stickers.iter().find(|s| &*s.file_unique_id == file_unique_id)
    }
}

impl ApiObject for StickerSet {
    const KIND: &'static str = "StickerSet";
    const FIELDS: &'static [&'static str] =
        &["name", "title", "is_animated", "contains_masks", "stickers", "thumb"];
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["name", "title", "is_animated", "contains_masks"];

    fn decode(mut map: JsonMap, bot: Option<&Arc<Bot>>) -> Result<Self> {
        let thumb = take_field(&mut map, "thumb");
        let stickers = take_field(&mut map, "stickers");

        let mut set: Self = json::from_value(Value::Object(map))?;
        set.thumb = PhotoSize::de_json(thumb, bot)?;
        set.stickers = Sticker::de_list(stickers, bot)?;

        Ok(set)
    }

    fn set_bot(&mut self, bot: &Arc<Bot>) {
        for sticker in &mut self.stickers {
            sticker.set_bot(bot);
        }

        if let Some(thumb) = &mut self.thumb {
            thumb.set_bot(bot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::json::json;
    use crate::model::ModelError;

    fn sticker(file_unique_id: &str) -> Value {
        json!({
            "file_id": format!("file-{file_unique_id}"),
            "file_unique_id": file_unique_id,
            "width": 512,
            "height": 512,
            "is_animated": false,
        })
    }

    fn payload() -> Value {
        json!({
            "name": "animals_by_bot",
            "title": "Animals",
            "is_animated": false,
            "contains_masks": false,
            "stickers": [sticker("u1"), sticker("u2"), sticker("u3")],
            "thumb": {"file_id": "t", "file_unique_id": "tu", "width": 100, "height": 100},
        })
    }

    #[test]
    fn decodes_stickers_in_order() {
        let set = StickerSet::de_json(payload(), None).unwrap().unwrap();

        let ids: Vec<&str> = set.stickers.iter().map(|s| &*s.file_unique_id).collect();
        assert_eq!(ids, ["u1", "u2", "u3"]);
        assert_eq!(set.thumb.as_ref().map(|t| t.width), Some(100));
        assert_eq!(set.sticker("u2").map(|s| s.width), Some(512));
        assert!(set.sticker("u4").is_none());
    }

    #[test]
    fn serializes_stickers_as_objects() {
        let set = StickerSet::de_json(payload(), None).unwrap().unwrap();
        let map = set.to_json().unwrap();

        assert_eq!(Value::Object(map.clone()), payload());

        let again = StickerSet::de_json(Value::Object(map), None).unwrap().unwrap();
        assert_eq!(again.stickers.len(), set.stickers.len());
        assert!(again.stickers.iter().zip(&set.stickers).all(|(a, b)| a == b));
    }

    #[test]
    fn one_bad_sticker_fails_the_set() {
        let mut value = payload();
        value["stickers"][1].as_object_mut().unwrap().remove("width");

        let err = StickerSet::de_json(value, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Model(ModelError::MissingField {
                kind: "Sticker",
                field: "width",
            })
        ));
    }

    #[test]
    fn empty_sticker_element_is_not_skipped() {
        let mut value = payload();
        value["stickers"] = json!([sticker("u1"), {}]);

        assert!(StickerSet::de_json(value, None).is_err());
    }

    #[test]
    fn non_list_stickers() {
        let mut value = payload();
        value["stickers"] = json!({"file_id": "a"});

        let err = StickerSet::de_json(value, None).unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::NotAList { .. })));
    }

    #[test]
    fn missing_stickers_is_empty() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("stickers");

        let set = StickerSet::de_json(value, None).unwrap().unwrap();
        assert!(set.stickers.is_empty());
    }

    #[test]
    fn absent_payload() {
        assert_eq!(StickerSet::de_json(json!(null), None).unwrap(), None);
        assert_eq!(StickerSet::de_json(json!({}), None).unwrap(), None);
    }

    #[test]
    fn equality_is_by_name() {
        let a = StickerSet::new("animals_by_bot", "Animals", false, false, Vec::new());
        let b = StickerSet::new("animals_by_bot", "Renamed", true, false, vec![
            Sticker::new("a", "u1", 512, 512, false),
        ]);
        let c = StickerSet::new("plants_by_bot", "Animals", false, false, Vec::new());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hashes_by_name() {
        let mut sets = HashSet::new();
        sets.insert(StickerSet::new("animals_by_bot", "Animals", false, false, Vec::new()));
        sets.insert(StickerSet::new("animals_by_bot", "Animals", false, false, vec![
            Sticker::new("a", "u1", 512, 512, false),
        ]));
        assert_eq!(sets.len(), 1);

        sets.insert(StickerSet::new("plants_by_bot", "Animals", false, false, Vec::new()));
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn serde_treats_null_stickers_and_empty_thumb_as_absent() {
        let mut value = payload();
        value["stickers"] = json!(null);
        value["thumb"] = json!({});

        let via_serde: StickerSet = json::from_value(value.clone()).unwrap();
        let via_de_json = StickerSet::de_json(value, None).unwrap().unwrap();

        assert!(via_serde.stickers.is_empty());
        assert!(via_serde.thumb.is_none());
        assert_eq!(via_serde.stickers.len(), via_de_json.stickers.len());
        assert_eq!(via_serde.thumb, via_de_json.thumb);
    }

    #[test]
    fn propagates_bot() {
        let bot = Arc::new(Bot::new("110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw").unwrap());
        let set = StickerSet::de_json(payload(), Some(&bot)).unwrap().unwrap();

        assert!(set.stickers.iter().all(|s| s.get_bot().is_ok()));
        assert!(set.thumb.unwrap().get_bot().is_ok());
    }
}
