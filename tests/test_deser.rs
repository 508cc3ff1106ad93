use std::fs::File;
use std::sync::Arc;

use telegram_model::json::{self, json, Value};
use telegram_model::model::prelude::*;
use telegram_model::{Bot, Error};

macro_rules! p {
    ($s:ident, $filename:expr) => {{
        let f = File::open(concat!("./tests/resources/", $filename, ".json")).unwrap();
        let v = json::prelude::from_reader::<File, Value>(f).unwrap();
        $s::de_json(v, None).unwrap().unwrap()
    }};
}

#[test]
fn mask_position() {
    let position = p!(MaskPosition, "mask_position_1");

    assert_eq!(position.point, MaskPoint::Forehead);
    assert_eq!(
        Value::Object(position.to_json().unwrap()),
        json!({"point": "forehead", "x_shift": -1.0, "y_shift": 0.0, "scale": 2.0})
    );
}

#[test]
fn sticker() {
    let sticker = p!(Sticker, "sticker_1");

    assert_eq!(sticker.file_unique_id(), "AgADTAADWbv8JQ");
    assert_eq!(sticker.thumb().and_then(|t| t.file_size), Some(6190));
    assert!(sticker.mask_position.is_none());
}

// A mask sticker, carrying a field this library does not know.
#[test]
fn sticker_mask() {
    let sticker = p!(Sticker, "sticker_mask_1");

    let position = sticker.mask_position.unwrap();
    assert_eq!(position.point, MaskPoint::Eyes);
    assert_eq!(position.scale, 1.2);
}

#[test]
fn sticker_set() {
    let set = p!(StickerSet, "sticker_set_1");

    assert_eq!(&*set.name, "HotCherry");
    assert!(set.is_animated);
    assert_eq!(set.stickers.len(), 3);
    assert!(set.stickers.iter().all(|s| s.set_name.as_deref() == Some("HotCherry")));
}

#[test]
fn sticker_round_trip() {
    let sticker = p!(Sticker, "sticker_1");
    let again = Sticker::de_json(Value::Object(sticker.to_json().unwrap()), None).unwrap().unwrap();

    assert_eq!(again, sticker);
    assert_eq!(again.width, sticker.width);
    assert_eq!(again.emoji, sticker.emoji);
}

#[test]
fn sticker_set_round_trip_keeps_order() {
    let set = p!(StickerSet, "sticker_set_1");
    let again = StickerSet::de_json(Value::Object(set.to_json().unwrap()), None).unwrap().unwrap();

    let ids = |set: &StickerSet| -> Vec<String> {
        set.stickers.iter().map(|s| s.file_unique_id().to_string()).collect()
    };
    assert_eq!(ids(&again), ids(&set));
    assert_eq!(ids(&set), ["AgADSQADWbv8JQ", "AgADSgADWbv8JQ", "AgADSwADWbv8JQ"]);
}

#[test]
fn absent_payloads() {
    for payload in [json!(null), json!({})] {
        assert!(MaskPosition::de_json(payload.clone(), None).unwrap().is_none());
        assert!(Sticker::de_json(payload.clone(), None).unwrap().is_none());
        assert!(StickerSet::de_json(payload, None).unwrap().is_none());
    }
}

#[test]
fn sticker_set_element_missing_width() {
    let payload = json!({
        "name": "n",
        "title": "t",
        "is_animated": false,
        "contains_masks": false,
        "stickers": [{"file_id": "a", "file_unique_id": "u1", "width": 1, "height": 1, "is_animated": false}],
    });

    let set = StickerSet::de_json(payload.clone(), None).unwrap().unwrap();
    assert_eq!(set.stickers.len(), 1);
    assert_eq!(set.stickers[0].file_unique_id(), "u1");

    let mut broken = payload;
    broken["stickers"][0].as_object_mut().unwrap().remove("width");
    assert!(matches!(
        StickerSet::de_json(broken, None),
        Err(Error::Model(ModelError::MissingField {
            field: "width",
            ..
        }))
    ));
}

#[test]
fn sticker_equality() {
    let mut wide = Sticker::new("a", "u1", 512, 512, false);
    wide.width = 1024;

    assert_eq!(wide, Sticker::new("a", "u1", 512, 512, false));
    assert_ne!(Sticker::new("a", "u1", 512, 512, false), Sticker::new("a", "u2", 512, 512, false));
}

#[test]
fn sticker_set_equality() {
    let full = StickerSet::new("n", "t", false, false, vec![Sticker::new("a", "u1", 1, 1, false)]);
    let empty = StickerSet::new("n", "t", false, false, Vec::new());

    assert_eq!(full, empty);
}

#[test]
fn wrong_type_is_a_json_error() {
    let payload = json!({
        "file_id": "a",
        "file_unique_id": "u1",
        "width": 1,
        "height": 1,
        "is_animated": "no",
    });

    assert!(matches!(Sticker::de_json(payload, None), Err(Error::Json(_))));
}

#[test]
fn list_of_stickers() {
    let bot = Arc::new(Bot::new("110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw").unwrap());
    let payload = json!([
        {"file_id": "a", "file_unique_id": "u1", "width": 1, "height": 1, "is_animated": false},
        {"file_id": "b", "file_unique_id": "u2", "width": 2, "height": 2, "is_animated": true},
    ]);

    let stickers = Sticker::de_list(payload, Some(&bot)).unwrap();
    assert_eq!(stickers.len(), 2);
    assert_eq!(stickers[1].width, 2);
    assert!(stickers.iter().all(|s| s.get_bot().is_ok()));

    assert!(Sticker::de_list(json!(null), None).unwrap().is_empty());
    assert!(matches!(
        Sticker::de_list(json!("stickers"), None),
        Err(Error::Model(ModelError::NotAList { .. }))
    ));
    assert!(matches!(
        Sticker::de_list(json!([null]), None),
        Err(Error::Model(ModelError::NotAnObject { .. }))
    ));
}
