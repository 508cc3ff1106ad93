//! telegram-model is a Rust library of typed models for the [Telegram Bot API].
//!
//! It covers the sticker family of objects: [`Sticker`], [`StickerSet`], [`MaskPosition`] and
//! the [`PhotoSize`] thumbnails they carry. Every model implements [`ApiObject`], which turns a
//! raw JSON payload as received from the API into a typed value and flattens it back again.
//!
//! A payload that is `null` or an empty object is treated as "no object" and decodes to
//! `None`. Anything else is decoded all-or-nothing: a missing required field anywhere in the
//! object graph fails the whole decode with an [`Error`].
//!
//! ```rust
//! use telegram_model::json::json;
//! use telegram_model::model::{ApiObject, MaskPoint, Sticker};
//!
//! # fn main() -> telegram_model::Result<()> {
//! let payload = json!({
//!     "file_id": "CAACAgIAAxkBAAIB",
//!     "file_unique_id": "AgADBAADNo0BAAE",
//!     "width": 512,
//!     "height": 512,
//!     "is_animated": false,
//!     "mask_position": {"point": "eyes", "x_shift": 0.0, "y_shift": 0.5, "scale": 1.0},
//! });
//!
//! let sticker = Sticker::de_json(payload, None)?.expect("payload is not empty");
//! assert_eq!(sticker.mask_position.map(|m| m.point), Some(MaskPoint::Eyes));
//! # Ok(())
//! # }
//! ```
//!
//! Models may keep a reference to the [`Bot`] session they were received through, so that
//! helpers built on top of this crate can act on them later.
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api
//! [`Sticker`]: crate::model::Sticker
//! [`StickerSet`]: crate::model::StickerSet
//! [`MaskPosition`]: crate::model::MaskPosition
//! [`PhotoSize`]: crate::model::PhotoSize
//! [`ApiObject`]: crate::model::ApiObject
#![doc(html_root_url = "https://docs.rs/telegram-model/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::cast_sign_loss,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod bot;
pub mod constants;
pub mod json;
pub mod model;
pub mod prelude;
pub mod utils;

mod error;

pub use crate::bot::{Bot, BotBuilder};
pub use crate::error::{Error, Result};
