//! A set of exports which can be helpful to use.
//!
//! Note that the `TelegramModelError` re-export is equivalent to [`telegram_model::Error`],
//! although is re-exported as a separate name to remove likely ambiguity with other crate error
//! enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use telegram_model::prelude::*;
//! ```
//!
//! [`telegram_model::Error`]: crate::Error

pub use crate::bot::Bot;
pub use crate::error::Error as TelegramModelError;
pub use crate::model::{ApiObject, Medium, ModelError, ThumbedMedium};
